//! Configuration options for the tidying functions.

use crate::error::Result;
use serde::Deserialize;

/// Options shared by [`glance`](crate::glance), [`tidy`](crate::tidy) and
/// [`augment`](crate::augment).
///
/// # Examples
///
/// ```
/// use fitbroom_rs::Options;
///
/// let options = Options::new()
///     .var_names(["method", "dataset"])
///     .param_names_str("slope intercept");
/// assert_eq!(options.var_name(1), "dataset");
/// assert_eq!(options.var_name(2), "var3");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Names of the path columns, outermost nesting level first. Levels without
    /// a name get `var1`, `var2`, ... Default: empty
    pub var_names: Vec<String>,

    /// Names for positional parameter values, used by `tidy` on results that
    /// do not name their parameters. Default: None
    pub param_names: Option<Vec<String>>,

    /// Name of the result variant whose extraction logic `tidy` must use, for
    /// objects more than one variant could recognize. Default: None
    pub hint: Option<String>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the path column names, outermost level first.
    pub fn var_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.var_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Name of the path column for nesting `level` (0 is outermost).
    pub fn var_name(&self, level: usize) -> String {
        self.var_names
            .get(level)
            .cloned()
            .unwrap_or_else(|| format!("var{}", level + 1))
    }

    /// Set the names of positional parameter values.
    pub fn param_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.param_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Set the names of positional parameter values from one whitespace
    /// separated string, e.g. `"amplitude center sigma"`.
    pub fn param_names_str(self, names: &str) -> Self {
        self.param_names(names.split_whitespace())
    }

    /// Restrict recognition to the named result variant.
    pub fn hint(mut self, variant: &str) -> Self {
        self.hint = Some(variant.to_string());
        self
    }

    /// Load options from JSON, e.g. `{"var_names": ["dataset"]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
