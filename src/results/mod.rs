//! Fit results and their extraction into tidy tables.
//!
//! Every supported result type implements [`FitResult`], which exposes the three
//! views of a fit:
//!
//! - [`FitResult::glance`]: one row of whole-fit summary statistics
//! - [`FitResult::tidy`]: one row per fitted parameter
//! - [`FitResult::augment`]: one row per data point used in the fit
//!
//! Result types are filled in by the code that performed the fit; the tidying
//! functions only read them. Views a result type cannot provide fail with
//! [`BroomError::MissingCapability`].

#[cfg(feature = "minimizer")]
mod minimizer;
#[cfg(feature = "optimize")]
mod optimize;
#[cfg(feature = "regression")]
mod regression;

#[cfg(feature = "minimizer")]
pub use minimizer::{Component, MinimizerResult, ModelResult};
#[cfg(feature = "optimize")]
pub use optimize::{Fun, OptimizeResult};
#[cfg(feature = "regression")]
pub use regression::OlsResult;

use crate::error::{BroomError, Result};
use crate::table::Table;
use ndarray::Array1;

/// A fit result that can be tidied.
///
/// Implement this trait, then register the type with
/// [`Dispatcher::register`](crate::dispatch::Dispatcher::register), to support
/// results from another fitting library.
pub trait FitResult {
    /// Short name of the result type, used in error messages and recognition hints.
    fn variant_name(&self) -> &'static str;

    /// Whole-fit summary statistics as a single-row table.
    fn glance(&self) -> Result<Table>;

    /// One row per fitted parameter.
    ///
    /// `param_names` names positional parameter values for result types that do
    /// not carry names of their own. Types with named parameters ignore it.
    fn tidy(&self, param_names: Option<&[String]>) -> Result<Table> {
        let _ = param_names;
        Err(BroomError::missing(
            "tidy",
            self.variant_name(),
            "no parameters available",
        ))
    }

    /// Whether the result carries its own parameter names, making
    /// `param_names` in [`FitResult::tidy`] irrelevant.
    fn names_parameters(&self) -> bool {
        true
    }

    /// One row per observation, with an `index` column running `0..n`.
    fn augment(&self) -> Result<Table> {
        Err(BroomError::missing(
            "augment",
            self.variant_name(),
            "no per-observation data available",
        ))
    }
}

/// Fail unless `array` has the expected number of observations.
pub(crate) fn check_len(what: &str, array: &Array1<f64>, expected: usize) -> Result<()> {
    if array.len() != expected {
        return Err(BroomError::DimensionMismatch(format!(
            "expected {} values in '{}', got {}",
            expected,
            what,
            array.len()
        )));
    }
    Ok(())
}
