//! Flattening nested collections of fit results into one table.
//!
//! Each leaf of a [`FitTree`] is extracted with the requested view. For every
//! collection level the leaf sits in, a path column identifying its position
//! is appended: the element index for sequences, the key for mappings. The
//! per-element tables are then concatenated row-wise, so the output holds the
//! union of the leaves' columns.

use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::options::Options;
use crate::table::{concat, Column, ColumnData, Table};
use crate::tree::{FitTree, Leaf};
use log::{debug, trace, warn};

/// The view extracted from each leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Glance,
    Tidy,
    Augment,
}

impl View {
    fn name(self) -> &'static str {
        match self {
            View::Glance => "glance",
            View::Tidy => "tidy",
            View::Augment => "augment",
        }
    }
}

struct Flattener<'a> {
    dispatcher: &'a Dispatcher,
    options: &'a Options,
    view: View,
}

impl Flattener<'_> {
    fn flatten(&self, node: &FitTree, level: usize) -> Result<Table> {
        match node {
            FitTree::Leaf(leaf) => self.extract(leaf),
            FitTree::Sequence(items) => {
                let name = self.options.var_name(level);
                debug!(
                    "{}: sequence of {} at level {} -> column '{}'",
                    self.view.name(),
                    items.len(),
                    level,
                    name
                );
                if items.is_empty() {
                    return Table::new().with_column(Column::new(name, ColumnData::Int(Vec::new())));
                }
                let parts = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        let mut table = self.flatten(item, level + 1)?;
                        let n = table.num_rows();
                        table.push_column(Column::new(
                            name.as_str(),
                            ColumnData::Int(vec![Some(i as i64); n]),
                        ))?;
                        Ok(table)
                    })
                    .collect::<Result<Vec<_>>>()?;
                concat(parts)
            }
            FitTree::Mapping(entries) => {
                let name = self.options.var_name(level);
                debug!(
                    "{}: mapping of {} at level {} -> column '{}'",
                    self.view.name(),
                    entries.len(),
                    level,
                    name
                );
                if entries.is_empty() {
                    return Table::new().with_column(Column::new(
                        name,
                        ColumnData::categorical(Vec::<Option<String>>::new()),
                    ));
                }
                let parts = entries
                    .iter()
                    .map(|(key, item)| {
                        let mut table = self.flatten(item, level + 1)?;
                        let n = table.num_rows();
                        table.push_column(Column::new(
                            name.as_str(),
                            ColumnData::categorical(std::iter::repeat(Some(key.as_str())).take(n)),
                        ))?;
                        Ok(table)
                    })
                    .collect::<Result<Vec<_>>>()?;
                concat(parts)
            }
        }
    }

    fn extract(&self, leaf: &Leaf) -> Result<Table> {
        trace!("{}: extracting leaf of type {}", self.view.name(), leaf.type_name());
        match self.view {
            View::Glance => self.dispatcher.resolve(leaf, None)?.glance(),
            View::Augment => self.dispatcher.resolve(leaf, None)?.augment(),
            View::Tidy => {
                let result = self.dispatcher.resolve(leaf, self.options.hint.as_deref())?;
                let param_names = self.options.param_names.as_deref();
                if param_names.is_some() && result.names_parameters() {
                    warn!(
                        "ignoring param_names: {} results name their own parameters",
                        result.variant_name()
                    );
                }
                result.tidy(param_names)
            }
        }
    }
}

impl Dispatcher {
    fn flatten(&self, results: &FitTree, options: &Options, view: View) -> Result<Table> {
        Flattener {
            dispatcher: self,
            options,
            view,
        }
        .flatten(results, 0)
    }

    /// Summary statistics of every fit in `results`, one row per fit.
    pub fn glance(&self, results: &FitTree, options: &Options) -> Result<Table> {
        self.flatten(results, options, View::Glance)
    }

    /// Parameters of every fit in `results`, one row per parameter per fit.
    ///
    /// `options.param_names` and `options.hint` apply to every leaf.
    pub fn tidy(&self, results: &FitTree, options: &Options) -> Result<Table> {
        self.flatten(results, options, View::Tidy)
    }

    /// Per-observation data of every fit in `results`.
    pub fn augment(&self, results: &FitTree, options: &Options) -> Result<Table> {
        self.flatten(results, options, View::Augment)
    }
}

/// Tidy table of whole-fit statistics.
///
/// A single result yields one row. For collections, one row per leaf plus one
/// path column per nesting level (see [`Options::var_names`]).
///
/// # Errors
///
/// Fails on the first leaf that is not a supported fit result, or when a path
/// column name collides with a column of the extracted tables.
///
/// # Examples
///
/// ```
/// use fitbroom_rs::results::OptimizeResult;
/// use fitbroom_rs::tree::FitTree;
/// use fitbroom_rs::{glance, Options};
/// use ndarray::array;
///
/// let fits = FitTree::leaves([
///     OptimizeResult::new(array![1.0]).with_status(true, 1, "converged"),
///     OptimizeResult::new(array![2.0]).with_status(false, 0, "max iterations"),
/// ]);
/// let table = glance(&fits, &Options::new().var_names(["trial"])).unwrap();
/// assert_eq!(table.num_rows(), 2);
/// assert_eq!(table.column_names().last(), Some(&"trial"));
/// ```
pub fn glance(results: &FitTree, options: &Options) -> Result<Table> {
    Dispatcher::default().glance(results, options)
}

/// Tidy table of fitted parameters.
///
/// Result types that do not name their parameters need
/// [`Options::param_names`]; without it they fail with
/// [`BroomError::MissingCapability`](crate::BroomError::MissingCapability).
pub fn tidy(results: &FitTree, options: &Options) -> Result<Table> {
    Dispatcher::default().tidy(results, options)
}

/// Tidy table of per-observation data (fitted values, residuals).
pub fn augment(results: &FitTree, options: &Options) -> Result<Table> {
    Dispatcher::default().augment(results, options)
}
