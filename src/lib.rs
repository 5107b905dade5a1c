//! # fitbroom-rs
//!
//! `fitbroom-rs` converts the results of curve fits and optimizations into tidy
//! tables: one variable per column, one observation per row.
//!
//! Three views are available for every supported result type:
//!
//! - [`glance`]: one row of whole-fit statistics (chi-square, AIC, success, ...)
//! - [`tidy`]: one row per fitted parameter
//! - [`augment`]: one row per data point, with fitted values and residuals
//!
//! Each view accepts a single result or arbitrarily nested sequences and
//! mappings of results ([`FitTree`]). Nested results are flattened into one
//! table with an extra column per nesting level identifying where each row
//! came from, so that many fits can be compared with ordinary table tools.
//!
//! Supported result types live in [`results`]: lmfit-style minimizer and model
//! results, scipy-style optimizer results and OLS regression results. Other
//! types can be supported by implementing [`results::FitResult`] and registering
//! them with a [`Dispatcher`].
//!
//! ## Basic Usage
//!
//! ```
//! use fitbroom_rs::parameters::Parameters;
//! use fitbroom_rs::results::MinimizerResult;
//! use fitbroom_rs::{glance, tidy, FitTree, Options};
//! use ndarray::array;
//!
//! let mut params = Parameters::new();
//! params.add_param("slope", 2.0).unwrap();
//! params.add_param("offset", 0.5).unwrap();
//!
//! let fits = FitTree::leaf_map([
//!     ("run_a", MinimizerResult::from_residual("leastsq", params.clone(), array![0.1, -0.2, 0.1])),
//!     ("run_b", MinimizerResult::from_residual("leastsq", params, array![0.3, -0.1, 0.0])),
//! ]);
//!
//! let options = Options::new().var_names(["run"]);
//! let summary = glance(&fits, &options).unwrap();
//! assert_eq!(summary.num_rows(), 2);
//!
//! let estimates = tidy(&fits, &options).unwrap();
//! assert_eq!(estimates.num_rows(), 4);
//! assert!(estimates.contains("run"));
//! ```

pub mod dict;
pub mod dispatch;
pub mod error;
mod flatten;
pub mod options;
pub mod parameters;
pub mod results;
pub mod table;
pub mod tree;

// Re-exports for convenience
pub use dict::{dict_to_table, table_to_dict, DictOptions};
pub use dispatch::Dispatcher;
pub use error::{BroomError, Result};
pub use flatten::{augment, glance, tidy};
pub use options::Options;
pub use table::{Table, Value};
pub use tree::FitTree;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
