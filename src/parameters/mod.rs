//! # Parameter System
//!
//! Named fitted parameters as fitting libraries report them, similar to the
//! `Parameter`/`Parameters` objects of lmfit-py. Results that carry these
//! objects can be tidied into one row per parameter without the caller having to
//! supply names.
//!
//! ## Core Components
//!
//! - [`Parameter`]: one parameter with value, initial value, bounds, vary flag,
//!   optional constraint expression and optional standard error
//! - [`Parameters`]: an insertion-ordered collection of parameters
//! - [`Bounds`]: the `[min, max]` interval of a parameter
//!
//! ## Example Usage
//!
//! ```rust
//! use fitbroom_rs::parameters::Parameters;
//!
//! let mut params = Parameters::new();
//! params.add_param("linear", 1.0).unwrap();
//! params.add_param_with_bounds("amplitude", 3.0, 0.0, 10.0).unwrap();
//! params.add_param_with_expr("half_amplitude", 1.5, "amplitude / 2").unwrap();
//!
//! // Iteration follows insertion order
//! assert_eq!(params.names(), vec!["linear", "amplitude", "half_amplitude"]);
//! assert_eq!(params.varying().len(), 2);
//! ```

pub mod bounds;
pub mod parameter;
pub mod parameters;


// Re-export key types
pub use bounds::{Bounds, BoundsError};
pub use parameter::{Parameter, ParameterError};
pub use parameters::{Parameters, SerializationError};
