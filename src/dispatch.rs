//! Recognition of fit result types.
//!
//! A [`Variant`] pairs a name with a recognition predicate that decides whether
//! an arbitrary object is a result of that variant and, if so, exposes it as a
//! [`FitResult`]. A [`Dispatcher`] holds the known variants and picks the one
//! that applies to each leaf of a [`FitTree`](crate::tree::FitTree).
//!
//! Supporting another fitting library means implementing [`FitResult`] for its
//! result type and registering a variant; the dispatch logic itself does not
//! change.
//!
//! ```rust
//! use fitbroom_rs::dispatch::{Dispatcher, Variant};
//! use fitbroom_rs::results::FitResult;
//! use fitbroom_rs::table::{Table, Value};
//! use fitbroom_rs::tree::FitTree;
//! use fitbroom_rs::Options;
//!
//! struct GridSearch {
//!     best_score: f64,
//! }
//!
//! impl FitResult for GridSearch {
//!     fn variant_name(&self) -> &'static str {
//!         "GridSearch"
//!     }
//!
//!     fn glance(&self) -> fitbroom_rs::Result<Table> {
//!         Table::from_row([("best_score", Value::Float(self.best_score))])
//!     }
//! }
//!
//! let mut dispatcher = Dispatcher::default();
//! dispatcher.register(Variant::of::<GridSearch>("GridSearch"));
//!
//! let tree = FitTree::leaves([GridSearch { best_score: 0.9 }, GridSearch { best_score: 0.7 }]);
//! let table = dispatcher.glance(&tree, &Options::new()).unwrap();
//! assert_eq!(table.num_rows(), 2);
//! ```

use crate::error::{BroomError, Result};
use crate::results::FitResult;
use crate::tree::Leaf;
use log::debug;
use std::any::Any;
use std::fmt;

/// Recognition predicate: returns the object as a [`FitResult`] when it belongs
/// to the variant.
pub type Recognizer = fn(&dyn Any) -> Option<&dyn FitResult>;

fn recognize<T: FitResult + 'static>(object: &dyn Any) -> Option<&dyn FitResult> {
    object.downcast_ref::<T>().map(|result| result as &dyn FitResult)
}

/// One recognizable kind of fit result.
#[derive(Clone, Copy)]
pub struct Variant {
    name: &'static str,
    recognizer: Recognizer,
}

impl Variant {
    /// A variant with a custom recognition predicate.
    pub fn new(name: &'static str, recognizer: Recognizer) -> Self {
        Self { name, recognizer }
    }

    /// The variant recognizing values of type `T`.
    pub fn of<T: FitResult + 'static>(name: &'static str) -> Self {
        Self::new(name, recognize::<T>)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply the recognition predicate.
    pub fn recognize<'a>(&self, object: &'a dyn Any) -> Option<&'a dyn FitResult> {
        (self.recognizer)(object)
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variant").field("name", &self.name).finish()
    }
}

/// Ordered registry of result variants.
///
/// The first registered variant that recognizes an object handles it.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    variants: Vec<Variant>,
}

impl Default for Dispatcher {
    /// A dispatcher knowing every result type shipped with the crate.
    fn default() -> Self {
        let mut dispatcher = Self::empty();
        #[cfg(feature = "minimizer")]
        {
            use crate::results::{MinimizerResult, ModelResult};
            dispatcher.register(Variant::of::<ModelResult>("ModelResult"));
            dispatcher.register(Variant::of::<MinimizerResult>("MinimizerResult"));
        }
        #[cfg(feature = "optimize")]
        dispatcher.register(Variant::of::<crate::results::OptimizeResult>("OptimizeResult"));
        #[cfg(feature = "regression")]
        dispatcher.register(Variant::of::<crate::results::OlsResult>("OlsResult"));
        dispatcher
    }
}

impl Dispatcher {
    /// A dispatcher that recognizes nothing until variants are registered.
    pub fn empty() -> Self {
        Self {
            variants: Vec::new(),
        }
    }

    /// Add a variant after the already registered ones.
    pub fn register(&mut self, variant: Variant) -> &mut Self {
        self.variants.push(variant);
        self
    }

    /// Names of the registered variants, in recognition order.
    pub fn variant_names(&self) -> Vec<&'static str> {
        self.variants.iter().map(Variant::name).collect()
    }

    /// Find the fit result behind a leaf.
    ///
    /// With a `hint`, only the variant of that name is consulted.
    ///
    /// # Errors
    ///
    /// [`BroomError::UnsupportedType`] naming the leaf's type when no
    /// (hinted) variant recognizes it, or naming the hint when no variant has
    /// that name.
    pub fn resolve<'a>(&self, leaf: &'a Leaf, hint: Option<&str>) -> Result<&'a dyn FitResult> {
        let object = leaf.object();
        let found = match hint {
            Some(hint) => {
                let variant = self
                    .variants
                    .iter()
                    .find(|v| v.name() == hint)
                    .ok_or_else(|| {
                        BroomError::unsupported(format!("{} (unknown variant hint)", hint))
                    })?;
                variant.recognize(object).map(|result| (variant.name(), result))
            }
            None => self
                .variants
                .iter()
                .find_map(|v| v.recognize(object).map(|result| (v.name(), result))),
        };

        match found {
            Some((name, result)) => {
                debug!("dispatching {} to variant {}", leaf.type_name(), name);
                Ok(result)
            }
            None => Err(BroomError::unsupported(leaf.type_name())),
        }
    }
}
