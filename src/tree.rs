//! Nested collections of fit results.
//!
//! A [`FitTree`] is either a single object (a leaf), an ordered sequence of
//! trees, or a keyed mapping of trees. Nesting depth is unbounded.
//!
//! Leaves hold arbitrary values; whether a leaf is a supported fit result is
//! decided later by a [`Dispatcher`](crate::dispatch::Dispatcher), so an
//! unsupported object is reported with its type name instead of being rejected
//! at construction.

use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A single object at the bottom of a [`FitTree`].
pub struct Leaf {
    object: Box<dyn Any>,
    type_name: &'static str,
}

impl Leaf {
    pub fn new<T: Any>(object: T) -> Self {
        Self {
            object: Box::new(object),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Full Rust type name of the wrapped object.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn object(&self) -> &dyn Any {
        self.object.as_ref()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.object.downcast_ref::<T>()
    }
}

impl fmt::Debug for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Leaf")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// A fit result, or a (possibly nested) collection of them.
#[derive(Debug)]
pub enum FitTree {
    /// A single object
    Leaf(Leaf),

    /// Elements identified by their position
    Sequence(Vec<FitTree>),

    /// Elements identified by a key, in the iteration order of the mapping they
    /// were built from
    Mapping(Vec<(String, FitTree)>),
}

impl FitTree {
    /// Wrap a single object.
    ///
    /// # Examples
    ///
    /// ```
    /// use fitbroom_rs::results::OptimizeResult;
    /// use fitbroom_rs::tree::FitTree;
    /// use ndarray::array;
    ///
    /// let tree = FitTree::leaf(OptimizeResult::new(array![1.0, 2.0]));
    /// assert_eq!(tree.depth(), 0);
    /// ```
    pub fn leaf<T: Any>(object: T) -> Self {
        FitTree::Leaf(Leaf::new(object))
    }

    /// A sequence of trees.
    pub fn sequence<I: IntoIterator<Item = FitTree>>(items: I) -> Self {
        FitTree::Sequence(items.into_iter().collect())
    }

    /// A sequence of leaves.
    pub fn leaves<T: Any, I: IntoIterator<Item = T>>(objects: I) -> Self {
        Self::sequence(objects.into_iter().map(FitTree::leaf))
    }

    /// A mapping of trees, kept in the order `entries` yields them.
    ///
    /// # Examples
    ///
    /// ```
    /// use fitbroom_rs::results::OptimizeResult;
    /// use fitbroom_rs::tree::FitTree;
    /// use ndarray::array;
    ///
    /// let tree = FitTree::mapping([
    ///     ("linear", FitTree::leaf(OptimizeResult::new(array![1.0]))),
    ///     ("soft_l1", FitTree::leaf(OptimizeResult::new(array![1.1]))),
    /// ]);
    /// assert_eq!(tree.num_leaves(), 2);
    /// ```
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, FitTree)>,
    {
        FitTree::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// A mapping of leaves, kept in the order `entries` yields them.
    pub fn leaf_map<K, T, I>(entries: I) -> Self
    where
        K: Into<String>,
        T: Any,
        I: IntoIterator<Item = (K, T)>,
    {
        Self::mapping(entries.into_iter().map(|(k, v)| (k, FitTree::leaf(v))))
    }

    /// Number of collection levels above the deepest leaf.
    pub fn depth(&self) -> usize {
        match self {
            FitTree::Leaf(_) => 0,
            FitTree::Sequence(items) => 1 + items.iter().map(FitTree::depth).max().unwrap_or(0),
            FitTree::Mapping(entries) => {
                1 + entries.iter().map(|(_, t)| t.depth()).max().unwrap_or(0)
            }
        }
    }

    pub fn num_leaves(&self) -> usize {
        match self {
            FitTree::Leaf(_) => 1,
            FitTree::Sequence(items) => items.iter().map(FitTree::num_leaves).sum(),
            FitTree::Mapping(entries) => entries.iter().map(|(_, t)| t.num_leaves()).sum(),
        }
    }
}

impl From<Leaf> for FitTree {
    fn from(leaf: Leaf) -> Self {
        FitTree::Leaf(leaf)
    }
}

impl From<Vec<FitTree>> for FitTree {
    fn from(items: Vec<FitTree>) -> Self {
        FitTree::Sequence(items)
    }
}

impl<K: Into<String>> From<HashMap<K, FitTree>> for FitTree {
    fn from(map: HashMap<K, FitTree>) -> Self {
        Self::mapping(map)
    }
}

impl<K: Into<String>> From<BTreeMap<K, FitTree>> for FitTree {
    fn from(map: BTreeMap<K, FitTree>) -> Self {
        Self::mapping(map)
    }
}
