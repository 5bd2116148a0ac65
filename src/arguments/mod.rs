//! Argument batches supplied to curried functions.
//!
//! Every invocation of a curried wrapper supplies one [`Arguments`] batch:
//! an ordered sequence of positional values and a mapping of named values.
//! Batches are merged into the running accumulation of a chain with
//! [`Arguments::merge`].
//!
//! # Examples
//!
//! ```rust
//! use currying::args;
//!
//! let mut accumulated = args![1, 2; scale = 10];
//! accumulated.merge(args![3; scale = 100]);
//!
//! assert_eq!(accumulated.positional(), &[1, 2, 3]);
//! assert_eq!(accumulated.get("scale"), Some(&100));
//! ```

mod macros;

use std::collections::HashMap;
use std::fmt;

use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of positional values stored inline before spilling to the heap.
pub const INLINE_POSITIONAL: usize = 4;

/// Hasher used for the named-argument map.
#[cfg(feature = "fxhash")]
pub type NamedHasher = rustc_hash::FxBuildHasher;

/// Hasher used for the named-argument map.
#[cfg(not(feature = "fxhash"))]
pub type NamedHasher = std::collections::hash_map::RandomState;

/// Mapping from parameter name to the most recently supplied value.
pub type NamedArguments<V> = HashMap<String, V, NamedHasher>;

/// A batch of positional and named arguments.
///
/// Positional values keep their order. Named values are keyed by name and a
/// later value for the same name replaces an earlier one.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "V: Serialize", deserialize = "V: Deserialize<'de>"))
)]
pub struct Arguments<V> {
    positional: SmallVec<[V; INLINE_POSITIONAL]>,
    named: NamedArguments<V>,
}

impl<V> Arguments<V> {
    /// Creates an empty batch.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            positional: SmallVec::new(),
            named: NamedArguments::default(),
        }
    }

    /// Appends a positional value.
    #[inline]
    pub fn push(&mut self, value: V) {
        self.positional.push(value);
    }

    /// Builder form of [`push`](Self::push).
    #[inline]
    #[must_use]
    pub fn with(mut self, value: V) -> Self {
        self.push(value);
        self
    }

    /// Sets a named value, returning the value it replaced.
    #[inline]
    pub fn insert(&mut self, name: impl Into<String>, value: V) -> Option<V> {
        self.named.insert(name.into(), value)
    }

    /// Builder form of [`insert`](Self::insert).
    #[inline]
    #[must_use]
    pub fn named(mut self, name: impl Into<String>, value: V) -> Self {
        self.insert(name, value);
        self
    }

    /// Merges `other` into `self`.
    ///
    /// Positional values are appended after the existing ones; named values
    /// overwrite existing entries with the same name.
    pub fn merge(&mut self, other: Self) {
        self.positional.extend(other.positional);
        self.named.extend(other.named);
    }

    /// Returns `true` when the batch carries neither positional nor named values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Total number of values in the batch.
    #[inline]
    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    /// Number of positional values.
    #[inline]
    pub fn positional_len(&self) -> usize {
        self.positional.len()
    }

    /// Number of named values.
    #[inline]
    pub fn named_len(&self) -> usize {
        self.named.len()
    }

    /// The positional values in the order they were supplied.
    #[inline]
    pub fn positional(&self) -> &[V] {
        &self.positional
    }

    /// The named values.
    #[inline]
    pub const fn named_arguments(&self) -> &NamedArguments<V> {
        &self.named
    }

    /// Looks up a named value.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&V> {
        self.named.get(name)
    }

    /// Splits the batch into its positional values and named map.
    pub fn into_parts(self) -> (Vec<V>, NamedArguments<V>) {
        (self.positional.into_vec(), self.named)
    }
}

impl<V> Default for Arguments<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for Arguments<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sorted so that output does not depend on the hasher.
        let mut named: Vec<(&String, &V)> = self.named.iter().collect();
        named.sort_by(|left, right| left.0.cmp(right.0));

        formatter
            .debug_struct("Arguments")
            .field("positional", &self.positional.as_slice())
            .field("named", &named)
            .finish()
    }
}

impl<V> From<Vec<V>> for Arguments<V> {
    fn from(values: Vec<V>) -> Self {
        Self {
            positional: SmallVec::from_vec(values),
            named: NamedArguments::default(),
        }
    }
}

impl<V> FromIterator<V> for Arguments<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iterator: I) -> Self {
        Self {
            positional: iterator.into_iter().collect(),
            named: NamedArguments::default(),
        }
    }
}

impl<V> Extend<V> for Arguments<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iterator: I) {
        self.positional.extend(iterator);
    }
}
