//! Arity thresholds for curried functions.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of positional arguments a curried chain waits for before it
/// invokes its target.
///
/// [`Arity::Unbounded`] never triggers on count alone. Such chains are only
/// completed by an empty call.
///
/// # Examples
///
/// ```rust
/// use currying::Arity;
///
/// let two = Arity::from(2);
/// assert!(!two.is_satisfied_by(1));
/// assert!(two.is_satisfied_by(2));
/// assert!(two.is_satisfied_by(5));
///
/// assert!(!Arity::Unbounded.is_satisfied_by(usize::MAX));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Arity {
    /// Invoke once at least this many positional arguments have accumulated.
    Finite(usize),
    /// Only an empty call invokes the target.
    Unbounded,
}

impl Arity {
    /// Returns `true` when `count` accumulated positional arguments meet the threshold.
    #[inline]
    pub const fn is_satisfied_by(self, count: usize) -> bool {
        match self {
            Self::Finite(threshold) => count >= threshold,
            Self::Unbounded => false,
        }
    }

    /// Returns the finite threshold, if any.
    #[inline]
    pub const fn finite(self) -> Option<usize> {
        match self {
            Self::Finite(threshold) => Some(threshold),
            Self::Unbounded => None,
        }
    }

    /// Returns `true` for [`Arity::Unbounded`].
    #[inline]
    pub const fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

impl From<usize> for Arity {
    fn from(threshold: usize) -> Self {
        Self::Finite(threshold)
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(threshold) => write!(formatter, "{threshold}"),
            Self::Unbounded => write!(formatter, "unbounded"),
        }
    }
}

static_assertions::assert_impl_all!(Arity: Copy, Send, Sync);
