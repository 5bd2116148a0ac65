//! The argument accumulator.
//!
//! [`curry_n`] wraps a target so that positional and named arguments
//! accumulate across calls until a threshold is reached:
//!
//! 1. Each call merges its batch into the accumulated state: positional
//!    values are appended, named values overwrite same-named entries.
//! 2. If the call supplied no arguments at all, or the accumulated positional
//!    count reaches the threshold, the target is invoked with everything
//!    accumulated so far and its output is returned unchanged.
//! 3. Otherwise a continuation holding the accumulated state is returned.
//!
//! Continuations never share mutable state. Calling the same partial
//! application twice produces two independent chains, and every chain started
//! from the outermost wrapper begins with no accumulated arguments.
//!
//! # Examples
//!
//! ```rust
//! use currying::{Arguments, args, curry_n};
//!
//! let curried_max = curry_n(4, |arguments: Arguments<i32>| {
//!     arguments.positional().iter().copied().max()
//! });
//!
//! let result = curried_max
//!     .call(args![2])
//!     .call(args![3, 5])
//!     .and_then(|application| application.call(args![4]))
//!     .unwrap();
//!
//! assert_eq!(result.complete(), Some(Some(5)));
//! ```

mod application;
mod chain;

pub use application::Application;
pub use chain::Curried;

use crate::{Arity, Callable};

/// Reference-counted pointer shared by every continuation of a chain.
///
/// `std::sync::Arc` with the `arc` feature, `std::rc::Rc` otherwise.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// Wraps `target` so that it is invoked once `threshold` positional arguments
/// have accumulated.
///
/// The threshold is [`Arity::Finite`]; use [`Curried::new`] with
/// [`Arity::Unbounded`] for chains that only an empty call completes.
///
/// # Examples
///
/// ```rust
/// use currying::{Arguments, args, curry_n};
///
/// let add = curry_n(2, |arguments: Arguments<i32>| {
///     arguments.positional().iter().sum::<i32>()
/// });
///
/// let add3 = add.call(args![3]).partial().unwrap();
/// assert_eq!(add3.call(args![4]).complete(), Some(7));
/// assert_eq!(add3.call(args![10]).complete(), Some(13));
/// ```
pub fn curry_n<C, V>(threshold: usize, target: C) -> Curried<C, V>
where
    C: Callable<V>,
    V: Clone,
{
    Curried::new(Arity::Finite(threshold), target)
}

/// Returns a [`Currier`] that wraps targets later.
///
/// This is the decorator form of [`curry_n`]: fix the threshold now, supply
/// the target afterwards.
///
/// # Examples
///
/// ```rust
/// use currying::{Arguments, args, currier};
///
/// let binary = currier(2);
/// let add = binary.curry(|arguments: Arguments<i32>| arguments.positional().iter().sum::<i32>());
/// let multiply = binary.curry(|arguments: Arguments<i32>| arguments.positional().iter().product::<i32>());
///
/// assert_eq!(add.call(args![3, 4]).complete(), Some(7));
/// assert_eq!(multiply.call(args![3, 4]).complete(), Some(12));
/// ```
pub fn currier(threshold: usize) -> Currier {
    Currier::new(Arity::Finite(threshold))
}

/// A fixed threshold waiting for a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Currier {
    arity: Arity,
}

impl Currier {
    /// Creates a currier for `arity`.
    #[inline]
    pub const fn new(arity: Arity) -> Self {
        Self { arity }
    }

    /// The threshold applied to every target.
    #[inline]
    pub const fn arity(self) -> Arity {
        self.arity
    }

    /// Wraps `target` with this currier's threshold.
    pub fn curry<C, V>(self, target: C) -> Curried<C, V>
    where
        C: Callable<V>,
        V: Clone,
    {
        Curried::new(self.arity, target)
    }
}
