//! The result of supplying arguments to a curried wrapper.

use std::fmt;

use super::Curried;
use crate::{AlreadyInvokedError, Arguments, Callable};

/// Either the target's output or a continuation waiting for more arguments.
pub enum Application<C: Callable<V>, V> {
    /// The target was invoked and returned this output.
    Complete(C::Output),
    /// The threshold has not been reached yet.
    Partial(Curried<C, V>),
}

impl<C, V> Application<C, V>
where
    C: Callable<V>,
    V: Clone,
{
    /// Returns `true` when the target has been invoked.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Returns `true` while the chain is still accumulating.
    #[inline]
    pub const fn is_partial(&self) -> bool {
        matches!(self, Self::Partial(_))
    }

    /// The target's output, if it has been invoked.
    pub fn complete(self) -> Option<C::Output> {
        match self {
            Self::Complete(output) => Some(output),
            Self::Partial(_) => None,
        }
    }

    /// The continuation, if the chain is still accumulating.
    pub fn partial(self) -> Option<Curried<C, V>> {
        match self {
            Self::Complete(_) => None,
            Self::Partial(curried) => Some(curried),
        }
    }

    /// Supplies another batch of arguments to a partial chain.
    ///
    /// # Errors
    ///
    /// Returns [`AlreadyInvokedError`] when the target has already been
    /// invoked. The output held by `self` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currying::{AlreadyInvokedError, Arguments, args, curry_n};
    ///
    /// let add = curry_n(2, |arguments: Arguments<i32>| {
    ///     arguments.positional().iter().sum::<i32>()
    /// });
    ///
    /// let seven = add.call(args![3]).call(args![4]).unwrap();
    /// assert_eq!(seven.call(args![1]).err(), Some(AlreadyInvokedError));
    /// ```
    pub fn call(self, arguments: Arguments<V>) -> Result<Self, AlreadyInvokedError> {
        match self {
            Self::Complete(_) => Err(AlreadyInvokedError),
            Self::Partial(curried) => Ok(curried.call(arguments)),
        }
    }

    /// Returns the output, invoking a partial chain with what it has accumulated.
    pub fn finish(self) -> C::Output {
        match self {
            Self::Complete(output) => output,
            Self::Partial(curried) => curried.finish(),
        }
    }
}

impl<C, V> fmt::Debug for Application<C, V>
where
    C: Callable<V>,
    C::Output: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete(output) => formatter.debug_tuple("Complete").field(output).finish(),
            Self::Partial(curried) => formatter.debug_tuple("Partial").field(curried).finish(),
        }
    }
}
