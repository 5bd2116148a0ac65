//! The target side of a curried chain.

use crate::{Arguments, Signature};

/// A target that can be invoked with an accumulated [`Arguments`] batch.
///
/// Every `Fn(Arguments<V>) -> R` closure is a `Callable`. Such closures are
/// opaque: they expose no [`Signature`], so they can only be curried with an
/// explicit threshold through [`curry_n`](crate::curry_n). Targets that
/// declare their parameters, such as [`Function`](crate::Function), return
/// `Some` from [`signature`](Callable::signature) and can be passed to
/// [`curried`](crate::curried).
///
/// # Examples
///
/// ```rust
/// use currying::{Arguments, Callable, args};
///
/// let sum = |arguments: Arguments<i32>| arguments.positional().iter().sum::<i32>();
///
/// assert_eq!(sum.invoke(args![1, 2, 3]), 6);
/// assert!(Callable::<i32>::signature(&sum).is_none());
/// ```
pub trait Callable<V> {
    /// The result of invoking the target.
    type Output;

    /// Invokes the target with every accumulated argument.
    fn invoke(&self, arguments: Arguments<V>) -> Self::Output;

    /// The declared parameter list, if the target has one.
    fn signature(&self) -> Option<&Signature<V>> {
        None
    }
}

impl<V, R, F> Callable<V> for F
where
    F: Fn(Arguments<V>) -> R,
{
    type Output = R;

    #[inline]
    fn invoke(&self, arguments: Arguments<V>) -> R {
        self(arguments)
    }
}
