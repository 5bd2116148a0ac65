//! Targets with a declared signature.

use std::fmt;

use crate::{Arguments, Arity, BindError, BoundArguments, Callable, Signature};

/// A target whose parameter list is declared up front.
///
/// On invocation the accumulated arguments are bound to the signature and
/// the body receives the resulting [`BoundArguments`]. Binding failures are
/// converted into the body's own error type, so they surface exactly where
/// the body's errors do: when the target is finally invoked.
///
/// This is also what the `#[curried]` attribute expands to.
///
/// # Examples
///
/// ```rust
/// use currying::{BindError, Callable, Function, Signature, args};
///
/// // x + y + z, with z defaulting to 0
/// let add = Function::new(
///     Signature::new().required("x").required("y").optional("z", 0),
///     |bound| {
///         let ([x, y, z], _) = bound.split::<3>()?;
///         Ok::<_, BindError>(x + y + z)
///     },
/// );
///
/// assert_eq!(add.invoke(args![4, 5]), Ok(9));
/// assert_eq!(add.invoke(args![4, 5; z = 3]), Ok(12));
/// assert!(add.invoke(args![4]).is_err());
/// ```
#[derive(Clone)]
pub struct Function<V, F> {
    signature: Signature<V>,
    body: F,
}

impl<V, F> Function<V, F> {
    /// Pairs a signature with the body that receives its bound arguments.
    pub fn new<R, E>(signature: Signature<V>, body: F) -> Self
    where
        F: Fn(BoundArguments<V>) -> Result<R, E>,
        E: From<BindError>,
    {
        Self { signature, body }
    }

    /// The threshold [`curried`](crate::curried) derives for this target.
    #[inline]
    pub fn arity(&self) -> Arity {
        self.signature.arity()
    }

    /// The declared signature.
    #[inline]
    pub const fn declared(&self) -> &Signature<V> {
        &self.signature
    }
}

impl<V, F, R, E> Callable<V> for Function<V, F>
where
    V: Clone,
    F: Fn(BoundArguments<V>) -> Result<R, E>,
    E: From<BindError>,
{
    type Output = Result<R, E>;

    fn invoke(&self, arguments: Arguments<V>) -> Self::Output {
        let bound = self.signature.bind(arguments)?;
        (self.body)(bound)
    }

    fn signature(&self) -> Option<&Signature<V>> {
        Some(&self.signature)
    }
}

impl<V: fmt::Debug, F> fmt::Debug for Function<V, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Function")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}
