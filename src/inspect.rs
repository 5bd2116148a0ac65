//! The arity inspector.
//!
//! [`curried`] derives the threshold of a target from its declared
//! signature instead of taking it as an argument:
//!
//! - a signature with a variadic parameter yields [`Arity::Unbounded`], so
//!   the chain runs until an empty call;
//! - otherwise the threshold is the number of parameters without a default.
//!
//! Defaulted parameters can still be supplied at any point of the chain as
//! named arguments; they never count toward the threshold.

use std::any::type_name;

use crate::{Arity, Callable, Curried, IntrospectionError};

/// Curries `target` over the number of arguments it requires.
///
/// # Errors
///
/// - [`IntrospectionError::Opaque`] when `target` exposes no signature, as is
///   the case for plain closures. Use [`curry_n`](crate::curry_n) with an
///   explicit threshold for those.
/// - The errors of [`Signature::validate`](crate::Signature::validate) when the
///   declared signature is malformed.
///
/// # Examples
///
/// ```rust
/// use currying::{BindError, Function, Signature, args, curried};
///
/// // x + y + z, with z defaulting to 0
/// let add = curried(Function::new(
///     Signature::new().required("x").required("y").optional("z", 0),
///     |bound| {
///         let ([x, y, z], _) = bound.split::<3>()?;
///         Ok::<_, BindError>(x + y + z)
///     },
/// ))
/// .unwrap();
///
/// let nine = add.call(args![4]).call(args![5]).unwrap();
/// assert_eq!(nine.complete(), Some(Ok(9)));
///
/// let twelve = add.call(args![4; z = 3]).call(args![5]).unwrap();
/// assert_eq!(twelve.complete(), Some(Ok(12)));
/// ```
///
/// Variadic targets are completed by an empty call:
///
/// ```rust
/// use currying::{BindError, BoundArguments, Function, Signature, args, curried};
///
/// // sums any number of arguments
/// let add_all = curried(Function::new(Signature::new().variadic("nums"), |bound: BoundArguments<i32>| {
///     Ok::<_, BindError>(bound.rest().iter().sum::<i32>())
/// }))
/// .unwrap();
///
/// let mut chain = add_all.call(args![1]);
/// for value in [2, 3, 4] {
///     chain = chain.call(args![value]).unwrap();
/// }
/// assert_eq!(chain.call(args![]).unwrap().complete(), Some(Ok(10)));
/// ```
pub fn curried<C, V>(target: C) -> Result<Curried<C, V>, IntrospectionError>
where
    C: Callable<V>,
    V: Clone,
{
    let arity = inspect(&target)?;
    tracing::debug!(%arity, target_type = type_name::<C>(), "derived arity from signature");
    Ok(Curried::new(arity, target))
}

/// Determines the threshold [`curried`] would use for `target`.
///
/// # Errors
///
/// Same as [`curried`].
pub fn inspect<C, V>(target: &C) -> Result<Arity, IntrospectionError>
where
    C: Callable<V>,
{
    let Some(signature) = target.signature() else {
        tracing::debug!(target_type = type_name::<C>(), "target exposes no signature");
        return Err(IntrospectionError::Opaque {
            type_name: type_name::<C>(),
        });
    };

    signature.validate().inspect_err(|error| {
        tracing::debug!(target_type = type_name::<C>(), %error, "rejected declared signature");
    })?;

    Ok(signature.arity())
}
