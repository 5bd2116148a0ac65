//! # currying
//!
//! Automatic currying with argument accumulation.
//!
//! ## Overview
//!
//! A curried wrapper collects positional and named arguments over any number
//! of calls and invokes its target once enough positional arguments have
//! accumulated. Two entry points decide what "enough" means:
//!
//! - [`curry_n`]: an explicit threshold.
//! - [`curried`]: the number of required parameters in the target's declared
//!   [`Signature`], or no threshold at all for variadic targets.
//!
//! A call that supplies no arguments always invokes the target, whatever the
//! threshold. This is how variadic chains are completed.
//!
//! ## Feature Flags
//!
//! - `derive` (default): the `#[curried]` and `#[curry_n(n)]` attribute macros
//! - `arc`: share targets through `Arc` so wrappers are `Send + Sync`
//! - `fxhash`: use `FxBuildHasher` for named arguments
//! - `serde`: `Serialize`/`Deserialize` for [`Arguments`] and [`Arity`]
//! - `full`: `derive` and `serde`
//!
//! ## Example
//!
//! ```rust
//! use currying::{Arguments, args, curry_n};
//!
//! let curried_max = curry_n(4, |arguments: Arguments<i32>| {
//!     arguments.positional().iter().copied().max()
//! });
//!
//! let five = curried_max
//!     .call(args![2])
//!     .call(args![3, 5])
//!     .and_then(|application| application.call(args![4]))
//!     .unwrap();
//!
//! assert_eq!(five.complete(), Some(Some(5)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use currying::prelude::*;
/// ```
pub mod prelude {
    pub use crate::args;
    pub use crate::{
        Application, Arguments, Arity, BindError, BoundArguments, Callable, Curried, CurryError,
        Function, IntrospectionError, Signature, curried, curry_n,
    };
}

pub mod accumulate;
pub mod arguments;
mod arity;
mod callable;
pub mod error;
mod function;
pub mod inspect;
pub mod signature;

pub use accumulate::{Application, Currier, Curried, curry_n, currier};
pub use arguments::{Arguments, NamedArguments};
pub use arity::Arity;
pub use callable::Callable;
pub use error::{AlreadyInvokedError, BindError, CurryError, IntrospectionError};
pub use function::Function;
pub use inspect::curried;
pub use signature::{BoundArguments, Parameter, Signature};

/// Attribute macros that curry `fn` items.
///
/// `#[curried]` reads the parameter list of the function at compile time;
/// `#[curry_n(n)]` uses an explicit threshold. See the
/// [`currying-derive`](currying_derive) crate for the accepted forms.
#[cfg(feature = "derive")]
pub use currying_derive::{curried, curry_n};
