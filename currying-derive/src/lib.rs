//! Attribute macros for the `currying` crate.
//!
//! Rust cannot inspect a closure's parameter list at runtime, so these
//! macros read it from a `fn` item at compile time instead.
//!
//! # Available Attribute Macros
//!
//! - [`curried`]: curries a function over its required parameters
//! - [`curry_n`]: curries a function with an explicit threshold
//!
//! # Example
//!
//! ```rust,ignore
//! use currying::{args, curried};
//!
//! #[curried]
//! fn add(x: i64, y: i64, #[default(0)] z: i64) -> i64 {
//!     x + y + z
//! }
//!
//! let nine = add().call(args![4]).call(args![5]).unwrap();
//! assert_eq!(nine.complete(), Some(Ok(9)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curry;
mod parameters;

use proc_macro::TokenStream;

/// Curries a function over the number of parameters it requires.
///
/// The function is replaced by a zero-argument function of the same name and
/// visibility that returns a `currying::Curried` wrapper. Its threshold is
/// the number of parameters without a default, or unbounded when a
/// `#[variadic]` parameter is present.
///
/// # Parameters
///
/// - Every parameter must be a plain identifier (optionally `mut`), and all
///   parameters must share one type `V`, which must be `Clone`.
/// - `#[default(expr)]` gives a parameter a default value. Defaulted
///   parameters must come after required ones and can be supplied by name
///   at any point of the chain.
/// - `#[variadic]` marks a trailing `Vec<V>` parameter that collects
///   surplus positional arguments. Such chains are completed by an empty
///   call. Only a `#[keywords]` parameter may follow it.
/// - `#[keywords]` marks a last `HashMap<String, V>` parameter that collects
///   named arguments matching no other parameter. It does not change the
///   threshold.
///
/// # Output
///
/// The wrapped body's return type `R` becomes
/// `Result<R, currying::BindError>`; the error reports arguments that do not
/// fit the parameter list when the body is finally invoked.
///
/// # Example
///
/// ```rust,ignore
/// use currying::{args, curried};
///
/// #[curried]
/// fn add_all(#[variadic] nums: Vec<i32>) -> i32 {
///     nums.iter().sum()
/// }
///
/// let chain = add_all().call(args![1]).call(args![2]).unwrap();
/// assert_eq!(chain.call(args![]).unwrap().complete(), Some(Ok(3)));
/// ```
///
/// # Restrictions
///
/// Generic, `async`, `const`, `unsafe` and `extern` functions and methods
/// taking `self` are rejected at compile time. So are parameters of a
/// borrowed type such as `&str`, since the generated constructor has no
/// lifetime to give them; use an owned type or a `'static` reference.
///
/// The body becomes an item nested in the generated function, under its
/// original name. A recursive call inside the body reaches the plain
/// function, not the curried constructor.
#[proc_macro_attribute]
pub fn curried(attribute: TokenStream, item: TokenStream) -> TokenStream {
    curry::curried_impl(attribute, item)
}

/// Curries a function with an explicit threshold.
///
/// Accepts the same parameter forms as [`macro@curried`]; only the
/// threshold differs: the target is invoked once `n` positional arguments
/// have accumulated, or on an empty call.
///
/// # Example
///
/// ```rust,ignore
/// use currying::{args, curry_n};
///
/// #[curry_n(2)]
/// fn add(x: i32, y: i32) -> i32 {
///     x + y
/// }
///
/// let add3 = add().call(args![3]).partial().unwrap();
/// assert_eq!(add3.call(args![4]).complete(), Some(Ok(7)));
/// ```
#[proc_macro_attribute]
pub fn curry_n(attribute: TokenStream, item: TokenStream) -> TokenStream {
    curry::curry_n_impl(attribute, item)
}
