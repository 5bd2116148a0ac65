//! Error types for currying.
//!
//! Errors raised by a target when it is finally invoked are never wrapped in
//! these types; they reach the caller unchanged as part of the target's own
//! output. The types here cover the three failures the library itself can
//! detect:
//!
//! - [`BindError`]: the accumulated arguments do not fit a declared signature.
//!   Only raised when the target is invoked, never while accumulating.
//! - [`IntrospectionError`]: the arity of a target cannot be determined.
//! - [`AlreadyInvokedError`]: more arguments were applied to a chain whose
//!   target has already been invoked.

use std::fmt;

/// The accumulated arguments do not match a declared signature.
///
/// # Examples
///
/// ```rust
/// use currying::BindError;
///
/// let error = BindError::Missing(vec!["y".to_string()]);
/// assert_eq!(error.to_string(), "missing required argument(s): y");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// More positional arguments than declared parameters and no variadic parameter.
    TooManyPositional {
        /// Number of declared parameters.
        expected: usize,
        /// Number of positional arguments supplied.
        given: usize,
    },
    /// A named argument does not match any declared parameter.
    UnexpectedKeyword(String),
    /// A parameter received both a positional and a named value.
    MultipleValues(String),
    /// Required parameters that received no value, in declaration order.
    Missing(Vec<String>),
    /// Bound values could not be destructured into the requested shape.
    ShapeMismatch {
        /// Number of values requested.
        expected: usize,
        /// Number of values bound.
        actual: usize,
    },
}

impl fmt::Display for BindError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyPositional { expected, given } => write!(
                formatter,
                "takes {expected} positional argument(s) but {given} were given"
            ),
            Self::UnexpectedKeyword(name) => {
                write!(formatter, "got an unexpected keyword argument '{name}'")
            }
            Self::MultipleValues(name) => {
                write!(formatter, "got multiple values for argument '{name}'")
            }
            Self::Missing(names) => {
                write!(formatter, "missing required argument(s): {}", names.join(", "))
            }
            Self::ShapeMismatch { expected, actual } => write!(
                formatter,
                "expected {expected} bound value(s) but {actual} were bound"
            ),
        }
    }
}

impl std::error::Error for BindError {}

/// The parameter signature of a target cannot be determined, or describes a
/// parameter list no function could have.
///
/// Targets that cannot be introspected can still be curried with an explicit
/// threshold through [`curry_n`](crate::curry_n).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntrospectionError {
    /// The target exposes no signature.
    Opaque {
        /// Type name of the target.
        type_name: &'static str,
    },
    /// Two parameters share a name.
    DuplicateParameter(String),
    /// A required parameter follows one with a default value.
    RequiredAfterOptional(String),
    /// The variadic parameter reuses the name of a regular parameter.
    VariadicNameClash(String),
    /// The keyword-collecting parameter reuses the name of another parameter.
    KeywordsNameClash(String),
}

impl fmt::Display for IntrospectionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opaque { type_name } => write!(
                formatter,
                "no signature found for {type_name}; use curry_n with an explicit arity"
            ),
            Self::DuplicateParameter(name) => {
                write!(formatter, "duplicate parameter '{name}' in signature")
            }
            Self::RequiredAfterOptional(name) => write!(
                formatter,
                "required parameter '{name}' follows a parameter with a default"
            ),
            Self::VariadicNameClash(name) => write!(
                formatter,
                "variadic parameter '{name}' clashes with a regular parameter"
            ),
            Self::KeywordsNameClash(name) => write!(
                formatter,
                "keyword parameter '{name}' clashes with another parameter"
            ),
        }
    }
}

impl std::error::Error for IntrospectionError {}

/// Arguments were applied to a chain whose target was already invoked.
///
/// # Examples
///
/// ```rust
/// use currying::AlreadyInvokedError;
///
/// assert_eq!(
///     AlreadyInvokedError.to_string(),
///     "target already invoked; the chain accepts no further arguments"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlreadyInvokedError;

impl fmt::Display for AlreadyInvokedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "target already invoked; the chain accepts no further arguments"
        )
    }
}

impl std::error::Error for AlreadyInvokedError {}

/// Any error raised by the library itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurryError {
    /// See [`BindError`].
    Bind(BindError),
    /// See [`IntrospectionError`].
    Introspection(IntrospectionError),
    /// See [`AlreadyInvokedError`].
    AlreadyInvoked(AlreadyInvokedError),
}

impl fmt::Display for CurryError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bind(error) => write!(formatter, "{error}"),
            Self::Introspection(error) => write!(formatter, "{error}"),
            Self::AlreadyInvoked(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for CurryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bind(error) => Some(error),
            Self::Introspection(error) => Some(error),
            Self::AlreadyInvoked(error) => Some(error),
        }
    }
}

impl From<BindError> for CurryError {
    fn from(error: BindError) -> Self {
        Self::Bind(error)
    }
}

impl From<IntrospectionError> for CurryError {
    fn from(error: IntrospectionError) -> Self {
        Self::Introspection(error)
    }
}

impl From<AlreadyInvokedError> for CurryError {
    fn from(error: AlreadyInvokedError) -> Self {
        Self::AlreadyInvoked(error)
    }
}
