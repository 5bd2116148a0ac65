//! Declared parameter signatures.
//!
//! Rust cannot ask a closure how many parameters it requires, so a target
//! that wants its arity inferred declares its parameter list as a
//! [`Signature`]. The signature drives two things:
//!
//! - the threshold used by [`curried`](crate::curried): the number of
//!   required parameters, or [`Arity::Unbounded`] when a variadic parameter is
//!   declared (a keyword-collecting parameter never affects it);
//! - argument binding when the target is finally invoked (see
//!   [`Signature::bind`]).
//!
//! # Examples
//!
//! ```rust
//! use currying::{Arity, Signature};
//!
//! // two required parameters and one with a default
//! let signature = Signature::new().required("x").required("y").optional("z", 0);
//! assert_eq!(signature.parameter_count(), 3);
//! assert_eq!(signature.default_count(), 1);
//! assert_eq!(signature.arity(), Arity::Finite(2));
//!
//! // a single variadic parameter
//! let variadic: Signature<i32> = Signature::new().variadic("nums");
//! assert_eq!(variadic.arity(), Arity::Unbounded);
//! ```

mod bound;

pub use bound::BoundArguments;

use std::collections::HashSet;

use crate::{Arity, IntrospectionError};

/// A single named parameter, optionally carrying a default value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter<V> {
    name: String,
    default: Option<V>,
}

impl<V> Parameter<V> {
    /// A parameter that must be supplied.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    /// A parameter that falls back to `default`.
    pub fn optional(name: impl Into<String>, default: V) -> Self {
        Self {
            name: name.into(),
            default: Some(default),
        }
    }

    /// The parameter name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The default value, if any.
    #[inline]
    pub const fn default(&self) -> Option<&V> {
        self.default.as_ref()
    }

    /// Returns `true` when the parameter has no default.
    #[inline]
    pub const fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// The declared parameter list of a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature<V> {
    parameters: Vec<Parameter<V>>,
    variadic: Option<String>,
    keywords: Option<String>,
}

impl<V> Signature<V> {
    /// An empty signature: no parameters, not variadic.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            parameters: Vec::new(),
            variadic: None,
            keywords: None,
        }
    }

    /// Appends a parameter.
    #[must_use]
    pub fn parameter(mut self, parameter: Parameter<V>) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Appends a required parameter.
    #[must_use]
    pub fn required(self, name: impl Into<String>) -> Self {
        self.parameter(Parameter::required(name))
    }

    /// Appends a parameter with a default value.
    #[must_use]
    pub fn optional(self, name: impl Into<String>, default: V) -> Self {
        self.parameter(Parameter::optional(name, default))
    }

    /// Declares a variadic parameter that collects surplus positional arguments.
    #[must_use]
    pub fn variadic(mut self, name: impl Into<String>) -> Self {
        self.variadic = Some(name.into());
        self
    }

    /// Declares a parameter that collects named arguments matching no other
    /// parameter.
    ///
    /// Without one, such names fail binding with
    /// [`BindError::UnexpectedKeyword`](crate::BindError::UnexpectedKeyword).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currying::{Arity, Signature, args};
    ///
    /// let signature = Signature::new().required("x").keywords("options");
    /// assert_eq!(signature.arity(), Arity::Finite(1));
    ///
    /// let bound = signature.bind(args![1; verbose = 2]).unwrap();
    /// assert_eq!(bound.values(), &[1]);
    /// assert_eq!(bound.extra().get("verbose"), Some(&2));
    /// ```
    #[must_use]
    pub fn keywords(mut self, name: impl Into<String>) -> Self {
        self.keywords = Some(name.into());
        self
    }

    /// The named parameters in declaration order.
    #[inline]
    pub fn parameters(&self) -> &[Parameter<V>] {
        &self.parameters
    }

    /// Name of the variadic parameter, if declared.
    #[inline]
    pub fn variadic_name(&self) -> Option<&str> {
        self.variadic.as_deref()
    }

    /// Name of the keyword-collecting parameter, if declared.
    #[inline]
    pub fn keywords_name(&self) -> Option<&str> {
        self.keywords.as_deref()
    }

    /// Returns `true` when unmatched named arguments are collected.
    #[inline]
    pub const fn accepts_keywords(&self) -> bool {
        self.keywords.is_some()
    }

    /// Returns `true` when a variadic parameter is declared.
    #[inline]
    pub const fn is_variadic(&self) -> bool {
        self.variadic.is_some()
    }

    /// Number of named parameters.
    #[inline]
    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    /// Number of named parameters with a default value.
    pub fn default_count(&self) -> usize {
        self.parameters
            .iter()
            .filter(|parameter| !parameter.is_required())
            .count()
    }

    /// Number of parameters without a default value.
    pub fn required_count(&self) -> usize {
        self.parameter_count() - self.default_count()
    }

    /// The currying threshold this signature implies.
    pub fn arity(&self) -> Arity {
        if self.is_variadic() {
            Arity::Unbounded
        } else {
            Arity::Finite(self.required_count())
        }
    }

    /// Position of the parameter called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.parameters
            .iter()
            .position(|parameter| parameter.name == name)
    }

    /// Checks that the signature describes a parameter list a function could have.
    ///
    /// # Errors
    ///
    /// - [`IntrospectionError::DuplicateParameter`] when two parameters share a name.
    /// - [`IntrospectionError::RequiredAfterOptional`] when a required parameter
    ///   follows a defaulted one.
    /// - [`IntrospectionError::VariadicNameClash`] when the variadic parameter
    ///   reuses a parameter name.
    /// - [`IntrospectionError::KeywordsNameClash`] when the keyword-collecting
    ///   parameter reuses the name of a regular or variadic parameter.
    pub fn validate(&self) -> Result<(), IntrospectionError> {
        let mut seen = HashSet::with_capacity(self.parameters.len());
        let mut defaulted = false;

        for parameter in &self.parameters {
            if !seen.insert(parameter.name.as_str()) {
                return Err(IntrospectionError::DuplicateParameter(parameter.name.clone()));
            }
            if parameter.is_required() && defaulted {
                return Err(IntrospectionError::RequiredAfterOptional(
                    parameter.name.clone(),
                ));
            }
            defaulted |= !parameter.is_required();
        }

        if let Some(name) = &self.variadic {
            if !seen.insert(name.as_str()) {
                return Err(IntrospectionError::VariadicNameClash(name.clone()));
            }
        }

        match &self.keywords {
            Some(name) if seen.contains(name.as_str()) => {
                Err(IntrospectionError::KeywordsNameClash(name.clone()))
            }
            _ => Ok(()),
        }
    }
}

impl<V> Default for Signature<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Signature::new(), Arity::Finite(0))]
    #[case(Signature::new().required("x").required("y"), Arity::Finite(2))]
    #[case(Signature::new().required("x").required("y").optional("z", 0), Arity::Finite(2))]
    #[case(Signature::new().optional("a", 1).optional("b", 2), Arity::Finite(0))]
    #[case(Signature::new().required("x").variadic("rest"), Arity::Unbounded)]
    #[case(Signature::new().variadic("nums"), Arity::Unbounded)]
    #[case(Signature::new().required("x").keywords("options"), Arity::Finite(1))]
    #[case(Signature::new().variadic("rest").keywords("options"), Arity::Unbounded)]
    fn test_arity(#[case] signature: Signature<i32>, #[case] expected: Arity) {
        assert_eq!(signature.arity(), expected);
    }

    #[rstest]
    fn test_counts() {
        let signature = Signature::new()
            .required("x")
            .required("y")
            .optional("z", 0)
            .optional("w", 1);

        assert_eq!(signature.parameter_count(), 4);
        assert_eq!(signature.default_count(), 2);
        assert_eq!(signature.required_count(), 2);
        assert_eq!(signature.position("z"), Some(2));
        assert_eq!(signature.position("missing"), None);
    }

    #[rstest]
    fn test_validate_accepts_well_formed_signature() {
        let signature = Signature::new()
            .required("x")
            .optional("z", 0)
            .variadic("rest")
            .keywords("options");
        assert_eq!(signature.validate(), Ok(()));
        assert_eq!(signature.keywords_name(), Some("options"));
    }

    #[rstest]
    #[case(
        Signature::new().required("x").required("x"),
        IntrospectionError::DuplicateParameter("x".to_string())
    )]
    #[case(
        Signature::new().optional("z", 0).required("x"),
        IntrospectionError::RequiredAfterOptional("x".to_string())
    )]
    #[case(
        Signature::new().required("x").variadic("x"),
        IntrospectionError::VariadicNameClash("x".to_string())
    )]
    #[case(
        Signature::new().required("x").keywords("x"),
        IntrospectionError::KeywordsNameClash("x".to_string())
    )]
    #[case(
        Signature::new().variadic("rest").keywords("rest"),
        IntrospectionError::KeywordsNameClash("rest".to_string())
    )]
    fn test_validate_rejects(#[case] signature: Signature<i32>, #[case] expected: IntrospectionError) {
        assert_eq!(signature.validate(), Err(expected));
    }
}
