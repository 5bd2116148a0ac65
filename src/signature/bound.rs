//! Binding accumulated arguments to a declared signature.

use crate::{Arguments, BindError, NamedArguments};

use super::Signature;

/// Arguments matched against a [`Signature`].
///
/// `values` holds one value per named parameter in declaration order, with
/// defaults filled in. `rest` holds the surplus positional arguments
/// collected by a variadic parameter, and `extra` the named arguments
/// collected by a keyword parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundArguments<V> {
    names: Vec<String>,
    values: Vec<V>,
    rest: Vec<V>,
    extra: NamedArguments<V>,
}

impl<V> BoundArguments<V> {
    /// The value bound to the parameter at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&V> {
        self.values.get(index)
    }

    /// The value bound to the parameter called `name`.
    pub fn get_named(&self, name: &str) -> Option<&V> {
        self.names
            .iter()
            .position(|candidate| candidate == name)
            .and_then(|index| self.values.get(index))
    }

    /// Values of the named parameters in declaration order.
    #[inline]
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Values collected by the variadic parameter.
    #[inline]
    pub fn rest(&self) -> &[V] {
        &self.rest
    }

    /// Named arguments that matched no parameter.
    ///
    /// Always empty unless the signature declares
    /// [`keywords`](Signature::keywords).
    #[inline]
    pub const fn extra(&self) -> &NamedArguments<V> {
        &self.extra
    }

    /// Consumes the binding, returning the parameter values, the variadic
    /// rest and the collected keywords.
    pub fn into_parts(self) -> (Vec<V>, Vec<V>, NamedArguments<V>) {
        (self.values, self.rest, self.extra)
    }

    /// Destructures the parameter values into an array of length `N`.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::ShapeMismatch`] when the number of bound values is not `N`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currying::{Signature, args};
    ///
    /// let signature = Signature::new().required("x").optional("z", 0);
    /// let bound = signature.bind(args![4]).unwrap();
    ///
    /// let ([x, z], rest) = bound.split::<2>().unwrap();
    /// assert_eq!((x, z), (4, 0));
    /// assert!(rest.is_empty());
    /// ```
    pub fn split<const N: usize>(self) -> Result<([V; N], Vec<V>), BindError> {
        let actual = self.values.len();
        let values = <[V; N]>::try_from(self.values)
            .map_err(|_| BindError::ShapeMismatch { expected: N, actual })?;
        Ok((values, self.rest))
    }

    /// Like [`split`](Self::split), also returning the collected keywords.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::ShapeMismatch`] when the number of bound values is not `N`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currying::{Signature, args};
    ///
    /// let signature = Signature::new().required("x").keywords("options");
    /// let bound = signature.bind(args![4; scale = 2]).unwrap();
    ///
    /// let ([x], _, options) = bound.split_all::<1>().unwrap();
    /// assert_eq!(x * options["scale"], 8);
    /// ```
    pub fn split_all<const N: usize>(
        mut self,
    ) -> Result<([V; N], Vec<V>, NamedArguments<V>), BindError> {
        let extra = std::mem::take(&mut self.extra);
        let (values, rest) = self.split::<N>()?;
        Ok((values, rest, extra))
    }
}

impl<V: Clone> Signature<V> {
    /// Matches `arguments` against the declared parameters.
    ///
    /// Positional arguments fill parameters in declaration order and any
    /// surplus is collected by the variadic parameter. Named arguments fill
    /// the parameter with the same name. Parameters left unfilled take their
    /// default.
    ///
    /// # Errors
    ///
    /// Checks run in this order and the first failure is returned:
    ///
    /// 1. [`BindError::TooManyPositional`] for surplus positionals without a
    ///    variadic parameter.
    /// 2. [`BindError::UnexpectedKeyword`] for a name that is not a declared
    ///    parameter (unless a keyword parameter collects it), and
    ///    [`BindError::MultipleValues`] for a name whose parameter was already
    ///    filled positionally. Names are checked in sorted order.
    /// 3. [`BindError::Missing`] listing every required parameter still unfilled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currying::{BindError, Signature, args};
    ///
    /// let signature = Signature::new().required("x").required("y").optional("z", 0);
    ///
    /// let bound = signature.bind(args![4, 5; z = 3]).unwrap();
    /// assert_eq!(bound.values(), &[4, 5, 3]);
    ///
    /// assert_eq!(
    ///     signature.bind(args![4]),
    ///     Err(BindError::Missing(vec!["y".to_string()]))
    /// );
    /// ```
    pub fn bind(&self, arguments: Arguments<V>) -> Result<BoundArguments<V>, BindError> {
        let declared = self.parameters.len();
        let (positional, named) = arguments.into_parts();
        let given = positional.len();

        if given > declared && !self.is_variadic() {
            return Err(BindError::TooManyPositional {
                expected: declared,
                given,
            });
        }

        let mut slots: Vec<Option<V>> = Vec::with_capacity(declared);
        let mut positional = positional.into_iter();
        slots.extend(positional.by_ref().take(declared).map(Some));
        slots.resize_with(declared, || None);
        let rest: Vec<V> = positional.collect();

        let mut named: Vec<(String, V)> = named.into_iter().collect();
        named.sort_by(|left, right| left.0.cmp(&right.0));

        let mut extra = NamedArguments::default();
        for (name, value) in named {
            let Some(index) = self.position(&name) else {
                if self.accepts_keywords() {
                    extra.insert(name, value);
                    continue;
                }
                return Err(BindError::UnexpectedKeyword(name));
            };
            if slots[index].is_some() {
                return Err(BindError::MultipleValues(name));
            }
            slots[index] = Some(value);
        }

        let mut values = Vec::with_capacity(declared);
        let mut missing = Vec::new();
        for (slot, parameter) in slots.into_iter().zip(&self.parameters) {
            match slot.or_else(|| parameter.default.clone()) {
                Some(value) => values.push(value),
                None => missing.push(parameter.name.clone()),
            }
        }

        if !missing.is_empty() {
            return Err(BindError::Missing(missing));
        }

        Ok(BoundArguments {
            names: self
                .parameters
                .iter()
                .map(|parameter| parameter.name.clone())
                .collect(),
            values,
            rest,
            extra,
        })
    }
}
