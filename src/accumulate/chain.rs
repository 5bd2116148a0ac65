//! Curried wrappers and their continuations.

use std::fmt;

use super::{Application, ReferenceCounter};
use crate::{Arguments, Arity, Callable};

/// A target wrapped together with a threshold and the arguments accumulated
/// so far.
///
/// The wrapper returned by [`curry_n`](crate::curry_n) or
/// [`curried`](crate::curried) starts with nothing accumulated. Each
/// [`call`](Self::call) that does not reach the threshold returns a new
/// `Curried` owning its own copy of the accumulated arguments, so partial
/// applications can be called any number of times.
pub struct Curried<C, V> {
    target: ReferenceCounter<C>,
    arity: Arity,
    accumulated: Arguments<V>,
}

impl<C, V> Curried<C, V>
where
    C: Callable<V>,
    V: Clone,
{
    /// Wraps `target` with an explicit threshold and nothing accumulated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currying::{Arguments, Arity, Curried, args};
    ///
    /// let add_all = Curried::new(Arity::Unbounded, |arguments: Arguments<i32>| {
    ///     arguments.positional().iter().sum::<i32>()
    /// });
    ///
    /// let pending = add_all.call(args![1]).call(args![2]).unwrap();
    /// assert!(!pending.is_complete());
    /// assert_eq!(pending.finish(), 3);
    /// ```
    pub fn new(arity: Arity, target: C) -> Self {
        Self {
            target: ReferenceCounter::new(target),
            arity,
            accumulated: Arguments::new(),
        }
    }

    /// Supplies another batch of arguments.
    ///
    /// The batch is merged into a copy of the accumulated arguments. The
    /// target is invoked when the batch is empty or when the accumulated
    /// positional count reaches the threshold; its output is returned as
    /// [`Application::Complete`] without inspection. Otherwise the merged
    /// state is returned as [`Application::Partial`].
    pub fn call(&self, arguments: Arguments<V>) -> Application<C, V> {
        let forced = arguments.is_empty();
        let mut accumulated = self.accumulated.clone();
        accumulated.merge(arguments);

        if forced || self.arity.is_satisfied_by(accumulated.positional_len()) {
            tracing::trace!(
                arity = %self.arity,
                positional = accumulated.positional_len(),
                named = accumulated.named_len(),
                forced,
                "invoking curried target"
            );
            Application::Complete(self.target.invoke(accumulated))
        } else {
            tracing::trace!(
                arity = %self.arity,
                positional = accumulated.positional_len(),
                named = accumulated.named_len(),
                "accumulating curried arguments"
            );
            Application::Partial(Self {
                target: ReferenceCounter::clone(&self.target),
                arity: self.arity,
                accumulated,
            })
        }
    }

    /// Invokes the target with the arguments accumulated so far.
    ///
    /// Equivalent to calling with an empty batch. This is how chains with an
    /// [`Arity::Unbounded`] threshold are completed.
    pub fn finish(&self) -> C::Output {
        tracing::trace!(
            arity = %self.arity,
            positional = self.accumulated.positional_len(),
            named = self.accumulated.named_len(),
            forced = true,
            "invoking curried target"
        );
        self.target.invoke(self.accumulated.clone())
    }
}

impl<C, V> Curried<C, V> {
    /// The threshold of this chain.
    #[inline]
    pub const fn arity(&self) -> Arity {
        self.arity
    }

    /// The arguments accumulated so far.
    #[inline]
    pub const fn accumulated(&self) -> &Arguments<V> {
        &self.accumulated
    }

    /// The wrapped target.
    #[inline]
    pub fn target(&self) -> &C {
        &self.target
    }

    /// Number of further positional arguments that would trigger invocation,
    /// or `None` for an unbounded threshold.
    pub fn remaining(&self) -> Option<usize> {
        self.arity
            .finite()
            .map(|threshold| threshold.saturating_sub(self.accumulated.positional_len()))
    }
}

impl<C, V: Clone> Clone for Curried<C, V> {
    fn clone(&self) -> Self {
        Self {
            target: ReferenceCounter::clone(&self.target),
            arity: self.arity,
            accumulated: self.accumulated.clone(),
        }
    }
}

impl<C, V: fmt::Debug> fmt::Debug for Curried<C, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("arity", &self.arity)
            .field("accumulated", &self.accumulated)
            .finish_non_exhaustive()
    }
}

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Curried<fn(Arguments<i32>) -> i32, i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Curried<fn(Arguments<i32>) -> i32, i32>: Send, Sync);
