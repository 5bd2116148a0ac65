#![cfg(feature = "derive")]
//! Tests for the `#[curried]` and `#[curry_n(n)]` attribute macros.
//!
//! The attributes replace a `fn` item with a zero-argument constructor of a
//! curried wrapper:
//!
//! - `#[curried]`: the threshold is the number of parameters without a
//!   `#[default(..)]`, or unbounded when a `#[variadic]` parameter is present
//! - `#[curry_n(n)]`: the threshold is `n`
//!
//! `#[keywords]` collects named arguments that match no parameter.
//!
//! Outputs are wrapped in `Result<_, BindError>` because the accumulated
//! arguments are matched against the parameter list only on invocation.

use std::collections::HashMap;

use currying::{Arity, BindError, args, curried, curry_n};
use rstest::rstest;

// =============================================================================
// Curried functions
// =============================================================================

#[curried]
fn add(x: i64, y: i64, #[default(0)] z: i64) -> i64 {
    x + y + z
}

#[curried]
fn add_all(#[variadic] nums: Vec<i32>) -> i32 {
    nums.iter().sum()
}

#[curried]
fn join(first: String, #[variadic] rest: Vec<String>) -> String {
    rest.into_iter().fold(first, |mut joined, part| {
        joined.push('-');
        joined.push_str(&part);
        joined
    })
}

#[curried]
fn greet(greeting: String, name: String, #[default(String::from("!"))] suffix: String) -> String {
    format!("{greeting}, {name}{suffix}")
}

#[curried]
fn countdown(mut from: u32, step: u32) -> Vec<u32> {
    let mut values = vec![from];
    while from >= step && step > 0 {
        from -= step;
        values.push(from);
    }
    values
}

#[curried]
fn tagged(value: i64, #[keywords] tags: HashMap<String, i64>) -> i64 {
    value + tags.values().sum::<i64>()
}

#[curried]
fn scaled_total(
    first: i64,
    #[variadic] rest: Vec<i64>,
    #[keywords] options: HashMap<String, i64>,
) -> i64 {
    let scale = options.get("scale").copied().unwrap_or(1);
    (first + rest.iter().sum::<i64>()) * scale
}

#[curried]
fn power(base: u64, exponent: u64) -> u64 {
    if exponent == 0 {
        1
    } else {
        base * power(base, exponent - 1)
    }
}

#[curry_n(2)]
fn add_pair(x: i32, y: i32) -> i32 {
    x + y
}

#[curry_n(3)]
fn weighted(#[variadic] values: Vec<i64>) -> i64 {
    values
        .iter()
        .zip(1..)
        .map(|(value, weight)| value * weight)
        .sum()
}

mod visibility {
    use currying::curried;

    #[curried]
    pub fn multiply(x: i32, y: i32) -> i32 {
        x * y
    }
}

// =============================================================================
// #[curried]
// =============================================================================

#[rstest]
fn test_curried_threshold_counts_required_parameters() {
    assert_eq!(add().arity(), Arity::Finite(2));
    assert_eq!(greet().arity(), Arity::Finite(2));
    assert_eq!(add_all().arity(), Arity::Unbounded);
    assert_eq!(join().arity(), Arity::Unbounded);
}

#[rstest]
fn test_curried_add_four_then_five() {
    let result = add().call(args![4]).call(args![5]).unwrap();
    assert_eq!(result.complete(), Some(Ok(9)));
}

#[rstest]
fn test_curried_default_by_name() {
    let add = add();
    assert_eq!(add.call(args![4, 5; z = 3]).complete(), Some(Ok(12)));

    let pending = add.call(args![; z = 10]).call(args![1]).unwrap();
    assert_eq!(pending.call(args![2]).unwrap().complete(), Some(Ok(13)));
}

#[rstest]
fn test_curried_default_expression() {
    let greet = greet();
    let hello = greet.call(args!["Hello".to_string()]).partial().unwrap();

    assert_eq!(
        hello.call(args!["Ferris".to_string()]).complete(),
        Some(Ok("Hello, Ferris!".to_string()))
    );
    assert_eq!(
        hello
            .call(args!["Ferris".to_string(); suffix = "?".to_string()])
            .complete(),
        Some(Ok("Hello, Ferris?".to_string()))
    );
}

#[rstest]
fn test_curried_variadic_needs_empty_call() {
    let result = add_all()
        .call(args![1])
        .call(args![2])
        .and_then(|application| application.call(args![3, 4]))
        .and_then(|application| application.call(args![]));

    assert_eq!(result.unwrap().complete(), Some(Ok(10)));
}

#[rstest]
fn test_curried_required_before_variadic() {
    let joined = join()
        .call(args!["a".to_string()])
        .call(args!["b".to_string(), "c".to_string()])
        .unwrap();

    assert_eq!(joined.finish(), Ok("a-b-c".to_string()));
}

#[rstest]
fn test_curried_keeps_mut_binding() {
    let result = countdown().call(args![10]).call(args![4]).unwrap();
    assert_eq!(result.complete(), Some(Ok(vec![10, 6, 2])));
}

#[rstest]
fn test_curried_public_function() {
    let double = visibility::multiply().call(args![2]).partial().unwrap();
    assert_eq!(double.call(args![21]).complete(), Some(Ok(42)));
}

#[rstest]
fn test_curried_recursive_body_calls_plain_function() {
    let result = power().call(args![2]).call(args![10]).unwrap();
    assert_eq!(result.complete(), Some(Ok(1024)));
}

// =============================================================================
// #[keywords]
// =============================================================================

#[rstest]
fn test_keywords_do_not_change_threshold() {
    assert_eq!(tagged().arity(), Arity::Finite(1));
    assert_eq!(scaled_total().arity(), Arity::Unbounded);
}

#[rstest]
fn test_keywords_accept_undeclared_names() {
    assert_eq!(tagged().call(args![1; extra = 2]).complete(), Some(Ok(3)));
}

#[rstest]
fn test_keywords_accumulate_across_calls() {
    let pending = tagged().call(args![; first = 1]);
    assert!(pending.is_partial());

    let result = pending.call(args![10; second = 2]).unwrap();
    assert_eq!(result.complete(), Some(Ok(13)));
}

#[rstest]
fn test_keywords_after_variadic() {
    let result = scaled_total()
        .call(args![1; scale = 3])
        .call(args![2, 3])
        .unwrap();

    assert!(result.is_partial());
    assert_eq!(result.finish(), Ok(18));
}

// =============================================================================
// #[curry_n(n)]
// =============================================================================

#[rstest]
fn test_curry_n_uses_explicit_threshold() {
    let add_pair = add_pair();
    assert_eq!(add_pair.arity(), Arity::Finite(2));

    let add3 = add_pair.call(args![3]).partial().unwrap();
    assert_eq!(add3.call(args![4]).complete(), Some(Ok(7)));
}

#[rstest]
fn test_curry_n_variadic_invokes_at_threshold() {
    let weighted = weighted();
    assert_eq!(weighted.arity(), Arity::Finite(3));

    let result = weighted.call(args![1, 1]).call(args![1]).unwrap();
    assert_eq!(result.complete(), Some(Ok(6)));
}

// =============================================================================
// Binding failures
// =============================================================================

#[rstest]
fn test_forced_invocation_reports_missing_parameters() {
    assert_eq!(
        add().call(args![]).complete(),
        Some(Err(BindError::Missing(vec!["x".to_string(), "y".to_string()])))
    );
}

#[rstest]
fn test_unknown_keyword_reported_on_invocation() {
    let pending = add_pair().call(args![1; w = 2]);
    assert!(pending.is_partial());

    assert_eq!(
        pending.call(args![2]).unwrap().complete(),
        Some(Err(BindError::UnexpectedKeyword("w".to_string())))
    );
}

#[rstest]
fn test_too_many_arguments_without_variadic() {
    assert_eq!(
        add_pair().call(args![1, 2, 3]).complete(),
        Some(Err(BindError::TooManyPositional {
            expected: 2,
            given: 3
        }))
    );
}
