#![cfg(feature = "serde")]
//! Integration tests for serde support.
//!
//! Accumulated arguments can be persisted and later resumed with a fresh
//! wrapper around the same target.

use currying::{Arguments, Arity, args, curry_n};
use rstest::rstest;

// =============================================================================
// Arity
// =============================================================================

#[rstest]
#[case(Arity::Finite(2), r#"{"Finite":2}"#)]
#[case(Arity::Unbounded, r#""Unbounded""#)]
fn test_arity_json_representation(#[case] arity: Arity, #[case] json: &str) {
    assert_eq!(serde_json::to_string(&arity).unwrap(), json);
    assert_eq!(serde_json::from_str::<Arity>(json).unwrap(), arity);
}

// =============================================================================
// Arguments
// =============================================================================

#[rstest]
fn test_arguments_json_representation() {
    let arguments: Arguments<i32> = args![1, 2; scale = 10];
    let json = serde_json::to_string(&arguments).unwrap();

    assert_eq!(json, r#"{"positional":[1,2],"named":{"scale":10}}"#);
}

#[rstest]
fn test_arguments_json_roundtrip_spills_inline_storage() {
    let arguments: Arguments<String> = (0..10)
        .map(|index| index.to_string())
        .collect::<Arguments<_>>()
        .named("label", "ten".to_string());

    let json = serde_json::to_string(&arguments).unwrap();
    let restored: Arguments<String> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, arguments);
    assert_eq!(restored.positional_len(), 10);
}

#[rstest]
fn test_empty_arguments_roundtrip() {
    let restored: Arguments<i32> =
        serde_json::from_str(r#"{"positional":[],"named":{}}"#).unwrap();
    assert!(restored.is_empty());
}

#[rstest]
fn test_missing_field_is_rejected() {
    let result = serde_json::from_str::<Arguments<i32>>(r#"{"positional":[1]}"#);
    assert!(result.is_err());
}

// =============================================================================
// Resuming a chain
// =============================================================================

#[rstest]
fn test_persisted_accumulation_resumes_chain() {
    let scaled_sum = |arguments: Arguments<i64>| {
        let scale = arguments.get("scale").copied().unwrap_or(1);
        arguments.positional().iter().sum::<i64>() * scale
    };

    let partial = curry_n(3, scaled_sum)
        .call(args![1, 2; scale = 10])
        .partial()
        .unwrap();
    let json = serde_json::to_string(partial.accumulated()).unwrap();

    let restored: Arguments<i64> = serde_json::from_str(&json).unwrap();
    let resumed = curry_n(3, scaled_sum).call(restored).partial().unwrap();

    assert_eq!(resumed.call(args![3]).complete(), Some(60));
}
