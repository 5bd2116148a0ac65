//! A generic function cannot be curried.

use currying::curried;

#[curried]
fn first<T>(value: T, other: T) -> T {
    value
}

fn main() {}
