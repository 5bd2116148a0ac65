//! `#[curry_n]` needs an integer literal threshold.

use currying::curry_n;

#[curry_n(two)]
fn add(x: i32, y: i32) -> i32 {
    x + y
}

fn main() {}
