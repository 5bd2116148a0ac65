//! A variadic parameter must be a `Vec`.

use currying::curried;

#[curried]
fn add_all(#[variadic] nums: Option<i32>) -> i32 {
    nums.unwrap_or(0)
}

fn main() {}
