//! A required parameter cannot follow a defaulted one.

use currying::curried;

#[curried]
fn add(#[default(0)] x: i32, y: i32) -> i32 {
    x + y
}

fn main() {}
