//! Every parameter of a curried function must have the same type.

use currying::curried;

#[curried]
fn add(x: i32, y: i64) -> i64 {
    i64::from(x) + y
}

fn main() {}
