//! `#[curried]` takes no threshold.

use currying::curried;

#[curried(3)]
fn add(x: i32, y: i32) -> i32 {
    x + y
}

fn main() {}
