//! Curried parameters cannot borrow.

use currying::curried;

#[curried]
fn greet(greeting: &str, name: &str) -> String {
    format!("{greeting}, {name}")
}

fn main() {}
