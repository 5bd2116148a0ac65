//! A method taking `self` cannot be curried.

use currying::curried;

struct Counter;

impl Counter {
    #[curried]
    fn add(&self, value: i32) -> i32 {
        value
    }
}

fn main() {
    let _ = Counter;
}
