//! Demonstrates handing out, recycling and returning elements of a `ReusePool`.

use std::iter;

use reuse_pool::{ReusePool, Reusable};

#[derive(Debug, Default)]
struct Connection {
    requests_served: u32,
}

impl Reusable for Connection {
    fn reset_for_reuse(&mut self) {
        self.requests_served = 0;
    }
}

fn main() {
    let mut pool = ReusePool::<Connection>::with_default(3);

    let keys: Vec<_> = iter::repeat_with(|| pool.dequeue_first_available().unwrap())
        .take(3)
        .collect();

    for (key, served) in keys.iter().zip(1..) {
        pool.get_mut(*key).requests_served = served;
    }

    println!(
        "{} in use, {} available",
        pool.number_of_unavailable(),
        pool.number_of_available()
    );

    // No connection is free, so take over the one that has been in use the longest.
    let recycled = pool.dequeue_first_unavailable().unwrap();
    println!(
        "recycled slot {} now has served {} requests",
        recycled.index(),
        pool.get(recycled).requests_served
    );

    // Return the middle connection.
    pool.enqueue(*keys.get(1).unwrap());

    for (key, connection) in pool.unavailable_elements() {
        println!("in use: slot {} -> {connection:?}", key.index());
    }

    for (key, _) in pool.available_elements() {
        println!("available: slot {}", key.index());
    }
}
