//! Integration tests for the `reuse_pool` package.
//!
//! These drive a pool through long pseudo-random sequences of operations and verify after every
//! step that the available and in-use lists still partition the pool, using only the public API.

#![allow(
    clippy::indexing_slicing,
    clippy::items_after_statements,
    clippy::float_cmp,
    reason = "tests focus on succinct code and do not need to tick all the boxes"
)]

use std::collections::{HashSet, VecDeque};
use std::iter;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use reuse_pool::{Key, ReusePool, Reusable};

#[derive(Debug, Default)]
struct Payload {
    generation: u64,
}

impl Reusable for Payload {
    fn reset_for_reuse(&mut self) {
        self.generation = 0;
    }
}

fn assert_partitioned(pool: &ReusePool<Payload>) {
    let available: Vec<Key> = pool.available_elements().map(|(key, _)| key).collect();
    let unavailable: Vec<Key> = pool.unavailable_elements().map(|(key, _)| key).collect();

    assert_eq!(available.len(), pool.number_of_available());
    assert_eq!(unavailable.len(), pool.number_of_unavailable());
    assert_eq!(
        pool.number_of_available() + pool.number_of_unavailable(),
        pool.capacity()
    );

    let all: HashSet<usize> = available
        .iter()
        .chain(unavailable.iter())
        .map(|key| key.index())
        .collect();

    assert_eq!(all.len(), pool.capacity(), "lists overlap or miss slots");
    assert!(available.iter().all(|key| pool.is_available(*key)));
    assert!(unavailable.iter().all(|key| !pool.is_available(*key)));
}

#[test]
fn random_operations_keep_lists_partitioned() {
    const CAPACITY: usize = 32;

    let mut rng = SmallRng::seed_from_u64(0x5eed);
    let mut pool = ReusePool::<Payload>::with_default(CAPACITY);

    // Model of the in-use list: oldest at the front.
    let mut in_use: VecDeque<Key> = VecDeque::new();
    // Model of the available list for elements that have been returned at least once.
    let mut returned: Vec<Key> = Vec::new();

    for generation in 1..=5_000_u64 {
        match rng.random_range(0..3) {
            0 => {
                let expected = returned.last().copied();

                match pool.dequeue_first_available() {
                    Some(key) => {
                        if let Some(expected) = expected {
                            assert_eq!(key, expected, "available list is not LIFO");
                            returned.pop();
                        }

                        assert_eq!(pool.get(key).generation, 0, "element was not reset");
                        pool.get_mut(key).generation = generation;
                        in_use.push_back(key);
                    }
                    None => assert_eq!(in_use.len(), CAPACITY),
                }
            }
            1 => match pool.dequeue_first_unavailable() {
                Some(key) => {
                    let oldest = in_use.pop_front().expect("pool reported an element in use");
                    assert_eq!(key, oldest, "in-use list is not FIFO");
                    in_use.push_back(key);
                }
                None => assert!(in_use.is_empty()),
            },
            _ => {
                if !in_use.is_empty() {
                    let position = rng.random_range(0..in_use.len());
                    let key = in_use.remove(position).expect("position is in range");
                    pool.enqueue(key);
                    returned.push(key);
                }
            }
        }

        assert_partitioned(&pool);
        assert_eq!(
            pool.unavailable_elements()
                .map(|(key, _)| key)
                .collect::<Vec<_>>(),
            in_use.iter().copied().collect::<Vec<_>>()
        );
    }
}

#[test]
fn full_rotation_preserves_order() {
    let mut pool = ReusePool::<Payload>::with_default(8);

    let keys: Vec<Key> = iter::repeat_with(|| pool.dequeue_first_available().unwrap())
        .take(8)
        .collect();

    let recycled: Vec<Key> = iter::repeat_with(|| pool.dequeue_first_unavailable().unwrap())
        .take(8)
        .collect();

    assert_eq!(recycled, keys);
    assert_partitioned(&pool);
}

#[test]
fn keys_survive_many_recycles() {
    let mut pool = ReusePool::<Payload>::with_default(1);

    let key = pool.dequeue_first_available().unwrap();

    for _ in 0..100 {
        assert_eq!(pool.dequeue_first_unavailable(), Some(key));
    }

    pool.enqueue(key);
    assert_eq!(pool.dequeue_first_available(), Some(key));
}
