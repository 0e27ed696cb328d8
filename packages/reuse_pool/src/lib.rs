//! A fixed-capacity object pool that recycles its elements instead of allocating new ones.
//!
//! This crate provides [`ReusePool`], which creates all of its elements up front and then hands
//! them out and takes them back for the rest of its lifetime. No memory is allocated after the
//! pool has been created.
//!
//! Every element is either *available* (free to be handed out) or *unavailable* (in use by the
//! caller). The pool keeps both sets as ordered lists linked through the slots themselves, which
//! makes every operation O(1):
//!
//! * [`dequeue_first_available()`][ReusePool::dequeue_first_available] hands out the most
//!   recently returned element and appends it to the end of the in-use list.
//! * [`enqueue()`][ReusePool::enqueue] returns an element from any position in the in-use list.
//! * [`dequeue_first_unavailable()`][ReusePool::dequeue_first_unavailable] recycles the element
//!   that has been in use the longest. This lets callers cap the number of live elements by
//!   replacing the oldest one instead of growing the pool.
//!
//! Elements are addressed through [`Key`] values. A key names one slot of one specific pool and
//! using it with another pool is a panic.
//!
//! Every time an element is handed out, the pool first calls [`Reusable::reset_for_reuse()`] on
//! it, so callers always receive an element in a known state.
//!
//! # Example
//!
//! ```rust
//! use reuse_pool::{ReusePool, Reusable};
//!
//! #[derive(Default)]
//! struct Bullet {
//!     distance_travelled: u32,
//! }
//!
//! impl Reusable for Bullet {
//!     fn reset_for_reuse(&mut self) {
//!         self.distance_travelled = 0;
//!     }
//! }
//!
//! let mut pool = ReusePool::<Bullet>::with_default(2);
//!
//! let first = pool.dequeue_first_available().unwrap();
//! let second = pool.dequeue_first_available().unwrap();
//! pool.get_mut(first).distance_travelled = 10;
//!
//! // The pool is exhausted, so we replace the bullet that has been in flight the longest.
//! assert!(pool.dequeue_first_available().is_none());
//! let third = pool.dequeue_first_unavailable().unwrap();
//!
//! assert_eq!(third, first);
//! assert_eq!(pool.get(third).distance_travelled, 0);
//!
//! pool.enqueue(second);
//! assert_eq!(pool.number_of_available(), 1);
//! ```

mod builder;
mod elements;
mod key;
mod pool;
mod reusable;

pub use builder::*;
pub use elements::*;
pub use key::*;
pub use pool::*;
pub use reusable::*;
