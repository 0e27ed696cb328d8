/// A key that names one element of a [`ReusePool`][crate::ReusePool].
///
/// Keys are returned by the dequeue methods of the pool and can be used to access the element
/// via [`get()`][crate::ReusePool::get] and [`get_mut()`][crate::ReusePool::get_mut] or to return
/// it to the pool via [`enqueue()`][crate::ReusePool::enqueue].
///
/// A key stays valid for the lifetime of the pool because slots are never destroyed, only
/// recycled. This means that a key kept after its element was enqueued will later refer to
/// whatever the slot holds when it is handed out again.
///
/// Using a key with a pool other than the one that created it is a panic.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Key {
    pool_id: u64,
    index: usize,
}

impl Key {
    pub(crate) fn new(pool_id: u64, index: usize) -> Self {
        Self { pool_id, index }
    }

    pub(crate) fn pool_id(self) -> u64 {
        self.pool_id
    }

    /// The index of the slot in the backing storage of the pool.
    ///
    /// Slot indexes are in the range `0..capacity` and are stable for the lifetime of the pool,
    /// which makes them suitable for indexing side tables kept by the caller.
    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }
}

#[cfg(test)]
#[allow(
    clippy::indexing_slicing,
    clippy::items_after_statements,
    clippy::float_cmp,
    reason = "tests focus on succinct code and do not need to tick all the boxes"
)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Key: Copy, Send, Sync, std::hash::Hash);

    #[test]
    fn index_is_preserved() {
        let key = Key::new(7, 42);

        assert_eq!(key.index(), 42);
        assert_eq!(key.pool_id(), 7);
    }

    #[test]
    fn keys_from_different_pools_differ() {
        assert_ne!(Key::new(1, 0), Key::new(2, 0));
    }
}
