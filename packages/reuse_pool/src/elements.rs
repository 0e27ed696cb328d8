use std::iter::FusedIterator;

use crate::{Key, ReusePool};

/// Iterator over one of the two element lists of a [`ReusePool`], in list order.
///
/// Returned by [`ReusePool::available_elements()`] and [`ReusePool::unavailable_elements()`].
/// The iterator borrows the pool, so the lists cannot change while it is alive.
#[derive(Debug)]
pub struct Elements<'p, T> {
    pool: &'p ReusePool<T>,

    /// Index of the slot to yield next.
    cursor: Option<usize>,

    /// Number of slots left to yield. The list length is known up front, which lets us be an
    /// `ExactSizeIterator`.
    remaining: usize,
}

impl<'p, T> Elements<'p, T> {
    pub(crate) fn new(pool: &'p ReusePool<T>, first: Option<usize>, len: usize) -> Self {
        Self {
            pool,
            cursor: first,
            remaining: len,
        }
    }
}

impl<'p, T> Iterator for Elements<'p, T> {
    type Item = (Key, &'p T);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;

        let (key, element, next) = self.pool.element_and_next(index);

        self.cursor = next;
        self.remaining = self
            .remaining
            .checked_sub(1)
            .expect("list length is maintained together with the links, so it cannot be exceeded");

        Some((key, element))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Elements<'_, T> {}

impl<T> FusedIterator for Elements<'_, T> {}

#[cfg(test)]
#[allow(
    clippy::indexing_slicing,
    clippy::items_after_statements,
    clippy::float_cmp,
    reason = "tests focus on succinct code and do not need to tick all the boxes"
)]
mod tests {
    use super::*;
    use crate::Reusable;

    #[derive(Default)]
    struct Unit;

    impl Reusable for Unit {
        fn reset_for_reuse(&mut self) {}
    }

    #[test]
    fn len_tracks_progress() {
        let mut pool = ReusePool::<Unit>::with_default(4);
        _ = pool.dequeue_first_available();

        let mut available = pool.available_elements();
        assert_eq!(available.len(), 3);

        _ = available.next();
        assert_eq!(available.len(), 2);

        _ = available.next();
        _ = available.next();
        assert_eq!(available.len(), 0);
        assert!(available.next().is_none());
        assert!(available.next().is_none());
    }

    #[test]
    fn empty_list_yields_nothing() {
        let pool = ReusePool::<Unit>::with_default(2);

        assert_eq!(pool.unavailable_elements().len(), 0);
        assert!(pool.unavailable_elements().next().is_none());
    }
}
