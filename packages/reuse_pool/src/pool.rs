use std::any::type_name;
use std::sync::atomic::{self, AtomicU64};

use tracing::{debug, trace};

use crate::{Elements, Key, ReusePoolBuilder, Reusable};

/// Every pool gets a unique ID, which it stamps into the keys it hands out. This is how we
/// detect keys from one pool being used with another pool.
static NEXT_POOL_ID: AtomicU64 = AtomicU64::new(0);

/// A fixed-capacity pool of elements that are handed out and returned without any allocation.
///
/// All elements are created when the pool is created and live as long as the pool. Each element
/// is in exactly one of two lists:
///
/// * The *available* list holds elements that may be handed out. Elements returned via
///   [`enqueue()`][Self::enqueue] go to the front of this list, so the most recently returned
///   element is the next one to be handed out.
/// * The *unavailable* list holds elements that are in use. Elements handed out go to the back
///   of this list, so the front of the list is always the element that has been in use the
///   longest.
///
/// Both lists are doubly linked through the slots of a single backing array, which allows an
/// element to be moved between the lists from any position in O(1).
///
/// # Example
///
/// ```rust
/// use reuse_pool::{ReusePool, Reusable};
///
/// #[derive(Default)]
/// struct Spark(u8);
///
/// impl Reusable for Spark {
///     fn reset_for_reuse(&mut self) {
///         self.0 = 0;
///     }
/// }
///
/// let mut pool = ReusePool::new(3, Spark::default);
///
/// let key = pool.dequeue_first_available().unwrap();
/// pool.get_mut(key).0 = 200;
///
/// assert_eq!(pool.number_of_unavailable(), 1);
/// assert_eq!(pool.unavailable_elements().map(|(_, spark)| spark.0).sum::<u8>(), 200);
///
/// pool.enqueue(key);
/// assert_eq!(pool.number_of_available(), 3);
/// ```
///
/// # Thread safety
///
/// The pool can be moved between threads if `T` can. All mutation goes through `&mut self`, so
/// the pool cannot be modified from multiple threads at the same time without the caller adding
/// synchronization.
#[derive(Debug)]
pub struct ReusePool<T> {
    id: u64,

    /// The backing storage. Its length is the capacity of the pool and never changes.
    slots: Box<[Slot<T>]>,

    available: List,
    unavailable: List,
}

#[derive(Debug)]
struct Slot<T> {
    element: T,

    /// Which of the two lists the slot is currently linked into.
    membership: Membership,

    /// Links to the neighbours in whichever list the slot is currently linked into.
    previous: Option<usize>,
    next: Option<usize>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Membership {
    Available,
    Unavailable,
}

/// The ends of one of the intrusive lists, plus its length so we can report counts in O(1).
#[derive(Clone, Copy, Debug, Default)]
struct List {
    first: Option<usize>,
    last: Option<usize>,
    len: usize,
}

impl<T> ReusePool<T> {
    /// Creates a pool of `capacity` elements, each created by calling `factory`.
    ///
    /// All elements start out available, in the order in which they were created.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reuse_pool::{ReusePool, Reusable};
    ///
    /// struct Slot(Vec<u8>);
    ///
    /// impl Reusable for Slot {
    ///     fn reset_for_reuse(&mut self) {
    ///         self.0.clear();
    ///     }
    /// }
    ///
    /// let pool = ReusePool::new(16, || Slot(Vec::with_capacity(1024)));
    ///
    /// assert_eq!(pool.capacity(), 16);
    /// assert_eq!(pool.number_of_available(), 16);
    /// ```
    #[must_use]
    pub fn new(capacity: usize, mut factory: impl FnMut() -> T) -> Self {
        assert!(
            capacity > 0,
            "ReusePool of {} must have non-zero capacity",
            type_name::<T>()
        );

        let slots = (0..capacity)
            .map(|index| Slot {
                element: factory(),
                membership: Membership::Available,
                previous: index.checked_sub(1),
                next: index.checked_add(1).filter(|next| *next < capacity),
            })
            .collect::<Box<[_]>>();

        let id = NEXT_POOL_ID.fetch_add(1, atomic::Ordering::Relaxed);

        debug!(
            pool_id = id,
            capacity,
            element_type = type_name::<T>(),
            "created reuse pool"
        );

        Self {
            id,
            slots,
            available: List {
                first: Some(0),
                last: capacity.checked_sub(1),
                len: capacity,
            },
            unavailable: List::default(),
        }
    }

    /// Starts building a new [`ReusePool`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use reuse_pool::{ReusePool, Reusable};
    ///
    /// #[derive(Default)]
    /// struct Item;
    ///
    /// impl Reusable for Item {
    ///     fn reset_for_reuse(&mut self) {}
    /// }
    ///
    /// let pool = ReusePool::<Item>::builder().capacity(8).build();
    /// assert_eq!(pool.capacity(), 8);
    /// ```
    pub fn builder() -> ReusePoolBuilder<T> {
        ReusePoolBuilder::new()
    }

    /// The total number of elements in the pool, whether available or not.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The number of elements that can be handed out without evicting an element in use.
    #[must_use]
    #[cfg_attr(test, mutants::skip)] // Cross-checked by the list traversal in integrity_check().
    pub fn number_of_available(&self) -> usize {
        self.available.len
    }

    /// The number of elements that are currently in use.
    #[must_use]
    #[cfg_attr(test, mutants::skip)] // Cross-checked by the list traversal in integrity_check().
    pub fn number_of_unavailable(&self) -> usize {
        self.unavailable.len
    }

    /// Whether the element named by `key` is currently available (i.e. not in use).
    ///
    /// # Panics
    ///
    /// Panics if the key was created by a different pool.
    #[must_use]
    pub fn is_available(&self, key: Key) -> bool {
        self.slot(self.index_of(key)).membership == Membership::Available
    }

    /// Returns a shared reference to the element named by `key`.
    ///
    /// This works for available elements too, though their contents are meaningless until they
    /// are handed out again.
    ///
    /// # Panics
    ///
    /// Panics if the key was created by a different pool.
    #[must_use]
    pub fn get(&self, key: Key) -> &T {
        &self.slot(self.index_of(key)).element
    }

    /// Returns an exclusive reference to the element named by `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key was created by a different pool.
    #[must_use]
    pub fn get_mut(&mut self, key: Key) -> &mut T {
        let index = self.index_of(key);
        &mut self.slot_mut(index).element
    }

    /// The key of the element that has been in use the longest, if any element is in use.
    ///
    /// Together with [`next()`][Self::next], this can be used as a cursor that allows the
    /// elements to be modified or enqueued while walking the list:
    ///
    /// ```rust
    /// use reuse_pool::{ReusePool, Reusable};
    ///
    /// #[derive(Default)]
    /// struct Timer(u32);
    ///
    /// impl Reusable for Timer {
    ///     fn reset_for_reuse(&mut self) {
    ///         self.0 = 0;
    ///     }
    /// }
    ///
    /// let mut pool = ReusePool::<Timer>::with_default(4);
    ///
    /// for ticks in [1, 0, 2] {
    ///     let key = pool.dequeue_first_available().unwrap();
    ///     pool.get_mut(key).0 = ticks;
    /// }
    ///
    /// let mut cursor = pool.first_unavailable();
    ///
    /// while let Some(key) = cursor {
    ///     // Capture the successor before we potentially unlink the current element.
    ///     cursor = pool.next(key);
    ///
    ///     if pool.get(key).0 == 0 {
    ///         pool.enqueue(key);
    ///     }
    /// }
    ///
    /// assert_eq!(pool.number_of_unavailable(), 2);
    /// ```
    #[must_use]
    pub fn first_unavailable(&self) -> Option<Key> {
        self.unavailable.first.map(|index| self.key(index))
    }

    /// The key of the element that will be handed out next, if any element is available.
    #[must_use]
    pub fn first_available(&self) -> Option<Key> {
        self.available.first.map(|index| self.key(index))
    }

    /// The key of the element after `key` in whichever list `key` currently belongs to.
    ///
    /// # Panics
    ///
    /// Panics if the key was created by a different pool.
    #[must_use]
    pub fn next(&self, key: Key) -> Option<Key> {
        self.slot(self.index_of(key))
            .next
            .map(|index| self.key(index))
    }

    /// Iterates over the available elements, starting with the one that will be handed out next.
    #[must_use]
    pub fn available_elements(&self) -> Elements<'_, T> {
        Elements::new(self, self.available.first, self.available.len)
    }

    /// Iterates over the elements in use, starting with the one that has been in use the longest.
    #[must_use]
    pub fn unavailable_elements(&self) -> Elements<'_, T> {
        Elements::new(self, self.unavailable.first, self.unavailable.len)
    }

    /// Returns the element at `index` together with the index of its successor. Used by
    /// [`Elements`] to walk a list.
    pub(crate) fn element_and_next(&self, index: usize) -> (Key, &T, Option<usize>) {
        let slot = self.slot(index);
        (self.key(index), &slot.element, slot.next)
    }

    /// Moves an element that is in use to the front of the available list, from whatever
    /// position it held in the list of elements in use.
    ///
    /// # Panics
    ///
    /// Panics if the key was created by a different pool or if the element is already available.
    /// Either indicates a bug in the caller (a foreign key or a double enqueue).
    pub fn enqueue(&mut self, key: Key) {
        let index = self.index_of(key);

        assert!(
            self.slot(index).membership == Membership::Unavailable,
            "enqueue({index}) element was already available in pool of {}",
            type_name::<T>()
        );

        self.unlink(index);
        self.push_front(Membership::Available, index);
    }

    #[must_use]
    fn key(&self, index: usize) -> Key {
        Key::new(self.id, index)
    }

    #[must_use]
    fn index_of(&self, key: Key) -> usize {
        assert!(
            key.pool_id() == self.id,
            "key from pool {} used with pool {} of {}",
            key.pool_id(),
            self.id,
            type_name::<T>()
        );

        key.index()
    }

    fn slot(&self, index: usize) -> &Slot<T> {
        self.slots.get(index).unwrap_or_else(|| {
            panic!(
                "slot {index} index out of bounds in pool of {}",
                type_name::<T>()
            )
        })
    }

    fn slot_mut(&mut self, index: usize) -> &mut Slot<T> {
        self.slots.get_mut(index).unwrap_or_else(|| {
            panic!(
                "slot {index} index out of bounds in pool of {}",
                type_name::<T>()
            )
        })
    }

    fn list_mut(&mut self, membership: Membership) -> &mut List {
        match membership {
            Membership::Available => &mut self.available,
            Membership::Unavailable => &mut self.unavailable,
        }
    }

    /// Removes the slot from whichever list it is in, stitching its neighbours together.
    /// The slot keeps its membership flag until it is pushed into another list.
    fn unlink(&mut self, index: usize) {
        let (membership, previous, next) = {
            let slot = self.slot(index);
            (slot.membership, slot.previous, slot.next)
        };

        match previous {
            Some(previous) => self.slot_mut(previous).next = next,
            None => self.list_mut(membership).first = next,
        }

        match next {
            Some(next) => self.slot_mut(next).previous = previous,
            None => self.list_mut(membership).last = previous,
        }

        let list = self.list_mut(membership);
        list.len = list
            .len
            .checked_sub(1)
            .expect("the slot was linked into this list, so the list cannot be empty");

        let slot = self.slot_mut(index);
        slot.previous = None;
        slot.next = None;
    }

    /// Links an unlinked slot in as the new first element of the list.
    fn push_front(&mut self, membership: Membership, index: usize) {
        let first = self.list_mut(membership).first;

        {
            let slot = self.slot_mut(index);
            slot.membership = membership;
            slot.previous = None;
            slot.next = first;
        }

        match first {
            Some(first) => self.slot_mut(first).previous = Some(index),
            None => self.list_mut(membership).last = Some(index),
        }

        let list = self.list_mut(membership);
        list.first = Some(index);
        list.len = list
            .len
            .checked_add(1)
            .expect("a list cannot be longer than the fixed number of slots");
    }

    /// Links an unlinked slot in as the new last element of the list.
    fn push_back(&mut self, membership: Membership, index: usize) {
        let last = self.list_mut(membership).last;

        {
            let slot = self.slot_mut(index);
            slot.membership = membership;
            slot.previous = last;
            slot.next = None;
        }

        match last {
            Some(last) => self.slot_mut(last).next = Some(index),
            None => self.list_mut(membership).first = Some(index),
        }

        let list = self.list_mut(membership);
        list.last = Some(index);
        list.len = list
            .len
            .checked_add(1)
            .expect("a list cannot be longer than the fixed number of slots");
    }

    #[cfg_attr(test, mutants::skip)] // This is essentially test logic, mutation is meaningless.
    #[cfg(test)]
    pub(crate) fn integrity_check(&self) {
        let mut seen = vec![false; self.capacity()];

        for (membership, list) in [
            (Membership::Available, self.available),
            (Membership::Unavailable, self.unavailable),
        ] {
            let mut previous = None;
            let mut cursor = list.first;
            let mut observed_len: usize = 0;

            while let Some(index) = cursor {
                let slot = self.slot(index);

                let is_seen = seen
                    .get_mut(index)
                    .expect("guarded by slot() succeeding for the same index");
                assert!(
                    !*is_seen,
                    "slot {index} is linked into more than one list or more than once in pool of {}",
                    type_name::<T>()
                );
                *is_seen = true;

                assert_eq!(
                    slot.membership, membership,
                    "slot {index} is linked into the {membership:?} list but flagged as {:?}",
                    slot.membership
                );
                assert_eq!(
                    slot.previous, previous,
                    "slot {index} has a back link that does not match its predecessor"
                );

                observed_len = observed_len
                    .checked_add(1)
                    .expect("guarded by the seen check, which bounds the walk to the capacity");
                previous = Some(index);
                cursor = slot.next;
            }

            assert_eq!(
                list.last, previous,
                "the {membership:?} list ends at a slot other than its recorded last slot"
            );
            assert_eq!(
                list.len, observed_len,
                "the {membership:?} list length does not match its traversal"
            );
        }

        assert!(
            seen.iter().all(|seen| *seen),
            "some slots are not linked into either list"
        );
        assert_eq!(
            self.available
                .len
                .checked_add(self.unavailable.len)
                .expect("guarded by each list length matching its bounded traversal"),
            self.capacity(),
            "list lengths do not add up to the capacity"
        );
    }
}

impl<T: Reusable> ReusePool<T> {
    /// Hands out the first available element, which is the one most recently enqueued.
    ///
    /// The element is moved to the back of the list of elements in use and
    /// [`Reusable::reset_for_reuse()`] is called on it before its key is returned.
    ///
    /// Returns `None` if every element is in use.
    #[must_use]
    pub fn dequeue_first_available(&mut self) -> Option<Key> {
        let index = self.available.first?;

        self.unlink(index);
        self.push_back(Membership::Unavailable, index);

        self.slot_mut(index).element.reset_for_reuse();

        Some(self.key(index))
    }

    /// Recycles the element that has been in use the longest.
    ///
    /// The element is reset via [`Reusable::reset_for_reuse()`] and moved to the back of the list
    /// of elements in use, exactly as if it had been enqueued and dequeued again. The number of
    /// elements in use does not change.
    ///
    /// Returns `None` if no element is in use.
    #[must_use]
    pub fn dequeue_first_unavailable(&mut self) -> Option<Key> {
        let oldest = self.first_unavailable()?;

        trace!(
            pool_id = self.id,
            index = oldest.index(),
            "recycling oldest element in use"
        );

        self.enqueue(oldest);

        let key = self
            .dequeue_first_available()
            .expect("we just enqueued an element so the available list cannot be empty");

        debug_assert_eq!(
            key, oldest,
            "enqueue() pushes to the front, so the same element must come back out"
        );

        Some(key)
    }
}

impl<T: Default> ReusePool<T> {
    /// Creates a pool of `capacity` default-initialized elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn with_default(capacity: usize) -> Self {
        Self::new(capacity, T::default)
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
    use std::cell::Cell;
    use std::rc::Rc;

    use static_assertions::{assert_impl_all, assert_not_impl_any};

    use super::*;

    assert_impl_all!(ReusePool<u32>: Send, Sync, std::fmt::Debug);
    assert_not_impl_any!(ReusePool<Rc<u32>>: Send);

    #[derive(Debug, Default)]
    struct Number {
        value: usize,
    }

    impl Reusable for Number {
        fn reset_for_reuse(&mut self) {
            self.value = 0;
        }
    }

    /// Dequeues all elements, numbering them in the order they were handed out.
    fn numbered_pool(capacity: usize) -> (ReusePool<Number>, Vec<Key>) {
        let mut pool = ReusePool::<Number>::with_default(capacity);

        let keys = (0..capacity)
            .map(|value| {
                let key = pool.dequeue_first_available().unwrap();
                pool.get_mut(key).value = value;
                key
            })
            .collect();

        (pool, keys)
    }

    fn available_values(pool: &ReusePool<Number>) -> Vec<usize> {
        pool.available_elements()
            .map(|(_, number)| number.value)
            .collect()
    }

    fn unavailable_values(pool: &ReusePool<Number>) -> Vec<usize> {
        pool.unavailable_elements()
            .map(|(_, number)| number.value)
            .collect()
    }

    #[test]
    fn smoke_test() {
        let mut pool = ReusePool::<Number>::with_default(3);

        assert_eq!(pool.capacity(), 3);
        assert_eq!(pool.number_of_available(), 3);
        assert_eq!(pool.number_of_unavailable(), 0);
        pool.integrity_check();

        let a = pool.dequeue_first_available().unwrap();
        let b = pool.dequeue_first_available().unwrap();

        assert_eq!(pool.number_of_available(), 1);
        assert_eq!(pool.number_of_unavailable(), 2);
        assert!(!pool.is_available(a));
        assert!(!pool.is_available(b));
        pool.integrity_check();

        pool.enqueue(a);

        assert!(pool.is_available(a));
        assert_eq!(pool.number_of_available(), 2);
        assert_eq!(pool.number_of_unavailable(), 1);
        pool.integrity_check();
    }

    #[test]
    fn initial_available_order_is_creation_order() {
        let mut next_value = 0;
        let pool = ReusePool::new(4, || {
            next_value += 1;
            Number { value: next_value }
        });

        assert_eq!(available_values(&pool), vec![1, 2, 3, 4]);
        assert_eq!(
            pool.available_elements()
                .map(|(key, _)| key.index())
                .collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
        assert_eq!(pool.unavailable_elements().count(), 0);
    }

    #[test]
    fn dequeue_when_exhausted_returns_none() {
        let (mut pool, _) = numbered_pool(2);

        assert!(pool.dequeue_first_available().is_none());
        assert!(pool.first_available().is_none());
        pool.integrity_check();
    }

    #[test]
    fn dequeue_unavailable_when_nothing_in_use_returns_none() {
        let mut pool = ReusePool::<Number>::with_default(2);

        assert!(pool.dequeue_first_unavailable().is_none());
        assert_eq!(pool.number_of_available(), 2);
        pool.integrity_check();
    }

    #[test]
    fn unavailable_elements_are_in_dequeue_order() {
        let (pool, _) = numbered_pool(50);

        assert_eq!(unavailable_values(&pool), (0..50).collect::<Vec<_>>());
        assert_eq!(pool.available_elements().count(), 0);
        pool.integrity_check();
    }

    #[test]
    fn enqueued_elements_are_dequeued_last_in_first_out() {
        let (mut pool, keys) = numbered_pool(5);

        pool.enqueue(keys[1]);
        pool.enqueue(keys[3]);
        pool.enqueue(keys[4]);

        assert_eq!(pool.dequeue_first_available(), Some(keys[4]));
        assert_eq!(pool.dequeue_first_available(), Some(keys[3]));
        assert_eq!(pool.dequeue_first_available(), Some(keys[1]));
        assert_eq!(pool.dequeue_first_available(), None);
        pool.integrity_check();
    }

    #[test]
    fn dequeue_unavailable_returns_oldest_first() {
        let (mut pool, keys) = numbered_pool(4);

        for expected in &keys {
            assert_eq!(pool.dequeue_first_unavailable(), Some(*expected));
            pool.integrity_check();
        }

        // After a full rotation the order is the same as it started out.
        assert_eq!(
            pool.unavailable_elements()
                .map(|(key, _)| key)
                .collect::<Vec<_>>(),
            keys
        );
    }

    #[test]
    fn mid_list_removal_patches_neighbours() {
        let (mut pool, _) = numbered_pool(50);

        let to_enqueue = pool
            .unavailable_elements()
            .filter(|(_, number)| matches!(number.value, 10 | 20 | 30))
            .map(|(key, _)| key)
            .collect::<Vec<_>>();

        for key in to_enqueue {
            pool.enqueue(key);
        }

        pool.integrity_check();

        assert_eq!(available_values(&pool), vec![30, 20, 10]);
        assert_eq!(pool.number_of_available(), 3);
        assert_eq!(pool.number_of_unavailable(), 47);

        let remaining = unavailable_values(&pool);
        assert_eq!(remaining.len(), 47);
        assert_eq!(remaining[9], 9);
        assert_eq!(remaining[10], 11);
        assert_eq!(
            remaining,
            (0..50)
                .filter(|value| !matches!(value, 10 | 20 | 30))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn removal_from_both_ends_updates_first_and_last() {
        let (mut pool, keys) = numbered_pool(50);

        for index in [10, 20, 30] {
            pool.enqueue(keys[index]);
        }

        // Enqueue the first element in use.
        pool.enqueue(keys[0]);
        pool.integrity_check();

        let remaining = unavailable_values(&pool);
        assert_eq!(remaining[0], 1);
        assert_eq!(remaining.len(), 46);
        assert_eq!(available_values(&pool)[0], 0);

        // Enqueue the last element in use.
        pool.enqueue(keys[49]);
        pool.integrity_check();

        let remaining = unavailable_values(&pool);
        assert_eq!(remaining[44], 48);
        assert_eq!(remaining.len(), 45);
        assert_eq!(available_values(&pool), vec![49, 0, 30, 20, 10]);

        // Recycling the oldest element keeps the counts and moves it to the back.
        let recycled = pool.dequeue_first_unavailable().unwrap();
        pool.get_mut(recycled).value = 100;
        pool.integrity_check();

        assert_eq!(pool.number_of_available(), 5);
        assert_eq!(pool.number_of_unavailable(), 45);

        let remaining = unavailable_values(&pool);
        assert_eq!(remaining[0], 2);
        assert_eq!(remaining[1], 3);
        assert_eq!(remaining[44], 100);

        let available = available_values(&pool);
        assert_eq!(available[0], 49);
        assert_eq!(available[4], 10);
    }

    #[test]
    fn enqueue_only_element_empties_unavailable_list() {
        let (mut pool, keys) = numbered_pool(1);

        pool.enqueue(keys[0]);

        assert!(pool.first_unavailable().is_none());
        assert_eq!(pool.first_available(), Some(keys[0]));
        pool.integrity_check();
    }

    #[test]
    fn cursor_allows_enqueue_while_walking() {
        let (mut pool, _) = numbered_pool(10);

        let mut cursor = pool.first_unavailable();

        while let Some(key) = cursor {
            cursor = pool.next(key);

            if pool.get(key).value % 2 == 0 {
                pool.enqueue(key);
            }
        }

        pool.integrity_check();
        assert_eq!(unavailable_values(&pool), vec![1, 3, 5, 7, 9]);
        assert_eq!(available_values(&pool), vec![8, 6, 4, 2, 0]);
    }

    #[test]
    fn reset_is_called_once_per_dequeue() {
        struct Tracked {
            resets: Rc<Cell<usize>>,
        }

        impl Reusable for Tracked {
            fn reset_for_reuse(&mut self) {
                self.resets.set(self.resets.get() + 1);
            }
        }

        let resets = Rc::new(Cell::new(0));
        let mut pool = ReusePool::new(2, || Tracked {
            resets: Rc::clone(&resets),
        });

        assert_eq!(resets.get(), 0);

        let a = pool.dequeue_first_available().unwrap();
        assert_eq!(resets.get(), 1);

        _ = pool.dequeue_first_available().unwrap();
        assert_eq!(resets.get(), 2);

        // Recycling the oldest element also resets it, exactly once.
        assert_eq!(pool.dequeue_first_unavailable(), Some(a));
        assert_eq!(resets.get(), 3);

        // Enqueueing does not reset.
        pool.enqueue(a);
        assert_eq!(resets.get(), 3);
    }

    #[test]
    fn recycled_element_is_reset() {
        let (mut pool, keys) = numbered_pool(3);

        assert_eq!(pool.get(keys[0]).value, 0);
        pool.get_mut(keys[0]).value = 77;

        let recycled = pool.dequeue_first_unavailable().unwrap();

        assert_eq!(recycled, keys[0]);
        assert_eq!(pool.get(recycled).value, 0);
    }

    #[test]
    #[should_panic]
    fn double_enqueue_panics() {
        let (mut pool, keys) = numbered_pool(3);

        pool.enqueue(keys[1]);
        pool.enqueue(keys[1]);
    }

    #[test]
    #[should_panic]
    fn enqueue_never_dequeued_panics() {
        let mut pool = ReusePool::<Number>::with_default(3);
        let key = pool.first_available().unwrap();

        pool.enqueue(key);
    }

    #[test]
    #[should_panic]
    fn enqueue_foreign_key_panics() {
        let (_, keys) = numbered_pool(3);
        let (mut other_pool, _) = numbered_pool(3);

        other_pool.enqueue(keys[0]);
    }

    #[test]
    #[should_panic]
    fn get_with_foreign_key_panics() {
        let (_, keys) = numbered_pool(3);
        let other_pool = ReusePool::<Number>::with_default(3);

        _ = other_pool.get(keys[0]);
    }

    #[test]
    #[should_panic]
    fn zero_capacity_is_panic() {
        drop(ReusePool::<Number>::with_default(0));
    }

    #[test]
    fn integrity_check_accepts_full_and_empty_lists() {
        let (mut pool, _) = numbered_pool(4);
        pool.integrity_check();

        while let Some(key) = pool.first_unavailable() {
            pool.enqueue(key);
        }

        pool.integrity_check();
    }

    #[test]
    #[should_panic]
    fn integrity_check_detects_slot_linked_twice() {
        let (mut pool, keys) = numbered_pool(3);

        // Point the last slot back at the first, creating a cycle through the in-use list.
        let last = keys[2].index();
        pool.slots[last].next = Some(keys[0].index());

        pool.integrity_check();
    }

    #[test]
    #[should_panic]
    fn integrity_check_detects_wrong_length() {
        let (mut pool, _) = numbered_pool(3);

        pool.unavailable.len = 2;

        pool.integrity_check();
    }
}
