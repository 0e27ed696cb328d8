use std::any::type_name;
use std::marker::PhantomData;

use crate::ReusePool;

/// Builder for creating an instance of [`ReusePool`].
///
/// The capacity is the only required setting. [`ReusePool::new()`] is equivalent and shorter
/// when you already have a factory at hand.
///
/// # Examples
///
/// ```
/// use reuse_pool::{ReusePool, Reusable};
///
/// struct Ember {
///     heat: f32,
/// }
///
/// impl Reusable for Ember {
///     fn reset_for_reuse(&mut self) {
///         self.heat = 1.0;
///     }
/// }
///
/// let pool = ReusePool::builder()
///     .capacity(64)
///     .build_with(|| Ember { heat: 1.0 });
///
/// assert_eq!(pool.capacity(), 64);
/// ```
#[must_use]
pub struct ReusePoolBuilder<T> {
    capacity: Option<usize>,

    _item: PhantomData<T>,
}

impl<T> std::fmt::Debug for ReusePoolBuilder<T> {
    #[cfg_attr(test, mutants::skip)] // No API contract.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReusePoolBuilder")
            .field("element_type", &format_args!("{}", type_name::<T>()))
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T> ReusePoolBuilder<T> {
    pub(crate) fn new() -> Self {
        Self {
            capacity: None,
            _item: PhantomData,
        }
    }

    /// Sets the number of elements in the pool. This cannot be changed after the pool is built.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Builds the pool, creating each element by calling `factory`.
    ///
    /// # Panics
    ///
    /// Panics if the capacity was not set or is zero.
    #[must_use]
    pub fn build_with(self, factory: impl FnMut() -> T) -> ReusePool<T> {
        let capacity = self.capacity.unwrap_or_else(|| {
            panic!(
                "capacity must be set before building a ReusePool of {}",
                type_name::<T>()
            )
        });

        ReusePool::new(capacity, factory)
    }
}

impl<T: Default> ReusePoolBuilder<T> {
    /// Builds the pool with default-initialized elements.
    ///
    /// # Panics
    ///
    /// Panics if the capacity was not set or is zero.
    #[must_use]
    pub fn build(self) -> ReusePool<T> {
        self.build_with(T::default)
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
    use super::*;

    #[test]
    fn builds_with_requested_capacity() {
        let pool = ReusePool::<u64>::builder().capacity(5).build_with(|| 9);

        assert_eq!(pool.capacity(), 5);
        assert!(pool.available_elements().all(|(_, value)| *value == 9));
    }

    #[test]
    fn debug_output_names_element_type() {
        let builder = ReusePool::<u64>::builder().capacity(3);

        let debug = format!("{builder:?}");

        assert!(debug.contains("u64"));
        assert!(debug.contains('3'));
    }

    #[test]
    #[should_panic]
    fn missing_capacity_is_panic() {
        drop(ReusePool::<u64>::builder().build());
    }
}
