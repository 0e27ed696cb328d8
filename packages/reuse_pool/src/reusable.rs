/// An element that can be managed by a [`ReusePool`][crate::ReusePool].
///
/// The pool calls [`reset_for_reuse()`][Self::reset_for_reuse] every time it hands out the
/// element, immediately before returning its key to the caller. This includes elements that are
/// recycled through [`dequeue_first_unavailable()`][crate::ReusePool::dequeue_first_unavailable]
/// while still in use.
///
/// # Example
///
/// ```rust
/// use reuse_pool::Reusable;
///
/// struct Counter {
///     value: u64,
/// }
///
/// impl Reusable for Counter {
///     fn reset_for_reuse(&mut self) {
///         self.value = 0;
///     }
/// }
/// ```
pub trait Reusable {
    /// Prepares the element to be handed out again.
    fn reset_for_reuse(&mut self);
}
