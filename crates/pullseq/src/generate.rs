//! # Generator Contract
//!
//! [`Generate`] is the capability a value source implements to back a
//! [`LazySequence`](crate::LazySequence): "attempt to produce the next
//! element." Producers own whatever resource backs production (an open
//! stream, a counter); the resource moves into the sequence with them.
//!
//! Any `FnMut() -> Option<T>` closure is a generator via the blanket impl,
//! so ad-hoc sources need no named type:
//!
//! ```rust
//! use pullseq::LazySequence;
//!
//! let mut n = 0u32;
//! let mut seq = LazySequence::new(move || {
//!     n += 1;
//!     if n <= 3 { Some(n) } else { None }
//! });
//! assert_eq!(seq.to_vec(), vec![1, 2, 3]);
//! ```

/// Trait for pull-based element production.
///
/// Implementations must be monotonic: once `produce` returns `None`, every
/// subsequent call must also return `None`. Sequences additionally fuse, so
/// consumers observe permanent exhaustion even over a source that forgets.
pub trait Generate {
    /// The element type produced.
    type Item;

    /// Attempt to produce the next element.
    ///
    /// ## Returns
    /// * `Some(item)` if an element was produced,
    /// * `None` if the source is exhausted.
    fn produce(&mut self) -> Option<Self::Item>;
}

impl<T, F> Generate for F
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    fn produce(&mut self) -> Option<T> {
        self()
    }
}
