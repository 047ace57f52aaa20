//! # Lazy Sequences
//!
//! [`LazySequence`] wraps a [`Generate`] source and delivers its elements
//! on demand. Elements exist only while a consumer holds them; the sequence
//! itself stores at most one element of lookahead, filled when a cursor
//! needs to observe the front of the stream.
//!
//! A sequence is single-pass. Once the source reports exhaustion the
//! sequence is permanently empty, and replaying the data means building a
//! fresh sequence from a fresh source.
//!
//! ```rust
//! use pullseq::LazySequence;
//!
//! let mut n = 0u32;
//! let mut seq = LazySequence::new(move || {
//!     n += 1;
//!     if n <= 4 { Some(n * n) } else { None }
//! });
//! assert_eq!(seq.to_vec(), vec![1, 4, 9, 16]);
//! ```

use crate::cursor::Cursor;
use crate::generate::Generate;
use crate::transform::Transform;

/// A single-pass sequence of elements pulled lazily from a generator.
///
/// The sequence owns its generator, and through it whatever resource backs
/// production. Dropping the sequence drops the generator and releases that
/// resource.
pub struct LazySequence<G: Generate> {
    /// The element source.
    generator: G,

    /// Lookahead slot holding an element produced but not yet consumed.
    current: Option<G::Item>,

    /// Set once the generator has reported exhaustion.
    exhausted: bool,
}

impl<G: Generate> LazySequence<G> {
    /// Construct a sequence over a generator.
    ///
    /// No elements are produced until the sequence is first consumed.
    pub fn new(generator: G) -> Self {
        LazySequence {
            generator,
            current: None,
            exhausted: false,
        }
    }

    /// Pull the next element out of the sequence.
    ///
    /// Delivers the pending lookahead element if one exists, otherwise asks
    /// the generator for a fresh one. After the first `None` the sequence is
    /// fused and every later call returns `None`, regardless of how the
    /// generator behaves afterwards.
    pub fn pull(&mut self) -> Option<G::Item> {
        if let Some(item) = self.current.take() {
            return Some(item);
        }
        if self.exhausted {
            return None;
        }
        match self.generator.produce() {
            Some(item) => Some(item),
            None => {
                self.exhausted = true;
                None
            }
        }
    }

    /// Open a cursor positioned at the front of the remaining stream.
    ///
    /// Opening a cursor forces one element of lookahead so the cursor can be
    /// dereferenced. A cursor does not rewind: a second cursor opened after
    /// the first is dropped resumes at the element the first left pending,
    /// not at the start of the data.
    pub fn cursor(&mut self) -> Cursor<'_, G> {
        Cursor::new(self)
    }

    /// Map elements through `f`, consuming this sequence.
    ///
    /// The returned sequence owns this one; elements (including any pending
    /// lookahead element) are pulled and transformed on demand, one per pull.
    pub fn map<F, U>(self, f: F) -> LazySequence<Transform<G, F>>
    where
        F: FnMut(G::Item) -> U,
    {
        LazySequence::new(Transform::new(self, f))
    }

    /// Drain the remaining elements into `sink`, in order.
    ///
    /// Fully exhausts the sequence; a second drain collects nothing.
    pub fn extend_into<C>(&mut self, sink: &mut C)
    where
        C: Extend<G::Item>,
    {
        sink.extend(&mut *self);
    }

    /// Drain the remaining elements into a fresh vector.
    ///
    /// ## Returns
    /// Every element not yet consumed, including a pending lookahead
    /// element, in production order.
    pub fn to_vec(&mut self) -> Vec<G::Item> {
        let mut out = Vec::new();
        self.extend_into(&mut out);
        out
    }

    /// Whether the sequence has permanently ended.
    ///
    /// Exhaustion is observed, never predicted: this reports `true` only
    /// after a pull or cursor has actually seen the generator run dry.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Borrow the underlying generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Mutably borrow the underlying generator.
    ///
    /// The lookahead slot is unaffected; an element already produced stays
    /// pending even if the generator is reconfigured underneath it.
    pub fn generator_mut(&mut self) -> &mut G {
        &mut self.generator
    }

    /// Fill the lookahead slot if it is empty and the source still has
    /// elements. Reports whether an element is pending afterwards.
    pub(crate) fn ensure_current(&mut self) -> bool {
        if self.current.is_none() && !self.exhausted {
            self.current = self.generator.produce();
            if self.current.is_none() {
                self.exhausted = true;
            }
        }
        self.current.is_some()
    }

    pub(crate) fn has_current(&self) -> bool {
        self.current.is_some()
    }

    pub(crate) fn current_ref(&self) -> Option<&G::Item> {
        self.current.as_ref()
    }

    /// Discard the pending element and pull the next one into the slot.
    pub(crate) fn step(&mut self) {
        self.current = None;
        self.ensure_current();
    }
}

/// Draining iterator over a mutably borrowed [`LazySequence`].
///
/// Yielded elements are moved out of the sequence; the borrow ends with the
/// loop, leaving the sequence positioned after the last yielded element.
pub struct PullIter<'a, G: Generate> {
    seq: &'a mut LazySequence<G>,
}

impl<G: Generate> Iterator for PullIter<'_, G> {
    type Item = G::Item;

    fn next(&mut self) -> Option<G::Item> {
        self.seq.pull()
    }
}

impl<'a, G: Generate> IntoIterator for &'a mut LazySequence<G> {
    type Item = G::Item;
    type IntoIter = PullIter<'a, G>;

    fn into_iter(self) -> PullIter<'a, G> {
        PullIter { seq: self }
    }
}
