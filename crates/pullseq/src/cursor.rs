//! # Sequence Cursors
//!
//! [`Cursor`] is a borrowed read position at the front of a
//! [`LazySequence`](crate::LazySequence). It observes the pending element
//! without consuming it, and advancing it consumes elements from the
//! sequence itself: progress made through a cursor is permanent, and a
//! later cursor over the same sequence resumes where the earlier one
//! stopped.
//!
//! The end of a sequence is a position, not an element. [`Cursor::done`]
//! builds the detached end sentinel, so consumption loops can compare
//! against it:
//!
//! ```rust
//! use pullseq::{Cursor, LazySequence};
//!
//! let mut n = 0u32;
//! let mut seq = LazySequence::new(move || {
//!     n += 1;
//!     if n <= 3 { Some(n) } else { None }
//! });
//!
//! let mut cur = seq.cursor();
//! let mut total = 0;
//! while cur != Cursor::done() {
//!     total += *cur.current();
//!     cur.advance();
//! }
//! assert_eq!(total, 6);
//! ```

use crate::generate::Generate;
use crate::sequence::LazySequence;

/// A read position at the front of a mutably borrowed [`LazySequence`],
/// or the detached end sentinel.
///
/// Dereferencing or advancing a done cursor is a contract violation and
/// panics.
pub struct Cursor<'a, G: Generate> {
    seq: Option<&'a mut LazySequence<G>>,
}

impl<'a, G: Generate> Cursor<'a, G> {
    /// Open a cursor over a sequence, forcing one element of lookahead so
    /// the front of the stream is observable.
    pub(crate) fn new(seq: &'a mut LazySequence<G>) -> Self {
        seq.ensure_current();
        Cursor { seq: Some(seq) }
    }

    /// The detached end sentinel.
    ///
    /// Every cursor positioned past its last element compares equal to this.
    pub fn done() -> Self {
        Cursor { seq: None }
    }

    /// Whether the cursor is past the last element.
    pub fn is_done(&self) -> bool {
        match &self.seq {
            Some(seq) => !seq.has_current(),
            None => true,
        }
    }

    /// Borrow the element the cursor is positioned at.
    ///
    /// The element stays pending in the sequence; it is consumed by
    /// [`advance`](Cursor::advance), or by the next pull on the sequence
    /// after the cursor is dropped.
    pub fn current(&self) -> &G::Item {
        match self.seq.as_ref().and_then(|seq| seq.current_ref()) {
            Some(item) => item,
            None => panic!("Cursor dereferenced past the end of its sequence"),
        }
    }

    /// Consume the current element and move to the next one.
    ///
    /// Advancing onto the end is fine; the cursor becomes done. Advancing a
    /// cursor that is already done panics.
    pub fn advance(&mut self) {
        match &mut self.seq {
            Some(seq) if seq.has_current() => seq.step(),
            _ => panic!("Cursor advanced past the end of its sequence"),
        }
    }
}

/// Cursors compare by position identity: two done cursors are equal no
/// matter which sequence they came from, and a live cursor equals another
/// only when both read the same sequence.
impl<'b, G: Generate> PartialEq<Cursor<'b, G>> for Cursor<'_, G> {
    fn eq(&self, other: &Cursor<'b, G>) -> bool {
        match (&self.seq, &other.seq) {
            (None, None) => true,
            (Some(seq), None) | (None, Some(seq)) => !seq.has_current(),
            (Some(a), Some(b)) => {
                std::ptr::eq::<LazySequence<G>>(&**a, &**b)
                    || (!a.has_current() && !b.has_current())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> LazySequence<impl FnMut() -> Option<char>> {
        let mut pending = vec!['c', 'b', 'a'];
        LazySequence::new(move || pending.pop())
    }

    #[test]
    fn test_cursor_walks_the_sequence() {
        let mut seq = letters();
        let mut cur = seq.cursor();

        assert_eq!(*cur.current(), 'a');
        cur.advance();
        assert_eq!(*cur.current(), 'b');
        cur.advance();
        assert_eq!(*cur.current(), 'c');
        cur.advance();

        assert!(cur.is_done());
        assert!(cur == Cursor::done());
    }

    #[test]
    fn test_current_does_not_consume() {
        let mut seq = letters();
        let cur = seq.cursor();

        assert_eq!(*cur.current(), 'a');
        assert_eq!(*cur.current(), 'a');
    }

    #[test]
    fn test_reopening_resumes_at_pending_element() {
        let mut seq = letters();

        {
            let mut cur = seq.cursor();
            assert_eq!(*cur.current(), 'a');
            cur.advance();
        }

        // No rewind: the second cursor picks up at 'b', and observing 'b'
        // twice does not consume it twice.
        {
            let cur = seq.cursor();
            assert_eq!(*cur.current(), 'b');
        }
        {
            let cur = seq.cursor();
            assert_eq!(*cur.current(), 'b');
        }

        assert_eq!(seq.to_vec(), vec!['b', 'c']);
    }

    #[test]
    fn test_cursor_over_empty_sequence_is_done() {
        let mut seq = LazySequence::new(|| None::<char>);
        let cur = seq.cursor();

        assert!(cur.is_done());
        assert!(cur == Cursor::done());
    }

    #[test]
    fn test_done_sentinels_are_equal() {
        assert!(Cursor::<fn() -> Option<char>>::done() == Cursor::done());
    }

    #[test]
    fn test_live_cursor_is_not_done() {
        let mut seq = letters();
        let cur = seq.cursor();

        assert!(cur != Cursor::done());
        assert!(Cursor::done() != cur);
    }

    #[test]
    #[should_panic(expected = "dereferenced past the end")]
    fn test_current_past_end_panics() {
        let mut seq = LazySequence::new(|| None::<char>);
        let cur = seq.cursor();
        cur.current();
    }

    #[test]
    #[should_panic(expected = "advanced past the end")]
    fn test_advance_past_end_panics() {
        let mut seq = letters();
        let mut cur = seq.cursor();
        cur.advance();
        cur.advance();
        cur.advance();

        assert!(cur.is_done());
        cur.advance();
    }

    #[test]
    #[should_panic(expected = "dereferenced past the end")]
    fn test_detached_sentinel_panics_on_deref() {
        Cursor::<fn() -> Option<char>>::done().current();
    }
}
