//! # `pullseq` Lazy Pull Sequences
//!
//! Single-pass sequences over generator-produced elements, pulled one at a
//! time as the consumer asks for them.
//!
//! A [`LazySequence`] owns a [`Generate`] source and whatever resource
//! backs it. Elements are produced on demand, buffered at most one deep,
//! and moved out to the consumer as they are pulled. Once the source runs
//! dry the sequence is permanently exhausted; replaying data means building
//! a fresh sequence from a fresh source.
//!
//! See:
//! * [`generate`] for the [`Generate`] contract;
//!   any `FnMut() -> Option<T>` closure qualifies.
//! * [`sequence`] for [`LazySequence`] pulling, mapping, and draining.
//! * [`cursor`] for [`Cursor`], a borrowed read position with an end
//!   sentinel.
//! * [`lines`](mod@lines) for [`LineSource`] and the [`lines()`] /
//!   [`open_lines()`] file and reader factories.
//!
//! ```rust
//! use pullseq::lines;
//!
//! let text = "one potato\ntwo potato\n";
//! let mut lengths = lines(text.as_bytes()).map(|line| line.len());
//!
//! assert_eq!(lengths.pull(), Some(10));
//! assert_eq!(lengths.pull(), Some(10));
//! assert_eq!(lengths.pull(), None);
//! ```
#![warn(missing_docs, unused)]

pub mod cursor;
pub mod errors;
pub mod generate;
pub mod lines;
pub mod sequence;
pub mod transform;

#[doc(inline)]
pub use crate::{
    cursor::Cursor,
    errors::{PullseqError, PullseqResult},
    generate::Generate,
    lines::{LineSequence, LineSource, lines, open_lines},
    sequence::{LazySequence, PullIter},
    transform::Transform,
};
