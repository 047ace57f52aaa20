//! # Element Transforms
//!
//! [`Transform`] is the generator behind
//! [`LazySequence::map`](crate::LazySequence::map): it owns a source
//! sequence and a mapping function, and produces one mapped element per
//! pull. Nothing runs ahead of the consumer; an element is mapped at the
//! moment it is pulled, exactly once.
//!
//! Ownership is strict. Mapping consumes the source sequence, leaving the
//! transform as its only owner; dropping the mapped sequence drops the
//! source and whatever resource backs it. The source stays reachable by
//! borrow, through [`Transform::source`], for inspecting generator state
//! parked below the map.

use crate::generate::Generate;
use crate::sequence::LazySequence;

/// Generator that maps elements pulled from an owned source sequence.
///
/// Built by [`LazySequence::map`](crate::LazySequence::map).
pub struct Transform<G: Generate, F> {
    source: LazySequence<G>,
    f: F,
}

impl<G: Generate, F> Transform<G, F> {
    pub(crate) fn new(source: LazySequence<G>, f: F) -> Self {
        Transform { source, f }
    }

    /// Borrow the source sequence feeding this transform.
    ///
    /// This is how state parked on an inner generator, like a line source
    /// read fault, stays reachable from the mapped sequence.
    pub fn source(&self) -> &LazySequence<G> {
        &self.source
    }

    /// Mutably borrow the source sequence feeding this transform.
    ///
    /// Elements pulled through this borrow bypass the mapping function.
    pub fn source_mut(&mut self) -> &mut LazySequence<G> {
        &mut self.source
    }
}

impl<G, F, U> Generate for Transform<G, F>
where
    G: Generate,
    F: FnMut(G::Item) -> U,
{
    type Item = U;

    fn produce(&mut self) -> Option<U> {
        self.source.pull().map(&mut self.f)
    }
}
