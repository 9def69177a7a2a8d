//! The open set of an A* search.
//!
//! Entries are kept in a min-heap keyed by `(f, seq)`. Lower `f` pops
//! first; equal `f` pops in insertion order. The cell index is carried
//! along but never compared, so expansion order does not depend on how
//! cells happen to be numbered.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy)]
struct Entry {
    f: usize,
    /// Monotonic insertion counter. Lower = pushed earlier = popped first.
    seq: u64,
    idx: usize,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Natural order; the heap wraps entries in `Reverse`.
        self.f.cmp(&other.f).then(self.seq.cmp(&other.seq))
    }
}

/// Priority queue of cell indices with O(1) membership checks.
#[derive(Debug)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Reverse<Entry>>,
    queued: Vec<bool>,
    seq: u64,
}

impl Frontier {
    /// An empty frontier able to hold indices below `len`.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            queued: vec![false; len],
            seq: 0,
        }
    }

    /// Enqueue `idx` with priority `f`. The first push gets sequence 0,
    /// every later push the next counter value.
    pub(crate) fn push(&mut self, idx: usize, f: usize) {
        let seq = self.seq;
        self.seq += 1;
        self.queued[idx] = true;
        self.heap.push(Reverse(Entry { f, seq, idx }));
    }

    /// Dequeue the index with the lowest `(f, seq)`.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        let Reverse(entry) = self.heap.pop()?;
        self.queued[entry.idx] = false;
        Some(entry.idx)
    }

    #[inline]
    pub(crate) fn contains(&self, idx: usize) -> bool {
        self.queued[idx]
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
