//! Open set for the expansion loop.
//!
//! A min-heap keyed by `(priority, seq)`. Ties pop in insertion order, so
//! step sequences are reproducible. Duplicate entries for the same cell are
//! allowed; the search skips the stale ones when they surface.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) priority: i32,
    /// Insertion counter, lower = pushed earlier.
    pub(crate) seq: u64,
    pub(crate) idx: usize,
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Natural order; wrapped in Reverse for the max-heap.
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Reverse<Entry>>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, priority: i32, idx: usize) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { priority, seq, idx }));
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop().map(|Reverse(e)| e)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowest_priority_first() {
        let mut f = Frontier::new();
        f.push(5, 0);
        f.push(1, 1);
        f.push(3, 2);
        let order: Vec<usize> = std::iter::from_fn(|| f.pop()).map(|e| e.idx).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn ties_are_fifo() {
        let mut f = Frontier::new();
        f.push(2, 9);
        f.push(2, 4);
        f.push(1, 7);
        f.push(2, 1);
        assert_eq!(f.len(), 4);
        let order: Vec<usize> = std::iter::from_fn(|| f.pop()).map(|e| e.idx).collect();
        assert_eq!(order, vec![7, 9, 4, 1]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut f = Frontier::new();
        f.push(4, 3);
        f.push(2, 3);
        assert_eq!(f.len(), 2);
        assert_eq!(f.pop().map(|e| e.priority), Some(2));
        assert_eq!(f.pop().map(|e| e.priority), Some(4));
        assert!(f.pop().is_none());
    }
}
