//! Min-priority frontier with a deterministic tie-break.
//!
//! `BinaryHeap` is a max-heap, so [`FrontierEntry`] reverses its ordering.
//! Among equal priorities the entry pushed first pops first: every push
//! takes a fresh sequence number and lower sequence numbers win.
//!
//! There is no decrease-key. A vertex whose cost improves is pushed again;
//! the older entry is left in the heap and recognised as stale on pop.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Clone)]
pub(crate) struct FrontierEntry<'g> {
    /// `g` for Dijkstra, `g + h` for A*.
    pub priority: f64,
    /// Best-known cost of `vertex` at push time, for staleness checks.
    pub cost: f64,
    pub vertex: &'g str,
    seq: u64,
}

impl Eq for FrontierEntry<'_> {}

impl PartialEq for FrontierEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for FrontierEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (smaller priority, then older entry, first)
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug)]
pub(crate) struct Frontier<'g> {
    heap: BinaryHeap<FrontierEntry<'g>>,
    next_seq: u64,
}

impl<'g> Frontier<'g> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, vertex: &'g str, cost: f64, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry { priority, cost, vertex, seq });
    }

    pub fn pop(&mut self) -> Option<FrontierEntry<'g>> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
