//! Priority frontier shared by the best-first searches.
//!
//! Entries are kept in a min-heap. Lower priorities are popped first; ties
//! go to the index that sat earlier in the queue, where an index whose
//! priority improved keeps its old place until the next extraction. The
//! superseded heap entry is dropped when it surfaces.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// An `f64` priority with a total order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Cost(pub(crate) f64);

impl Eq for Cost {}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One priority an index held, and the pop count when it was set.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Step<K> {
    key: K,
    epoch: u32,
}

/// Where an index sits in the queue: its priorities newest first, then the
/// order in which it was first queued.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Rank<K> {
    steps: Vec<Step<K>>,
    seq: u64,
}

impl<K: Ord> Ord for Rank<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut a = self.steps.iter();
        let mut b = other.steps.iter();
        loop {
            match (a.next(), b.next()) {
                (Some(x), Some(y)) => {
                    let o = x.key.cmp(&y.key).then(x.epoch.cmp(&y.epoch));
                    if o != Ordering::Equal {
                        return o;
                    }
                }
                // Before it was queued an index ranks behind every key.
                (None, Some(_)) => return Ordering::Greater,
                (Some(_), None) => return Ordering::Less,
                (None, None) => return self.seq.cmp(&other.seq),
            }
        }
    }
}

impl<K: Ord> PartialOrd for Rank<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry<K> {
    rank: Rank<K>,
    idx: usize,
}

impl<K: Ord> Ord for Entry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl<K: Ord> PartialOrd for Entry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A min-priority queue of node indices.
///
/// Pops in the order a list would give if it were stably re-sorted by
/// priority before every extraction, with new indices appended at the end
/// and improved ones left where they were. Priorities of a queued index may
/// only decrease.
pub(crate) struct Frontier<K> {
    heap: BinaryHeap<Reverse<Entry<K>>>,
    /// Priorities each index has held, oldest first.
    history: Vec<Vec<Step<K>>>,
    first_seq: Vec<u64>,
    seq: u64,
    epoch: u32,
}

impl<K: Ord + Clone> Frontier<K> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            history: Vec::new(),
            first_seq: Vec::new(),
            seq: 0,
            epoch: 0,
        }
    }

    /// Queue `idx` at priority `key`, or lower its priority if already
    /// queued. Re-queuing at an unchanged priority is a no-op.
    pub(crate) fn push(&mut self, idx: usize, key: K) {
        if idx >= self.history.len() {
            self.history.resize_with(idx + 1, Vec::new);
            self.first_seq.resize(idx + 1, 0);
        }
        let steps = &mut self.history[idx];
        if steps.last().is_some_and(|s| s.key == key) {
            return;
        }
        if steps.is_empty() {
            self.first_seq[idx] = self.seq;
            self.seq += 1;
        }
        steps.push(Step {
            key,
            epoch: self.epoch,
        });
        let rank = Rank {
            steps: steps.iter().rev().cloned().collect(),
            seq: self.first_seq[idx],
        };
        self.heap.push(Reverse(Entry { rank, idx }));
    }

    /// Remove the index that comes first. Each queued index is returned once.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        while let Some(Reverse(e)) = self.heap.pop() {
            if e.rank.steps.len() != self.history[e.idx].len() {
                // Superseded by a later, lower priority.
                continue;
            }
            self.epoch += 1;
            return Some(e.idx);
        }
        None
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
