//! Binary min-heap keyed by a caller-chosen priority ordering
//!
//! Used by Dijkstra and A*. Items may be pushed repeatedly with different
//! priorities; consumers discard entries that are stale by the time they are
//! popped (lazy deletion), so no decrease-key operation is offered.

use std::cmp::Ordering;

struct HeapEntry<T, P> {
    item: T,
    priority: P,
    seq: u64,
}

/// Min-heap over `(item, priority)` pairs.
///
/// `F` decides how priorities compare. Entries with equal priority pop in
/// insertion order.
pub struct PriorityQueue<T, P, F = fn(&P, &P) -> Ordering> {
    entries: Vec<HeapEntry<T, P>>,
    next_seq: u64,
    compare: F,
}

impl<T, P: Ord> PriorityQueue<T, P> {
    pub fn new() -> Self {
        Self::with_ordering(<P as Ord>::cmp)
    }
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T, f64> {
    /// Queue ordered by `f64::total_cmp`, for floating-point path costs
    pub fn by_cost() -> Self {
        Self::with_ordering(f64::total_cmp)
    }
}

impl<T, P, F> PriorityQueue<T, P, F>
where
    F: Fn(&P, &P) -> Ordering,
{
    pub fn with_ordering(compare: F) -> Self {
        PriorityQueue {
            entries: Vec::new(),
            next_seq: 0,
            compare,
        }
    }

    /// Insert an item, O(log n)
    pub fn push(&mut self, item: T, priority: P) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(HeapEntry {
            item,
            priority,
            seq,
        });
        self.sift_up(self.entries.len() - 1);
    }

    /// Remove and return the lowest-priority item, O(log n)
    pub fn pop_min(&mut self) -> Option<(T, P)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let entry = self.entries.pop()?;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some((entry.item, entry.priority))
    }

    /// Lowest-priority item without removing it
    pub fn peek(&self) -> Option<(&T, &P)> {
        self.entries.first().map(|e| (&e.item, &e.priority))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn less(&self, a: usize, b: usize) -> bool {
        let (ea, eb) = (&self.entries[a], &self.entries[b]);
        (self.compare)(&ea.priority, &eb.priority)
            .then_with(|| ea.seq.cmp(&eb.seq))
            .is_lt()
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.less(idx, parent) {
                break;
            }
            self.entries.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;
            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.entries.swap(idx, smallest);
            idx = smallest;
        }
    }
}
