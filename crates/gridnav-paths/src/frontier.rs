use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Open-list entry for the A* frontier.
///
/// `g` is the path cost the cell had when pushed; a later, cheaper push for
/// the same cell makes this entry stale.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Entry {
    pub(crate) priority: f64,
    pub(crate) seq: u64,
    pub(crate) idx: usize,
    pub(crate) g: i32,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first,
        // then the earliest push among equal priorities.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue with insertion-order tie-breaking.
///
/// Outdated entries are never removed; callers discard them on pop.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, priority: f64, idx: usize, g: i32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            idx,
            g,
        });
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    /// Total number of pushes so far.
    pub(crate) fn pushed(&self) -> u64 {
        self.next_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_priority_first() {
        let mut f = Frontier::new();
        f.push(3.0, 0, 0);
        f.push(1.5, 1, 0);
        f.push(2.0, 2, 0);
        let order: Vec<_> = std::iter::from_fn(|| f.pop()).map(|e| e.idx).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut f = Frontier::new();
        for idx in [7, 3, 9, 1] {
            f.push(4.0, idx, 0);
        }
        f.push(2.0, 5, 0);
        let order: Vec<_> = std::iter::from_fn(|| f.pop()).map(|e| e.idx).collect();
        assert_eq!(order, vec![5, 7, 3, 9, 1]);
        assert_eq!(f.pushed(), 5);
    }
}
