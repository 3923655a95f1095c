//! Priority queues used by the layer search.
//!
//! Distances are ordered with `f32::total_cmp` and ties fall back to the node
//! index, so every queue has a deterministic order.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A node index paired with its distance to the current query.
#[derive(Debug, Clone, Copy)]
pub struct Neighbor {
    pub distance: f32,
    pub id: usize,
}

impl Neighbor {
    pub fn new(id: usize, distance: f32) -> Self {
        Self { distance, id }
    }
}

impl PartialEq for Neighbor {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Neighbor {}

impl PartialOrd for Neighbor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Neighbor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Nodes still to expand, nearest first.
#[derive(Debug, Default)]
pub struct Candidates {
    heap: BinaryHeap<Reverse<Neighbor>>,
}

impl Candidates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, n: Neighbor) {
        self.heap.push(Reverse(n));
    }

    /// Remove and return the nearest candidate.
    pub fn pop_nearest(&mut self) -> Option<Neighbor> {
        self.heap.pop().map(|Reverse(n)| n)
    }
}

/// The running top-`ef` result of a layer search, farthest on top.
#[derive(Debug)]
pub struct Results {
    heap: BinaryHeap<Neighbor>,
    ef: usize,
}

impl Results {
    pub fn new(ef: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            ef,
        }
    }

    /// Insert `n`, evicting the farthest entry if the result grows past `ef`.
    pub fn push(&mut self, n: Neighbor) {
        self.heap.push(n);
        if self.heap.len() > self.ef {
            self.heap.pop();
        }
    }

    pub fn farthest(&self) -> Option<&Neighbor> {
        self.heap.peek()
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.ef
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Consume into a Vec ordered by ascending distance.
    pub fn into_sorted_vec(self) -> Vec<Neighbor> {
        self.heap.into_sorted_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_pop_nearest_first() {
        let mut c = Candidates::new();
        c.push(Neighbor::new(0, 3.0));
        c.push(Neighbor::new(1, 1.0));
        c.push(Neighbor::new(2, 2.0));

        let order: Vec<usize> = std::iter::from_fn(|| c.pop_nearest()).map(|n| n.id).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_results_bounded_by_ef() {
        let mut r = Results::new(2);
        r.push(Neighbor::new(0, 5.0));
        r.push(Neighbor::new(1, 1.0));
        assert!(r.is_full());
        r.push(Neighbor::new(2, 3.0));

        assert_eq!(r.len(), 2);
        assert_eq!(r.farthest().unwrap().id, 2);
        let ids: Vec<usize> = r.into_sorted_vec().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_results_unbounded_ef() {
        let mut r = Results::new(usize::MAX);
        r.push(Neighbor::new(0, 1.0));
        r.push(Neighbor::new(1, 0.5));
        assert!(!r.is_full());
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn test_ties_break_on_id() {
        let mut r = Results::new(10);
        r.push(Neighbor::new(7, 0.5));
        r.push(Neighbor::new(3, 0.5));
        r.push(Neighbor::new(5, 0.5));
        let ids: Vec<usize> = r.into_sorted_vec().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 5, 7]);
    }
}
