//! Fixed-capacity binary min-heap over a caller comparator.
//!
//! Purpose
//! - Bounded priority ordering (top-K selection such as "nearest lights")
//!   where the capacity is known up front and allocation happens once.
//!
//! Conventions
//! - The root is the minimum under `cmp`; ties are not stable.
//! - Pushing into a full heap is an error (`HeapFull`), never a silent drop.
//! - Single owner: a `MinHeap` is `Send` when its parts are, but push/pop take
//!   `&mut self` and there is no internal locking.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{GeomError, Result};

pub struct MinHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    items: Vec<T>,
    capacity: usize,
    cmp: F,
}

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}
#[inline]
fn left(i: usize) -> usize {
    2 * i + 1
}

impl<T, F> MinHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(capacity: usize, cmp: F) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            cmp,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Insert `item`, sifting it up until its parent is not greater.
    pub fn push(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            return Err(GeomError::HeapFull {
                capacity: self.capacity,
            });
        }
        self.insert(item);
        Ok(())
    }

    /// Remove and return the minimum.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let top = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Swap the root for `item` and restore heap order; returns the old root.
    /// On an empty heap this is a plain push.
    pub fn replace_root(&mut self, item: T) -> Result<Option<T>> {
        if self.items.is_empty() {
            self.push(item)?;
            return Ok(None);
        }
        Ok(Some(self.swap_root(item)))
    }

    /// Drain in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.items.len());
        while let Some(x) = self.pop() {
            out.push(x);
        }
        out
    }

    /// Every parent compares `<=` both children.
    #[doc(hidden)]
    pub fn verify_heap(&self) -> bool {
        (1..self.items.len()).all(|i| (self.cmp)(&self.items[parent(i)], &self.items[i]) != Ordering::Greater)
    }

    /// Caller checked `!is_full()`.
    fn insert(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Caller checked `!is_empty()`.
    fn swap_root(&mut self, item: T) -> T {
        let old = std::mem::replace(&mut self.items[0], item);
        self.sift_down(0);
        old
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let p = parent(pos);
            if (self.cmp)(&self.items[pos], &self.items[p]) == Ordering::Less {
                self.items.swap(pos, p);
                pos = p;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let n = self.items.len();
        loop {
            let l = left(pos);
            if l >= n {
                break;
            }
            let r = l + 1;
            // Smaller child; a lone left child is compared on its own.
            let child = if r < n && (self.cmp)(&self.items[r], &self.items[l]) == Ordering::Less {
                r
            } else {
                l
            };
            if (self.cmp)(&self.items[child], &self.items[pos]) == Ordering::Less {
                self.items.swap(pos, child);
                pos = child;
            } else {
                break;
            }
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for MinHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("capacity", &self.capacity)
            .field("items", &self.items)
            .finish()
    }
}

/// The `k` smallest items under `cmp`, ascending.
///
/// Keeps a `k`-slot heap with the comparator reversed, so the root is the
/// current worst candidate and is replaced whenever a better item arrives.
pub fn nearest_k<T, I, F>(items: I, k: usize, cmp: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T, &T) -> Ordering,
{
    if k == 0 {
        return Vec::new();
    }
    let mut worst_first = MinHeap::new(k, |a: &T, b: &T| cmp(b, a));
    for item in items {
        if !worst_first.is_full() {
            worst_first.insert(item);
        } else if worst_first.peek().is_some_and(|top| cmp(&item, top) == Ordering::Less) {
            // Full with k > 0, so there is a root to evict.
            worst_first.swap_root(item);
        }
    }
    let mut out = worst_first.into_sorted_vec();
    out.reverse();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn drain_checked(mut heap: MinHeap<i32, impl Fn(&i32, &i32) -> Ordering>) -> Vec<i32> {
        let mut out = Vec::new();
        while let Some(v) = heap.pop() {
            assert!(heap.verify_heap());
            out.push(v);
        }
        out
    }

    #[test]
    fn recorded_sequence_pops_sorted() {
        let seq = [
            61, 0, 54, 73, 18, 52, 78, 38, 76, 90, 60, 68, 6, 49, 19, 24, 8, 95, 98, 45, 75, 6, 8, 1, 70, 83, 3,
            15, 2, 2, 19, 75, 13, 74, 58, 93, 64, 94, 37, 43, 3, 31, 58, 76, 11, 29, 66, 78, 40, 77, 78, 15, 21,
            45, 54, 48, 0, 12, 30, 43, 91, 88, 13, 71, 33, 38, 76, 6, 79, 49, 15, 99, 46, 68, 83, 98, 69, 2, 60,
            41, 80, 68, 63, 24, 5, 62, 85, 29, 48, 74, 90, 63, 71, 78, 0, 58, 7, 5, 93, 64,
        ];
        let mut heap = MinHeap::new(seq.len(), |a: &i32, b: &i32| a.cmp(b));
        for v in seq {
            heap.push(v).unwrap();
            assert!(heap.verify_heap());
        }
        assert!(heap.is_full());
        let popped = drain_checked(heap);
        let mut expected = seq.to_vec();
        expected.sort_unstable();
        assert_eq!(popped, expected);
    }

    #[test]
    fn push_into_full_heap_fails() {
        let mut heap = MinHeap::new(2, |a: &i32, b: &i32| a.cmp(b));
        heap.push(3).unwrap();
        heap.push(1).unwrap();
        assert_eq!(heap.push(0), Err(GeomError::HeapFull { capacity: 2 }));
        // State untouched by the rejected push.
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.peek(), Some(&1));
    }

    #[test]
    fn zero_capacity_and_empty() {
        let mut heap = MinHeap::new(0, |a: &i32, b: &i32| a.cmp(b));
        assert!(heap.is_empty() && heap.is_full());
        assert!(heap.pop().is_none());
        assert!(heap.peek().is_none());
        assert!(heap.push(1).is_err());
    }

    #[test]
    fn comparator_defines_minimum() {
        // Reversed comparator: the root is the largest value.
        let mut heap = MinHeap::new(5, |a: &i32, b: &i32| b.cmp(a));
        for v in [4, 9, 1, 7] {
            heap.push(v).unwrap();
        }
        assert_eq!(heap.peek(), Some(&9));
        assert_eq!(heap.into_sorted_vec(), vec![9, 7, 4, 1]);
    }

    #[test]
    fn one_child_sift_down() {
        // After one pop the last internal node has only a left child.
        let mut heap = MinHeap::new(4, |a: &i32, b: &i32| a.cmp(b));
        for v in [1, 5, 2, 3] {
            heap.push(v).unwrap();
        }
        assert_eq!(heap.pop(), Some(1));
        assert!(heap.verify_heap());
        assert_eq!(drain_checked(heap), vec![2, 3, 5]);
    }

    #[test]
    fn nearest_k_selects_smallest() {
        let dists = [5.0, 0.5, 3.0, 9.0, 0.1, 2.0];
        let best = nearest_k(dists, 3, |a: &f64, b: &f64| a.total_cmp(b));
        assert_eq!(best, vec![0.1, 0.5, 2.0]);
        assert_eq!(nearest_k(dists, 10, |a: &f64, b: &f64| a.total_cmp(b)).len(), 6);
        assert!(nearest_k(dists, 0, |a: &f64, b: &f64| a.total_cmp(b)).is_empty());
    }

    #[test]
    fn nearest_k_evicts_worst_candidate() {
        // Every arrival beats the current worst, so each one evicts the root.
        let best = nearest_k((0..50).rev(), 3, |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(best, vec![0, 1, 2]);
        let one = nearest_k([7, 3, 9, 1, 4], 1, |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(one, vec![1]);
    }

    #[test]
    fn replace_root_returns_old_minimum() {
        let mut heap = MinHeap::new(3, |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(heap.replace_root(5), Ok(None));
        heap.push(2).unwrap();
        heap.push(8).unwrap();
        assert_eq!(heap.replace_root(9), Ok(Some(2)));
        assert!(heap.verify_heap());
        assert_eq!(heap.into_sorted_vec(), vec![5, 8, 9]);
    }

    proptest! {
        #[test]
        fn pushes_then_pops_are_sorted(values in proptest::collection::vec(-1000i32..1000, 0..200)) {
            let mut heap = MinHeap::new(values.len(), |a: &i32, b: &i32| a.cmp(b));
            for &v in &values {
                heap.push(v).unwrap();
                prop_assert!(heap.verify_heap());
            }
            let popped = drain_checked(heap);
            let mut expected = values.clone();
            expected.sort_unstable();
            prop_assert_eq!(popped, expected);
        }

        #[test]
        fn nearest_k_matches_sort(values in proptest::collection::vec(-1000i32..1000, 0..100), k in 0usize..20) {
            let got = nearest_k(values.iter().copied(), k, |a: &i32, b: &i32| a.cmp(b));
            let mut expected = values.clone();
            expected.sort_unstable();
            expected.truncate(k);
            prop_assert_eq!(got, expected);
        }
    }
}
