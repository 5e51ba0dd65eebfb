//! Priority queue over similarity records: a max-heap ordered by the `s`
//! field, `push` and `pop` in `O(log n)`.
//!
//! `std::collections::BinaryHeap` is already a max-heap; this module wraps
//! it in a small newtype so the clustering engine depends on a concrete,
//! documented record type rather than the raw heap.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A similarity record `(i, j, s)` with `0 <= i < j < N`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimRecord {
    pub i: usize,
    pub j: usize,
    pub s: f64,
}

impl SimRecord {
    pub fn new(i: usize, j: usize, s: f64) -> Self {
        debug_assert!(i < j);
        SimRecord { i, j, s }
    }
}

impl Eq for SimRecord {}

impl PartialOrd for SimRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimRecord {
    /// Ordered by `s` first (NaN sorts as least-similar, so it never wins
    /// `pop`), tie-broken lexicographically on `(i, j)` for deterministic
    /// iteration order when several pairs share the same similarity.
    fn cmp(&self, other: &Self) -> Ordering {
        self.s
            .partial_cmp(&other.s)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.i.cmp(&other.i))
            .then_with(|| self.j.cmp(&other.j))
    }
}

/// Max-heap of similarity records.
#[derive(Default)]
pub struct SimilarityHeap {
    inner: BinaryHeap<SimRecord>,
}

impl SimilarityHeap {
    pub fn new() -> Self {
        SimilarityHeap {
            inner: BinaryHeap::new(),
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        SimilarityHeap {
            inner: BinaryHeap::with_capacity(cap),
        }
    }

    pub fn push(&mut self, record: SimRecord) {
        self.inner.push(record);
    }

    pub fn pop(&mut self) -> Option<SimRecord> {
        self.inner.pop()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
