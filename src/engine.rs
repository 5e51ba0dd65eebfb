//! Greedy best-first clustering engine: drains the priority queue in
//! decreasing similarity order and merges words into clusters under a
//! pairwise-minimum (complete-linkage-like) constraint.
//!
//! Five dispatch rules, including the deliberate asymmetry between
//! unconditional singleton attachment (rules 1-2, no `EPSILON` check) and
//! threshold-gated complete-linkage merge (rule 4).

use crate::heap::{SimRecord, SimilarityHeap};
use crate::matrix::SimilarityMatrix;
use crate::store::{ClusterStore, WordTable};

/// Minimum token length to survive into the word table; length-4 tokens are
/// dropped (strictly greater than).
pub const IGNORE_SIZE: usize = 4;

/// Complete-linkage similarity threshold gating rule-4 merges.
pub const EPSILON: f64 = 0.4;

/// Build the full `N x N` similarity matrix over the surviving word table
/// using the normalized-similarity kernel operation.
pub fn build_similarity_matrix(words: &WordTable) -> SimilarityMatrix {
    let n = words.len();
    SimilarityMatrix::build(n, |i, j| {
        crate::kernel::normalized_similarity(&words.get(i).bytes, &words.get(j).bytes)
    })
}

/// Push every `(i, j, s)` pair with `i < j` from the similarity matrix into
/// a fresh priority queue.
pub fn build_queue(matrix: &SimilarityMatrix) -> SimilarityHeap {
    let n = matrix.len();
    let mut heap = SimilarityHeap::with_capacity(n * n / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            heap.push(SimRecord::new(i, j, matrix.get(i, j)));
        }
    }
    heap
}

/// Run the clustering main loop to completion: pop every record from
/// `queue`, applying rules 1-5 against `words`/`store`, consulting `matrix`
/// for the complete-linkage guard.
pub fn run(
    words: &mut WordTable,
    store: &mut ClusterStore,
    matrix: &SimilarityMatrix,
    mut queue: SimilarityHeap,
    epsilon: f64,
) {
    while let Some(rec) = queue.pop() {
        let ca = words.cluster_of(rec.i);
        let cb = words.cluster_of(rec.j);

        match (ca, cb) {
            (None, None) => {
                // Rule 1: seed a new cluster unconditionally.
                store.seed(words, rec.i, rec.j);
            }
            (None, Some(c)) => {
                // Rule 2: attach the unassigned word to the other's cluster.
                store.attach(words, c, rec.i);
            }
            (Some(c), None) => {
                store.attach(words, c, rec.j);
            }
            (Some(ca), Some(cb)) if ca.eq(&cb) => {
                // Rule 3: already in the same cluster, no-op.
            }
            (Some(ca), Some(cb)) => {
                if rec.s > epsilon && complete_linkage_holds(store, matrix, ca, cb, epsilon) {
                    // Rule 4: accept the merge. Ca survives and absorbs Cb;
                    // no size-based swap, the first cluster always wins.
                    store.merge(words, ca, cb);
                }
                // Rule 5 (s <= EPSILON) or a failed guard: no-op, keep
                // draining the queue; later records may still trigger
                // rules 1-2 for other, still-unclustered words.
            }
        }
    }
}

/// Complete-linkage guard: every cross-pair between the two clusters must
/// be at least `epsilon`-similar, or the merge is abandoned.
fn complete_linkage_holds(
    store: &ClusterStore,
    matrix: &SimilarityMatrix,
    ca: crate::store::ClusterId,
    cb: crate::store::ClusterId,
    epsilon: f64,
) -> bool {
    let a_members = store.members(ca);
    let b_members = store.members(cb);
    for &x in a_members {
        for &y in b_members {
            if matrix.get(x, y) < epsilon {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ClusterStore, WordTable};

    fn run_words(tokens: &[&str]) -> (WordTable, ClusterStore, SimilarityMatrix) {
        let mut words = WordTable::new();
        for t in tokens {
            words.push(t.as_bytes());
        }
        let matrix = build_similarity_matrix(&words);
        let queue = build_queue(&matrix);
        let mut store = ClusterStore::new();
        run(&mut words, &mut store, &matrix, queue, EPSILON);
        (words, store, matrix)
    }

    fn cluster_texts<'a>(words: &'a WordTable, store: &ClusterStore, id: crate::store::ClusterId) -> Vec<&'a [u8]> {
        store
            .members(id)
            .iter()
            .map(|&i| words.get(i).bytes.as_slice())
            .collect()
    }

    #[test]
    fn four_identical_tokens_form_one_cluster() {
        let (words, store, _m) = run_words(&["hello", "hello", "hello", "hello"]);
        assert_eq!(store.len(), 1);
        let id = store.iter().next().unwrap();
        assert_eq!(cluster_texts(&words, &store, id).len(), 4);
    }

    #[test]
    fn two_words_always_pair_regardless_of_threshold() {
        // Zero similarity, but rule 1 seeds unconditionally.
        let (words, store, m) = run_words(&["abcdefg", "zzzzzzz"]);
        assert_eq!(m.get(0, 1), 0.0);
        assert_eq!(store.len(), 1);
        let id = store.iter().next().unwrap();
        assert_eq!(cluster_texts(&words, &store, id).len(), 2);
    }

    #[test]
    fn two_tight_pairs_do_not_cross_merge() {
        let (_words, store, _m) = run_words(&["abcdefg", "abcdefh", "xyzxyzx", "xyzxyzy"]);
        assert_eq!(store.len(), 2);
        for id in store.iter() {
            assert_eq!(store.members(id).len(), 2);
        }
    }

    #[test]
    fn single_word_survives_unclustered() {
        let (_words, store, _m) = run_words(&["onlyoneword"]);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn no_words_produces_no_clusters() {
        let (_words, store, _m) = run_words(&[]);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn attach_is_unconditional_even_below_epsilon_for_seed_pair() {
        // A synthetic chain: w0~w1 high, w1~w2 high, w0~w2 low.
        // Built directly against the store/engine rules rather than via
        // real words, since crafting three real words with these exact
        // relative similarities is unreliable; this exercises the rule
        // dispatch itself.
        let mut words = WordTable::new();
        for _ in 0..3 {
            words.push(b"x");
        }
        let matrix = SimilarityMatrix::build(3, |i, j| match (i, j) {
            (0, 1) => 0.9,
            (1, 2) => 0.9,
            (0, 2) => 0.3,
            _ => unreachable!(),
        });
        let mut queue = SimilarityHeap::new();
        queue.push(SimRecord::new(0, 1, 0.9));
        queue.push(SimRecord::new(1, 2, 0.9));
        queue.push(SimRecord::new(0, 2, 0.3));
        let mut store = ClusterStore::new();
        run(&mut words, &mut store, &matrix, queue, EPSILON);

        assert_eq!(store.len(), 1);
        let id = store.iter().next().unwrap();
        assert_eq!(store.members(id).len(), 3);
    }

    #[test]
    fn rule_four_merge_rejected_on_single_bad_cross_pair() {
        // Two pre-formed clusters A={0,1}, B={2,3}; all cross-sims >= EPSILON
        // except sim(1,3) = 0.35. A subsequent (0,2,0.7) trigger must not merge.
        let mut words = WordTable::new();
        for _ in 0..4 {
            words.push(b"x");
        }
        let matrix = SimilarityMatrix::build(4, |i, j| match (i.min(j), i.max(j)) {
            (0, 1) => 0.95,
            (2, 3) => 0.95,
            (0, 2) => 0.7,
            (0, 3) => 0.6,
            (1, 2) => 0.6,
            (1, 3) => 0.35,
            _ => unreachable!(),
        });
        let mut queue = SimilarityHeap::new();
        queue.push(SimRecord::new(0, 1, 0.95));
        queue.push(SimRecord::new(2, 3, 0.95));
        queue.push(SimRecord::new(0, 2, 0.7));
        queue.push(SimRecord::new(0, 3, 0.6));
        queue.push(SimRecord::new(1, 2, 0.6));
        queue.push(SimRecord::new(1, 3, 0.35));
        let mut store = ClusterStore::new();
        run(&mut words, &mut store, &matrix, queue, EPSILON);

        assert_eq!(store.len(), 2);
        for id in store.iter() {
            assert_eq!(store.members(id).len(), 2);
        }
    }

    #[test]
    fn complete_linkage_holds_after_accepted_merge() {
        let (words, store, matrix) = run_words(&["hello", "hellp", "yellow", "mellow"]);
        for id in store.iter() {
            let members = store.members(id);
            for &x in members {
                for &y in members {
                    if x != y {
                        assert!(
                            matrix.get(x, y) >= 0.0,
                            "sanity: matrix entries are always populated"
                        );
                    }
                }
            }
        }
        // Not asserting specific cluster shape here (depends on the exact
        // kernel scores), just that the run completes and the store is
        // internally consistent.
        for w in words.iter() {
            if let Some(c) = w.cluster_ref() {
                assert!(store.members(c).contains(&w.idx));
            }
        }
    }
}
