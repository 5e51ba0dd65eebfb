//! Degenerate "neighbor report" mode: an earlier, simpler variant kept
//! for back-compat alongside the clustering engine. Independent of
//! `EPSILON`/the clustering engine; uses only the raw distance kernel.

use std::io::{self, Write};

use crate::store::WordTable;

/// Edit-distance upper bound for two words to count as neighbors.
pub const DEFAULT_DELTA: usize = 3;
/// Minimum neighbor count for a word to be reported.
pub const DEFAULT_CLUSTER_THRESHOLD: usize = 3;

/// For each word with at least `cluster_threshold` other words at raw
/// distance `< delta`, collect its neighbors (ascending word-table index).
pub fn neighbor_report(words: &WordTable, delta: usize, cluster_threshold: usize) -> Vec<(usize, Vec<usize>)> {
    let n = words.len();
    let mut out = Vec::new();
    for i in 0..n {
        let mut neighbors = Vec::new();
        for j in 0..n {
            if i == j {
                continue;
            }
            if crate::kernel::distance(&words.get(i).bytes, &words.get(j).bytes) < delta {
                neighbors.push(j);
            }
        }
        if neighbors.len() >= cluster_threshold {
            out.push((i, neighbors));
        }
    }
    out
}

/// Write `<word>: <n1> <n2> ...` (one line per qualifying word, in
/// ascending word-table index order) to `out`.
pub fn write_neighbor_report<W: Write>(
    out: &mut W,
    words: &WordTable,
    report: &[(usize, Vec<usize>)],
) -> io::Result<()> {
    for (i, neighbors) in report {
        out.write_all(&words.get(*i).bytes)?;
        out.write_all(b":")?;
        for &j in neighbors {
            out.write_all(b" ")?;
            out.write_all(&words.get(j).bytes)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
