//! Reporter: walk the cluster store in its native (insertion) order and
//! write one line per cluster, byte-exact pass-through of word text.

use std::io::{self, Write};

use crate::store::{ClusterStore, WordTable};

/// Write `Cluster <k>: [<word0>] [<word1>] ... ` (one line per cluster, a
/// trailing space before the newline, `k` 0-based and incrementing per line
/// in store order) to `out`.
pub fn write_report<W: Write>(out: &mut W, words: &WordTable, store: &ClusterStore) -> io::Result<()> {
    for (k, id) in store.iter().enumerate() {
        write!(out, "Cluster {}: ", k)?;
        for &idx in store.members(id) {
            out.write_all(b"[")?;
            out.write_all(&words.get(idx).bytes)?;
            out.write_all(b"] ")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
