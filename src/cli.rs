//! CLI surface: a single positional input-file argument, plus opt-in
//! overrides for knobs that are otherwise fixed constants, exposed as
//! flags without altering core clustering semantics.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::engine::{EPSILON, IGNORE_SIZE};
use crate::neighbors::{DEFAULT_CLUSTER_THRESHOLD, DEFAULT_DELTA};
use crate::tokens::DEFAULT_SEPARATORS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Similarity-based agglomerative clustering (the default).
    Cluster,
    /// Degenerate back-compat neighbor report.
    Neighbors,
}

/// Groups the tokens of an input text file into clusters of orthographically
/// similar words, measured by edit distance.
#[derive(Debug, Parser)]
#[command(name = "wordcluster", about = "Cluster words in a text file by edit-distance similarity")]
pub struct Cli {
    /// Input file path.
    pub file: PathBuf,

    /// Which report to produce.
    #[arg(long, value_enum, default_value_t = Mode::Cluster)]
    pub mode: Mode,

    /// Complete-linkage similarity threshold gating cluster merges (cluster mode only).
    #[arg(long, default_value_t = EPSILON)]
    pub epsilon: f64,

    /// Minimum surviving token length; tokens of this length or shorter are dropped.
    #[arg(long, default_value_t = IGNORE_SIZE)]
    pub ignore_size: usize,

    /// Token separator bytes, interpreted as a literal ASCII string.
    #[arg(long, default_value = " \r\n\t")]
    pub separators: String,

    /// Edit-distance upper bound for two words to count as neighbors (neighbor mode only).
    #[arg(long, default_value_t = DEFAULT_DELTA)]
    pub delta: usize,

    /// Minimum neighbor count for a word to be reported (neighbor mode only).
    #[arg(long, default_value_t = DEFAULT_CLUSTER_THRESHOLD)]
    pub cluster_threshold: usize,

    /// Increase log verbosity (stderr). Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn separator_bytes(&self) -> Vec<u8> {
        if self.separators.is_empty() {
            DEFAULT_SEPARATORS.to_vec()
        } else {
            self.separators.as_bytes().to_vec()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec_constants() {
        let cli = Cli::parse_from(["wordcluster", "input.txt"]);
        assert_eq!(cli.epsilon, EPSILON);
        assert_eq!(cli.ignore_size, IGNORE_SIZE);
        assert_eq!(cli.mode, Mode::Cluster);
        assert_eq!(cli.separator_bytes(), DEFAULT_SEPARATORS.to_vec());
    }

    #[test]
    fn mode_flag_selects_neighbors() {
        let cli = Cli::parse_from(["wordcluster", "input.txt", "--mode", "neighbors"]);
        assert_eq!(cli.mode, Mode::Neighbors);
    }

    #[test]
    fn overrides_are_applied() {
        let cli = Cli::parse_from([
            "wordcluster",
            "input.txt",
            "--epsilon",
            "0.5",
            "--ignore-size",
            "2",
        ]);
        assert_eq!(cli.epsilon, 0.5);
        assert_eq!(cli.ignore_size, 2);
    }
}
