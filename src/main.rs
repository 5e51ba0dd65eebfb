//! wordcluster: groups the tokens of an input text file into clusters of
//! orthographically similar words, measured by edit distance (Levenshtein).
//! Batch analysis tool: read a file once, emit cluster listings on stdout.

mod cli;
mod engine;
mod error;
mod heap;
mod kernel;
mod matrix;
mod neighbors;
mod report;
mod store;
mod tokens;

use std::io::stdout;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use cli::{Cli, Mode};
use error::AppError;
use store::{ClusterStore, WordTable};
use tokens::{Separators, Tokens};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // anyhow's Display shows only the outermost message, so this
            // stays a single diagnostic line, even though the full cause
            // chain is still available via `{:?}` for debugging.
            eprintln!("wordcluster: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let buf = read_input(&cli.file)?;

    info!("first pass: building word table");
    let separators = Separators::new(&cli.separator_bytes());
    let mut words = WordTable::new();
    for tok in Tokens::new(&buf, separators) {
        if tok.len() > cli.ignore_size {
            words.push(tok);
        }
    }
    debug!(surviving_words = words.len(), "second pass complete");

    match cli.mode {
        Mode::Cluster => run_cluster_mode(cli, words),
        Mode::Neighbors => run_neighbor_mode(cli, &words),
    }
}

fn run_cluster_mode(cli: &Cli, mut words: WordTable) -> Result<()> {
    info!("third pass: computing similarity matrix");
    let matrix = engine::build_similarity_matrix(&words);
    let queue = engine::build_queue(&matrix);

    info!("fourth pass: clustering");
    let mut store = ClusterStore::new();
    engine::run(&mut words, &mut store, &matrix, queue, cli.epsilon);

    let mut out = stdout().lock();
    report::write_report(&mut out, &words, &store).context("writing cluster report to stdout")
}

fn run_neighbor_mode(cli: &Cli, words: &WordTable) -> Result<()> {
    let rows = neighbors::neighbor_report(words, cli.delta, cli.cluster_threshold);
    let mut out = stdout().lock();
    neighbors::write_neighbor_report(&mut out, words, &rows).context("writing neighbor report to stdout")
}

fn read_input(path: &std::path::Path) -> Result<Vec<u8>> {
    let buf = tokens::read_file(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if buf.is_empty() {
        return Err(AppError::EmptyInput {
            path: path.to_path_buf(),
        }
        .into());
    }
    Ok(buf)
}
