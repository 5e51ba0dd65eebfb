//! The closed error taxonomy: I/O failure, empty input, and usage error.
//! `main` maps any of these (or a wrapped `anyhow::Error` from deeper
//! plumbing) to one diagnostic line on stderr and a nonzero exit code.
//!
//! No `AllocError` variant: Rust's global allocator aborts the process on
//! OOM rather than returning a `Result`, so there is no fallible path in
//! this crate that could construct one.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("empty input: {path} contains no bytes")]
    EmptyInput { path: PathBuf },

    #[error("usage: wordcluster <FILE>")]
    Usage,
}

pub type Result<T> = std::result::Result<T, AppError>;
