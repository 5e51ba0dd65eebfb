//! Token source: splits an in-memory byte buffer into maximal runs of bytes
//! that contain no separator.
//!
//! Some implementations mmap the file and advance a sliding window over
//! it; this crate reads the file once into an owned buffer and iterates
//! over it instead, since the whole pipeline is single-shot batch anyway.

use std::fs;
use std::io;
use std::path::Path;

/// Default separator set used when splitting a file into tokens.
pub const DEFAULT_SEPARATORS: &[u8] = b" \r\n\t";

/// A set of bytes that delimit tokens.
#[derive(Debug, Clone)]
pub struct Separators {
    bytes: Vec<u8>,
}

impl Separators {
    pub fn new(bytes: &[u8]) -> Self {
        Separators {
            bytes: bytes.to_vec(),
        }
    }

    #[inline]
    fn is_separator(&self, b: u8) -> bool {
        self.bytes.contains(&b)
    }
}

impl Default for Separators {
    fn default() -> Self {
        Separators::new(DEFAULT_SEPARATORS)
    }
}

/// Read the whole file into memory. I/O failure is reported distinctly from
/// end-of-stream: this returns before any tokenization happens.
pub fn read_file(path: &Path) -> io::Result<Vec<u8>> {
    fs::read(path)
}

/// Lazy iterator over maximal byte runs in `buf` that contain no separator
/// byte. Runs between adjacent separators are empty tokens and are yielded;
/// the caller filters them out along with other short tokens. A buffer
/// ending in a separator yields one final empty token for the run past
/// that trailing separator; a wholly empty buffer yields none.
pub struct Tokens<'a> {
    buf: &'a [u8],
    pos: usize,
    seps: Separators,
    finished: bool,
}

impl<'a> Tokens<'a> {
    pub fn new(buf: &'a [u8], seps: Separators) -> Self {
        Tokens {
            buf,
            pos: 0,
            seps,
            finished: false,
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let start = self.pos;
        let mut end = start;
        while end < self.buf.len() && !self.seps.is_separator(self.buf[end]) {
            end += 1;
        }

        if end < self.buf.len() {
            self.pos = end + 1;
            Some(&self.buf[start..end])
        } else {
            self.finished = true;
            if start == 0 && self.buf.is_empty() {
                None
            } else {
                Some(&self.buf[start..end])
            }
        }
    }
}
