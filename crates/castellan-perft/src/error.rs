//! Harness errors.

use std::io;
use std::path::PathBuf;

use castellan_core::{FenError, PerftError};

/// Errors raised while reading a perft suite, running it, or writing results.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// A suite or results file could not be opened, read or created.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// Writing to the report or console failed.
    #[error("write failed: {source}")]
    Write {
        /// The underlying I/O error.
        #[from]
        source: io::Error,
    },

    /// A suite line holds a FEN that does not parse.
    #[error("suite line {line}: {source}")]
    Fen {
        /// One-based line number in the suite file.
        line: usize,
        /// The underlying FEN error.
        source: FenError,
    },

    /// A suite line carries an expected count that is not `D<depth> <nodes>`.
    #[error("suite line {line}: malformed expected count \"{text}\"")]
    ExpectedCount {
        /// One-based line number in the suite file.
        line: usize,
        /// The offending entry.
        text: String,
    },

    /// The divide cross-check failed.
    #[error(transparent)]
    Perft(#[from] PerftError),

    /// A position's node count disagrees with the count given in the suite.
    #[error("position {position}: expected {expected} nodes at depth {depth}, found {found}")]
    ExpectedMismatch {
        /// One-based position index in the suite.
        position: usize,
        /// Depth of the failing count.
        depth: u32,
        /// Count given in the suite file.
        expected: u64,
        /// Count produced by perft.
        found: u64,
    },
}
