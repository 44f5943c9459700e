//! Suite runner configuration.

use std::path::PathBuf;

/// Where the perft suite is read from, where results go, and how deep to count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    /// One FEN per line, optionally followed by `;D<depth> <nodes>` entries.
    pub input: PathBuf,
    /// Results file, overwritten on each run.
    pub output: PathBuf,
    /// Every position is counted at depths 1 through this.
    pub depth: u32,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("perftTests"),
            output: PathBuf::from("perftResults"),
            depth: 5,
        }
    }
}
