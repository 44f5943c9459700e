//! Perft suite files: one position per line, with optional expected counts.
//!
//! ```text
//! # comment
//! rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 ;D1 20 ;D2 400
//! 8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1
//! ```

use std::fs;
use std::path::Path;

use castellan_core::Board;

use crate::error::HarnessError;

/// One position from a suite file.
#[derive(Debug, Clone)]
pub struct PerftCase {
    /// One-based line number in the suite file.
    pub line: usize,
    /// The FEN as written.
    pub fen: String,
    pub board: Board,
    /// Known node counts as `(depth, nodes)`, in file order.
    pub expected: Vec<(u32, u64)>,
}

impl PerftCase {
    /// Return the expected node count at `depth`, if the suite gives one.
    pub fn expected_at(&self, depth: u32) -> Option<u64> {
        self.expected.iter().find(|&&(d, _)| d == depth).map(|&(_, nodes)| nodes)
    }
}

/// Read and parse the suite file at `path`.
pub fn load_suite(path: &Path) -> Result<Vec<PerftCase>, HarnessError> {
    let text = fs::read_to_string(path).map_err(|source| HarnessError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_suite(&text)
}

/// Parse suite text. Blank lines and lines starting with `#` are skipped.
pub fn parse_suite(text: &str) -> Result<Vec<PerftCase>, HarnessError> {
    let mut cases = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut fields = trimmed.split(';');
        let fen = fields.next().unwrap_or_default().trim().to_string();
        let board: Board = fen
            .parse()
            .map_err(|source| HarnessError::Fen { line, source })?;
        let expected = fields
            .map(|entry| parse_expected(line, entry))
            .collect::<Result<Vec<_>, _>>()?;

        cases.push(PerftCase {
            line,
            fen,
            board,
            expected,
        });
    }
    Ok(cases)
}

/// Parse one `D<depth> <nodes>` entry.
fn parse_expected(line: usize, entry: &str) -> Result<(u32, u64), HarnessError> {
    let malformed = || HarnessError::ExpectedCount {
        line,
        text: entry.trim().to_string(),
    };
    let mut parts = entry.split_whitespace();
    let depth = parts
        .next()
        .and_then(|d| d.strip_prefix('D'))
        .and_then(|d| d.parse::<u32>().ok())
        .ok_or_else(malformed)?;
    let nodes = parts
        .next()
        .and_then(|n| n.parse::<u64>().ok())
        .ok_or_else(malformed)?;
    if parts.next().is_some() {
        return Err(malformed());
    }
    Ok((depth, nodes))
}

#[cfg(test)]
mod tests {
    use super::parse_suite;
    use crate::error::HarnessError;
    use castellan_core::{Board, FenError};

    const SUITE: &str = "\
# standard positions
rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 ;D1 20 ;D2 400

8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1
";

    #[test]
    fn parses_positions_and_counts() {
        let cases = parse_suite(SUITE).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].line, 2);
        assert_eq!(cases[0].board, Board::starting_position());
        assert_eq!(cases[0].expected, [(1, 20), (2, 400)]);
        assert_eq!(cases[0].expected_at(2), Some(400));
        assert_eq!(cases[0].expected_at(3), None);
        assert_eq!(cases[1].line, 4);
        assert_eq!(cases[1].fen, "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1");
        assert!(cases[1].expected.is_empty());
    }

    #[test]
    fn bad_fen_reports_line() {
        let err = parse_suite("\n\nnot a fen\n").unwrap_err();
        assert!(matches!(
            err,
            HarnessError::Fen { line: 3, source: FenError::WrongFieldCount { found: 3 } }
        ));
    }

    #[test]
    fn bad_expected_count() {
        for entry in ["D1", "X1 20", "D1 twenty", "D1 20 30"] {
            let text = format!("4k3/8/8/8/8/8/8/4K3 w - - 0 1 ;{entry}");
            let err = parse_suite(&text).unwrap_err();
            assert!(
                matches!(err, HarnessError::ExpectedCount { line: 1, .. }),
                "{entry:?} gave {err:?}"
            );
        }
    }
}
