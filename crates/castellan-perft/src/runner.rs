//! Suite throughput runs and the divide cross-check.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Duration;

use tracing::{info, warn};

use castellan_core::Board;

use crate::config::SuiteConfig;
use crate::error::HarnessError;
use crate::report::{DepthResult, write_depth, write_header, write_position};
use crate::suite::{PerftCase, load_suite};

/// Totals over a whole suite run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuiteSummary {
    pub positions: usize,
    pub nodes: u64,
    pub elapsed: Duration,
}

impl SuiteSummary {
    /// Overall throughput, with the same 1 µs floor as per-depth results.
    pub fn nodes_per_second(&self) -> u64 {
        DepthResult {
            depth: 0,
            nodes: self.nodes,
            elapsed: self.elapsed,
        }
        .nodes_per_second()
    }
}

/// Read the suite named in `config`, count every position to `config.depth`,
/// and write the results file.
pub fn run_perft_tests(config: &SuiteConfig) -> Result<SuiteSummary, HarnessError> {
    let cases = load_suite(&config.input)?;
    info!(positions = cases.len(), input = %config.input.display(), "loaded perft suite");

    let file = File::create(&config.output).map_err(|source| HarnessError::Io {
        path: config.output.clone(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    let result = run_suite(&cases, config.depth, &mut out);
    // Keep whatever was measured before a mismatch.
    out.flush()?;
    result
}

/// Count each case at depths `1..=depth`, writing a results block per case.
///
/// Stops at the first count that disagrees with the suite's expectation.
pub fn run_suite<W: Write>(cases: &[PerftCase], depth: u32, out: &mut W) -> Result<SuiteSummary, HarnessError> {
    write_header(out)?;
    let mut summary = SuiteSummary::default();

    for (index, case) in cases.iter().enumerate() {
        let position = index + 1;
        for &(d, _) in case.expected.iter().filter(|&&(d, _)| d > depth) {
            warn!(position, line = case.line, depth = d, "expected count deeper than run, not checked");
        }

        write_position(out, position, &case.fen)?;
        let mut board = case.board.clone();
        for d in 1..=depth {
            let result = DepthResult::measure(&mut board, d);
            write_depth(out, &result)?;
            info!(
                position,
                depth = d,
                nodes = result.nodes,
                micros = result.micros() as u64,
                nps = result.nodes_per_second(),
                "perft"
            );
            summary.nodes += result.nodes;
            summary.elapsed += result.elapsed;

            if let Some(expected) = case.expected_at(d) {
                if expected != result.nodes {
                    return Err(HarnessError::ExpectedMismatch {
                        position,
                        depth: d,
                        expected,
                        found: result.nodes,
                    });
                }
            }
        }
        writeln!(out)?;
        summary.positions += 1;
    }

    Ok(summary)
}

/// Print a divide of `board` at `depth`, then cross-check its total against
/// an independent perft. Returns the total when the two agree.
pub fn debug_perft<W: Write>(board: &mut Board, depth: u32, out: &mut W) -> Result<u64, HarnessError> {
    writeln!(out, "Position: {board}")?;
    writeln!(out, "Depth: {depth}")?;
    writeln!(out)?;

    let divide = board.divide(depth)?;
    for (mv, count) in divide.entries() {
        writeln!(out, "{mv}: {count}")?;
    }

    let whole = board.perft(depth);
    let total = divide.verify(whole)?;
    writeln!(out)?;
    writeln!(out, "Total: {total}")?;
    Ok(total)
}
