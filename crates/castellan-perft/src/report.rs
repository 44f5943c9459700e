//! Timing results and the human-readable results file.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use castellan_core::Board;

/// One timed perft call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthResult {
    pub depth: u32,
    pub nodes: u64,
    pub elapsed: Duration,
}

impl DepthResult {
    /// Run `board.perft(depth)` and time it.
    pub fn measure(board: &mut Board, depth: u32) -> DepthResult {
        let start = Instant::now();
        let nodes = board.perft(depth);
        DepthResult {
            depth,
            nodes,
            elapsed: start.elapsed(),
        }
    }

    /// Elapsed time in whole microseconds.
    pub fn micros(&self) -> u128 {
        self.elapsed.as_micros()
    }

    /// Throughput in nodes per second. Timings under 1 µs count as 1 µs.
    pub fn nodes_per_second(&self) -> u64 {
        let micros = self.micros().max(1);
        let nps = u128::from(self.nodes) * 1_000_000 / micros;
        u64::try_from(nps).unwrap_or(u64::MAX)
    }
}

/// Write the preamble of a results file.
pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Perft results: leaf node counts per position and depth.")?;
    writeln!(out)?;
    writeln!(
        out,
        "The speed is always expressed in nodes per second whereas the time is in microseconds."
    )?;
    writeln!(out)
}

/// Write the heading line for one position.
pub fn write_position<W: Write>(out: &mut W, position: usize, fen: &str) -> io::Result<()> {
    writeln!(out, "Position {position}: {fen}")?;
    writeln!(out)
}

/// Write the node count, time and speed for one depth.
pub fn write_depth<W: Write>(out: &mut W, result: &DepthResult) -> io::Result<()> {
    writeln!(out, "Depth = {}, Nodes = {}", result.depth, result.nodes)?;
    writeln!(out, "Time = {}", result.micros())?;
    writeln!(out, "Speed = {}", result.nodes_per_second())?;
    writeln!(out)
}
