//! Perft (performance test) for move generation correctness verification.

use std::fmt;

use tracing::debug;

use crate::board::Board;
use crate::chess_move::Move;
use crate::error::PerftError;

impl Board {
    /// Count the number of leaf nodes at the given depth.
    ///
    /// Depth 0 returns 1 (the current position). Depth 1 returns the number
    /// of legal moves (bulk count: no make/unmake at the leaves). The board
    /// is unchanged on return.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0u64;
        for &mv in &moves {
            self.play_move(mv);
            nodes += self.perft(depth - 1);
            self.undo_move(mv);
        }
        nodes
    }

    /// Run perft with a per-root-move breakdown.
    ///
    /// Each entry holds the subtree count at `depth - 1` after that move.
    /// Entries are sorted by move text.
    pub fn divide(&mut self, depth: u32) -> Result<Divide, PerftError> {
        if depth == 0 {
            return Err(PerftError::ZeroDepth);
        }

        let mut entries: Vec<(Move, u64)> = self
            .legal_moves()
            .into_iter()
            .map(|mv| {
                self.play_move(mv);
                let count = self.perft(depth - 1);
                self.undo_move(mv);
                debug!(%mv, count, "divide");
                (mv, count)
            })
            .collect();
        entries.sort_by_cached_key(|(mv, _)| mv.to_algebraic());

        Ok(Divide { depth, entries })
    }

    /// Divide at `depth`, then cross-check the total against a whole-tree
    /// perft of the same position.
    pub fn debug_perft(&mut self, depth: u32) -> Result<Divide, PerftError> {
        let divide = self.divide(depth)?;
        let whole = self.perft(depth);
        divide.verify(whole)?;
        Ok(divide)
    }
}

/// Per-root-move perft counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divide {
    depth: u32,
    entries: Vec<(Move, u64)>,
}

impl Divide {
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Root moves with their subtree counts, sorted by move text.
    #[inline]
    pub fn entries(&self) -> &[(Move, u64)] {
        &self.entries
    }

    /// Sum of all subtree counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    /// Compare the total against an independently computed `perft(depth)`.
    pub fn verify(&self, whole: u64) -> Result<u64, PerftError> {
        let divided = self.total();
        if divided == whole {
            Ok(divided)
        } else {
            Err(PerftError::Mismatch {
                depth: self.depth,
                divided,
                whole,
            })
        }
    }
}

impl fmt::Display for Divide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (mv, count) in &self.entries {
            writeln!(f, "{mv}: {count}")?;
        }
        write!(f, "Total: {}", self.total())
    }
}
