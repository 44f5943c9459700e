//! Sliding piece (bishop, rook, queen) move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::mailbox::step;
use crate::piece::Piece;
use crate::square::Square;

use super::push_onto;

/// Generate pseudo-legal slides from `from`, one ray per direction, each
/// ending at the first occupied cell (captured if it is an enemy).
pub(super) fn gen_slider(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let origin = from.mailbox();
    for &dir in piece.kind().offsets() {
        let mut index = step(origin, dir);
        while push_onto(board, from, piece, index, out) {
            index = step(index, dir);
        }
    }
}
