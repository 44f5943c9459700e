//! Knight move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::mailbox::step;
use crate::piece::Piece;
use crate::square::Square;

use super::push_onto;

/// Generate pseudo-legal knight jumps from `from`.
pub(super) fn gen_knight(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let origin = from.mailbox();
    for &offset in piece.kind().offsets() {
        push_onto(board, from, piece, step(origin, offset), out);
    }
}
