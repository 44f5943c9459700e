//! King move and castling generation.

use crate::board::Board;
use crate::castle_rights::Castle;
use crate::chess_move::Move;
use crate::mailbox::step;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::push_onto;

/// Generate pseudo-legal single king steps. Safety of the target square is
/// left to the legality filter.
pub(super) fn gen_king(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let origin = from.mailbox();
    for &offset in piece.kind().offsets() {
        push_onto(board, from, piece, step(origin, offset), out);
    }
}

/// Generate castling moves for the side to move.
///
/// Relies on the board's check flag being current.
pub(super) fn gen_castles(board: &Board, out: &mut Vec<Move>) {
    if board.in_check() {
        return;
    }
    let us = board.side_to_move();
    for castle in Castle::for_color(us) {
        if !board.castling().allows(castle) {
            continue;
        }
        let home = |sq, kind| board.piece_on(sq).is_some_and(|p: Piece| p.is(kind, us));
        if !home(castle.king_from(), PieceKind::King) || !home(castle.rook_from(), PieceKind::Rook) {
            continue;
        }
        if castle.between().iter().any(|&sq| board.piece_on(sq).is_some()) {
            continue;
        }
        if castle.king_path().iter().any(|&sq| board.is_square_attacked(sq, !us)) {
            continue;
        }
        out.push(Move::new_castle(castle));
    }
}

#[cfg(test)]
mod tests {
    use super::gen_castles;
    use crate::board::Board;
    use crate::castle_rights::Castle;
    use crate::chess_move::Move;

    fn castles(fen: &str) -> Vec<Castle> {
        let b: Board = fen.parse().unwrap();
        let mut out = Vec::new();
        gen_castles(&b, &mut out);
        out.iter().filter_map(|m: &Move| m.castle()).collect()
    }

    #[test]
    fn both_sides_when_clear() {
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"),
            [Castle::WhiteKingSide, Castle::WhiteQueenSide]
        );
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1"),
            [Castle::BlackKingSide, Castle::BlackQueenSide]
        );
    }

    #[test]
    fn no_castling_out_of_check() {
        assert!(castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").len() == 2);
        assert!(castles("r3k2r/4r3/8/8/8/8/8/R3K2R w KQkq - 0 1").is_empty());
    }

    #[test]
    fn blocked_path() {
        // b1 only needs to be empty, not safe.
        assert_eq!(castles("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1"), [Castle::WhiteKingSide]);
        assert_eq!(castles("4k3/8/8/8/8/8/8/R3KB1R w KQ - 0 1"), [Castle::WhiteQueenSide]);
    }

    #[test]
    fn attacked_transit_and_landing() {
        // f1 attacked: no king side.
        assert_eq!(castles("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").len(), 2);
        assert_eq!(castles("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1"), [Castle::WhiteQueenSide]);
        // g1 attacked: no king side.
        assert_eq!(castles("4k1r1/8/8/8/8/8/8/R3K2R w KQ - 0 1"), [Castle::WhiteQueenSide]);
        // b1 attacked only: queen side still fine.
        assert_eq!(castles("1r2k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").len(), 2);
        // c1 attacked: no queen side.
        assert_eq!(castles("2r1k3/8/8/8/8/8/8/R3K2R w KQ - 0 1"), [Castle::WhiteKingSide]);
    }

    #[test]
    fn rights_and_home_pieces_required() {
        assert_eq!(castles("4k3/8/8/8/8/8/8/R3K2R w K - 0 1"), [Castle::WhiteKingSide]);
        assert!(castles("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").is_empty());
        // Right kept but the rook is gone.
        assert_eq!(castles("4k3/8/8/8/8/8/8/4K2R w KQ - 0 1"), [Castle::WhiteKingSide]);
        // Right kept but the corner holds some other piece.
        assert_eq!(castles("4k3/8/8/8/8/8/8/R3K2N w KQ - 0 1"), [Castle::WhiteQueenSide]);
    }
}
