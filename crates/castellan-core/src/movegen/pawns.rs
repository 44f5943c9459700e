//! Pawn move generation: pushes, captures, en passant and promotions.

use crate::board::Board;
use crate::chess_move::{Move, PromotionPiece};
use crate::mailbox::{Cell, EAST, WEST, step};
use crate::piece::Piece;
use crate::square::Square;

/// Generate pseudo-legal pawn moves from `from`.
pub(super) fn gen_pawn(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let us = piece.color();
    let push = us.pawn_push();
    let origin = from.mailbox();

    let single = step(origin, push);
    if board.cell(single).is_empty() {
        if let Some(to) = Square::from_mailbox(single) {
            push_pawn_move(from, to, piece, None, out);
        }
        if from.rank() == us.pawn_rank() {
            let double = step(single, push);
            if let (Cell::Empty, Some(to)) = (board.cell(double), Square::from_mailbox(double)) {
                out.push(Move::new(from, to, piece, None));
            }
        }
    }

    for side in [WEST, EAST] {
        let index = step(origin, push + side);
        let Some(to) = Square::from_mailbox(index) else {
            continue;
        };
        match board.cell(index) {
            Cell::Occupied(victim) if victim.color() != us => {
                push_pawn_move(from, to, piece, Some(victim), out);
            }
            Cell::Empty if board.en_passant() == Some(to) => {
                out.push(Move::new_en_passant(from, to, piece));
            }
            _ => {}
        }
    }
}

/// Push a pawn move, expanded into all four promotions on the last rank.
fn push_pawn_move(from: Square, to: Square, piece: Piece, captured: Option<Piece>, out: &mut Vec<Move>) {
    if to.rank() == piece.color().promotion_rank() {
        for promo in PromotionPiece::ALL {
            out.push(Move::new_promotion(from, to, piece, captured, promo));
        }
    } else {
        out.push(Move::new(from, to, piece, captured));
    }
}
