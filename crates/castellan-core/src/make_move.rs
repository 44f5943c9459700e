//! Move execution by make/unmake with an undo stack.

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

/// State overwritten by a move that the move itself cannot reconstruct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Undo {
    captured: Option<Piece>,
    castling: CastleRights,
    en_passant: Option<Square>,
    in_check: bool,
    halfmove_clock: u16,
    fullmove_number: u16,
}

impl Board {
    /// Apply `mv` to the board in place.
    ///
    /// `mv` must be legal in the current position, as produced by
    /// [`Board::generate_all_moves`]. The matching [`Board::undo_move`]
    /// restores the position exactly.
    pub fn play_move(&mut self, mv: Move) {
        let us = self.side_to_move();
        let (from, to) = (mv.from(), mv.to());
        debug_assert_eq!(self.piece_on(from), Some(mv.piece()), "{mv:?} does not match the board");

        let captured = match mv.kind() {
            MoveKind::EnPassant => self.remove_piece(mv.en_passant_victim_square()),
            MoveKind::Castling(castle) => {
                self.move_piece(castle.rook_from(), castle.rook_to());
                None
            }
            MoveKind::Normal | MoveKind::Promotion(_) => self.remove_piece(to),
        };
        debug_assert_eq!(captured, mv.captured(), "{mv:?} captures the wrong piece");

        self.remove_piece(from);
        self.put_piece(to, mv.promoted_piece().unwrap_or(mv.piece()));

        self.push_undo(Undo {
            captured,
            castling: self.castling(),
            en_passant: self.en_passant(),
            in_check: self.in_check(),
            halfmove_clock: self.halfmove_clock(),
            fullmove_number: self.fullmove_number(),
        });

        let rights = self
            .castling()
            .remove(CastleRights::revoked_by(from))
            .remove(CastleRights::revoked_by(to));
        self.set_castling(rights);

        let is_pawn = mv.piece().kind() == PieceKind::Pawn;
        let double_push = is_pawn && from.rank().distance(to.rank()) == 2;
        self.set_en_passant(double_push.then(|| {
            let skipped = match us {
                Color::White => Rank::Rank3,
                Color::Black => Rank::Rank6,
            };
            Square::new(skipped, from.file())
        }));

        if is_pawn || captured.is_some() {
            self.set_halfmove_clock(0);
        } else {
            self.set_halfmove_clock(self.halfmove_clock().saturating_add(1));
        }
        if us == Color::Black {
            self.set_fullmove_number(self.fullmove_number().saturating_add(1));
        }

        self.set_side_to_move(!us);
        self.update_check();
    }

    /// Take back `mv`, which must be the last move played on this board.
    ///
    /// # Panics
    ///
    /// Panics if no move has been played.
    pub fn undo_move(&mut self, mv: Move) {
        let undo = self.pop_undo().expect("undo_move called with no move to undo");
        let them = self.side_to_move();
        let us = !them;
        let (from, to) = (mv.from(), mv.to());
        debug_assert_eq!(
            self.piece_on(to),
            Some(mv.promoted_piece().unwrap_or(mv.piece())),
            "undo of {mv:?}, which is not the last move played"
        );

        self.remove_piece(to);
        self.put_piece(from, mv.piece());

        match mv.kind() {
            MoveKind::EnPassant => {
                if let Some(victim) = undo.captured {
                    self.put_piece(mv.en_passant_victim_square(), victim);
                }
            }
            MoveKind::Castling(castle) => self.move_piece(castle.rook_to(), castle.rook_from()),
            MoveKind::Normal | MoveKind::Promotion(_) => {
                if let Some(victim) = undo.captured {
                    self.put_piece(to, victim);
                }
            }
        }

        self.set_side_to_move(us);
        self.set_castling(undo.castling);
        self.set_en_passant(undo.en_passant);
        self.set_in_check(undo.in_check);
        self.set_halfmove_clock(undo.halfmove_clock);
        self.set_fullmove_number(undo.fullmove_number);
    }
}
