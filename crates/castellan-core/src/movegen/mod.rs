//! Legal move generation.
//!
//! Candidates are generated pseudo-legally by scanning the mailbox, then
//! each is played, tested for leaving the mover's king attacked, and taken
//! back.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::{Move, PromotionPiece};
use crate::error::MoveError;
use crate::mailbox::Cell;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::king::{gen_castles, gen_king};
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_slider;

/// Push a move of `piece` onto the cell at `index` if that cell is empty or
/// holds an enemy piece. Returns `true` only for an empty cell, so sliders
/// keep going exactly while this holds.
fn push_onto(board: &Board, from: Square, piece: Piece, index: usize, out: &mut Vec<Move>) -> bool {
    match (board.cell(index), Square::from_mailbox(index)) {
        (Cell::Empty, Some(to)) => {
            out.push(Move::new(from, to, piece, None));
            true
        }
        (Cell::Occupied(victim), Some(to)) if victim.color() != piece.color() => {
            out.push(Move::new(from, to, piece, Some(victim)));
            false
        }
        _ => false,
    }
}

impl Board {
    /// Append every legal move for the side to move to `out`.
    ///
    /// Existing contents of `out` are left alone. Checkmate and stalemate
    /// append nothing. The check flag is refreshed first; the position is
    /// otherwise unchanged on return.
    pub fn generate_all_moves(&mut self, out: &mut Vec<Move>) {
        self.update_check();
        let start = out.len();
        self.generate_pseudo_legal(out);

        let us = self.side_to_move();
        let mut kept = start;
        for i in start..out.len() {
            let mv = out[i];
            self.play_move(mv);
            let exposed = self.is_square_attacked(self.king_square(us), !us);
            self.undo_move(mv);
            if !exposed {
                out[kept] = mv;
                kept += 1;
            }
        }
        out.truncate(kept);
    }

    /// Return the legal moves for the side to move.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.generate_all_moves(&mut moves);
        moves
    }

    /// Resolve coordinate move text (`e2e4`, `e7e8q`) against the legal moves.
    pub fn parse_move(&mut self, text: &str) -> Result<Move, MoveError> {
        let malformed = || MoveError::Malformed {
            text: text.to_string(),
        };
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(malformed());
        }
        let from = Square::from_algebraic(&text[0..2]).ok_or_else(malformed)?;
        let to = Square::from_algebraic(&text[2..4]).ok_or_else(malformed)?;
        let promotion = match text[4..].chars().next() {
            Some(c) => Some(PromotionPiece::from_char(c).ok_or_else(malformed)?),
            None => None,
        };

        self.legal_moves()
            .into_iter()
            .find(|mv| mv.from() == from && mv.to() == to && mv.promotion() == promotion)
            .ok_or_else(|| MoveError::Illegal {
                text: text.to_string(),
            })
    }

    fn generate_pseudo_legal(&self, out: &mut Vec<Move>) {
        let us = self.side_to_move();
        for from in Square::all() {
            let Some(piece) = self.piece_on(from) else {
                continue;
            };
            if piece.color() != us {
                continue;
            }
            match piece.kind() {
                PieceKind::Pawn => gen_pawn(self, from, piece, out),
                PieceKind::Knight => gen_knight(self, from, piece, out),
                PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => gen_slider(self, from, piece, out),
                PieceKind::King => gen_king(self, from, piece, out),
            }
        }
        gen_castles(self, out);
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::chess_move::{Move, PromotionPiece};
    use crate::error::MoveError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn board(fen: &str) -> Board {
        fen.parse().unwrap()
    }

    #[test]
    fn starting_position_20_moves() {
        let mut b = Board::starting_position();
        let moves = b.legal_moves();
        assert_eq!(moves.len(), 20, "got {moves:?}");
        assert_eq!(b, Board::starting_position());
    }

    #[test]
    fn appends_without_clearing() {
        let mut b = Board::starting_position();
        let mut out = vec![Move::NULL];
        b.generate_all_moves(&mut out);
        assert_eq!(out.len(), 21);
        assert!(out[0].is_null());
    }

    #[test]
    fn pinned_knight_zero_moves() {
        let mut b = board("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1");
        let moves = b.legal_moves();
        assert!(moves.iter().all(|m| m.from() != Square::E2), "pinned knight moved: {moves:?}");
    }

    #[test]
    fn double_check_king_only() {
        let mut b = board("4r1k1/8/8/8/8/5n2/8/4K3 w - - 0 1");
        let moves = b.legal_moves();
        assert!(b.in_check());
        assert!(!moves.is_empty());
        for mv in &moves {
            assert_eq!(mv.piece().kind(), PieceKind::King, "{mv:?} in double check");
        }
    }

    #[test]
    fn castling_not_through_check() {
        let mut b = board("4k3/8/b7/8/8/8/8/R3K2R w KQ - 0 1");
        let castles: Vec<_> = b.legal_moves().into_iter().filter(|m| m.is_castle()).collect();
        assert_eq!(castles.len(), 1);
        assert_eq!(castles[0].to(), Square::C1);
    }

    #[test]
    fn en_passant_legal() {
        let mut b = board("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let ep: Vec<_> = b.legal_moves().into_iter().filter(|m| m.is_en_passant()).collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].en_passant_victim_square(), Square::D5);
    }

    #[test]
    fn en_passant_discovered_check_illegal() {
        // bxc6 would clear the fifth rank between the rook and the king.
        let mut b = board("4k3/8/8/KPp4r/8/8/8/8 w - c6 0 1");
        assert!(b.legal_moves().iter().all(|m| !m.is_en_passant()));
    }

    #[test]
    fn promotion_generates_4_moves() {
        let mut b = board("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let promos: Vec<_> = b.legal_moves().into_iter().filter_map(|m| m.promotion()).collect();
        assert_eq!(promos.len(), 4);
        for promo in PromotionPiece::ALL {
            assert!(promos.contains(&promo));
        }
    }

    #[test]
    fn black_pawns_push_down_the_board() {
        let mut b = board("4k3/3p4/8/8/8/8/8/4K3 b - - 0 1");
        let pawn_moves: Vec<_> = b
            .legal_moves()
            .into_iter()
            .filter(|m| m.piece() == Piece::BLACK_PAWN)
            .map(|m| m.to_string())
            .collect();
        assert_eq!(pawn_moves.len(), 2);
        assert!(pawn_moves.contains(&"d7d6".to_string()));
        assert!(pawn_moves.contains(&"d7d5".to_string()));
    }

    #[test]
    fn blocked_double_push() {
        let mut b = board("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
        assert!(b.legal_moves().iter().all(|m| m.piece() != Piece::WHITE_PAWN));
    }

    #[test]
    fn checkmate_and_stalemate_are_empty() {
        // Fool's mate.
        let mut mated = board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert!(mated.legal_moves().is_empty());
        assert!(mated.in_check());

        let mut stalemate = board("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(stalemate.legal_moves().is_empty());
        assert!(!stalemate.in_check());
    }

    #[test]
    fn parse_move_text() {
        let mut b = Board::starting_position();
        let mv = b.parse_move("e2e4").unwrap();
        assert_eq!(mv, Move::new(Square::E2, Square::E4, Piece::WHITE_PAWN, None));

        let mut b = board("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let mv = b.parse_move("a7a8q").unwrap();
        assert_eq!(mv.promotion(), Some(PromotionPiece::Queen));
        assert!(matches!(b.parse_move("a7a8"), Err(MoveError::Illegal { .. })));
    }

    #[test]
    fn parse_move_errors() {
        let mut b = Board::starting_position();
        for bad in ["", "e2", "e2e4qq", "i2e4", "e2e4x", "é2e4"] {
            assert!(
                matches!(b.parse_move(bad), Err(MoveError::Malformed { .. })),
                "{bad:?} should be malformed"
            );
        }
        assert_eq!(
            b.parse_move("e2e5"),
            Err(MoveError::Illegal { text: "e2e5".to_string() })
        );
    }
}
