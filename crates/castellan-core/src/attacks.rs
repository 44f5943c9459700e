//! Attack detection by scanning outward from the target square.
//!
//! Every pattern is symmetric, so "is `sq` attacked by a knight" is the same
//! question as "is there an enemy knight one knight-jump from `sq`". Rays
//! stop at the first occupied cell or at the sentinel border.

use crate::board::Board;
use crate::color::Color;
use crate::mailbox::{BISHOP_DIRECTIONS, Cell, EAST, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS, WEST, step};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

impl Board {
    /// Return `true` if `sq` is attacked by any piece of `by`.
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        self.is_attacked_at(sq.mailbox(), by)
    }

    /// Recompute whether the side to move is in check.
    ///
    /// Only the check flag is written.
    pub fn update_check(&mut self) {
        let us = self.side_to_move();
        let attacked = self.is_square_attacked(self.king_square(us), !us);
        self.set_in_check(attacked);
    }

    fn is_attacked_at(&self, index: usize, by: Color) -> bool {
        // An attacking pawn stands one step behind the target, from its own
        // point of view, and one file to either side.
        let pawn = Piece::new(PieceKind::Pawn, by);
        let behind = -by.pawn_push();
        if [behind + EAST, behind + WEST]
            .into_iter()
            .any(|offset| self.cell(step(index, offset)) == Cell::Occupied(pawn))
        {
            return true;
        }

        if self.any_step_holds(index, &KNIGHT_OFFSETS, Piece::new(PieceKind::Knight, by)) {
            return true;
        }
        if self.any_step_holds(index, &KING_OFFSETS, Piece::new(PieceKind::King, by)) {
            return true;
        }

        self.any_ray_hits(index, &ROOK_DIRECTIONS, by, PieceKind::Rook)
            || self.any_ray_hits(index, &BISHOP_DIRECTIONS, by, PieceKind::Bishop)
    }

    fn any_step_holds(&self, index: usize, offsets: &[isize], piece: Piece) -> bool {
        offsets
            .iter()
            .any(|&offset| self.cell(step(index, offset)) == Cell::Occupied(piece))
    }

    /// Walk each direction to its first non-empty cell and report whether
    /// any of those blockers is a `slider` or queen of color `by`.
    fn any_ray_hits(&self, index: usize, directions: &[isize], by: Color, slider: PieceKind) -> bool {
        directions.iter().any(|&dir| {
            let mut target = step(index, dir);
            loop {
                match self.cell(target) {
                    Cell::Empty => target = step(target, dir),
                    Cell::Occupied(piece) => {
                        return piece.color() == by
                            && (piece.kind() == slider || piece.kind() == PieceKind::Queen);
                    }
                    Cell::OffBoard => return false,
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::color::Color;
    use crate::square::Square;

    fn board(fen: &str) -> Board {
        fen.parse().unwrap()
    }

    #[test]
    fn starting_position_attacks() {
        let b = Board::starting_position();
        // Third rank is covered by White's pawns and knights.
        for sq in [Square::A3, Square::C3, Square::F3, Square::H3] {
            assert!(b.is_square_attacked(sq, Color::White), "{sq}");
        }
        assert!(!b.is_square_attacked(Square::E4, Color::White));
        assert!(!b.is_square_attacked(Square::E4, Color::Black));
        assert!(b.is_square_attacked(Square::F6, Color::Black));
    }

    #[test]
    fn pawn_attacks_are_directional() {
        let b = board("4k3/8/8/8/4p3/8/3P4/4K3 w - - 0 1");
        // White pawn on d2 hits c3 and e3, not c1/e1.
        assert!(b.is_square_attacked(Square::C3, Color::White));
        assert!(b.is_square_attacked(Square::E3, Color::White));
        assert!(!b.is_square_attacked(Square::D3, Color::White));
        // Black pawn on e4 hits d3 and f3.
        assert!(b.is_square_attacked(Square::D3, Color::Black));
        assert!(b.is_square_attacked(Square::F3, Color::Black));
        assert!(!b.is_square_attacked(Square::E5, Color::Black));
    }

    #[test]
    fn rays_stop_at_blockers() {
        let b = board("4k3/8/8/8/R2p3q/8/8/4K3 w - - 0 1");
        assert!(b.is_square_attacked(Square::C4, Color::White));
        assert!(b.is_square_attacked(Square::D4, Color::White));
        assert!(!b.is_square_attacked(Square::E4, Color::White));
        assert!(b.is_square_attacked(Square::E4, Color::Black));
        // Queen on h4 along the diagonal to e1.
        assert!(b.is_square_attacked(Square::E1, Color::Black));
    }

    #[test]
    fn rays_do_not_wrap_around_the_edge() {
        // Rook on h3 must not reach a4 by running off the h-file.
        let b = board("4k3/8/8/8/8/7R/8/4K3 w - - 0 1");
        assert!(!b.is_square_attacked(Square::A4, Color::White));
        assert!(b.is_square_attacked(Square::A3, Color::White));
    }

    #[test]
    fn knight_and_king_steps() {
        let b = board("4k3/8/8/8/8/8/8/N3K3 w - - 0 1");
        assert!(b.is_square_attacked(Square::B3, Color::White));
        assert!(b.is_square_attacked(Square::C2, Color::White));
        assert!(!b.is_square_attacked(Square::H2, Color::White));
        assert!(b.is_square_attacked(Square::D2, Color::White));
        assert!(b.is_square_attacked(Square::D7, Color::Black));
    }

    #[test]
    fn update_check_only_touches_the_flag() {
        let mut b = board("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
        let before = b.clone();
        b.update_check();
        assert!(b.in_check());
        assert_eq!(b, before);
    }
}
