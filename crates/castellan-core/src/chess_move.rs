//! Chess move representation.

use std::fmt;

use crate::castle_rights::Castle;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PromotionPiece {
    Knight = 0,
    Bishop = 1,
    Rook = 2,
    Queen = 3,
}

impl PromotionPiece {
    /// All promotion pieces in index order.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Knight,
        PromotionPiece::Bishop,
        PromotionPiece::Rook,
        PromotionPiece::Queen,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }

    /// Return the lowercase letter used in move text.
    pub const fn to_char(self) -> char {
        match self {
            PromotionPiece::Knight => 'n',
            PromotionPiece::Bishop => 'b',
            PromotionPiece::Rook => 'r',
            PromotionPiece::Queen => 'q',
        }
    }

    /// Parse a lowercase promotion letter.
    pub fn from_char(c: char) -> Option<PromotionPiece> {
        PromotionPiece::ALL.into_iter().find(|p| p.to_char() == c)
    }
}

/// The category of a chess move, with the data only that category carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Quiet move or ordinary capture.
    Normal,
    /// Pawn capture of a pawn that is not on the destination square.
    EnPassant,
    Promotion(PromotionPiece),
    Castling(Castle),
}

/// One ply, as a self-contained value.
///
/// A move records everything needed to apply it (mover, capture, special
/// kind) but nothing needed to take it back; the board keeps that in its
/// history stack.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
    kind: MoveKind,
}

impl Move {
    /// Null move sentinel (a1 -> a1). Never a legal move.
    pub const NULL: Move = Move {
        from: Square::A1,
        to: Square::A1,
        piece: Piece::WHITE_PAWN,
        captured: None,
        kind: MoveKind::Normal,
    };

    /// Create a normal (quiet or capture) move.
    ///
    /// # Panics
    ///
    /// Panics if `from == to`.
    pub fn new(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Move {
        assert!(from != to, "move from {from} to itself");
        Move {
            from,
            to,
            piece,
            captured,
            kind: MoveKind::Normal,
        }
    }

    /// Create an en passant capture. The victim is the opposing pawn on
    /// `from`'s rank and `to`'s file.
    ///
    /// # Panics
    ///
    /// Panics unless `piece` is a pawn stepping one file and one rank.
    pub fn new_en_passant(from: Square, to: Square, piece: Piece) -> Move {
        assert!(
            piece.kind() == PieceKind::Pawn,
            "en passant by non-pawn {piece:?}"
        );
        assert!(
            from.file().distance(to.file()) == 1 && from.rank().distance(to.rank()) == 1,
            "en passant {from}{to} is not a diagonal step"
        );
        Move {
            from,
            to,
            piece,
            captured: Some(Piece::new(PieceKind::Pawn, !piece.color())),
            kind: MoveKind::EnPassant,
        }
    }

    /// Create a promotion, with or without a capture.
    ///
    /// # Panics
    ///
    /// Panics if `from == to` or `piece` is not a pawn.
    pub fn new_promotion(
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<Piece>,
        promotion: PromotionPiece,
    ) -> Move {
        assert!(from != to, "promotion from {from} to itself");
        assert!(
            piece.kind() == PieceKind::Pawn,
            "promotion by non-pawn {piece:?}"
        );
        Move {
            from,
            to,
            piece,
            captured,
            kind: MoveKind::Promotion(promotion),
        }
    }

    /// Create a castling move. Squares and mover come from the castle itself.
    pub fn new_castle(castle: Castle) -> Move {
        Move {
            from: castle.king_from(),
            to: castle.king_to(),
            piece: Piece::new(PieceKind::King, castle.color()),
            captured: None,
            kind: MoveKind::Castling(castle),
        }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The piece standing on `from` before the move.
    #[inline]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    #[inline]
    pub const fn captured(self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.piece.color()
    }

    #[inline]
    pub const fn promotion(self) -> Option<PromotionPiece> {
        match self.kind {
            MoveKind::Promotion(promo) => Some(promo),
            _ => None,
        }
    }

    /// The colored piece that lands on `to` when promoting.
    pub const fn promoted_piece(self) -> Option<Piece> {
        match self.kind {
            MoveKind::Promotion(promo) => Some(Piece::new(promo.to_piece_kind(), self.piece.color())),
            _ => None,
        }
    }

    #[inline]
    pub const fn castle(self) -> Option<Castle> {
        match self.kind {
            MoveKind::Castling(castle) => Some(castle),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self.kind, MoveKind::Castling(_))
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Return `true` if this is the null move sentinel.
    #[inline]
    pub fn is_null(self) -> bool {
        self.from == self.to
    }

    /// Square of the pawn removed by an en passant capture.
    #[inline]
    pub const fn en_passant_victim_square(self) -> Square {
        Square::new(self.from.rank(), self.to.file())
    }

    /// Return the move in coordinate notation (`e2e4`, `e7e8q`).
    pub fn to_algebraic(self) -> String {
        self.to_string()
    }
}

impl Default for Move {
    fn default() -> Move {
        Move::NULL
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "0000");
        }
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {:?} kind={:?}", self, self.piece, self.kind)?;
        if let Some(captured) = self.captured {
            write!(f, " x{captured:?}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, MoveKind, PromotionPiece};
    use crate::castle_rights::Castle;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn quiet_pawn_push_text() {
        let mv = Move::new(Square::E2, Square::E4, Piece::WHITE_PAWN, None);
        assert_eq!(mv.to_algebraic(), "e2e4");
        assert_eq!(mv.kind(), MoveKind::Normal);
        assert!(!mv.is_capture());
        assert!(!mv.is_null());
    }

    #[test]
    fn promotion_text() {
        let mv = Move::new_promotion(Square::E7, Square::E8, Piece::WHITE_PAWN, None, PromotionPiece::Queen);
        assert_eq!(mv.to_algebraic(), "e7e8q");
        assert_eq!(mv.promotion(), Some(PromotionPiece::Queen));
        assert_eq!(mv.promoted_piece(), Some(Piece::WHITE_QUEEN));

        let mv = Move::new_promotion(
            Square::B2,
            Square::A1,
            Piece::BLACK_PAWN,
            Some(Piece::WHITE_ROOK),
            PromotionPiece::Knight,
        );
        assert_eq!(mv.to_string(), "b2a1n");
        assert_eq!(mv.promoted_piece(), Some(Piece::BLACK_KNIGHT));
        assert!(mv.is_capture());
    }

    #[test]
    fn en_passant_victim() {
        let mv = Move::new_en_passant(Square::E5, Square::D6, Piece::WHITE_PAWN);
        assert!(mv.is_en_passant());
        assert_eq!(mv.captured(), Some(Piece::BLACK_PAWN));
        assert_eq!(mv.en_passant_victim_square(), Square::D5);

        let mv = Move::new_en_passant(Square::B4, Square::C3, Piece::BLACK_PAWN);
        assert_eq!(mv.captured(), Some(Piece::WHITE_PAWN));
        assert_eq!(mv.en_passant_victim_square(), Square::C4);
    }

    #[test]
    fn castles_take_squares_from_the_table() {
        let mv = Move::new_castle(Castle::BlackQueenSide);
        assert_eq!(mv.from(), Square::E8);
        assert_eq!(mv.to(), Square::C8);
        assert_eq!(mv.piece(), Piece::BLACK_KING);
        assert_eq!(mv.castle(), Some(Castle::BlackQueenSide));
        assert_eq!(mv.to_string(), "e8c8");
        assert!(mv.is_castle());
    }

    #[test]
    fn null_move() {
        assert!(Move::NULL.is_null());
        assert!(Move::default().is_null());
        assert_eq!(Move::NULL.to_string(), "0000");
        for castle in Castle::ALL {
            assert!(!Move::new_castle(castle).is_null());
        }
    }

    #[test]
    fn promotion_letters() {
        for promo in PromotionPiece::ALL {
            assert_eq!(PromotionPiece::from_char(promo.to_char()), Some(promo));
        }
        assert_eq!(PromotionPiece::from_char('k'), None);
    }

    #[test]
    #[should_panic(expected = "to itself")]
    fn equal_squares_panic() {
        Move::new(Square::D4, Square::D4, Piece::WHITE_QUEEN, None);
    }

    #[test]
    #[should_panic(expected = "non-pawn")]
    fn knight_promotion_panics() {
        Move::new_promotion(Square::G7, Square::G8, Piece::WHITE_KNIGHT, None, PromotionPiece::Queen);
    }

    #[test]
    #[should_panic(expected = "not a diagonal step")]
    fn straight_en_passant_panics() {
        Move::new_en_passant(Square::E5, Square::E6, Piece::WHITE_PAWN);
    }

    #[test]
    fn moves_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<Move>();
    }
}
