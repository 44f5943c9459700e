//! The chess board: piece placement, side to move, castling, en passant, check and move counters.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::BoardError;
use crate::file::File;
use crate::mailbox::{Cell, MAILBOX_LEN, empty_cells};
use crate::make_move::Undo;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

/// Pieces on the first rank of the starting position, a-file first.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete chess position state plus the history needed to take moves back.
///
/// The board is mutated in place by [`Board::play_move`] and restored by
/// [`Board::undo_move`]; after any matched sequence of the two it compares
/// equal to where it started.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Padded 10x12 mailbox, indexed by [`Square::mailbox()`].
    cells: [Cell; MAILBOX_LEN],
    /// King square for each side, indexed by [`Color::index()`].
    kings: [Square; Color::COUNT],
    /// Which side moves next.
    side_to_move: Color,
    /// Current castling rights.
    castling: CastleRights,
    /// En passant target square, if any.
    en_passant: Option<Square>,
    /// Whether the side to move is in check.
    in_check: bool,
    /// Halfmove clock for the fifty-move rule.
    halfmove_clock: u16,
    /// Fullmove number (starts at 1, incremented after Black moves).
    fullmove_number: u16,
    /// One record per move played and not yet undone.
    history: Vec<Undo>,
}

impl Board {
    /// Return a board with no pieces, White to move and no rights.
    pub(crate) fn empty() -> Board {
        Board {
            cells: empty_cells(),
            kings: [Square::E1, Square::E8],
            side_to_move: Color::White,
            castling: CastleRights::NONE,
            en_passant: None,
            in_check: false,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
            board.put_piece(Square::new(Rank::Rank1, file), Piece::new(kind, Color::White));
            board.put_piece(Square::new(Rank::Rank2, file), Piece::WHITE_PAWN);
            board.put_piece(Square::new(Rank::Rank7, file), Piece::BLACK_PAWN);
            board.put_piece(Square::new(Rank::Rank8, file), Piece::new(kind, Color::Black));
        }
        board.castling = CastleRights::ALL;
        board
    }

    /// Return the raw contents of a mailbox cell.
    #[inline]
    pub(crate) fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.mailbox()].piece()
    }

    /// Place `piece` on an empty square.
    #[inline]
    pub(crate) fn put_piece(&mut self, sq: Square, piece: Piece) {
        debug_assert!(self.piece_on(sq).is_none(), "put_piece on occupied {sq}");
        self.cells[sq.mailbox()] = Cell::Occupied(piece);
        if piece.kind() == PieceKind::King {
            self.kings[piece.color().index()] = sq;
        }
    }

    /// Clear a square, returning what stood on it.
    #[inline]
    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        std::mem::replace(&mut self.cells[sq.mailbox()], Cell::Empty).piece()
    }

    /// Move whatever stands on `from` to the empty square `to`.
    #[inline]
    pub(crate) fn move_piece(&mut self, from: Square, to: Square) {
        if let Some(piece) = self.remove_piece(from) {
            self.put_piece(to, piece);
        }
    }

    /// Return the square of the king for the given side.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.kings[color.index()]
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the current castling rights.
    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Return the en passant target square, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Return `true` if the side to move is in check.
    ///
    /// Kept current by move making and by [`Board::update_check`].
    #[inline]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    /// Return the halfmove clock.
    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    /// Return the fullmove number.
    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Number of moves played on this board that have not been undone.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    #[inline]
    pub(crate) fn set_in_check(&mut self, in_check: bool) {
        self.in_check = in_check;
    }

    #[inline]
    pub(crate) fn set_halfmove_clock(&mut self, clock: u16) {
        self.halfmove_clock = clock;
    }

    #[inline]
    pub(crate) fn set_fullmove_number(&mut self, number: u16) {
        self.fullmove_number = number;
    }

    #[inline]
    pub(crate) fn push_undo(&mut self, undo: Undo) {
        self.history.push(undo);
    }

    #[inline]
    pub(crate) fn pop_undo(&mut self) -> Option<Undo> {
        self.history.pop()
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = Square::all()
                .filter(|&sq| self.piece_on(sq).is_some_and(|p| p.is(PieceKind::King, color)))
                .count() as u32;
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }

        let pawn_on_back_rank = Square::all()
            .filter(|sq| matches!(sq.rank(), Rank::Rank1 | Rank::Rank8))
            .any(|sq| self.piece_on(sq).is_some_and(|p| p.kind() == PieceKind::Pawn));
        if pawn_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        let us = self.side_to_move;
        if self.is_square_attacked(self.king_square(!us), us) {
            return Err(BoardError::OpponentInCheck);
        }

        if let Some(ep) = self.en_passant {
            // The pawn that just double-pushed stands one rank past the target.
            let (target_rank, victim_rank) = match us {
                Color::White => (Rank::Rank6, Rank::Rank5),
                Color::Black => (Rank::Rank3, Rank::Rank4),
            };
            let victim = Square::new(victim_rank, ep.file());
            let ok = ep.rank() == target_rank
                && self.piece_on(ep).is_none()
                && self.piece_on(victim).is_some_and(|p| p.is(PieceKind::Pawn, !us));
            if !ok {
                return Err(BoardError::InvalidEnPassant {
                    square: ep.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\", history={})", self, self.history.len())
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{rank}  ")?;
            for file in File::ALL {
                let c = board
                    .piece_on(Square::new(rank, file))
                    .map_or('.', |piece| piece.fen_char());
                if file == File::FileH {
                    write!(f, "{c}")?;
                } else {
                    write!(f, "{c} ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::color::Color;
    use crate::error::BoardError;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn starting_position_validates() {
        let board = Board::starting_position();
        board.validate().unwrap();
        assert!(!board.in_check());
        assert_eq!(board.history_len(), 0);
    }

    #[test]
    fn starting_position_piece_on() {
        let board = Board::starting_position();
        assert_eq!(board.piece_on(Square::E1), Some(Piece::WHITE_KING));
        assert_eq!(board.piece_on(Square::D1), Some(Piece::WHITE_QUEEN));
        assert_eq!(board.piece_on(Square::A8), Some(Piece::BLACK_ROOK));
        assert_eq!(board.piece_on(Square::G8), Some(Piece::BLACK_KNIGHT));
        assert_eq!(board.piece_on(Square::C1), Some(Piece::WHITE_BISHOP));
        assert_eq!(board.piece_on(Square::E7), Some(Piece::BLACK_PAWN));
        assert_eq!(board.piece_on(Square::E4), None);
    }

    #[test]
    fn king_square() {
        let board = Board::starting_position();
        assert_eq!(board.king_square(Color::White), Square::E1);
        assert_eq!(board.king_square(Color::Black), Square::E8);
    }

    #[test]
    fn piece_edits_track_the_king() {
        let mut board = Board::starting_position();
        assert_eq!(board.remove_piece(Square::E2), Some(Piece::WHITE_PAWN));
        assert_eq!(board.piece_on(Square::E2), None);
        board.move_piece(Square::E1, Square::E2);
        assert_eq!(board.king_square(Color::White), Square::E2);
        assert_eq!(board.remove_piece(Square::E4), None);
    }

    #[test]
    fn validate_rejects_missing_king() {
        let mut board = Board::starting_position();
        board.remove_piece(Square::E8);
        assert_eq!(
            board.validate(),
            Err(BoardError::InvalidKingCount { color: Color::Black, count: 0 })
        );
    }

    #[test]
    fn validate_rejects_back_rank_pawn() {
        let mut board = Board::starting_position();
        board.remove_piece(Square::B1);
        board.put_piece(Square::B1, Piece::BLACK_PAWN);
        assert_eq!(board.validate(), Err(BoardError::PawnsOnBackRank));
    }

    #[test]
    fn pretty_print() {
        let board = Board::starting_position();
        let output = format!("{}", board.pretty());
        assert!(output.contains("8  r n b q k b n r"));
        assert!(output.contains("1  R N B Q K B N R"));
        assert!(output.contains("4  . . . . . . . ."));
        assert!(output.ends_with("a b c d e f g h"));
    }

    #[test]
    fn clones_are_independent() {
        let board = Board::starting_position();
        let mut copy = board.clone();
        copy.remove_piece(Square::A2);
        assert_ne!(board, copy);
        assert_eq!(board.piece_on(Square::A2), Some(Piece::WHITE_PAWN));
    }
}
