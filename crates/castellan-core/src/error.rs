//! Error types for FEN parsing, board validation, move text and perft.

use crate::color::Color;

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string does not have exactly 6 space-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index as written (0 = rank 8, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// An unrecognized character appeared in the castling rights field.
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en passant field is not "-" or a valid algebraic square.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
    /// A move counter (halfmove clock or fullmove number) is not a valid number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// The field name ("halfmove clock" or "fullmove number").
        field: &'static str,
        /// The invalid string.
        found: String,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color:?}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: u32,
    },
    /// Pawns occupy the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
    /// The side that just moved left its king attacked.
    #[error("side not to move is in check")]
    OpponentInCheck,
    /// The en passant target is on the wrong rank or has no pawn behind it.
    #[error("en passant target {square} is not behind a pawn that just double-pushed")]
    InvalidEnPassant {
        /// The offending target square, in algebraic notation.
        square: String,
    },
}

/// Errors from resolving move text against a position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The text is not of the form `e2e4` or `e7e8q`.
    #[error("malformed move text: \"{text}\"")]
    Malformed {
        /// The text as given.
        text: String,
    },
    /// The text is well formed but names no legal move in this position.
    #[error("no legal move {text} in this position")]
    Illegal {
        /// The text as given.
        text: String,
    },
}

/// Errors from the perft verifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PerftError {
    /// Divide needs at least one ply to split on.
    #[error("divide requires depth >= 1")]
    ZeroDepth,
    /// The per-move subtree sum disagrees with the whole-tree count.
    #[error("perft mismatch at depth {depth}: divide total {divided}, perft {whole}")]
    Mismatch {
        /// Depth of the cross-check.
        depth: u32,
        /// Sum of the per-move subtree counts.
        divided: u64,
        /// Count from an independent whole-tree perft.
        whole: u64,
    },
}
