//! Castling rights and the fixed geometry of the four castling moves.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;
use crate::square::Square;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// One of the four castling moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Castle {
    WhiteKingSide = 0,
    WhiteQueenSide = 1,
    BlackKingSide = 2,
    BlackQueenSide = 3,
}

/// Squares involved in one castling move.
struct CastleGeometry {
    king_from: Square,
    king_to: Square,
    rook_from: Square,
    rook_to: Square,
    /// Squares between king and rook; all must be empty.
    between: &'static [Square],
    /// Squares the king crosses or lands on; none may be attacked.
    king_path: [Square; 2],
}

static GEOMETRY: [CastleGeometry; 4] = [
    CastleGeometry {
        king_from: Square::E1,
        king_to: Square::G1,
        rook_from: Square::H1,
        rook_to: Square::F1,
        between: &[Square::F1, Square::G1],
        king_path: [Square::F1, Square::G1],
    },
    CastleGeometry {
        king_from: Square::E1,
        king_to: Square::C1,
        rook_from: Square::A1,
        rook_to: Square::D1,
        between: &[Square::B1, Square::C1, Square::D1],
        king_path: [Square::D1, Square::C1],
    },
    CastleGeometry {
        king_from: Square::E8,
        king_to: Square::G8,
        rook_from: Square::H8,
        rook_to: Square::F8,
        between: &[Square::F8, Square::G8],
        king_path: [Square::F8, Square::G8],
    },
    CastleGeometry {
        king_from: Square::E8,
        king_to: Square::C8,
        rook_from: Square::A8,
        rook_to: Square::D8,
        between: &[Square::B8, Square::C8, Square::D8],
        king_path: [Square::D8, Square::C8],
    },
];

impl Castle {
    pub const ALL: [Castle; 4] = [
        Castle::WhiteKingSide,
        Castle::WhiteQueenSide,
        Castle::BlackKingSide,
        Castle::BlackQueenSide,
    ];

    #[inline]
    pub const fn new(color: Color, side: CastleSide) -> Castle {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => Castle::WhiteKingSide,
            (Color::White, CastleSide::QueenSide) => Castle::WhiteQueenSide,
            (Color::Black, CastleSide::KingSide) => Castle::BlackKingSide,
            (Color::Black, CastleSide::QueenSide) => Castle::BlackQueenSide,
        }
    }

    /// Both castles available to `color`, king side first.
    #[inline]
    pub const fn for_color(color: Color) -> [Castle; 2] {
        [
            Castle::new(color, CastleSide::KingSide),
            Castle::new(color, CastleSide::QueenSide),
        ]
    }

    #[inline]
    pub const fn color(self) -> Color {
        match self {
            Castle::WhiteKingSide | Castle::WhiteQueenSide => Color::White,
            Castle::BlackKingSide | Castle::BlackQueenSide => Color::Black,
        }
    }

    #[inline]
    pub const fn side(self) -> CastleSide {
        match self {
            Castle::WhiteKingSide | Castle::BlackKingSide => CastleSide::KingSide,
            Castle::WhiteQueenSide | Castle::BlackQueenSide => CastleSide::QueenSide,
        }
    }

    #[inline]
    fn geometry(self) -> &'static CastleGeometry {
        &GEOMETRY[self as usize]
    }

    #[inline]
    pub fn king_from(self) -> Square {
        self.geometry().king_from
    }

    #[inline]
    pub fn king_to(self) -> Square {
        self.geometry().king_to
    }

    #[inline]
    pub fn rook_from(self) -> Square {
        self.geometry().rook_from
    }

    #[inline]
    pub fn rook_to(self) -> Square {
        self.geometry().rook_to
    }

    #[inline]
    pub(crate) fn between(self) -> &'static [Square] {
        self.geometry().between
    }

    #[inline]
    pub(crate) fn king_path(self) -> [Square; 2] {
        self.geometry().king_path
    }

    /// The rights bit this castle requires.
    #[inline]
    pub const fn rights(self) -> CastleRights {
        CastleRights(1 << self as u8)
    }
}

/// Castling rights as a 4-bit field: bit 0 = WK, 1 = WQ, 2 = BK, 3 = BQ.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    pub const NONE: CastleRights = CastleRights(0);
    pub const ALL: CastleRights = CastleRights(0b1111);
    pub const WHITE_KING: CastleRights = Castle::WhiteKingSide.rights();
    pub const WHITE_QUEEN: CastleRights = Castle::WhiteQueenSide.rights();
    pub const BLACK_KING: CastleRights = Castle::BlackKingSide.rights();
    pub const BLACK_QUEEN: CastleRights = Castle::BlackQueenSide.rights();
    pub const WHITE_BOTH: CastleRights = CastleRights(0b0011);
    pub const BLACK_BOTH: CastleRights = CastleRights(0b1100);

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: CastleRights) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn insert(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }

    #[inline]
    pub const fn remove(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    /// Return `true` if the given castle is still permitted.
    #[inline]
    pub const fn allows(self, castle: Castle) -> bool {
        self.contains(castle.rights())
    }

    /// Rights lost when any move starts or ends on `sq`.
    ///
    /// A king leaving its home square forfeits both wings; a rook leaving
    /// or being captured on its corner forfeits that wing.
    #[inline]
    pub(crate) const fn revoked_by(sq: Square) -> CastleRights {
        REVOKE[sq.index()]
    }

    /// Parse the FEN castling field (`"KQkq"`, `"Kq"`, `"-"`, ...).
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }
        s.chars().try_fold(CastleRights::NONE, |rights, c| {
            let flag = match c {
                'K' => CastleRights::WHITE_KING,
                'Q' => CastleRights::WHITE_QUEEN,
                'k' => CastleRights::BLACK_KING,
                'q' => CastleRights::BLACK_QUEEN,
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
            Ok(rights.insert(flag))
        })
    }
}

const REVOKE: [CastleRights; 64] = {
    let mut table = [CastleRights::NONE; 64];
    table[Square::E1.index()] = CastleRights::WHITE_BOTH;
    table[Square::A1.index()] = CastleRights::WHITE_QUEEN;
    table[Square::H1.index()] = CastleRights::WHITE_KING;
    table[Square::E8.index()] = CastleRights::BLACK_BOTH;
    table[Square::A8.index()] = CastleRights::BLACK_QUEEN;
    table[Square::H8.index()] = CastleRights::BLACK_KING;
    table
};

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (flag, c) in [
            (CastleRights::WHITE_KING, 'K'),
            (CastleRights::WHITE_QUEEN, 'Q'),
            (CastleRights::BLACK_KING, 'k'),
            (CastleRights::BLACK_QUEEN, 'q'),
        ] {
            if self.contains(flag) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({self})")
    }
}
