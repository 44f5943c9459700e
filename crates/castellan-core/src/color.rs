//! Side colors and the per-side board geometry derived from them.

use std::fmt;
use std::ops::Not;

use crate::rank::Rank;

/// The side a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Mailbox offset of a single pawn step for this side.
    #[inline]
    pub(crate) const fn pawn_push(self) -> isize {
        match self {
            Color::White => 10,
            Color::Black => -10,
        }
    }

    /// Rank this side's pawns start on (and may double-push from).
    #[inline]
    pub const fn pawn_rank(self) -> Rank {
        match self {
            Color::White => Rank::Rank2,
            Color::Black => Rank::Rank7,
        }
    }

    /// Rank on which this side's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> Rank {
        match self {
            Color::White => Rank::Rank8,
            Color::Black => Rank::Rank1,
        }
    }

    /// Parse the FEN active-color field.
    pub fn from_fen(s: &str) -> Option<Color> {
        match s {
            "w" => Some(Color::White),
            "b" => Some(Color::Black),
            _ => None,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "w"),
            Color::Black => write!(f, "b"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;
    use crate::rank::Rank;

    #[test]
    fn flip_and_not_agree() {
        for color in Color::ALL {
            assert_eq!(!color, color.flip());
            assert_eq!(color.flip().flip(), color);
        }
    }

    #[test]
    fn pawn_geometry_is_mirrored() {
        assert_eq!(Color::White.pawn_push(), -Color::Black.pawn_push());
        assert_eq!(Color::White.pawn_rank(), Rank::Rank2);
        assert_eq!(Color::Black.pawn_rank(), Rank::Rank7);
        assert_eq!(Color::White.promotion_rank(), Rank::Rank8);
        assert_eq!(Color::Black.promotion_rank(), Rank::Rank1);
    }

    #[test]
    fn fen_field_roundtrip() {
        for color in Color::ALL {
            assert_eq!(Color::from_fen(&color.to_string()), Some(color));
        }
        assert_eq!(Color::from_fen("x"), None);
        assert_eq!(Color::from_fen("W"), None);
    }
}
