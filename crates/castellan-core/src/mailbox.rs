//! The padded 10x12 board used by move generation.
//!
//! The 8x8 playing area sits inside a border of sentinel cells (two rows
//! above and below, one column either side), so any knight jump or ray
//! step off the board lands on a sentinel instead of wrapping around.
//!
//! ```text
//! 110 .. 119   sentinel
//! 100 .. 109   sentinel
//!  91 ..  98   rank 8   (90, 99 sentinel)
//!  ..
//!  21 ..  28   rank 1   (20, 29 sentinel)
//!  10 ..  19   sentinel
//!   0 ..   9   sentinel
//! ```

use crate::piece::Piece;

/// Number of cells in the mailbox.
pub(crate) const MAILBOX_LEN: usize = 120;

/// Marker in [`MAILBOX_TO_SQUARE`] for sentinel cells.
pub(crate) const NO_SQUARE: u8 = 0xFF;

pub(crate) const NORTH: isize = 10;
pub(crate) const SOUTH: isize = -10;
pub(crate) const EAST: isize = 1;
pub(crate) const WEST: isize = -1;

pub(crate) const KNIGHT_OFFSETS: [isize; 8] = [-21, -19, -12, -8, 8, 12, 19, 21];
pub(crate) const KING_OFFSETS: [isize; 8] = [-11, -10, -9, -1, 1, 9, 10, 11];
pub(crate) const ROOK_DIRECTIONS: [isize; 4] = [NORTH, SOUTH, EAST, WEST];
pub(crate) const BISHOP_DIRECTIONS: [isize; 4] = [NORTH + EAST, NORTH + WEST, SOUTH + EAST, SOUTH + WEST];
pub(crate) const QUEEN_DIRECTIONS: [isize; 8] = [
    NORTH,
    SOUTH,
    EAST,
    WEST,
    NORTH + EAST,
    NORTH + WEST,
    SOUTH + EAST,
    SOUTH + WEST,
];

/// Compact square index -> mailbox index.
pub(crate) const SQUARE_TO_MAILBOX: [u8; 64] = {
    let mut table = [0u8; 64];
    let mut sq = 0;
    while sq < 64 {
        table[sq] = (21 + (sq / 8) * 10 + sq % 8) as u8;
        sq += 1;
    }
    table
};

/// Mailbox index -> compact square index, or [`NO_SQUARE`] for sentinels.
pub(crate) const MAILBOX_TO_SQUARE: [u8; MAILBOX_LEN] = {
    let mut table = [NO_SQUARE; MAILBOX_LEN];
    let mut sq = 0;
    while sq < 64 {
        table[SQUARE_TO_MAILBOX[sq] as usize] = sq as u8;
        sq += 1;
    }
    table
};

/// Contents of one mailbox cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Border cell outside the 8x8 board. Never holds a piece.
    OffBoard,
    /// On-board square with nothing on it.
    Empty,
    Occupied(Piece),
}

impl Cell {
    /// Return the piece in this cell, if any.
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Occupied(piece) => Some(piece),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Step `index` by `offset`.
///
/// The two-row border keeps every knight jump and king step from an
/// on-board cell inside the 120-cell array.
#[inline]
pub(crate) const fn step(index: usize, offset: isize) -> usize {
    index.wrapping_add_signed(offset)
}

/// Return a fresh mailbox: sentinels around 64 empty squares.
pub(crate) const fn empty_cells() -> [Cell; MAILBOX_LEN] {
    let mut cells = [Cell::OffBoard; MAILBOX_LEN];
    let mut sq = 0;
    while sq < 64 {
        cells[SQUARE_TO_MAILBOX[sq] as usize] = Cell::Empty;
        sq += 1;
    }
    cells
}
