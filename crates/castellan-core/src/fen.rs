//! FEN string parsing and serialization for [`Board`].

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::file::File;
use crate::piece::Piece;
use crate::rank::Rank;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount {
                found: ranks.len(),
            });
        }

        let mut board = Board::empty();

        // FEN ranks run from 8 down to 1.
        for ((rank_index, rank_str), rank) in ranks.iter().enumerate().zip(Rank::ALL.into_iter().rev()) {
            let mut files = File::ALL.into_iter();
            let mut length = 0usize;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    length += digit as usize;
                    // Overlong ranks are reported below, after the count is known.
                    files.nth(digit as usize - 1);
                } else {
                    let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar {
                        character: c,
                    })?;
                    length += 1;
                    let file = files.next().ok_or(FenError::BadRankLength {
                        rank_index,
                        length,
                    })?;
                    board.put_piece(Square::new(rank, file), piece);
                }
            }

            if length != 8 {
                return Err(FenError::BadRankLength { rank_index, length });
            }
        }

        let side_to_move = Color::from_fen(fields[1]).ok_or_else(|| FenError::InvalidColor {
            found: fields[1].to_string(),
        })?;
        board.set_side_to_move(side_to_move);

        board.set_castling(CastleRights::from_fen(fields[2])?);

        let en_passant = if fields[3] == "-" {
            None
        } else {
            Some(
                Square::from_algebraic(fields[3]).ok_or_else(|| FenError::InvalidEnPassant {
                    found: fields[3].to_string(),
                })?,
            )
        };
        board.set_en_passant(en_passant);

        let halfmove_clock = fields[4].parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
            field: "halfmove clock",
            found: fields[4].to_string(),
        })?;
        board.set_halfmove_clock(halfmove_clock);

        let fullmove_number = fields[5].parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
            field: "fullmove number",
            found: fields[5].to_string(),
        })?;
        board.set_fullmove_number(fullmove_number);

        board.validate()?;
        board.update_check();
        trace!(fen, in_check = board.in_check(), "parsed position");
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            let mut empty_count = 0u8;

            for file in File::ALL {
                match self.piece_on(Square::new(rank, file)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if rank != Rank::Rank1 {
                write!(f, "/")?;
            }
        }

        write!(f, " {} {}", self.side_to_move(), self.castling())?;

        match self.en_passant() {
            Some(sq) => write!(f, " {sq}")?,
            None => write!(f, " -")?,
        }

        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
