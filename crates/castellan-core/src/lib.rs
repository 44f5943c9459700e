//! Core chess rules: mailbox board representation, legal move generation,
//! reversible make/unmake, and perft verification.

mod attacks;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod file;
mod mailbox;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod rank;
mod square;

pub use board::{Board, PrettyBoard};
pub use castle_rights::{Castle, CastleRights, CastleSide};
pub use chess_move::{Move, MoveKind, PromotionPiece};
pub use color::Color;
pub use error::{BoardError, FenError, MoveError, PerftError};
pub use fen::STARTING_FEN;
pub use file::File;
pub use perft::Divide;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rank::Rank;
pub use square::Square;
