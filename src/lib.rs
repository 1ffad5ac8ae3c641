//! Chess board representation and rules engine: legal move generation and
//! move application, including castling, capture in passing, promotion,
//! check, checkmate, and stalemate.
//!
//! The [`Board`] owns the pieces and always exposes the precomputed legal
//! move list for the side to move; applying a move by index or by square
//! pair advances the turn and republishes the list.

mod attacks;
mod board;
mod chess_move;
mod color;
mod error;
mod file;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod position;
mod rank;

pub use board::{Board, PrettyBoard};
pub use chess_move::Move;
pub use color::Color;
pub use error::MoveError;
pub use file::File;
pub use perft::{divide, perft};
pub use piece::{Piece, PieceKind};
pub use position::Position;
pub use rank::Rank;
