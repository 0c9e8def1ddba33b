//! Chess board representation and game logic.
//!
//! A 64-slot mailbox of signed piece codes with make/undo, legal move
//! generation and a material + piece-square evaluator. Supports full chess
//! rules including castling and en passant; pawns promote to a queen only.
//!
//! # Example
//! ```
//! use mailbox_chess::board::Board;
//!
//! let mut board = Board::start_position();
//! let moves = board.legal_moves();
//! assert_eq!(moves.len(), 20);
//!
//! board.make_move(moves[0]);
//! board.undo_move().unwrap();
//! assert_eq!(board, Board::start_position());
//! ```

mod builder;
mod error;
mod eval;
mod make_unmake;
pub mod movegen;
mod pst;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BoardError, SquareError};
pub use eval::{evaluate, ENDGAME_MATERIAL, TEMPO_BONUS};
pub use state::{Board, GameStatus, Undo};
pub use types::{decode, CastlingRights, Color, Move, MoveList, Piece, Square, EMPTY};
