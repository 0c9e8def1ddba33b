//! Core chess types.
//!
//! - `Piece` and `Color`, plus the signed piece codes the board stores
//! - `Square` - mailbox index (a8 = 0, h1 = 63)
//! - `Move` and `MoveList`
//! - `CastlingRights` - 4-bit castling mask

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveList};
pub use piece::{decode, Color, Piece, EMPTY};
pub use square::Square;
