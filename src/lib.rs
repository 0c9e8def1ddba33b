pub mod board;
pub mod config;
pub mod search;
pub mod tt;
pub mod zobrist;

pub use board::{Board, BoardBuilder, Color, Move, Piece, Square};
pub use config::EngineConfig;
pub use search::Engine;
pub use tt::TranspositionTable;
