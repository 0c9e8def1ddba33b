//! Zobrist hashing for chess positions.
//!
//! The key table is generated once per process from a fixed seed and shared
//! by every board. `Board::make_move`/`undo_move` keep the hash up to date
//! incrementally; [`ZobristKeys::hash_board`] is the from-scratch reference
//! they must always agree with.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Board, Color, Square};

const ZOBRIST_SEED: u64 = 1_234_567;

pub struct ZobristKeys {
    // piece_keys[square][piece_index]: 0-5 White pawn..king, 6-11 Black
    pub(crate) piece_keys: [[u64; 12]; 64],
    // present in the hash while White is to move
    pub(crate) side_key: u64,
    // indexed by the raw castling mask
    pub(crate) castle_keys: [u64; 16],
    pub(crate) ep_file_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
        let mut piece_keys = [[0; 12]; 64];
        let mut castle_keys = [0; 16];
        let mut ep_file_keys = [0; 8];

        for square in &mut piece_keys {
            for key in square.iter_mut() {
                *key = rng.gen();
            }
        }

        let side_key = rng.gen();

        for key in &mut castle_keys {
            *key = rng.gen();
        }

        for key in &mut ep_file_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            side_key,
            castle_keys,
            ep_file_keys,
        }
    }

    /// Key for a signed piece code standing on `square`. Empty squares hash to 0.
    #[inline]
    #[must_use]
    pub fn piece(&self, square: Square, code: i8) -> u64 {
        match piece_index(code) {
            Some(idx) => self.piece_keys[square.index()][idx],
            None => 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn side(&self, side_to_move: Color) -> u64 {
        match side_to_move {
            Color::White => self.side_key,
            Color::Black => 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn castling(&self, mask: u8) -> u64 {
        self.castle_keys[usize::from(mask & 0xF)]
    }

    /// Key for the en passant file; no target square contributes nothing.
    #[inline]
    #[must_use]
    pub fn en_passant(&self, target: Option<Square>) -> u64 {
        target.map_or(0, |sq| self.ep_file_keys[usize::from(sq.file())])
    }

    /// Recompute a board's hash from scratch.
    #[must_use]
    pub fn hash_board(&self, board: &Board) -> u64 {
        let mut hash = 0;
        for (square, &code) in Square::all().zip(board.squares().iter()) {
            hash ^= self.piece(square, code);
        }

        hash ^= self.side(board.side_to_move());
        hash ^= self.castling(board.castling_rights().as_u8());
        hash ^= self.en_passant(board.en_passant());
        hash
    }
}

/// Process-wide key table, built on first use.
pub static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

#[inline]
fn piece_index(code: i8) -> Option<usize> {
    match code {
        1..=6 => Some(code as usize - 1),
        -6..=-1 => Some(6 + (-code) as usize - 1),
        _ => None,
    }
}
