//! Capabilities the search needs from a position.
//!
//! The engine is written against these traits rather than against
//! [`Board`] directly, so any position type that can apply and revert moves,
//! enumerate legal moves and score itself can be searched.

use crate::board::{Board, BoardError, Color, Move, MoveList, Piece, Square};

/// Mutable position with an undo history.
pub trait Position {
    /// Apply a legal move.
    fn apply(&mut self, m: Move);

    /// Take back the most recently applied move.
    fn revert(&mut self) -> Result<Move, BoardError>;

    fn hash(&self) -> u64;

    fn side_to_move(&self) -> Color;

    fn piece_on(&self, square: Square) -> Option<(Color, Piece)>;

    /// True when `m` removes an enemy piece, en passant included.
    fn is_capture(&self, m: Move) -> bool {
        m.is_en_passant || self.piece_on(m.to).is_some()
    }
}

/// Legal move enumeration and king safety.
pub trait MoveSource {
    fn legal_moves(&mut self) -> MoveList;

    fn is_in_check(&self, color: Color) -> bool;
}

/// Static scoring, from the side to move's perspective.
pub trait Evaluate {
    fn evaluate(&self) -> i32;

    fn is_endgame(&self) -> bool;
}

/// Everything the engine needs.
pub trait SearchBoard: Position + MoveSource + Evaluate {}

impl<T: Position + MoveSource + Evaluate + ?Sized> SearchBoard for T {}

impl Position for Board {
    #[inline]
    fn apply(&mut self, m: Move) {
        self.make_move(m);
    }

    #[inline]
    fn revert(&mut self) -> Result<Move, BoardError> {
        self.undo_move()
    }

    #[inline]
    fn hash(&self) -> u64 {
        self.zobrist_hash()
    }

    #[inline]
    fn side_to_move(&self) -> Color {
        Board::side_to_move(self)
    }

    #[inline]
    fn piece_on(&self, square: Square) -> Option<(Color, Piece)> {
        self.piece_at(square)
    }

    #[inline]
    fn is_capture(&self, m: Move) -> bool {
        Board::is_capture(self, m)
    }
}

impl MoveSource for Board {
    #[inline]
    fn legal_moves(&mut self) -> MoveList {
        Board::legal_moves(self)
    }

    #[inline]
    fn is_in_check(&self, color: Color) -> bool {
        Board::is_in_check(self, color)
    }
}

impl Evaluate for Board {
    #[inline]
    fn evaluate(&self) -> i32 {
        Board::evaluate(self)
    }

    #[inline]
    fn is_endgame(&self) -> bool {
        Board::is_endgame(self)
    }
}
