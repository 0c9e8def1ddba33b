//! Move type and move list.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

/// A move as produced by the move generator.
///
/// Moves are plain values: two moves are equal iff every field matches.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
    pub is_en_passant: bool,
    pub is_castling: bool,
}

impl Move {
    /// Create an ordinary move (quiet or capture).
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            is_en_passant: false,
            is_castling: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn promotion(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            promotion: Some(piece),
            is_en_passant: false,
            is_castling: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            is_en_passant: true,
            is_castling: false,
        }
    }

    /// A castling move, expressed as the king's two-square step.
    #[inline]
    #[must_use]
    pub const fn castle(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            is_en_passant: false,
            is_castling: true,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self}")?;
        if self.is_en_passant {
            write!(f, " ep")?;
        }
        if self.is_castling {
            write!(f, " castle")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion {
            write!(f, "{}", piece.to_char())?;
        }
        Ok(())
    }
}

/// Moves produced by the generator, in generation order.
pub type MoveList = Vec<Move>;
