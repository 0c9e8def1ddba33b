//! Piece and color types, plus the signed piece codes stored on the board.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Empty square in the signed piece-code array.
pub const EMPTY: i8 = 0;

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// All piece types in index order
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Piece::Pawn => 0,
            Piece::Knight => 1,
            Piece::Bishop => 2,
            Piece::Rook => 3,
            Piece::Queen => 4,
            Piece::King => 5,
        }
    }

    /// Signed board code for this piece: positive for White, negative for Black.
    #[inline]
    #[must_use]
    pub const fn code(self, color: Color) -> i8 {
        let magnitude = self.index() as i8 + 1;
        match color {
            Color::White => magnitude,
            Color::Black => -magnitude,
        }
    }

    #[inline]
    #[must_use]
    const fn from_magnitude(magnitude: i8) -> Option<Piece> {
        match magnitude {
            1 => Some(Piece::Pawn),
            2 => Some(Piece::Knight),
            3 => Some(Piece::Bishop),
            4 => Some(Piece::Rook),
            5 => Some(Piece::Queen),
            6 => Some(Piece::King),
            _ => None,
        }
    }

    /// Parse a piece from a character (p, n, b, r, q, k; case-insensitive)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// Material value in centipawns. The king carries no material.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Piece::Pawn => 100,
            Piece::Knight => 320,
            Piece::Bishop => 330,
            Piece::Rook => 500,
            Piece::Queen => 900,
            Piece::King => 0,
        }
    }
}

/// Decode a signed board code into its color and piece type.
#[inline]
#[must_use]
pub const fn decode(code: i8) -> Option<(Color, Piece)> {
    if code > 0 {
        match Piece::from_magnitude(code) {
            Some(piece) => Some((Color::White, piece)),
            None => None,
        }
    } else if code < 0 {
        match Piece::from_magnitude(-code) {
            Some(piece) => Some((Color::Black, piece)),
            None => None,
        }
    } else {
        None
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Color owning a signed board code, if the square is occupied.
    #[inline]
    #[must_use]
    pub const fn of_code(code: i8) -> Option<Color> {
        if code > 0 {
            Some(Color::White)
        } else if code < 0 {
            Some(Color::Black)
        } else {
            None
        }
    }

    /// Mailbox step a pawn of this color advances by.
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_forward(self) -> i8 {
        match self {
            Color::White => -8,
            Color::Black => 8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
