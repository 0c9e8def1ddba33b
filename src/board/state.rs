use std::fmt;

use crate::zobrist::ZOBRIST;

use super::{decode, BoardError, CastlingRights, Color, Move, Piece, Square, EMPTY};

/// Snapshot pushed by `make_move` and consumed by `undo_move`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Undo {
    pub(crate) mv: Move,
    pub(crate) captured: i8,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) hash: u64,
}

impl Undo {
    /// The move this record takes back.
    #[must_use]
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// Signed code of the captured piece, 0 if the move captured nothing.
    #[must_use]
    pub fn captured(&self) -> i8 {
        self.captured
    }
}

/// Outcome of a position from the side to move's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

/// Mailbox chess position.
///
/// One instance is mutated in place by `make_move`/`undo_move`; the undo
/// history is the only record used to walk back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [i8; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) hash: u64,
    pub(crate) history: Vec<Undo>,
}

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl Board {
    /// The standard opening layout, White to move.
    #[must_use]
    pub fn start_position() -> Self {
        let mut board = Board::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            board.squares[file] = piece.code(Color::Black);
            board.squares[8 + file] = Piece::Pawn.code(Color::Black);
            board.squares[48 + file] = Piece::Pawn.code(Color::White);
            board.squares[56 + file] = piece.code(Color::White);
        }

        board.castling_rights = CastlingRights::all();
        board.hash = board.compute_hash();
        board
    }

    /// A board with no pieces, White to move and no rights.
    #[must_use]
    pub fn empty() -> Self {
        let mut board = Board {
            squares: [EMPTY; 64],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            hash: 0,
            history: Vec::new(),
        };
        board.hash = board.compute_hash();
        board
    }

    /// Signed piece codes in mailbox order (a8 first, h1 last).
    #[inline]
    #[must_use]
    pub fn squares(&self) -> &[i8; 64] {
        &self.squares
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn zobrist_hash(&self) -> u64 {
        self.hash
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Number of moves applied since this board was built.
    #[inline]
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Most recent undo record, if any.
    #[must_use]
    pub fn last_undo(&self) -> Option<&Undo> {
        self.history.last()
    }

    #[inline]
    #[must_use]
    pub fn code_at(&self, sq: Square) -> i8 {
        self.squares[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        decode(self.squares[sq.index()])
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()] == EMPTY
    }

    /// Recompute the Zobrist hash from the current state, ignoring the cached value.
    #[must_use]
    pub fn compute_hash(&self) -> u64 {
        ZOBRIST.hash_board(self)
    }

    /// Linear scan for the king of `color`.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let target = Piece::King.code(color);
        self.squares
            .iter()
            .position(|&code| code == target)
            .map(|idx| Square(idx as u8))
    }

    /// Like [`Board::king_square`], but a missing king is an error.
    pub fn require_king(&self, color: Color) -> Result<Square, BoardError> {
        self.king_square(color)
            .ok_or(BoardError::MissingKing { color })
    }

    /// True when the side to move has no legal move (checkmate or stalemate).
    pub fn is_game_over(&mut self) -> bool {
        self.legal_moves().is_empty()
    }

    pub fn status(&mut self) -> GameStatus {
        if !self.is_game_over() {
            return GameStatus::Ongoing;
        }
        let mover = self.side_to_move;
        if self.is_in_check(mover) {
            GameStatus::Checkmate {
                winner: mover.opponent(),
            }
        } else {
            GameStatus::Stalemate
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::start_position()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.squares.chunks(8).enumerate() {
            write!(f, "{} ", 8 - row)?;
            for &code in chunk {
                let ch = match decode(code) {
                    Some((Color::White, piece)) => piece.to_char().to_ascii_uppercase(),
                    Some((Color::Black, piece)) => piece.to_char(),
                    None => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(f, "{} to move", self.side_to_move)
    }
}
