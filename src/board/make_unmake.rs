use log::trace;

use crate::zobrist::ZOBRIST;

use super::{decode, Board, BoardError, Color, Move, Piece, Square, Undo, EMPTY};

/// Rook origin and destination for a castling king move landing on `king_to`.
#[inline]
pub(crate) fn castle_rook_squares(king_to: Square) -> Option<(Square, Square)> {
    match king_to {
        Square::G1 => Some((Square::H1, Square::F1)),
        Square::C1 => Some((Square::A1, Square::D1)),
        Square::G8 => Some((Square::H8, Square::F8)),
        Square::C8 => Some((Square::A8, Square::D8)),
        _ => None,
    }
}

/// Square of the pawn removed by an en passant capture made by `mover`.
#[inline]
fn en_passant_victim(to: Square, mover: Color) -> Square {
    Square((to.0 as i8 - mover.pawn_forward()) as u8)
}

impl Board {
    fn captured_code(&self, m: Move) -> i8 {
        if m.is_en_passant {
            self.squares[en_passant_victim(m.to, self.side_to_move).index()]
        } else {
            self.squares[m.to.index()]
        }
    }

    /// Apply a legal move. Legality is not checked here; the move generator
    /// is the only source of moves this should see.
    pub fn make_move(&mut self, m: Move) {
        let us = self.side_to_move;
        let captured = self.captured_code(m);

        self.history.push(Undo {
            mv: m,
            captured,
            castling_rights: self.castling_rights,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            hash: self.hash,
        });

        let mut hash = self.hash;
        hash ^= ZOBRIST.side(us);
        hash ^= ZOBRIST.castling(self.castling_rights.as_u8());
        hash ^= ZOBRIST.en_passant(self.en_passant);

        self.en_passant = None;

        let moving = self.squares[m.from.index()];
        debug_assert!(
            Color::of_code(moving) == Some(us),
            "make_move from {} which holds no {us} piece",
            m.from
        );
        let moving_piece = decode(moving).map(|(_, piece)| piece);
        let is_pawn = moving_piece == Some(Piece::Pawn);

        if is_pawn || captured != EMPTY {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        hash ^= ZOBRIST.piece(m.from, moving);
        self.squares[m.from.index()] = EMPTY;

        if m.is_en_passant {
            let victim = en_passant_victim(m.to, us);
            hash ^= ZOBRIST.piece(victim, captured);
            self.squares[victim.index()] = EMPTY;
        } else if captured != EMPTY {
            hash ^= ZOBRIST.piece(m.to, captured);
        }

        if m.is_castling {
            if let Some((rook_from, rook_to)) = castle_rook_squares(m.to) {
                let rook = self.squares[rook_from.index()];
                hash ^= ZOBRIST.piece(rook_from, rook);
                hash ^= ZOBRIST.piece(rook_to, rook);
                self.squares[rook_from.index()] = EMPTY;
                self.squares[rook_to.index()] = rook;
            }
        }

        let placed = m.promotion.map_or(moving, |piece| piece.code(us));
        self.squares[m.to.index()] = placed;
        hash ^= ZOBRIST.piece(m.to, placed);

        match moving_piece {
            Some(Piece::King) => self.castling_rights.remove_color(us),
            Some(Piece::Rook) => self.castling_rights.remove_for_rook_square(m.from),
            _ => {}
        }
        if matches!(decode(captured), Some((_, Piece::Rook))) {
            self.castling_rights.remove_for_rook_square(m.to);
        }

        if is_pawn && m.from.0.abs_diff(m.to.0) == 16 {
            self.en_passant = Some(Square((m.from.0 + m.to.0) / 2));
        }

        if us == Color::Black {
            self.fullmove_number += 1;
        }

        let them = us.opponent();
        self.side_to_move = them;

        hash ^= ZOBRIST.side(them);
        hash ^= ZOBRIST.castling(self.castling_rights.as_u8());
        hash ^= ZOBRIST.en_passant(self.en_passant);
        self.hash = hash;
    }

    /// Take back the most recent move.
    ///
    /// Returns the move that was undone, or [`BoardError::NoHistory`] (leaving
    /// the board untouched) when nothing has been played.
    pub fn undo_move(&mut self) -> Result<Move, BoardError> {
        let Some(undo) = self.history.pop() else {
            trace!("undo_move with empty history");
            return Err(BoardError::NoHistory);
        };
        let m = undo.mv;

        self.hash = undo.hash;
        self.castling_rights = undo.castling_rights;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        let us = self.side_to_move.opponent();
        self.side_to_move = us;

        if m.is_castling {
            if let Some((rook_from, rook_to)) = castle_rook_squares(m.to) {
                self.squares[rook_from.index()] = self.squares[rook_to.index()];
                self.squares[rook_to.index()] = EMPTY;
            }
        }

        let moved = if m.is_promotion() {
            Piece::Pawn.code(us)
        } else {
            self.squares[m.to.index()]
        };

        self.squares[m.to.index()] = EMPTY;
        self.squares[m.from.index()] = moved;

        if m.is_en_passant {
            self.squares[en_passant_victim(m.to, us).index()] = undo.captured;
        } else {
            self.squares[m.to.index()] = undo.captured;
        }

        Ok(m)
    }
}
