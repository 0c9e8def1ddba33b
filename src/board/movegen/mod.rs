//! Move generation over the mailbox board.
//!
//! Pseudo-legal moves come from per-piece rules; legal moves are the
//! pseudo-legal ones that survive a make / check test / undo round trip.
//! The free functions at the bottom are the module's public face; they
//! delegate to the `Board` methods defined across the submodules.

mod attacks;
mod kings;
mod knights;
mod pawns;
mod sliders;

use self::sliders::SliderType;
use super::{decode, Board, Color, Move, MoveList, Piece, Square};

const N: i8 = -8;
const S: i8 = 8;
const E: i8 = 1;
const W: i8 = -1;
const NW: i8 = -9;
const NE: i8 = -7;
const SW: i8 = 7;
const SE: i8 = 9;

pub(crate) const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];
pub(crate) const KING_OFFSETS: [i8; 8] = [N, S, E, W, NW, NE, SW, SE];
pub(crate) const BISHOP_DIRS: [i8; 4] = [NW, NE, SW, SE];
pub(crate) const ROOK_DIRS: [i8; 4] = [N, S, E, W];
pub(crate) const QUEEN_DIRS: [i8; 8] = [NW, NE, SW, SE, N, S, E, W];

/// Squares reachable by a fixed offset table, rejecting edge wraparound by
/// bounding the file distance of each jump.
#[inline]
pub(crate) fn leaper_targets<'a>(
    from: Square,
    offsets: &'a [i8],
    max_file_distance: u8,
) -> impl Iterator<Item = Square> + 'a {
    offsets.iter().filter_map(move |&delta| {
        from.offset(delta)
            .filter(|to| to.file_distance(from) <= max_file_distance)
    })
}

impl Board {
    /// Every move obeying piece movement rules for the side to move, including
    /// moves that leave the own king in check. Castling candidates are fully
    /// vetted here (rights, empty path, no attacked king square).
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> MoveList {
        let us = self.side_to_move;
        let mut moves = MoveList::with_capacity(64);

        for (from, &code) in Square::all().zip(self.squares.iter()) {
            let Some((color, piece)) = decode(code) else {
                continue;
            };
            if color != us {
                continue;
            }

            match piece {
                Piece::Pawn => self.generate_pawn_moves(from, us, &mut moves),
                Piece::Knight => self.generate_knight_moves(from, us, &mut moves),
                Piece::Bishop => {
                    self.generate_slider_moves(from, SliderType::Bishop, us, &mut moves);
                }
                Piece::Rook => self.generate_slider_moves(from, SliderType::Rook, us, &mut moves),
                Piece::Queen => {
                    self.generate_slider_moves(from, SliderType::Queen, us, &mut moves);
                }
                Piece::King => self.generate_king_moves(from, us, &mut moves),
            }
        }
        moves
    }

    /// Legal moves for the side to move, in generation order.
    pub fn legal_moves(&mut self) -> MoveList {
        let us = self.side_to_move;
        let mut legal = self.pseudo_legal_moves();

        legal.retain(|&m| {
            self.make_move(m);
            let leaves_king_safe = !self.is_in_check(us);
            let undone = self.undo_move();
            debug_assert!(undone.is_ok());
            leaves_king_safe
        });
        legal
    }

    /// Legal moves whose origin is `from`.
    pub fn legal_moves_from(&mut self, from: Square) -> MoveList {
        let mut moves = self.legal_moves();
        moves.retain(|m| m.from == from);
        moves
    }

    /// The legal move from `from` to `to`, if there is one.
    pub fn find_legal_move(&mut self, from: Square, to: Square) -> Option<Move> {
        self.legal_moves_from(from).into_iter().find(|m| m.to == to)
    }

    /// True when `m` captures something, en passant included.
    #[inline]
    #[must_use]
    pub fn is_capture(&self, m: Move) -> bool {
        m.is_en_passant || !self.is_empty(m.to)
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves {
            self.make_move(m);
            nodes += self.perft(depth - 1);
            let undone = self.undo_move();
            debug_assert!(undone.is_ok());
        }

        nodes
    }
}

/// Candidate moves by piece rules alone.
#[must_use]
pub fn generate_pseudo_legal_moves(board: &Board) -> MoveList {
    board.pseudo_legal_moves()
}

/// Pseudo-legal moves filtered by simulate-then-check. The board is restored
/// before returning.
pub fn generate_legal_moves(board: &mut Board) -> MoveList {
    board.legal_moves()
}

/// True if a piece of `by_color` attacks `square`.
#[must_use]
pub fn square_attacked(board: &Board, square: Square, by_color: Color) -> bool {
    board.is_square_attacked(square, by_color)
}

/// True if `color`'s king is attacked.
#[must_use]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board.is_in_check(color)
}
