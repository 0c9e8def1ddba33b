use log::error;

use super::super::{Board, Color, Piece, Square};
use super::sliders::Ray;
use super::{leaper_targets, BISHOP_DIRS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRS};

impl Board {
    /// True if any piece of `by` could move to (capture on) `square`.
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        // A pawn attacks diagonally forward, so it sits diagonally *behind*
        // the target from its own point of view.
        let pawn = Piece::Pawn.code(by);
        let back = -by.pawn_forward();
        for side in [-1, 1] {
            if let Some(from) = square.offset(back + side) {
                if from.file_distance(square) == 1 && self.code_at(from) == pawn {
                    return true;
                }
            }
        }

        let knight = Piece::Knight.code(by);
        if leaper_targets(square, &KNIGHT_OFFSETS, 2).any(|sq| self.code_at(sq) == knight) {
            return true;
        }

        let king = Piece::King.code(by);
        if leaper_targets(square, &KING_OFFSETS, 1).any(|sq| self.code_at(sq) == king) {
            return true;
        }

        let queen = Piece::Queen.code(by);
        let bishop = Piece::Bishop.code(by);
        let rook = Piece::Rook.code(by);

        BISHOP_DIRS
            .iter()
            .any(|&dir| self.first_blocker(square, dir).is_some_and(|c| c == bishop || c == queen))
            || ROOK_DIRS
                .iter()
                .any(|&dir| self.first_blocker(square, dir).is_some_and(|c| c == rook || c == queen))
    }

    /// Code of the first occupied square along a ray, if any.
    #[inline]
    fn first_blocker(&self, from: Square, dir: i8) -> Option<i8> {
        Ray::new(from, dir)
            .map(|sq| self.code_at(sq))
            .find(|&code| code != 0)
    }

    /// True if `color`'s king is attacked by the other side.
    ///
    /// A board without that king reports "not in check"; that state is an
    /// upstream invariant violation and is flagged in debug builds.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_square_attacked(king, color.opponent()),
            None => {
                error!("no {color} king on the board while testing for check");
                debug_assert!(false, "no {color} king on the board");
                false
            }
        }
    }
}
