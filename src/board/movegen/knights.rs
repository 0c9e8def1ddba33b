use super::super::{Board, Color, Move, MoveList, Square};
use super::{leaper_targets, KNIGHT_OFFSETS};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, us: Color, moves: &mut MoveList) {
        for to in leaper_targets(from, &KNIGHT_OFFSETS, 2) {
            if Color::of_code(self.code_at(to)) != Some(us) {
                moves.push(Move::new(from, to));
            }
        }
    }
}
