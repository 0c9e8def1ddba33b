use super::super::{Board, Color, MoveList, Square};
use super::{BISHOP_DIRS, QUEEN_DIRS, ROOK_DIRS};
use crate::board::Move;

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    const fn directions(self) -> &'static [i8] {
        match self {
            SliderType::Bishop => &BISHOP_DIRS,
            SliderType::Rook => &ROOK_DIRS,
            SliderType::Queen => &QUEEN_DIRS,
        }
    }
}

/// Walks one ray from `from` in direction `dir`, yielding each square in turn.
///
/// The flat array wraps silently at the board edge, so every step is checked
/// by file distance as well as by bounds: a legal ray step never moves more
/// than one file.
pub(crate) struct Ray {
    current: Square,
    dir: i8,
}

impl Ray {
    #[inline]
    pub(crate) const fn new(from: Square, dir: i8) -> Self {
        Ray { current: from, dir }
    }
}

impl Iterator for Ray {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let next = self.current.offset(self.dir)?;
        if next.file_distance(self.current) > 1 {
            return None;
        }
        self.current = next;
        Some(next)
    }
}

impl Board {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        slider: SliderType,
        us: Color,
        moves: &mut MoveList,
    ) {
        for &dir in slider.directions() {
            for to in Ray::new(from, dir) {
                match Color::of_code(self.code_at(to)) {
                    None => moves.push(Move::new(from, to)),
                    Some(owner) => {
                        if owner != us {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
            }
        }
    }
}
