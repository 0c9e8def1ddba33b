use super::super::{Board, Color, Move, MoveList, Piece, Square, EMPTY};

/// Promotion always goes to a queen; under-promotions are never generated.
const PROMOTION_PIECE: Piece = Piece::Queen;

#[inline]
const fn is_start_rank(sq: Square, us: Color) -> bool {
    match us {
        Color::White => sq.rank() == 1,
        Color::Black => sq.rank() == 6,
    }
}

#[inline]
const fn is_promotion_rank(sq: Square, us: Color) -> bool {
    match us {
        Color::White => sq.rank() == 7,
        Color::Black => sq.rank() == 0,
    }
}

#[inline]
fn push_pawn_move(from: Square, to: Square, us: Color, moves: &mut MoveList) {
    if is_promotion_rank(to, us) {
        moves.push(Move::promotion(from, to, PROMOTION_PIECE));
    } else {
        moves.push(Move::new(from, to));
    }
}

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, us: Color, moves: &mut MoveList) {
        let forward = us.pawn_forward();

        if let Some(one) = from.offset(forward) {
            if self.is_empty(one) {
                push_pawn_move(from, one, us, moves);

                if is_start_rank(from, us) {
                    if let Some(two) = one.offset(forward) {
                        if self.is_empty(two) {
                            moves.push(Move::new(from, two));
                        }
                    }
                }
            }
        }

        for side in [-1, 1] {
            let Some(to) = from.offset(forward + side) else {
                continue;
            };
            if to.file_distance(from) != 1 {
                continue;
            }

            let target = self.code_at(to);
            if target != EMPTY && Color::of_code(target) != Some(us) {
                push_pawn_move(from, to, us, moves);
            } else if target == EMPTY && self.en_passant == Some(to) {
                moves.push(Move::en_passant(from, to));
            }
        }
    }
}
