//! Static evaluation: material plus piece-square tables, nothing else.

use super::pst::{
    BISHOP_PST, KING_EG_PST, KING_MG_PST, KNIGHT_PST, PAWN_PST, QUEEN_PST, ROOK_PST,
};
use super::{decode, Board, Color, Piece, Square};

/// Non-king material (both sides) at or below which the game counts as an endgame.
pub const ENDGAME_MATERIAL: i32 = 2600;

/// Bonus for having the move.
pub const TEMPO_BONUS: i32 = 10;

#[inline]
fn pst_bonus(piece: Piece, sq: usize, endgame: bool) -> i32 {
    match piece {
        Piece::Pawn => PAWN_PST[sq],
        Piece::Knight => KNIGHT_PST[sq],
        Piece::Bishop => BISHOP_PST[sq],
        Piece::Rook => ROOK_PST[sq],
        Piece::Queen => QUEEN_PST[sq],
        Piece::King if endgame => KING_EG_PST[sq],
        Piece::King => KING_MG_PST[sq],
    }
}

impl Board {
    /// Total non-king material on the board, both colors.
    #[must_use]
    pub fn non_king_material(&self) -> i32 {
        self.squares
            .iter()
            .filter_map(|&code| decode(code))
            .map(|(_, piece)| piece.value())
            .sum()
    }

    #[must_use]
    pub fn is_endgame(&self) -> bool {
        self.non_king_material() <= ENDGAME_MATERIAL
    }

    /// Score in centipawns from the side to move's perspective.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let endgame = self.is_endgame();
        let us = self.side_to_move;
        let mut score = 0;

        for (idx, &code) in self.squares.iter().enumerate() {
            let Some((color, piece)) = decode(code) else {
                continue;
            };

            let sq = match color {
                Color::White => idx,
                Color::Black => Square(idx as u8).flip_vertical().index(),
            };
            let piece_score = piece.value() + pst_bonus(piece, sq, endgame);

            if color == us {
                score += piece_score;
            } else {
                score -= piece_score;
            }
        }

        score + TEMPO_BONUS
    }
}

/// Free-function form of [`Board::evaluate`].
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    board.evaluate()
}
