//! Move ordering utilities for search.
//!
//! Order: the transposition table move, then captures by MVV-LVA
//! (most valuable victim, least valuable attacker), then quiet moves in
//! generation order.

use std::cmp::Reverse;

use super::constants::KING_ORDERING_VALUE;
use super::traits::Position;
use crate::board::{Move, MoveList, Piece};

/// Piece value used when ranking captures.
#[inline]
pub fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::King => KING_ORDERING_VALUE,
        other => other.value(),
    }
}

/// Victim value minus attacker value. En passant is pawn takes pawn; a
/// non-capture scores 0.
pub fn mvv_lva_score<P: Position + ?Sized>(board: &P, m: Move) -> i32 {
    let victim = if m.is_en_passant {
        Some(Piece::Pawn)
    } else {
        board.piece_on(m.to).map(|(_, piece)| piece)
    };
    let Some(victim) = victim else {
        return 0;
    };

    let attacker = board
        .piece_on(m.from)
        .map_or(0, |(_, piece)| piece_value(piece));

    piece_value(victim) - attacker
}

/// Captures from `moves`, best MVV-LVA first. Ties keep generation order.
pub fn sorted_captures<P: Position + ?Sized>(board: &P, moves: &[Move]) -> MoveList {
    let mut captures: Vec<(i32, Move)> = moves
        .iter()
        .filter(|&&m| board.is_capture(m))
        .map(|&m| (mvv_lva_score(board, m), m))
        .collect();
    captures.sort_by_key(|&(score, _)| Reverse(score));
    captures.into_iter().map(|(_, m)| m).collect()
}

/// Reorder `moves` for search. `hint` goes first if it is among them.
pub fn order_moves<P: Position + ?Sized>(
    board: &P,
    moves: &[Move],
    hint: Option<Move>,
) -> MoveList {
    let hint = hint.filter(|h| moves.contains(h));
    let rest = moves.iter().copied().filter(|&m| Some(m) != hint);

    let (captures, quiets): (MoveList, MoveList) = rest.partition(|&m| board.is_capture(m));

    let mut ordered = MoveList::with_capacity(moves.len());
    ordered.extend(hint);
    ordered.extend(sorted_captures(board, &captures));
    ordered.extend(quiets);
    ordered
}
