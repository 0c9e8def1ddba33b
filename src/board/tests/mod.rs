//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move tree node counts against known values
//! - `make_unmake.rs` - Make/undo correctness and hash fidelity
//! - `edge_cases.rs` - Castling, en passant, promotion, mate and stalemate
//! - `eval.rs` - Static evaluation
//! - `proptest.rs` - Property-based tests


use super::{Board, BoardBuilder, CastlingRights, Color, Move, Piece, Square};

/// Build a position from an eight-row diagram, a8 first. `.` marks an empty
/// square, uppercase letters are White.
pub(super) fn diagram(rows: [&str; 8], side: Color, rights: CastlingRights) -> Board {
    let mut builder = BoardBuilder::new().side_to_move(side).castling(rights);

    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), 8, "row {row} must have eight squares");
        for (file, ch) in line.chars().enumerate() {
            if ch == '.' {
                continue;
            }
            let piece = Piece::from_char(ch).expect("valid piece letter");
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let square = Square::new((row * 8 + file) as u8).expect("on the board");
            builder = builder.piece(square, color, piece);
        }
    }

    builder.build()
}

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

/// Look up a legal move by coordinates, panicking if it does not exist.
pub(super) fn legal(board: &mut Board, from: &str, to: &str) -> Move {
    board
        .find_legal_move(sq(from), sq(to))
        .unwrap_or_else(|| panic!("{from}{to} should be legal"))
}

pub(super) fn play(board: &mut Board, moves: &[&str]) {
    for uci in moves {
        let m = legal(board, &uci[0..2], &uci[2..4]);
        board.make_move(m);
    }
}
