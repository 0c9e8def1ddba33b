use super::super::{Board, Color, Move, MoveList, Piece, Square};
use super::{leaper_targets, KING_OFFSETS};

/// One castling option: squares that must be empty, squares the king
/// crosses (origin, transit, destination) that must be safe.
struct CastlePath {
    kingside: bool,
    king_from: Square,
    king_to: Square,
    rook_home: Square,
    empty: &'static [Square],
    safe: [Square; 3],
}

const CASTLE_PATHS: [(Color, CastlePath); 4] = [
    (
        Color::White,
        CastlePath {
            kingside: true,
            king_from: Square::E1,
            king_to: Square::G1,
            rook_home: Square::H1,
            empty: &[Square::F1, Square::G1],
            safe: [Square::E1, Square::F1, Square::G1],
        },
    ),
    (
        Color::White,
        CastlePath {
            kingside: false,
            king_from: Square::E1,
            king_to: Square::C1,
            rook_home: Square::A1,
            empty: &[Square::D1, Square::C1, Square::B1],
            safe: [Square::E1, Square::D1, Square::C1],
        },
    ),
    (
        Color::Black,
        CastlePath {
            kingside: true,
            king_from: Square::E8,
            king_to: Square::G8,
            rook_home: Square::H8,
            empty: &[Square::F8, Square::G8],
            safe: [Square::E8, Square::F8, Square::G8],
        },
    ),
    (
        Color::Black,
        CastlePath {
            kingside: false,
            king_from: Square::E8,
            king_to: Square::C8,
            rook_home: Square::A8,
            empty: &[Square::D8, Square::C8, Square::B8],
            safe: [Square::E8, Square::D8, Square::C8],
        },
    ),
];

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, us: Color, moves: &mut MoveList) {
        for to in leaper_targets(from, &KING_OFFSETS, 1) {
            if Color::of_code(self.code_at(to)) != Some(us) {
                moves.push(Move::new(from, to));
            }
        }
        self.generate_castling_moves(from, us, moves);
    }

    fn generate_castling_moves(&self, from: Square, us: Color, moves: &mut MoveList) {
        let them = us.opponent();
        let rook = Piece::Rook.code(us);

        for (color, path) in &CASTLE_PATHS {
            if *color != us || path.king_from != from {
                continue;
            }
            if !self.castling_rights.has(us, path.kingside) || self.code_at(path.rook_home) != rook {
                continue;
            }
            if !path.empty.iter().all(|&sq| self.is_empty(sq)) {
                continue;
            }
            if path.safe.iter().any(|&sq| self.is_square_attacked(sq, them)) {
                continue;
            }
            moves.push(Move::castle(path.king_from, path.king_to));
        }
    }
}
