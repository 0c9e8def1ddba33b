//! Search tests to verify the engine finds correct moves in various positions.

use mailbox_chess::board::{Board, BoardBuilder, CastlingRights, Color, Piece, Square};
use mailbox_chess::config::EngineConfig;
use mailbox_chess::search::{Engine, MATE_SCORE};

fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

fn engine() -> Engine {
    Engine::with_config(EngineConfig {
        tt_capacity: 1 << 16,
        ..EngineConfig::default()
    })
}

/// Back rank: Qe8# with the black king boxed in by its own pawns.
fn back_rank() -> Board {
    BoardBuilder::new()
        .piece(sq("g8"), Color::Black, Piece::King)
        .piece(sq("f7"), Color::Black, Piece::Pawn)
        .piece(sq("g7"), Color::Black, Piece::Pawn)
        .piece(sq("h7"), Color::Black, Piece::Pawn)
        .piece(sq("e1"), Color::White, Piece::Queen)
        .piece(sq("h1"), Color::White, Piece::King)
        .build()
}

/// Test that the engine finds a simple mate in 1
#[test]
fn finds_mate_in_one_back_rank() {
    let mut board = back_rank();
    let mut engine = engine();

    let best = engine.search(&mut board, 3).expect("should find a move");
    assert_eq!(best.to_string(), "e1e8", "should find Qe8# (back rank mate)");
    assert!(engine.last_score().unwrap() > MATE_SCORE);
}

/// Scholar's mate: Qxf7#
#[test]
fn finds_scholars_mate() {
    let mut board = Board::start_position();
    for (from, to) in [
        ("e2", "e4"),
        ("e7", "e5"),
        ("f1", "c4"),
        ("b8", "c6"),
        ("d1", "h5"),
        ("g8", "f6"),
    ] {
        let m = board.find_legal_move(sq(from), sq(to)).expect("legal");
        board.make_move(m);
    }
    let mut engine = engine();

    let best = engine.search(&mut board, 3).expect("should find a move");
    assert_eq!(best.to_string(), "h5f7", "should find Qxf7#");

    board.make_move(best);
    assert!(board.is_game_over());
    assert!(board.is_in_check(Color::Black));
}

/// Test that the engine takes a hanging queen
#[test]
fn captures_free_queen() {
    let mut board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("a1"), Color::White, Piece::Rook)
        .piece(sq("a7"), Color::Black, Piece::Queen)
        .piece(sq("h8"), Color::Black, Piece::King)
        .piece(sq("h7"), Color::Black, Piece::Pawn)
        .piece(sq("g7"), Color::Black, Piece::Pawn)
        .build();
    let mut engine = engine();

    let best = engine.search(&mut board, 3).expect("should find a move");
    assert_eq!(best.to_string(), "a1a7");
}

/// Test that the engine does not hang its queen for a defended pawn
#[test]
fn avoids_defended_pawn() {
    let mut board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("d1"), Color::White, Piece::Queen)
        .piece(sq("d6"), Color::Black, Piece::Pawn)
        .piece(sq("e7"), Color::Black, Piece::Pawn)
        .piece(sq("e8"), Color::Black, Piece::King)
        .side_to_move(Color::White)
        .castling(CastlingRights::none())
        .build();
    let mut engine = engine();

    let best = engine.search(&mut board, 3).expect("should find a move");
    assert_ne!(best.to_string(), "d1d6", "Qxd6 loses the queen to exd6");
}

/// Promotes by capturing the rook guarding the queening square
#[test]
fn promotes_with_capture() {
    let mut board = BoardBuilder::new()
        .piece(sq("b7"), Color::White, Piece::Pawn)
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("a8"), Color::Black, Piece::Rook)
        .piece(sq("h5"), Color::Black, Piece::King)
        .build();
    let mut engine = engine();

    let best = engine.search(&mut board, 3).expect("should find a move");
    assert_eq!(best.to_string(), "b7a8q");
}

#[test]
fn search_is_deterministic() {
    let mut board = Board::start_position();
    let e4 = board.find_legal_move(sq("e2"), sq("e4")).unwrap();
    board.make_move(e4);

    let first = engine().search(&mut board, 3);
    let second = engine().search(&mut board, 3);
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn search_leaves_board_untouched() {
    let mut board = back_rank();
    let before = board.clone();
    let mut engine = engine();

    engine.search(&mut board, 2);
    assert_eq!(board, before);
    assert_eq!(board.history_len(), 0);
}

#[test]
fn returned_move_is_legal() {
    let mut board = Board::start_position();
    let mut engine = Engine::with_config(EngineConfig {
        default_depth: 3,
        tt_capacity: 1 << 16,
        ..EngineConfig::default()
    });

    let best = engine.choose_move(&mut board).expect("should find a move");
    assert!(board.legal_moves().contains(&best));
    assert!(engine.nodes() > 0);
}

#[test]
fn endgame_extends_depth() {
    // Same request, but the lone rook ending is searched two plies deeper.
    let mut board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("a1"), Color::White, Piece::Rook)
        .piece(sq("e8"), Color::Black, Piece::King)
        .build();
    assert!(board.is_endgame());

    let mut plain = Engine::with_config(EngineConfig {
        tt_capacity: 1 << 16,
        endgame_extension: 0,
        ..EngineConfig::default()
    });
    let mut extended = engine();

    plain.search(&mut board, 2);
    extended.search(&mut board, 2);
    assert!(extended.nodes() > plain.nodes());
}
