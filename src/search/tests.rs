//! Engine tests, plus tests that drive `SearchContext` directly to check
//! table cutoffs and the quiescence bounds.

use super::alpha_beta::SearchContext;
use super::*;
use crate::board::{Board, BoardBuilder, Color, Piece, Square};
use crate::tt::BoundType;

fn small_engine() -> Engine {
    Engine::with_config(EngineConfig {
        tt_capacity: 1 << 14,
        ..EngineConfig::default()
    })
}

#[test]
fn test_search_restores_board() {
    let mut board = Board::start_position();
    let mut engine = small_engine();

    let best = engine.search(&mut board, 3);
    assert!(best.is_some());
    assert_eq!(board, Board::start_position());
    assert!(engine.nodes() > 0);
    assert!(engine.tt_size() > 0);
    assert_eq!(engine.best_move(), best);
}

#[test]
fn test_no_moves_returns_none() {
    // Black is stalemated.
    let mut board = BoardBuilder::new()
        .piece(Square::A8, Color::Black, Piece::King)
        .piece("c7".parse().unwrap(), Color::White, Piece::Queen)
        .piece("c6".parse().unwrap(), Color::White, Piece::King)
        .side_to_move(Color::Black)
        .build();
    let mut engine = small_engine();

    assert_eq!(engine.search(&mut board, 3), None);
    assert_eq!(engine.last_score(), Some(DRAW_SCORE));
}

#[test]
fn test_mated_side_sees_mate_score() {
    let mut board = Board::start_position();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        let m = board
            .find_legal_move(from.parse().unwrap(), to.parse().unwrap())
            .unwrap();
        board.make_move(m);
    }
    let mut engine = small_engine();

    assert_eq!(engine.search(&mut board, 2), None);
    assert!(engine.last_score().unwrap() <= -MATE_SCORE);
}

#[test]
fn test_new_game_clears_table() {
    let mut board = Board::start_position();
    let mut engine = small_engine();
    engine.search(&mut board, 2);
    assert!(engine.tt_size() > 0);

    engine.new_game();
    assert_eq!(engine.tt_size(), 0);
    assert_eq!(engine.nodes(), 0);
    assert_eq!(engine.best_move(), None);
}

#[test]
fn test_zero_depth_searches_nothing() {
    let mut board = Board::start_position();
    let mut engine = small_engine();

    assert_eq!(engine.search(&mut board, 0), None);
    assert_eq!(engine.nodes(), 0);
}

// ============================================================================
// Quiescence
// ============================================================================

#[test]
fn test_quiescence_stand_pat_fails_high() {
    let mut board = Board::start_position();
    let stand_pat = board.evaluate();
    let config = EngineConfig::default();
    let mut tt = TranspositionTable::new(64);
    let mut ctx = SearchContext::new(&mut board, &mut tt, &config);

    let beta = stand_pat - 5;
    assert_eq!(ctx.quiescence(stand_pat - 100, beta, 4), beta);
    assert_eq!(ctx.nodes, 1);
}

#[test]
fn test_quiescence_depth_limit_returns_raw_stand_pat() {
    let mut board = Board::start_position();
    let stand_pat = board.evaluate();
    let config = EngineConfig::default();
    let mut tt = TranspositionTable::new(64);
    let mut ctx = SearchContext::new(&mut board, &mut tt, &config);

    assert_eq!(ctx.quiescence(stand_pat - 100, stand_pat + 490, 0), stand_pat);
    // Below alpha: unclamped at the limit, clamped otherwise.
    let alpha = stand_pat + 100;
    assert_eq!(ctx.quiescence(alpha, alpha + 100, 0), stand_pat);
    assert_eq!(ctx.quiescence(alpha, alpha + 100, 4), alpha);
}

// ============================================================================
// Stored bounds
// ============================================================================

#[test]
fn test_root_search_stores_exact_entry() {
    let mut board = Board::start_position();
    let mut engine = small_engine();
    let depth = engine.config().default_depth.min(2);

    let best = engine.search(&mut board, depth);
    let entry = engine
        .tt
        .get(board.zobrist_hash())
        .expect("root entry stored");

    assert_eq!(entry.bound_type, BoundType::Exact);
    assert_eq!(entry.depth, depth);
    assert_eq!(entry.best_move, best);
    assert_eq!(entry.best_move, engine.best_move());
    assert_eq!(Some(entry.score), engine.last_score());
}

#[test]
fn test_fail_low_stores_upper_bound() {
    let mut board = Board::start_position();
    let hash = board.zobrist_hash();
    let config = EngineConfig::default();
    let mut tt = TranspositionTable::new(1 << 14);
    let mut ctx = SearchContext::new(&mut board, &mut tt, &config);

    let score = ctx.alpha_beta(2, 1000, 2000, false);
    assert!(score <= 1000);

    let entry = tt.get(hash).expect("entry stored");
    assert_eq!(entry.bound_type, BoundType::UpperBound);
    assert_eq!(entry.depth, 2);
}

#[test]
fn test_fail_high_stores_lower_bound() {
    let mut board = Board::start_position();
    let hash = board.zobrist_hash();
    let config = EngineConfig::default();
    let mut tt = TranspositionTable::new(1 << 14);
    let mut ctx = SearchContext::new(&mut board, &mut tt, &config);

    let score = ctx.alpha_beta(2, -2000, -1000, false);
    assert!(score >= -1000);

    let entry = tt.get(hash).expect("entry stored");
    assert_eq!(entry.bound_type, BoundType::LowerBound);
    assert!(entry.best_move.is_some());
}

// ============================================================================
// Table probes
// ============================================================================

#[test]
fn test_exact_entry_cuts_interior_node() {
    let mut board = Board::start_position();
    let hash = board.zobrist_hash();
    let config = EngineConfig::default();
    let mut tt = TranspositionTable::new(64);
    tt.store(hash, 4, 777, BoundType::Exact, None);
    let mut ctx = SearchContext::new(&mut board, &mut tt, &config);

    assert_eq!(ctx.alpha_beta(2, -INF, INF, false), 777);
    assert_eq!(ctx.nodes, 1);
}

#[test]
fn test_root_ignores_stored_score() {
    let mut board = Board::start_position();
    let hash = board.zobrist_hash();
    let config = EngineConfig::default();
    let mut tt = TranspositionTable::new(1 << 14);
    tt.store(hash, 4, 777, BoundType::Exact, None);
    let mut ctx = SearchContext::new(&mut board, &mut tt, &config);

    assert_ne!(ctx.search_root(2), 777);
    assert!(ctx.nodes > 1);
    assert!(ctx.root_best.is_some());
}

#[test]
fn test_shallow_entry_is_not_trusted() {
    let mut board = Board::start_position();
    let hash = board.zobrist_hash();
    let config = EngineConfig::default();
    let mut tt = TranspositionTable::new(1 << 14);
    tt.store(hash, 1, 777, BoundType::Exact, None);
    let mut ctx = SearchContext::new(&mut board, &mut tt, &config);

    assert_ne!(ctx.alpha_beta(2, -INF, INF, false), 777);
    assert!(ctx.nodes > 1);
    assert_eq!(tt.get(hash).map(|e| e.depth), Some(2));
}

#[test]
fn test_lower_bound_raises_alpha() {
    let mut board = Board::start_position();
    let hash = board.zobrist_hash();
    let stand_pat = board.evaluate();
    let config = EngineConfig::default();

    let mut plain_tt = TranspositionTable::new(64);
    let mut plain = SearchContext::new(&mut board, &mut plain_tt, &config);
    assert_eq!(plain.alpha_beta(0, stand_pat - 100, stand_pat + 200, false), stand_pat);

    let mut tt = TranspositionTable::new(64);
    tt.store(hash, 0, stand_pat + 40, BoundType::LowerBound, None);
    let mut ctx = SearchContext::new(&mut board, &mut tt, &config);
    assert_eq!(
        ctx.alpha_beta(0, stand_pat - 100, stand_pat + 200, false),
        stand_pat + 40
    );
}

#[test]
fn test_upper_bound_lowers_beta() {
    let mut board = Board::start_position();
    let hash = board.zobrist_hash();
    let stand_pat = board.evaluate();
    let config = EngineConfig::default();
    let mut tt = TranspositionTable::new(64);
    tt.store(hash, 0, stand_pat - 40, BoundType::UpperBound, None);
    let mut ctx = SearchContext::new(&mut board, &mut tt, &config);

    // Stand pat now fails high against the lowered beta.
    assert_eq!(
        ctx.alpha_beta(0, stand_pat - 100, stand_pat + 200, false),
        stand_pat - 40
    );
}

#[test]
fn test_collapsed_window_returns_stored_score() {
    let mut board = Board::start_position();
    let hash = board.zobrist_hash();
    let config = EngineConfig::default();

    let mut tt = TranspositionTable::new(64);
    tt.store(hash, 5, 300, BoundType::LowerBound, None);
    let mut ctx = SearchContext::new(&mut board, &mut tt, &config);
    assert_eq!(ctx.alpha_beta(2, -100, 200, false), 300);
    assert_eq!(ctx.nodes, 1);

    let mut tt = TranspositionTable::new(64);
    tt.store(hash, 5, -300, BoundType::UpperBound, None);
    let mut ctx = SearchContext::new(&mut board, &mut tt, &config);
    assert_eq!(ctx.alpha_beta(2, -100, 200, false), -300);
    assert_eq!(ctx.nodes, 1);
}
