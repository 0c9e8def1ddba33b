//! Search engine.
//!
//! This module implements:
//! - Iterative deepening from depth 1 to the requested depth
//! - Negamax alpha-beta with transposition table cutoffs
//! - Quiescence search over captures
//! - Move ordering (TT move, MVV-LVA captures, quiet moves)
//!
//! The engine mutates the caller's board in place via make/undo and always
//! restores it before returning.
//!
//! # Example
//! ```
//! use mailbox_chess::board::Board;
//! use mailbox_chess::search::Engine;
//!
//! let mut board = Board::start_position();
//! let mut engine = Engine::new();
//! let best = engine.search(&mut board, 2);
//! assert!(best.is_some());
//! assert_eq!(board, Board::start_position());
//! ```

mod alpha_beta;
pub mod constants;
pub mod move_order;
mod quiescence;
pub mod traits;

use log::{debug, info};

pub use constants::{DRAW_SCORE, INF, MATE_SCORE};
pub use move_order::{mvv_lva_score, order_moves};
pub use traits::{Evaluate, MoveSource, Position, SearchBoard};

use self::alpha_beta::SearchContext;
use crate::board::Move;
use crate::config::EngineConfig;
use crate::tt::TranspositionTable;

/// Iterative-deepening alpha-beta engine with its own transposition table.
///
/// The table persists between searches; call [`Engine::new_game`] to drop it.
pub struct Engine {
    config: EngineConfig,
    tt: TranspositionTable,
    nodes: u64,
    best_move: Option<Move>,
    last_score: Option<i32>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Engine {
            tt: TranspositionTable::new(config.tt_capacity),
            config,
            nodes: 0,
            best_move: None,
            last_score: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Search `board` and return the best move, or `None` when the side to
    /// move has no legal move (or `depth` is 0 outside an endgame).
    ///
    /// Endgames are searched deeper, see [`EngineConfig::effective_depth`].
    /// Every iteration runs to completion and its move replaces the previous
    /// iteration's.
    pub fn search<B: SearchBoard + ?Sized>(&mut self, board: &mut B, depth: u32) -> Option<Move> {
        self.nodes = 0;
        self.best_move = None;
        self.last_score = None;

        let depth = self.config.effective_depth(depth, board.is_endgame());

        let mut ctx = SearchContext::new(board, &mut self.tt, &self.config);
        let mut score = None;

        for d in 1..=depth {
            let iteration_score = ctx.search_root(d);
            score = Some(iteration_score);

            debug!(
                "depth {d} score {iteration_score} best {} nodes {} tt {}/{}",
                ctx.root_best
                    .map_or_else(|| "none".to_string(), |m| m.to_string()),
                ctx.nodes,
                ctx.tt.size(),
                ctx.tt.capacity(),
            );
        }

        self.nodes = ctx.nodes;
        self.best_move = ctx.root_best;
        self.last_score = score;

        info!(
            "search done: depth {depth} best {:?} score {:?} nodes {}",
            self.best_move, self.last_score, self.nodes
        );

        self.best_move
    }

    /// Search at the configured default depth.
    pub fn choose_move<B: SearchBoard + ?Sized>(&mut self, board: &mut B) -> Option<Move> {
        let depth = self.config.default_depth;
        self.search(board, depth)
    }

    /// Nodes visited by the last search, quiescence included.
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Move returned by the last search.
    #[must_use]
    pub fn best_move(&self) -> Option<Move> {
        self.best_move
    }

    /// Root score of the deepest completed iteration of the last search.
    #[must_use]
    pub fn last_score(&self) -> Option<i32> {
        self.last_score
    }

    /// Number of positions currently cached.
    #[must_use]
    pub fn tt_size(&self) -> usize {
        self.tt.size()
    }

    /// Forget everything learned from earlier searches.
    pub fn new_game(&mut self) {
        self.tt.clear();
        self.nodes = 0;
        self.best_move = None;
        self.last_score = None;
    }
}

#[cfg(test)]
mod tests;
