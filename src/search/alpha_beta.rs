//! Negamax alpha-beta with transposition table cutoffs.

use super::constants::{DRAW_SCORE, INF, MATE_SCORE};
use super::move_order::order_moves;
use super::traits::SearchBoard;
use crate::board::Move;
use crate::config::EngineConfig;
use crate::tt::{BoundType, TranspositionTable};

/// State for one call to `Engine::search`.
pub(crate) struct SearchContext<'a, B: SearchBoard + ?Sized> {
    pub board: &'a mut B,
    pub tt: &'a mut TranspositionTable,
    pub config: &'a EngineConfig,
    pub nodes: u64,
    /// Best move of the most recent root search.
    pub root_best: Option<Move>,
}

impl<'a, B: SearchBoard + ?Sized> SearchContext<'a, B> {
    pub fn new(board: &'a mut B, tt: &'a mut TranspositionTable, config: &'a EngineConfig) -> Self {
        SearchContext {
            board,
            tt,
            config,
            nodes: 0,
            root_best: None,
        }
    }

    /// Full-window search of the root to `depth` plies.
    pub fn search_root(&mut self, depth: u32) -> i32 {
        self.alpha_beta(depth, -INF, INF, true)
    }

    /// Score of the current position from the mover's point of view.
    pub fn alpha_beta(&mut self, depth: u32, mut alpha: i32, mut beta: i32, is_root: bool) -> i32 {
        self.nodes += 1;
        let alpha_orig = alpha;
        let hash = self.board.hash();

        let mut hint = None;
        if let Some(entry) = self.tt.get(hash) {
            hint = entry.best_move;
            if !is_root && entry.depth >= depth {
                match entry.bound_type {
                    BoundType::Exact => return entry.score,
                    BoundType::LowerBound => alpha = alpha.max(entry.score),
                    BoundType::UpperBound => beta = beta.min(entry.score),
                }
                if alpha >= beta {
                    return entry.score;
                }
            }
        }

        if depth == 0 {
            return self.quiescence(alpha, beta, self.config.quiescence_depth);
        }

        let moves = self.board.legal_moves();
        if moves.is_empty() {
            let us = self.board.side_to_move();
            return if self.board.is_in_check(us) {
                -(MATE_SCORE + depth as i32)
            } else {
                DRAW_SCORE
            };
        }

        let ordered = order_moves(&*self.board, &moves, hint);

        let mut best_score = -INF;
        let mut best_move = None;

        for m in ordered {
            self.board.apply(m);
            let score = -self.alpha_beta(depth - 1, -beta, -alpha, false);
            let undone = self.board.revert();
            debug_assert!(undone.is_ok());

            if score > best_score {
                best_score = score;
                best_move = Some(m);
            }
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }

        if is_root {
            self.root_best = best_move;
        }

        let bound = if best_score <= alpha_orig {
            BoundType::UpperBound
        } else if best_score >= beta {
            BoundType::LowerBound
        } else {
            BoundType::Exact
        };
        self.tt.store(hash, depth, best_score, bound, best_move);

        best_score
    }
}
