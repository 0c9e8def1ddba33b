use super::alpha_beta::SearchContext;
use super::move_order::sorted_captures;
use super::traits::SearchBoard;

impl<B: SearchBoard + ?Sized> SearchContext<'_, B> {
    /// Capture-only search past the horizon. Fail-hard: the result is
    /// clamped to `[alpha, beta]` except at the depth limit, which returns
    /// the raw stand-pat score.
    pub fn quiescence(&mut self, mut alpha: i32, beta: i32, depth_left: u32) -> i32 {
        self.nodes += 1;

        let stand_pat = self.board.evaluate();
        if depth_left == 0 {
            return stand_pat;
        }
        if stand_pat >= beta {
            return beta;
        }
        alpha = alpha.max(stand_pat);

        let moves = self.board.legal_moves();
        let captures = sorted_captures(&*self.board, &moves);

        for m in captures {
            self.board.apply(m);
            let score = -self.quiescence(-beta, -alpha, depth_left - 1);
            let undone = self.board.revert();
            debug_assert!(undone.is_ok());

            if score >= beta {
                return beta;
            }
            alpha = alpha.max(score);
        }

        alpha
    }
}
