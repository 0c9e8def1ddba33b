//! Search constants.

/// Window bound larger than any reachable score.
pub const INF: i32 = 1_000_000;

/// Base score for being checkmated. Remaining depth is added so that
/// quicker mates score higher for the winner.
pub const MATE_SCORE: i32 = 100_000;

/// Score for a stalemate.
pub const DRAW_SCORE: i32 = 0;

/// King value when ranking attackers: it is always the least attractive
/// piece to capture with.
pub const KING_ORDERING_VALUE: i32 = 20_000;
