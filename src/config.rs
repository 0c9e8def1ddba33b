//! Engine configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default transposition table capacity in entries.
pub const DEFAULT_TT_CAPACITY: usize = 1 << 20;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Depth used by `Engine::choose_move`.
    pub default_depth: u32,
    /// Transposition table slots, rounded up to a power of two.
    pub tt_capacity: usize,
    /// Capture plies searched past the nominal horizon.
    pub quiescence_depth: u32,
    /// Extra plies granted in endgames.
    pub endgame_extension: u32,
    /// The endgame extension never pushes depth past this.
    pub max_extended_depth: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            default_depth: 5,
            tt_capacity: DEFAULT_TT_CAPACITY,
            quiescence_depth: 4,
            endgame_extension: 2,
            max_extended_depth: 8,
        }
    }
}

impl EngineConfig {
    /// Depth actually searched for a request of `depth` plies.
    ///
    /// Endgames get `endgame_extension` more plies, capped at
    /// `max_extended_depth`. A request already at or past the cap is left
    /// as is.
    #[must_use]
    pub fn effective_depth(&self, depth: u32, endgame: bool) -> u32 {
        if !endgame || depth >= self.max_extended_depth {
            return depth;
        }
        (depth + self.endgame_extension).min(self.max_extended_depth)
    }
}
