//! Transposition table for caching search results.
//!
//! A fixed-capacity, power-of-two array of slots indexed by the low bits of
//! the Zobrist hash. Replacement is depth-preferred: a slot is overwritten
//! only when empty or when the incoming search is at least as deep. There is
//! no aging, so entries survive across searches until something deeper
//! lands in their slot or the table is cleared.

use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Move;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub hash: u64,
    pub depth: u32,
    pub score: i32,
    pub bound_type: BoundType,
    pub best_move: Option<Move>,
}

pub struct TranspositionTable {
    table: Vec<Option<TTEntry>>,
    mask: usize,
    occupied: usize,
}

impl TranspositionTable {
    /// Create a table with room for `capacity` entries, rounded up to a power
    /// of two (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let num_entries = capacity.max(1).next_power_of_two();

        TranspositionTable {
            table: vec![None; num_entries],
            mask: num_entries - 1,
            occupied: 0,
        }
    }

    #[inline]
    fn index(&self, hash: u64) -> usize {
        (hash as usize) & self.mask
    }

    /// Entry stored for exactly this hash, if any.
    #[must_use]
    pub fn get(&self, hash: u64) -> Option<&TTEntry> {
        self.table[self.index(hash)]
            .as_ref()
            .filter(|entry| entry.hash == hash)
    }

    pub fn store(
        &mut self,
        hash: u64,
        depth: u32,
        score: i32,
        bound_type: BoundType,
        best_move: Option<Move>,
    ) {
        let index = self.index(hash);
        let slot = &mut self.table[index];

        match slot {
            Some(existing) if depth < existing.depth => {
                trace!(
                    "tt keeps depth {} entry over depth {} for {hash:#018x}",
                    existing.depth,
                    depth
                );
                return;
            }
            Some(_) => {}
            None => self.occupied += 1,
        }

        *slot = Some(TTEntry {
            hash,
            depth,
            score,
            bound_type,
            best_move,
        });
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn size(&self) -> usize {
        self.occupied
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.table.len()
    }

    /// Fill level in per mille (0-1000).
    #[must_use]
    pub fn fill_per_mille(&self) -> usize {
        self.occupied * 1000 / self.table.len()
    }

    /// Clear all entries from the table.
    pub fn clear(&mut self) {
        self.table.iter_mut().for_each(|slot| *slot = None);
        self.occupied = 0;
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TT_CAPACITY)
    }
}
