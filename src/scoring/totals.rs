//! Incremental per-player running totals.
//!
//! Updated once per committed round, so final totals are O(1) to read
//! instead of re-summing the history on every render. A removed player's
//! total is dropped along with their history entries.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;
use crate::core::round::Round;

/// Running total per player through the last committed round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningTotals {
    totals: FxHashMap<PlayerId, i64>,
}

impl RunningTotals {
    /// Create empty totals.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from a full history.
    pub fn from_rounds<'a, I>(rounds: I) -> Self
    where
        I: IntoIterator<Item = &'a Round>,
    {
        let mut totals = Self::new();
        for round in rounds {
            totals.record(round);
        }
        totals
    }

    /// Fold one committed round into the totals.
    pub fn record(&mut self, round: &Round) {
        for (player, score) in round.scores.iter() {
            let total = self.totals.entry(player).or_insert(0);
            *total = total.saturating_add(score);
        }
    }

    /// Total for a player; 0 if they never scored.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> i64 {
        self.totals.get(&player).copied().unwrap_or(0)
    }

    /// Drop a player's total.
    pub fn remove(&mut self, player: PlayerId) {
        self.totals.remove(&player);
    }

    /// Drop every total.
    pub fn clear(&mut self) {
        self.totals.clear();
    }

    /// Number of players with a recorded total.
    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Check if no totals are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}
