//! Rounds and per-player score maps.
//!
//! `RoundScores` is a small ordered map from `PlayerId` to score. The roster
//! is capped at a handful of players, so a `SmallVec` with linear lookup
//! beats hashing and keeps entries in roster order for display.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;

/// Inline capacity for score maps. Matches the default roster limit.
const INLINE_PLAYERS: usize = 6;

/// Round identifier, allocated from the board's counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoundId(pub u32);

impl RoundId {
    /// Create a round ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round({})", self.0)
    }
}

/// Ordered map from player to score.
///
/// Missing players read as 0.
///
/// ```
/// use card_scorer::core::{PlayerId, RoundScores};
///
/// let mut scores = RoundScores::new();
/// scores.set(PlayerId::new(1), 12);
/// scores.set(PlayerId::new(2), -3);
///
/// assert_eq!(scores.get(PlayerId::new(1)), 12);
/// assert_eq!(scores.get(PlayerId::new(9)), 0);
/// assert!(!scores.contains(PlayerId::new(9)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundScores {
    entries: SmallVec<[(PlayerId, i64); INLINE_PLAYERS]>,
}

impl RoundScores {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Score for a player, treating a missing entry as 0.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> i64 {
        self.entry(player).copied().unwrap_or(0)
    }

    /// Check whether the player has an entry.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.entry(player).is_some()
    }

    /// Insert or overwrite a player's score. New players are appended.
    pub fn set(&mut self, player: PlayerId, score: i64) {
        match self.entries.iter_mut().find(|(p, _)| *p == player) {
            Some((_, value)) => *value = score,
            None => self.entries.push((player, score)),
        }
    }

    /// Remove a player's entry, returning its score if it was present.
    pub fn remove(&mut self, player: PlayerId) -> Option<i64> {
        let pos = self.entries.iter().position(|(p, _)| *p == player)?;
        Some(self.entries.remove(pos).1)
    }

    /// Set every value to 0, keeping the keys.
    pub fn zero_all(&mut self) {
        for (_, value) in &mut self.entries {
            *value = 0;
        }
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Check whether any value is non-zero.
    #[must_use]
    pub fn has_nonzero(&self) -> bool {
        self.entries.iter().any(|(_, v)| *v != 0)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over player IDs in insertion order.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.entries.iter().map(|(p, _)| *p)
    }

    /// Iterate over `(PlayerId, score)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, i64)> + '_ {
        self.entries.iter().copied()
    }

    fn entry(&self, player: PlayerId) -> Option<&i64> {
        self.entries.iter().find(|(p, _)| *p == player).map(|(_, v)| v)
    }
}

impl FromIterator<(PlayerId, i64)> for RoundScores {
    fn from_iter<I: IntoIterator<Item = (PlayerId, i64)>>(iter: I) -> Self {
        let mut scores = Self::new();
        for (player, score) in iter {
            scores.set(player, score);
        }
        scores
    }
}

/// A committed round.
///
/// Scores are a snapshot of the pending input at commit time. The only
/// later change is pruning a removed player's entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Round {
    /// Unique identifier.
    pub id: RoundId,

    /// 1-based position in the history.
    pub round_number: u32,

    /// Per-player scores for this round.
    pub scores: RoundScores,
}

impl Round {
    /// Create a new round record.
    #[must_use]
    pub fn new(id: RoundId, round_number: u32, scores: RoundScores) -> Self {
        Self {
            id,
            round_number,
            scores,
        }
    }

    /// Score a player earned in this round (0 if absent).
    #[must_use]
    pub fn score(&self, player: PlayerId) -> i64 {
        self.scores.get(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u32) -> PlayerId {
        PlayerId::new(id)
    }

    #[test]
    fn test_set_and_overwrite() {
        let mut scores = RoundScores::new();
        scores.set(p(1), 5);
        scores.set(p(2), 7);
        scores.set(p(1), 9);

        assert_eq!(scores.len(), 2);
        assert_eq!(scores.get(p(1)), 9);
        assert_eq!(scores.get(p(2)), 7);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let scores: RoundScores = [(p(3), 1), (p(1), 2), (p(2), 3)].into_iter().collect();
        let order: Vec<_> = scores.players().collect();
        assert_eq!(order, vec![p(3), p(1), p(2)]);
    }

    #[test]
    fn test_remove() {
        let mut scores: RoundScores = [(p(1), 4), (p(2), 6)].into_iter().collect();

        assert_eq!(scores.remove(p(1)), Some(4));
        assert_eq!(scores.remove(p(1)), None);
        assert!(!scores.contains(p(1)));
        assert_eq!(scores.get(p(2)), 6);
    }

    #[test]
    fn test_zero_all_keeps_keys() {
        let mut scores: RoundScores = [(p(1), 4), (p(2), -6)].into_iter().collect();
        assert!(scores.has_nonzero());

        scores.zero_all();

        assert_eq!(scores.len(), 2);
        assert!(scores.contains(p(1)));
        assert!(scores.contains(p(2)));
        assert!(!scores.has_nonzero());
    }

    #[test]
    fn test_clear() {
        let mut scores: RoundScores = [(p(1), 4)].into_iter().collect();
        scores.clear();
        assert!(scores.is_empty());
    }

    #[test]
    fn test_spills_past_inline_capacity() {
        let scores: RoundScores = (0..10).map(|i| (p(i), i as i64)).collect();
        assert_eq!(scores.len(), 10);
        assert_eq!(scores.get(p(9)), 9);
    }

    #[test]
    fn test_round_score_missing_is_zero() {
        let round = Round::new(RoundId::new(1), 1, [(p(1), 5)].into_iter().collect());
        assert_eq!(round.score(p(1)), 5);
        assert_eq!(round.score(p(2)), 0);
        assert_eq!(format!("{}", round.id), "Round(1)");
    }

    #[test]
    fn test_round_serialization() {
        let round = Round::new(RoundId::new(4), 2, [(p(1), 5), (p(2), -1)].into_iter().collect());
        let json = serde_json::to_string(&round).unwrap();
        let deserialized: Round = serde_json::from_str(&json).unwrap();
        assert_eq!(round, deserialized);
    }
}
