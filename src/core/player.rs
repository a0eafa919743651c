//! Player identification and roster entries.
//!
//! ## PlayerId
//!
//! Opaque identifier handed out by the board from a monotonic counter.
//! Ids are never reused, even after `reset_all`.
//!
//! ## Initials
//!
//! Short display label, trimmed, truncated and upper-cased on creation.

use serde::{Deserialize, Serialize};

/// Player identifier.
///
/// Allocated by [`Scoreboard`](crate::core::Scoreboard); the raw value carries
/// no meaning beyond uniqueness and creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a player ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

/// Normalized player initials.
///
/// ```
/// use card_scorer::core::Initials;
///
/// let initials = Initials::normalize("  jdoe  ", 5).unwrap();
/// assert_eq!(initials.as_str(), "JDOE");
///
/// // Longer input is cut to the limit.
/// assert_eq!(Initials::normalize("abcdefg", 5).unwrap().as_str(), "ABCDE");
///
/// // Blank input is rejected.
/// assert!(Initials::normalize("   ", 5).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Initials(String);

impl Initials {
    /// Normalize raw text into initials.
    ///
    /// Upper-cased first, then clipped to `max_len` characters and trimmed.
    /// Upper-casing can expand a character (`ß` becomes `SS`), so clipping
    /// last keeps the stored width within `max_len`. Returns `None` when
    /// nothing is left.
    #[must_use]
    pub fn normalize(raw: &str, max_len: usize) -> Option<Self> {
        let upper = raw.trim_start().to_uppercase();
        let clipped: String = upper.chars().take(max_len).collect();
        let trimmed = clipped.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    /// Borrow the initials as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters, for column sizing.
    #[must_use]
    pub fn width(&self) -> usize {
        self.0.chars().count()
    }
}

impl std::fmt::Display for Initials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A roster entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier.
    pub id: PlayerId,

    /// Display initials.
    pub initials: Initials,
}

impl Player {
    /// Create a new player.
    #[must_use]
    pub fn new(id: PlayerId, initials: Initials) -> Self {
        Self { id, initials }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let id = PlayerId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "Player(7)");
        assert!(PlayerId::new(1) < PlayerId::new(2));
    }

    #[test]
    fn test_initials_uppercase() {
        let initials = Initials::normalize("ab", 5).unwrap();
        assert_eq!(initials.as_str(), "AB");
        assert_eq!(initials.width(), 2);
    }

    #[test]
    fn test_initials_trim() {
        assert_eq!(Initials::normalize("\t xy \n", 5).unwrap().as_str(), "XY");
    }

    #[test]
    fn test_initials_truncate() {
        assert_eq!(Initials::normalize("abcdefgh", 5).unwrap().as_str(), "ABCDE");
        assert_eq!(Initials::normalize("abcdefgh", 2).unwrap().as_str(), "AB");
    }

    #[test]
    fn test_initials_inner_space_then_trim() {
        // "ab  cd" clipped to 3 is "ab " which trims to "AB".
        assert_eq!(Initials::normalize("ab  cd", 3).unwrap().as_str(), "AB");
    }

    #[test]
    fn test_initials_expanding_uppercase_stays_within_limit() {
        let initials = Initials::normalize("ßßßßß", 5).unwrap();
        assert_eq!(initials.as_str(), "SSSSS");
        assert_eq!(initials.width(), 5);

        let initials = Initials::normalize("aß", 2).unwrap();
        assert_eq!(initials.as_str(), "AS");
    }

    #[test]
    fn test_initials_empty() {
        assert!(Initials::normalize("", 5).is_none());
        assert!(Initials::normalize("     ", 5).is_none());
        assert!(Initials::normalize("abc", 0).is_none());
    }

    #[test]
    fn test_initials_display() {
        let initials = Initials::normalize("qz", 5).unwrap();
        assert_eq!(format!("{}", initials), "QZ");
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new(PlayerId::new(3), Initials::normalize("kb", 5).unwrap());
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
