//! Board configuration.
//!
//! The board takes a `BoardConfig` at construction:
//! - roster limit and initials length
//! - display cap for score inputs (a hint, never enforced)
//! - `HighlightPolicy` for marking the highest and lowest totals

use serde::{Deserialize, Serialize};

/// Default roster limit.
pub const DEFAULT_MAX_PLAYERS: usize = 6;

/// Default initials length.
pub const DEFAULT_MAX_INITIALS: usize = 5;

/// Default display cap for score inputs.
pub const DEFAULT_SCORE_DISPLAY_MAX: i64 = 999;

/// How ties at an extreme are highlighted.
///
/// Both policies leave an all-tied roster unhighlighted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HighlightPolicy {
    /// Every player at the max is "highest" and every player at the min is
    /// "lowest", as long as max and min differ.
    #[default]
    Shared,
    /// An extreme is highlighted only when exactly one player holds it.
    Unique,
}

impl std::str::FromStr for HighlightPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shared" => Ok(Self::Shared),
            "unique" => Ok(Self::Unique),
            other => Err(format!("unknown highlight policy: {other}")),
        }
    }
}

impl std::fmt::Display for HighlightPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shared => f.write_str("shared"),
            Self::Unique => f.write_str("unique"),
        }
    }
}

/// Complete board configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Maximum concurrent players.
    pub max_players: usize,

    /// Maximum characters kept from the initials input.
    pub max_initials: usize,

    /// Largest value shown in score inputs. Not enforced.
    pub score_display_max: i64,

    /// Tie handling for highlights.
    pub highlight_policy: HighlightPolicy,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            max_players: DEFAULT_MAX_PLAYERS,
            max_initials: DEFAULT_MAX_INITIALS,
            score_display_max: DEFAULT_SCORE_DISPLAY_MAX,
            highlight_policy: HighlightPolicy::default(),
        }
    }
}

impl BoardConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the roster limit.
    #[must_use]
    pub fn with_max_players(mut self, max: usize) -> Self {
        assert!(max > 0, "Must allow at least 1 player");
        self.max_players = max;
        self
    }

    /// Set the initials length.
    #[must_use]
    pub fn with_max_initials(mut self, max: usize) -> Self {
        assert!(max > 0, "Initials must allow at least 1 character");
        self.max_initials = max;
        self
    }

    /// Set the score display cap.
    #[must_use]
    pub fn with_score_display_max(mut self, max: i64) -> Self {
        self.score_display_max = max;
        self
    }

    /// Set the highlight policy.
    #[must_use]
    pub fn with_highlight_policy(mut self, policy: HighlightPolicy) -> Self {
        self.highlight_policy = policy;
        self
    }
}
