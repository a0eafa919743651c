//! # card-scorer
//!
//! Round-by-round score tracking for card games.
//!
//! ## Design Principles
//!
//! 1. **Forgiving Input**: Nothing the user types is an error. Bad scores
//!    read as 0, blank names and over-full rosters are ignored.
//!
//! 2. **Immutable History**: A committed round is a snapshot. The only later
//!    change is pruning a player who leaves the table.
//!
//! 3. **Cheap Totals**: Final totals are kept incrementally; per-round
//!    running totals are recomputed from the history on demand.
//!
//! ## Modules
//!
//! - `core`: Players, rounds, configuration, board state, actions
//! - `scoring`: Cumulative sums, extremes, highlight classification
//! - `render`: Serializable view model and text table
//! - `session`: Interactive terminal session (feature `cli`)

pub mod core;
pub mod scoring;
pub mod render;

#[cfg(feature = "cli")]
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BoardAction, BoardConfig, BoardMode, HighlightPolicy,
    Initials, Player, PlayerId,
    Round, RoundId, RoundScores,
    Scoreboard, parse_score,
};

pub use crate::scoring::{Extremes, Highlight, RunningTotals};

pub use crate::render::{BoardView, render_table};
