//! Core board types: players, rounds, configuration, state, actions.
//!
//! Scoring math lives in `crate::scoring`; this module owns the data and
//! the transitions that change it.

pub mod player;
pub mod round;
pub mod config;
pub mod parse;
pub mod state;
pub mod action;

pub use player::{Initials, Player, PlayerId};
pub use round::{Round, RoundId, RoundScores};
pub use config::{BoardConfig, HighlightPolicy, DEFAULT_MAX_INITIALS, DEFAULT_MAX_PLAYERS, DEFAULT_SCORE_DISPLAY_MAX};
pub use parse::parse_score;
pub use state::{BoardMode, Scoreboard};
pub use action::BoardAction;
