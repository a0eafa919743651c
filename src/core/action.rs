//! User actions on the board.
//!
//! Each button or input on the score sheet maps to one `BoardAction`.
//! Front ends build actions and hand them to `Scoreboard::apply`, which
//! dispatches to the matching transition.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::state::Scoreboard;

/// A single user action.
///
/// ```
/// use card_scorer::core::{BoardAction, Scoreboard};
///
/// let mut board = Scoreboard::default();
/// assert!(board.apply(&BoardAction::AddPlayer("ab".into())));
/// assert!(!board.apply(&BoardAction::AddPlayer("  ".into())));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardAction {
    /// Add a player with the given raw initials.
    AddPlayer(String),
    /// Remove a player.
    RemovePlayer(PlayerId),
    /// Enter a raw score for the round in progress.
    UpdateScore(PlayerId, String),
    /// Commit the round in progress.
    AddRound,
    /// Clear history, keep roster.
    NewGame,
    /// Clear everything.
    ResetAll,
}

impl BoardAction {
    /// Short name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddPlayer(_) => "add-player",
            Self::RemovePlayer(_) => "remove-player",
            Self::UpdateScore(..) => "update-score",
            Self::AddRound => "add-round",
            Self::NewGame => "new-game",
            Self::ResetAll => "reset-all",
        }
    }
}

impl Scoreboard {
    /// Apply an action.
    ///
    /// Returns `true` if the action was accepted. Rejected actions leave the
    /// board untouched. Resets always succeed.
    pub fn apply(&mut self, action: &BoardAction) -> bool {
        log::trace!("apply {}", action.name());
        match action {
            BoardAction::AddPlayer(initials) => self.add_player(initials).is_some(),
            BoardAction::RemovePlayer(id) => self.remove_player(*id),
            BoardAction::UpdateScore(id, raw) => self.update_current_score(*id, raw).is_some(),
            BoardAction::AddRound => self.add_round().is_some(),
            BoardAction::NewGame => {
                self.reset_game();
                true
            }
            BoardAction::ResetAll => {
                self.reset_all();
                true
            }
        }
    }
}
