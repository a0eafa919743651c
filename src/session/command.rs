//! Prompt commands and player references.

use clap::Parser;

use crate::core::{BoardAction, PlayerId, Scoreboard};

/// One line typed at the session prompt.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub enum Command {
    #[command(about = "Add a player by initials", alias = "a")]
    Add {
        #[arg(required = true)]
        initials: String,
    },
    #[command(about = "Remove a player by number or initials", alias = "rm")]
    Remove {
        #[arg(required = true)]
        player: String,
    },
    #[command(about = "Enter a score for the round in progress", alias = "s")]
    Score {
        #[arg(required = true)]
        player: String,
        #[arg(required = true, allow_hyphen_values = true)]
        value: String,
    },
    #[command(about = "Commit the round in progress", alias = "r")]
    Round,
    #[command(about = "Start a new game with the same players")]
    New,
    #[command(about = "Remove all players and rounds")]
    Reset,
    #[command(about = "Print the score sheet")]
    Show,
    #[command(about = "Print the score sheet as JSON")]
    Json,
    #[command(about = "Leave the session", alias = "exit")]
    Quit,
}

impl Command {
    /// Parse a prompt line.
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(line.split_whitespace())
    }

    /// Translate into a board action.
    ///
    /// Returns `Ok(None)` for commands that only affect the session, and
    /// `Err` when a player reference does not resolve.
    pub fn to_action(&self, board: &Scoreboard) -> Result<Option<BoardAction>, String> {
        Ok(match self {
            Self::Add { initials } => Some(BoardAction::AddPlayer(initials.clone())),
            Self::Remove { player } => Some(BoardAction::RemovePlayer(resolve(board, player)?)),
            Self::Score { player, value } => Some(BoardAction::UpdateScore(resolve(board, player)?, value.clone())),
            Self::Round => Some(BoardAction::AddRound),
            Self::New => Some(BoardAction::NewGame),
            Self::Reset => Some(BoardAction::ResetAll),
            Self::Show | Self::Json | Self::Quit => None,
        })
    }
}

/// Resolve a 1-based roster position or initials to a player.
pub fn resolve(board: &Scoreboard, reference: &str) -> Result<PlayerId, String> {
    if let Ok(n) = reference.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| board.players().get(i))
            .map(|p| p.id)
            .ok_or_else(|| format!("no player #{n}"));
    }
    board
        .find_by_initials(reference)
        .map(|p| p.id)
        .ok_or_else(|| format!("no player {reference}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::parse_line("add jd").unwrap(),
            Command::Add { initials: "jd".into() }
        );
        assert_eq!(
            Command::parse_line("s 2 -15").unwrap(),
            Command::Score { player: "2".into(), value: "-15".into() }
        );
        assert_eq!(Command::parse_line("r").unwrap(), Command::Round);
        assert_eq!(Command::parse_line("exit").unwrap(), Command::Quit);
        assert_eq!(Command::parse_line("  new  ").unwrap(), Command::New);
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse_line("bogus").is_err());
        assert!(Command::parse_line("add").is_err());
        assert!(Command::parse_line("score 1").is_err());
    }

    #[test]
    fn test_resolve() {
        let mut board = Scoreboard::default();
        let a = board.add_player("ab").unwrap();
        let b = board.add_player("cd").unwrap();

        assert_eq!(resolve(&board, "1"), Ok(a));
        assert_eq!(resolve(&board, "2"), Ok(b));
        assert_eq!(resolve(&board, "CD"), Ok(b));
        assert_eq!(resolve(&board, "cd"), Ok(b));
        assert!(resolve(&board, "0").is_err());
        assert!(resolve(&board, "3").is_err());
        assert!(resolve(&board, "zz").is_err());
    }

    #[test]
    fn test_to_action() {
        let mut board = Scoreboard::default();
        let a = board.add_player("ab").unwrap();

        let score = Command::parse_line("score ab 12").unwrap();
        assert_eq!(
            score.to_action(&board),
            Ok(Some(BoardAction::UpdateScore(a, "12".into())))
        );
        assert_eq!(Command::Show.to_action(&board), Ok(None));
        assert!(Command::parse_line("rm 5").unwrap().to_action(&board).is_err());
    }
}
