//! Interactive terminal session.
//!
//! Reads commands at a prompt, applies them to a `Scoreboard` and prints
//! the score sheet after every change. Bad input is reported and the loop
//! carries on; only prompt I/O failures end the session with an error.

pub mod command;

pub use command::Command;

use colored::Colorize;
use dialoguer::Input;

use crate::core::{BoardAction, BoardConfig, Scoreboard};
use crate::render::{render_pending, render_roster, render_table_with, BoardView, Painter, PlainPainter};
use crate::scoring::Highlight;

/// Green for the highest total, red for the lowest.
#[derive(Clone, Copy, Debug, Default)]
pub struct ColorPainter;

impl Painter for ColorPainter {
    fn paint(&self, cell: &str, highlight: Highlight) -> String {
        match highlight {
            Highlight::Highest => cell.green().bold().to_string(),
            Highlight::Lowest => cell.red().bold().to_string(),
            Highlight::Neutral => cell.to_string(),
        }
    }
}

/// What the loop should do after a line.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    /// Print the text and prompt again.
    Continue(String),
    Quit,
}

/// Session options.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionOptions {
    /// Print JSON instead of the text table after each change.
    pub json: bool,
    /// Disable ANSI colors in the totals row.
    pub plain: bool,
}

pub struct Session {
    board: Scoreboard,
    options: SessionOptions,
}

impl Session {
    pub fn new(config: BoardConfig, options: SessionOptions) -> Self {
        Self {
            board: Scoreboard::new(config),
            options,
        }
    }

    /// Add starting players. Returns how many were accepted.
    pub fn seed_players<'a, I>(&mut self, initials: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        initials
            .into_iter()
            .filter(|i| self.board.add_player(i).is_some())
            .count()
    }

    pub fn board(&self) -> &Scoreboard {
        &self.board
    }

    /// Prompt until `quit` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        log::info!("starting score session");
        println!("{}", self.sheet());
        loop {
            let line = Input::<String>::new()
                .with_prompt(">")
                .allow_empty(true)
                .interact_text()?;
            if line.trim().is_empty() {
                continue;
            }
            match self.handle(&line) {
                Step::Continue(text) => println!("{text}"),
                Step::Quit => break,
            }
        }
        log::info!("session closed after {} rounds", self.board.round_count());
        Ok(())
    }

    /// Process one prompt line.
    pub fn handle(&mut self, line: &str) -> Step {
        let command = match Command::parse_line(line) {
            Ok(command) => command,
            Err(e) => return Step::Continue(e.to_string()),
        };
        match command.to_action(&self.board) {
            Ok(Some(action)) => self.apply(&action),
            Ok(None) => self.local(&command),
            Err(message) => Step::Continue(message),
        }
    }

    fn apply(&mut self, action: &BoardAction) -> Step {
        if self.board.apply(action) {
            Step::Continue(self.sheet())
        } else {
            log::debug!("{} rejected", action.name());
            Step::Continue(rejection(action, &self.board))
        }
    }

    /// Commands that only touch the session, never the board.
    fn local(&self, command: &Command) -> Step {
        match command {
            Command::Quit => Step::Quit,
            Command::Json => Step::Continue(self.json()),
            _ => Step::Continue(self.sheet()),
        }
    }

    /// Score sheet in the configured output format.
    pub fn sheet(&self) -> String {
        if self.options.json {
            return self.json();
        }
        let view = BoardView::from_board(&self.board);
        if view.is_empty() {
            return "No players added. Add players to start tracking scores.".to_string();
        }
        let painter: &dyn Painter = if self.options.plain { &PlainPainter } else { &ColorPainter };
        let mut out = format!("{}\n{}", render_roster(&view), render_pending(&view));
        let table = render_table_with(&view, painter);
        if !table.is_empty() {
            out.push('\n');
            out.push_str(table.trim_end());
        }
        out
    }

    fn json(&self) -> String {
        BoardView::from_board(&self.board)
            .to_json()
            .unwrap_or_else(|e| format!("json error: {e}"))
    }
}

fn rejection(action: &BoardAction, board: &Scoreboard) -> String {
    match action {
        BoardAction::AddPlayer(_) if board.is_full() => {
            format!("roster is full ({} players)", board.config().max_players)
        }
        BoardAction::AddPlayer(_) => "initials cannot be blank".to_string(),
        BoardAction::AddRound => "add a player first".to_string(),
        _ => "nothing changed".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(BoardConfig::default(), SessionOptions { json: false, plain: true })
    }

    fn text(step: Step) -> String {
        match step {
            Step::Continue(text) => text,
            Step::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn test_empty_sheet() {
        let s = session();
        assert!(s.sheet().starts_with("No players added"));
    }

    #[test]
    fn test_full_round() {
        let mut s = session();
        s.handle("add ab");
        s.handle("add cd");
        s.handle("score 1 5");
        s.handle("score cd 3");
        let out = text(s.handle("round"));

        assert!(out.contains("Players (2/6): AB CD"));
        assert!(out.contains("Round 2 score"));
        assert!(out.contains("5 (5)"));
        assert!(out.contains("5^"));
        assert!(out.contains("3v"));
        assert_eq!(s.board().round_count(), 1);
    }

    #[test]
    fn test_rejections_reported() {
        let mut s = session();
        assert_eq!(text(s.handle("round")), "add a player first");
        assert_eq!(s.seed_players(["a", "b", "c", "d", "e", "f"]), 6);
        assert_eq!(text(s.handle("add g")), "roster is full (6 players)");
        assert_eq!(text(s.handle("rm 9")), "no player #9");
    }

    #[test]
    fn test_bad_command_continues() {
        let mut s = session();
        let out = text(s.handle("frobnicate"));
        assert!(!out.is_empty());
    }

    #[test]
    fn test_show_prints_sheet_without_changes() {
        let mut s = session();
        s.seed_players(["ab"]);
        let out = text(s.handle("show"));
        assert!(out.starts_with("Players (1/6): AB"));
        assert_eq!(s.board().round_count(), 0);

        let json = text(s.handle("json"));
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["columns"][0]["initials"], "AB");
    }

    #[test]
    fn test_quit() {
        let mut s = session();
        assert_eq!(s.handle("quit"), Step::Quit);
        assert_eq!(s.handle("exit"), Step::Quit);
    }

    #[test]
    fn test_json_output() {
        let mut s = Session::new(BoardConfig::default(), SessionOptions { json: true, plain: true });
        s.seed_players(["ab"]);
        let out = text(s.handle("score 1 4"));
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["pending"][0], 4);
    }
}
