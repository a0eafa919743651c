//! Board state: roster, round history and pending input.
//!
//! ## Scoreboard
//!
//! Owns everything the score sheet shows:
//! - Roster (ordered, bounded by `BoardConfig::max_players`)
//! - Committed round history
//! - Pending scores for the round in progress
//! - Running totals, kept in step with the history
//!
//! Every transition is a plain `&mut self` call. Invalid requests are
//! no-ops reported through `Option`/`bool` and logged at debug level.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::config::BoardConfig;
use super::parse::parse_score;
use super::player::{Initials, Player, PlayerId};
use super::round::{Round, RoundId, RoundScores};
use crate::scoring::{self, Extremes, Highlight, RunningTotals};

/// Whether the round in progress has pending edits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardMode {
    /// No edits since the last commit or reset.
    #[default]
    Idle,
    /// At least one score has been entered for the round in progress.
    Collecting,
}

/// Score sheet for one table of players.
///
/// Uses `im::Vector` for the history so snapshots of the board are cheap.
///
/// ## Example
///
/// ```
/// use card_scorer::core::Scoreboard;
/// use card_scorer::scoring::Highlight;
///
/// let mut board = Scoreboard::default();
/// let a = board.add_player("ab").unwrap();
/// let b = board.add_player("cd").unwrap();
///
/// board.update_current_score(a, "5");
/// board.update_current_score(b, "3");
/// board.add_round();
///
/// board.update_current_score(a, "2");
/// board.update_current_score(b, "7");
/// board.add_round();
///
/// assert_eq!(board.cumulative_score(a, 1), 7);
/// assert_eq!(board.cumulative_score(b, 1), 10);
/// assert_eq!(board.highlight(b), Highlight::Highest);
/// assert_eq!(board.highlight(a), Highlight::Lowest);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scoreboard {
    config: BoardConfig,
    players: Vector<Player>,
    rounds: Vector<Round>,
    current: RoundScores,
    totals: RunningTotals,
    /// Players with a score entered since the last commit or reset.
    edited: FxHashSet<PlayerId>,
    next_player_id: u32,
    next_round_id: u32,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl Scoreboard {
    /// Create an empty board.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            players: Vector::new(),
            rounds: Vector::new(),
            current: RoundScores::new(),
            totals: RunningTotals::new(),
            edited: FxHashSet::default(),
            next_player_id: 1,
            next_round_id: 1,
        }
    }

    // === Accessors ===

    /// Board configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Current roster, in join order.
    #[must_use]
    pub fn players(&self) -> &Vector<Player> {
        &self.players
    }

    /// Committed rounds, oldest first.
    #[must_use]
    pub fn rounds(&self) -> &Vector<Round> {
        &self.rounds
    }

    /// Pending scores for the round in progress.
    #[must_use]
    pub fn current_scores(&self) -> &RoundScores {
        &self.current
    }

    /// Current input mode.
    #[must_use]
    pub fn mode(&self) -> BoardMode {
        if self.edited.is_empty() {
            BoardMode::Idle
        } else {
            BoardMode::Collecting
        }
    }

    /// Number of players on the roster.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Number of committed rounds.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Check whether the roster is at its limit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.players.len() >= self.config.max_players
    }

    /// Look up a player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Find a player by initials (case-insensitive).
    #[must_use]
    pub fn find_by_initials(&self, initials: &str) -> Option<&Player> {
        let wanted = initials.trim();
        self.players
            .iter()
            .find(|p| p.initials.as_str().eq_ignore_ascii_case(wanted))
    }

    /// Number the next committed round will get.
    #[must_use]
    pub fn next_round_number(&self) -> u32 {
        self.rounds.len() as u32 + 1
    }

    // === Roster ===

    /// Add a player.
    ///
    /// Returns `None` when the roster is full or the initials are blank.
    pub fn add_player(&mut self, raw_initials: &str) -> Option<PlayerId> {
        if self.is_full() {
            log::debug!("roster full ({}), ignoring add", self.config.max_players);
            return None;
        }
        let Some(initials) = Initials::normalize(raw_initials, self.config.max_initials) else {
            log::debug!("blank initials, ignoring add");
            return None;
        };

        let id = PlayerId::new(self.next_player_id);
        self.next_player_id += 1;

        log::debug!("added {} as {}", initials, id);
        self.players.push_back(Player::new(id, initials));
        self.current.set(id, 0);
        Some(id)
    }

    /// Remove a player and every score they have on the board.
    ///
    /// Returns `false` if the player was not on the roster.
    pub fn remove_player(&mut self, id: PlayerId) -> bool {
        let Some(pos) = self.players.iter().position(|p| p.id == id) else {
            log::debug!("{} not on roster, ignoring remove", id);
            return false;
        };

        let player = self.players.remove(pos);
        self.current.remove(id);
        self.edited.remove(&id);
        for round in self.rounds.iter_mut() {
            round.scores.remove(id);
        }
        self.totals.remove(id);

        log::debug!("removed {} ({})", player.initials, id);
        true
    }

    // === Round input ===

    /// Store a raw score input for the round in progress.
    ///
    /// Non-numeric text becomes 0. Returns the stored value, or `None` if
    /// the player is not on the roster.
    pub fn update_current_score(&mut self, id: PlayerId, raw: &str) -> Option<i64> {
        let score = parse_score(raw);
        self.set_current_score(id, score).then_some(score)
    }

    /// Store a typed score for the round in progress.
    ///
    /// Returns `false` if the player is not on the roster.
    pub fn set_current_score(&mut self, id: PlayerId, score: i64) -> bool {
        if self.player(id).is_none() {
            log::debug!("{} not on roster, ignoring score", id);
            return false;
        }
        if score > self.config.score_display_max {
            log::debug!("{} scored {} above display cap {}", id, score, self.config.score_display_max);
        }
        self.current.set(id, score);
        self.edited.insert(id);
        true
    }

    /// Commit the pending scores as a new round.
    ///
    /// Returns the new round number, or `None` if the roster is empty.
    pub fn add_round(&mut self) -> Option<u32> {
        if self.players.is_empty() {
            log::debug!("no players, ignoring add round");
            return None;
        }

        let round = Round::new(
            RoundId::new(self.next_round_id),
            self.next_round_number(),
            self.current.clone(),
        );
        self.next_round_id += 1;

        let number = round.round_number;
        self.totals.record(&round);
        self.rounds.push_back(round);
        self.current.zero_all();
        self.edited.clear();

        log::info!("recorded round {}", number);
        Some(number)
    }

    /// Start a new game with the same roster.
    pub fn reset_game(&mut self) {
        self.rounds.clear();
        self.totals.clear();
        self.current.zero_all();
        self.edited.clear();
        log::info!("new game with {} players", self.players.len());
    }

    /// Clear roster, history and pending input.
    ///
    /// ID counters keep running so IDs are never reused.
    pub fn reset_all(&mut self) {
        self.players.clear();
        self.rounds.clear();
        self.totals.clear();
        self.current.clear();
        self.edited.clear();
        log::info!("board reset");
    }

    // === Aggregation ===

    /// Running total for a player through round index `upto` (0-based, inclusive).
    #[must_use]
    pub fn cumulative_score(&self, id: PlayerId, upto: usize) -> i64 {
        scoring::cumulative_score(&self.rounds, id, upto)
    }

    /// Total through the last committed round.
    #[must_use]
    pub fn final_score(&self, id: PlayerId) -> i64 {
        self.totals.get(id)
    }

    /// Final totals for the roster, in roster order.
    #[must_use]
    pub fn final_scores(&self) -> Vec<(PlayerId, i64)> {
        self.players
            .iter()
            .map(|p| (p.id, self.final_score(p.id)))
            .collect()
    }

    /// Highest and lowest final totals.
    ///
    /// `None` when no rounds have been played or the roster is empty.
    #[must_use]
    pub fn extremes(&self) -> Option<Extremes> {
        if self.rounds.is_empty() {
            return None;
        }
        scoring::extremes(self.final_scores().into_iter().map(|(_, s)| s))
    }

    /// Highlight for one player's final total.
    #[must_use]
    pub fn highlight(&self, id: PlayerId) -> Highlight {
        if self.player(id).is_none() {
            return Highlight::Neutral;
        }
        let score = self.final_score(id);
        let holders = self
            .players
            .iter()
            .filter(|p| self.final_score(p.id) == score)
            .count();
        scoring::classify(score, self.extremes(), self.config.highlight_policy, holders)
    }

    /// Highlights for the whole roster, in roster order.
    #[must_use]
    pub fn highlights(&self) -> Vec<(PlayerId, Highlight)> {
        scoring::highlights(
            &self.final_scores(),
            !self.rounds.is_empty(),
            self.config.highlight_policy,
        )
    }
}
