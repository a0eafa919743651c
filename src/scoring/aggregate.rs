//! Cumulative scores and extremum highlighting.
//!
//! These functions are pure over a round history. The board calls them for
//! per-round running totals; final totals come from `RunningTotals`, which
//! must always agree with `cumulative_score` through the last round.

use serde::{Deserialize, Serialize};

use crate::core::config::HighlightPolicy;
use crate::core::player::PlayerId;
use crate::core::round::Round;

/// Sum of a player's scores over rounds `0..=upto`, in round order.
///
/// Missing entries count as 0. `upto` past the end sums the whole history.
///
/// ```
/// use card_scorer::core::{PlayerId, Round, RoundId};
/// use card_scorer::scoring::cumulative_score;
///
/// let (a, b) = (PlayerId::new(1), PlayerId::new(2));
/// let rounds = vec![
///     Round::new(RoundId::new(1), 1, [(a, 5), (b, 3)].into_iter().collect()),
///     Round::new(RoundId::new(2), 2, [(a, 2), (b, 7)].into_iter().collect()),
/// ];
///
/// assert_eq!(cumulative_score(&rounds, a, 0), 5);
/// assert_eq!(cumulative_score(&rounds, a, 1), 7);
/// assert_eq!(cumulative_score(&rounds, b, 1), 10);
/// ```
pub fn cumulative_score<'a, I>(rounds: I, player: PlayerId, upto: usize) -> i64
where
    I: IntoIterator<Item = &'a Round>,
{
    rounds
        .into_iter()
        .take(upto.saturating_add(1))
        .map(|round| round.score(player))
        .fold(0, i64::saturating_add)
}

/// Highest and lowest final totals across the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Extremes {
    pub highest: i64,
    pub lowest: i64,
}

impl Extremes {
    /// Check whether every total is equal.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.highest == self.lowest
    }
}

/// Max and min over final totals. `None` when there are no totals.
pub fn extremes<I>(totals: I) -> Option<Extremes>
where
    I: IntoIterator<Item = i64>,
{
    totals.into_iter().fold(None, |acc, score| {
        Some(match acc {
            None => Extremes {
                highest: score,
                lowest: score,
            },
            Some(e) => Extremes {
                highest: e.highest.max(score),
                lowest: e.lowest.min(score),
            },
        })
    })
}

/// Display marker for a final total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Highlight {
    Highest,
    Lowest,
    #[default]
    Neutral,
}

/// Classify one total against the roster's extremes.
///
/// `holders` is how many players share this exact total; only
/// `HighlightPolicy::Unique` looks at it.
#[must_use]
pub fn classify(score: i64, extremes: Option<Extremes>, policy: HighlightPolicy, holders: usize) -> Highlight {
    let Some(e) = extremes else {
        return Highlight::Neutral;
    };
    if e.is_flat() {
        return Highlight::Neutral;
    }
    if policy == HighlightPolicy::Unique && holders > 1 {
        return Highlight::Neutral;
    }
    if score == e.highest {
        Highlight::Highest
    } else if score == e.lowest {
        Highlight::Lowest
    } else {
        Highlight::Neutral
    }
}

/// Classify every `(player, total)` pair.
///
/// Returns `Neutral` for everyone when `has_rounds` is false.
pub fn highlights(totals: &[(PlayerId, i64)], has_rounds: bool, policy: HighlightPolicy) -> Vec<(PlayerId, Highlight)> {
    let ext = if has_rounds {
        extremes(totals.iter().map(|(_, s)| *s))
    } else {
        None
    };
    totals
        .iter()
        .map(|&(player, score)| {
            let holders = totals.iter().filter(|(_, s)| *s == score).count();
            (player, classify(score, ext, policy, holders))
        })
        .collect()
}
