//! Display model of the score sheet.
//!
//! `BoardView` is a read-only snapshot shaped like the on-screen table:
//! one column per current player, one row per committed round with the
//! round score and the running total, and a totals row carrying highlights.
//! It serializes to JSON as-is.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Scoreboard};
use crate::scoring::{Extremes, Highlight};

/// Column header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnView {
    pub id: PlayerId,
    pub initials: String,
}

/// One cell of a round row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Score earned in this round.
    pub score: i64,
    /// Running total through this round.
    pub cumulative: i64,
}

/// One committed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowView {
    pub round_number: u32,
    pub cells: Vec<CellView>,
}

/// One cell of the totals row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalView {
    pub score: i64,
    pub highlight: Highlight,
}

/// Snapshot of everything the score sheet shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub columns: Vec<ColumnView>,
    pub max_players: usize,
    /// Number the round in progress will get.
    pub next_round: u32,
    /// Pending input, one entry per column.
    pub pending: Vec<i64>,
    pub rows: Vec<RowView>,
    /// Empty until the first round is committed.
    pub totals: Vec<TotalView>,
    pub extremes: Option<Extremes>,
}

impl BoardView {
    /// Build a view of the board.
    ///
    /// Running totals are accumulated row by row, so building is linear in
    /// the number of cells.
    #[must_use]
    pub fn from_board(board: &Scoreboard) -> Self {
        let columns: Vec<ColumnView> = board
            .players()
            .iter()
            .map(|p| ColumnView {
                id: p.id,
                initials: p.initials.as_str().to_owned(),
            })
            .collect();

        let pending = columns
            .iter()
            .map(|c| board.current_scores().get(c.id))
            .collect();

        let mut running = vec![0i64; columns.len()];
        let rows = board
            .rounds()
            .iter()
            .map(|round| {
                let cells = columns
                    .iter()
                    .zip(running.iter_mut())
                    .map(|(column, total)| {
                        let score = round.score(column.id);
                        *total = total.saturating_add(score);
                        CellView {
                            score,
                            cumulative: *total,
                        }
                    })
                    .collect();
                RowView {
                    round_number: round.round_number,
                    cells,
                }
            })
            .collect::<Vec<_>>();

        let totals = if rows.is_empty() {
            Vec::new()
        } else {
            board
                .highlights()
                .into_iter()
                .map(|(id, highlight)| TotalView {
                    score: board.final_score(id),
                    highlight,
                })
                .collect()
        };

        Self {
            columns,
            max_players: board.config().max_players,
            next_round: board.next_round_number(),
            pending,
            rows,
            totals,
            extremes: board.extremes(),
        }
    }

    /// Check whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Render as JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&Scoreboard> for BoardView {
    fn from(board: &Scoreboard) -> Self {
        Self::from_board(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Scoreboard, PlayerId, PlayerId) {
        let mut board = Scoreboard::default();
        let a = board.add_player("a").unwrap();
        let b = board.add_player("b").unwrap();
        board.set_current_score(a, 5);
        board.set_current_score(b, 3);
        board.add_round();
        board.set_current_score(a, 2);
        board.set_current_score(b, 7);
        board.add_round();
        (board, a, b)
    }

    #[test]
    fn test_empty_board() {
        let view = BoardView::from_board(&Scoreboard::default());
        assert!(view.is_empty());
        assert!(view.rows.is_empty());
        assert!(view.totals.is_empty());
        assert_eq!(view.next_round, 1);
        assert_eq!(view.extremes, None);
    }

    #[test]
    fn test_rows_and_totals() {
        let (board, a, b) = sample();
        let view = BoardView::from(&board);

        assert_eq!(view.columns.len(), 2);
        assert_eq!(view.columns[0].initials, "A");
        assert_eq!(view.next_round, 3);
        assert_eq!(view.rows.len(), 2);

        assert_eq!(view.rows[1].round_number, 2);
        assert_eq!(view.rows[1].cells[0], CellView { score: 2, cumulative: 7 });
        assert_eq!(view.rows[1].cells[1], CellView { score: 7, cumulative: 10 });

        assert_eq!(view.totals[0], TotalView { score: 7, highlight: Highlight::Lowest });
        assert_eq!(view.totals[1], TotalView { score: 10, highlight: Highlight::Highest });

        // Row totals agree with the board's own aggregation.
        for (i, row) in view.rows.iter().enumerate() {
            assert_eq!(row.cells[0].cumulative, board.cumulative_score(a, i));
            assert_eq!(row.cells[1].cumulative, board.cumulative_score(b, i));
        }
    }

    #[test]
    fn test_pending_follows_columns() {
        let (mut board, a, _) = sample();
        board.set_current_score(a, 9);
        let view = BoardView::from_board(&board);
        assert_eq!(view.pending, vec![9, 0]);
    }

    #[test]
    fn test_json() {
        let (board, _, _) = sample();
        let json = BoardView::from_board(&board).to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["rows"][1]["cells"][1]["cumulative"], 10);
        assert_eq!(parsed["totals"][1]["highlight"], "Highest");
    }
}
