//! Plain-text rendering of a `BoardView`.
//!
//! Cells are padded first and painted second, so painters may wrap text in
//! escape codes without breaking alignment.

use super::view::BoardView;
use crate::scoring::Highlight;

/// Styles a padded totals cell.
pub trait Painter {
    fn paint(&self, cell: &str, highlight: Highlight) -> String;
}

/// Marks highlights with a trailing `^` (highest) or `v` (lowest).
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainPainter;

impl Painter for PlainPainter {
    fn paint(&self, cell: &str, highlight: Highlight) -> String {
        let mark = match highlight {
            Highlight::Highest => '^',
            Highlight::Lowest => 'v',
            Highlight::Neutral => ' ',
        };
        format!("{cell}{mark}")
    }
}

const LABEL_WIDTH: usize = 5;

/// Roster summary line, e.g. `Players (2/6): AB CD`.
#[must_use]
pub fn render_roster(view: &BoardView) -> String {
    let names: Vec<&str> = view.columns.iter().map(|c| c.initials.as_str()).collect();
    format!("Players ({}/{}): {}", view.columns.len(), view.max_players, names.join(" "))
}

/// Pending input line, e.g. `Round 3 score: AB=5 CD=0`.
#[must_use]
pub fn render_pending(view: &BoardView) -> String {
    let entries: Vec<String> = view
        .columns
        .iter()
        .zip(&view.pending)
        .map(|(c, s)| format!("{}={}", c.initials, s))
        .collect();
    format!("Round {} score: {}", view.next_round, entries.join(" "))
}

/// Render the round table with the plain painter.
#[must_use]
pub fn render_table(view: &BoardView) -> String {
    render_table_with(view, &PlainPainter)
}

/// Render the round table.
///
/// Returns an empty string until a round has been committed.
#[must_use]
pub fn render_table_with(view: &BoardView, painter: &dyn Painter) -> String {
    if view.rows.is_empty() || view.columns.is_empty() {
        return String::new();
    }

    let cell_text = |score: i64, cumulative: i64| format!("{score} ({cumulative})");

    let widths: Vec<usize> = (0..view.columns.len())
        .map(|col| {
            let header = view.columns[col].initials.chars().count();
            let body = view
                .rows
                .iter()
                .map(|r| cell_text(r.cells[col].score, r.cells[col].cumulative).len())
                .max()
                .unwrap_or(0);
            let total = view.totals.get(col).map_or(0, |t| t.score.to_string().len());
            header.max(body).max(total)
        })
        .collect();

    let mut out = String::new();

    out.push_str(&format!("{:<w$}", "Rd", w = LABEL_WIDTH));
    for (column, &width) in view.columns.iter().zip(&widths) {
        out.push_str(&format!(" | {:>width$} ", column.initials));
    }
    out.push('\n');

    out.push_str(&"-".repeat(LABEL_WIDTH));
    for width in &widths {
        out.push_str(&format!("-+-{}-", "-".repeat(*width)));
    }
    out.push('\n');

    for row in &view.rows {
        out.push_str(&format!("{:<w$}", row.round_number, w = LABEL_WIDTH));
        for (cell, &width) in row.cells.iter().zip(&widths) {
            out.push_str(&format!(" | {:>width$} ", cell_text(cell.score, cell.cumulative)));
        }
        out.push('\n');
    }

    out.push_str(&format!("{:<w$}", "Total", w = LABEL_WIDTH));
    for (total, &width) in view.totals.iter().zip(&widths) {
        let padded = format!("{:>width$}", total.score);
        out.push_str(" | ");
        out.push_str(&painter.paint(&padded, total.highlight));
    }
    out.push('\n');

    out
}
