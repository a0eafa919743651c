//! Score aggregation: cumulative totals, extremes and highlights.

pub mod aggregate;
pub mod totals;

pub use aggregate::{classify, cumulative_score, extremes, highlights, Extremes, Highlight};
pub use totals::RunningTotals;
