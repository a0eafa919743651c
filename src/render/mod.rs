//! Presentation: view model and text rendering.

pub mod view;
pub mod table;

pub use view::{BoardView, CellView, ColumnView, RowView, TotalView};
pub use table::{render_pending, render_roster, render_table, render_table_with, Painter, PlainPainter};
