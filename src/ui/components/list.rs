//! Item list component renderer.
//!
//! Renders the card's item rows, one per line, each followed by a divider
//! line separating it from the next.

use crate::ui::helpers::{clip_line, position_cursor};
use crate::ui::theme::Theme;

/// Renders all item rows starting at the specified row.
///
/// # Parameters
///
/// * `row` - Starting row position (1-indexed)
/// * `items` - Display strings, already truncated by the card
/// * `theme` - Active card style
/// * `cols` - Card width in columns
///
/// # Returns
///
/// The next available row position (two terminal rows per item).
pub fn render_rows(row: usize, items: &[String], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single item row followed by its divider line.
fn render_row(row: usize, item: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.row_fg));
    print!(" {}", clip_line(item, cols.saturating_sub(1)));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.divider));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());

    row + 2
}
