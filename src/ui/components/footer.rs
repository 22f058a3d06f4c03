//! Timestamp footer component renderer.
//!
//! Renders the trailing last-updated row, right-aligned and dimmed.

use crate::ui::helpers::{clip_line, position_cursor};
use crate::ui::theme::Theme;

/// Renders the last-updated timestamp right-aligned at the specified row.
///
/// # Parameters
///
/// * `row` - Row position to render the footer (1-indexed)
/// * `timestamp` - Formatted timestamp text
/// * `theme` - Active card style
/// * `cols` - Card width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_timestamp(row: usize, timestamp: &str, theme: &Theme, cols: usize) -> usize {
    let text = clip_line(timestamp, cols.saturating_sub(1));
    let text_len = text.chars().count();

    position_cursor(row, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.timestamp_fg));
    print!("{}", " ".repeat(cols.saturating_sub(text_len + 1)));
    print!("{text} ");
    print!("{}", Theme::reset());
    row + 1
}
