//! Header component renderer.
//!
//! Renders the card title bar with centered text, theme-aware colors, and an
//! optional background.

use crate::ui::helpers::{clip_line, position_cursor};
use crate::ui::theme::Theme;

/// Renders the card title centered at the specified row.
///
/// The line is padded to the full card width so a header background, when the
/// theme defines one, covers the whole bar.
///
/// # Parameters
///
/// * `row` - Row position to render the header (1-indexed)
/// * `title` - Title text
/// * `theme` - Active card style
/// * `cols` - Card width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(row: usize, title: &str, theme: &Theme, cols: usize) -> usize {
    let title = clip_line(title, cols);
    let title_len = title.chars().count();
    let padding = cols.saturating_sub(title_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{title}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));

    print!("{}", Theme::reset());
    row + 1
}
