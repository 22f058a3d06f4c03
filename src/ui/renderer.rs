//! Top-level rendering coordinator.
//!
//! Composites a [`CardView`] into ANSI output on stdout: optional title
//! header, item rows, and the trailing timestamp row. This is the reference
//! presentation; embedding hosts are free to composite the view their own
//! way.

use crate::ui::components::{render_header, render_rows, render_timestamp};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardView;

/// Renders a card view to stdout.
///
/// The header is skipped when the title is empty. The view's height hint
/// clamps how many item rows are shown; `"auto"` shows them all. Rendering is
/// purely sequential from row 1, so the host decides where on screen the card
/// lives by positioning the terminal viewport.
///
/// # Parameters
///
/// * `view` - Card view computed by `ListCard::render`
/// * `theme` - Active card style
/// * `cols` - Card width in columns
pub fn render(view: &CardView, theme: &Theme, cols: usize) {
    let mut current_row = 1;

    if !view.title.is_empty() {
        current_row = render_header(current_row, &view.title, theme, cols);
    }

    let visible = match view.height_bound() {
        Some(bound) => &view.rows[..bound.min(view.rows.len())],
        None => &view.rows[..],
    };
    current_row = render_rows(current_row, visible, theme, cols);

    if let Some(timestamp) = &view.last_updated {
        render_timestamp(current_row, timestamp, theme, cols);
    }

    // Drop the cursor to a fresh line after the card.
    println!();
}
