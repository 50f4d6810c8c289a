//! Search bar component renderer.
//!
//! This module renders the search input box with a bordered frame and query
//! text display.

use crate::ui::helpers::{pad_right, truncate};
use crate::ui::theme::Theme;
use std::fmt::Write;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the search input box.
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────────────────┐ [margin]
/// [margin] │ Search: ring            │ [margin]
/// [margin] └─────────────────────────┘ [margin]
/// ```
///
/// The box width is `cols - (2 * SEARCH_BOX_MARGIN)`. An empty query shows a
/// dimmed placeholder.
pub fn render_search_bar(out: &mut String, query: &str, theme: &Theme, cols: usize) {
    let box_width = cols.saturating_sub(2 * SEARCH_BOX_MARGIN).max(4);
    let inner = box_width - 2;
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = Theme::fg(&theme.colors.search_bar_border);
    let reset = Theme::reset();

    let _ = writeln!(out, "{margin}{border}┌{}┐{reset}", "─".repeat(inner));

    let (text, style) = if query.is_empty() {
        (
            " Search by ID, tag or type...".to_string(),
            format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim)),
        )
    } else {
        (format!(" Search: {query}"), Theme::fg(&theme.colors.text_normal))
    };
    let text = pad_right(&truncate(&text, inner), inner);
    let _ = writeln!(out, "{margin}{border}│{reset}{style}{text}{reset}{border}│{reset}");

    let _ = writeln!(out, "{margin}{border}└{}┘{reset}", "─".repeat(inner));
}
