//! Empty state and loading renderers.

use crate::ui::helpers::render_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message.
///
/// Displays a centered two-line message, shown when no product matched the
/// criteria or the catalog could not be loaded.
///
/// # Layout
///
/// ```text
/// [blank line]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// [blank line]
/// ```
///
/// The message uses the `empty_state_fg` theme color, and the subtitle uses
/// `text_dim` with dim styling.
pub fn render_empty_state(out: &mut String, empty: &EmptyState, theme: &Theme, cols: usize) {
    out.push('\n');
    render_centered(out, &empty.message, &Theme::fg(&theme.colors.empty_state_fg), cols);
    render_centered(
        out,
        &empty.subtitle,
        &format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim)),
        cols,
    );
    out.push('\n');
}

/// Renders the loading indicator shown until the catalog fetch settles.
pub fn render_loading(out: &mut String, theme: &Theme, cols: usize) {
    out.push('\n');
    render_centered(out, "Loading catalog...", &Theme::fg(&theme.colors.text_dim), cols);
    out.push('\n');
}
