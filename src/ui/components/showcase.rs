//! New Arrivals and Collections page renderers.

use super::grid::{render_grid_headers, render_grid_rows};
use crate::ui::helpers::{pad_right, render_border, render_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CollectionInfo, ProductCard};
use std::fmt::Write;

/// Renders the New Arrivals list.
pub fn render_arrivals(out: &mut String, cards: &[ProductCard], theme: &Theme, cols: usize) {
    let title = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent));
    render_centered(out, "New Arrivals", &title, cols);
    render_border(out, &theme.colors.border, cols);

    if cards.is_empty() {
        render_centered(out, "No new arrivals right now.", &Theme::fg(&theme.colors.empty_state_fg), cols);
        return;
    }
    render_grid_headers(out, theme);
    render_grid_rows(out, cards, theme, cols);
}

/// Renders one row per collection with its size, cover image and catalog link.
pub fn render_collections(out: &mut String, collections: &[CollectionInfo], theme: &Theme, cols: usize) {
    let reset = Theme::reset();
    let title = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent));
    render_centered(out, "Our Collections", &title, cols);
    render_border(out, &theme.colors.border, cols);

    for collection in collections {
        let _ = writeln!(
            out,
            "  {}{}{}{reset}{}{}{reset}{}{}{reset}",
            Theme::bold(),
            Theme::fg(&theme.colors.accent),
            pad_right(&collection.name, 16),
            Theme::fg(&theme.colors.text_normal),
            pad_right(&format!("{} pieces", collection.product_count), 12),
            Theme::fg(&theme.colors.link_fg),
            collection.link
        );
        let image = collection.image_url.as_deref().unwrap_or("[no image]");
        let _ = writeln!(out, "    {}{image}{reset}", Theme::fg(&theme.colors.text_dim));
    }
}
