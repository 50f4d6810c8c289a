//! Product grid renderer.
//!
//! Cards are laid out one per row with fixed-width columns, so codes, weights
//! and prices line up down the page.

use crate::ui::helpers::{pad_right, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ProductCard;
use std::fmt::Write;

const CODE_WIDTH: usize = 14;
const TYPE_WIDTH: usize = 8;
const PURITY_WIDTH: usize = 7;
const WEIGHT_WIDTH: usize = 10;
const PRICE_WIDTH: usize = 13;

/// Renders the column headers of the grid.
///
/// # Example
///
/// ```rust
/// use dimoss_catalog::ui::components::render_grid_headers;
/// use dimoss_catalog::ui::helpers::strip_ansi;
/// use dimoss_catalog::ui::Theme;
///
/// let mut out = String::new();
/// render_grid_headers(&mut out, &Theme::default());
/// assert!(strip_ansi(&out).trim_start().starts_with("CODE"));
/// ```
pub fn render_grid_headers(out: &mut String, theme: &Theme) {
    let _ = writeln!(
        out,
        "  {}{}{}{}{}{}{}{}{}IMAGE{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        pad_right("CODE", CODE_WIDTH),
        pad_right("TYPE", TYPE_WIDTH),
        pad_right("PURITY", PURITY_WIDTH),
        pad_right("NET WT", WEIGHT_WIDTH),
        pad_right("STONE", WEIGHT_WIDTH),
        pad_right("GROSS WT", WEIGHT_WIDTH),
        pad_right("PRICE", PRICE_WIDTH),
        Theme::reset()
    );
}

/// Renders one row per card.
pub fn render_grid_rows(out: &mut String, cards: &[ProductCard], theme: &Theme, cols: usize) {
    for card in cards {
        render_card(out, card, theme, cols);
    }
}

fn render_card(out: &mut String, card: &ProductCard, theme: &Theme, cols: usize) {
    let reset = Theme::reset();
    let fixed = 2 + CODE_WIDTH + TYPE_WIDTH + PURITY_WIDTH + 3 * WEIGHT_WIDTH + PRICE_WIDTH;
    let image = card
        .image_url
        .as_deref()
        .map_or_else(|| "[no image]".to_string(), |url| truncate(url, cols.saturating_sub(fixed).max(12)));

    let _ = write!(
        out,
        "  {}{}{}{reset}{}{}{}{}{}{}{}{}{}{reset}{}{image}{reset}",
        Theme::bold(),
        Theme::fg(&theme.colors.accent),
        pad_right(&truncate(&card.code, CODE_WIDTH - 1), CODE_WIDTH),
        Theme::fg(&theme.colors.text_normal),
        pad_right(&truncate(&card.category, TYPE_WIDTH - 1), TYPE_WIDTH),
        pad_right(&card.purity, PURITY_WIDTH),
        pad_right(&card.net_weight, WEIGHT_WIDTH),
        pad_right(card.stone_weight.as_deref().unwrap_or("-"), WEIGHT_WIDTH),
        pad_right(&card.gross_weight, WEIGHT_WIDTH),
        Theme::bold(),
        Theme::fg(&theme.colors.price_fg),
        pad_right(&card.price, PRICE_WIDTH),
        Theme::fg(&theme.colors.text_dim),
    );

    if !card.in_stock {
        let _ = write!(
            out,
            " {}{} OUT OF STOCK {reset}",
            Theme::fg(&theme.colors.out_of_stock_fg),
            Theme::bg(&theme.colors.out_of_stock_bg)
        );
    }
    if card.favorite {
        let _ = write!(out, " {}\u{2665}{reset}", Theme::fg(&theme.colors.accent));
    }
    out.push('\n');
}
