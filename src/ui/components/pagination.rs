//! Pagination bar renderer.

use crate::query::PageButton;
use crate::ui::helpers::center_padding;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;
use std::fmt::Write;

/// Renders `‹ Prev  1 … 4 [5] 6 … 9  Next ›`, centered.
///
/// Disabled previous/next controls are dimmed; the current page is drawn with
/// the current-page colors.
pub fn render_pagination(out: &mut String, pagination: &PaginationInfo, theme: &Theme, cols: usize) {
    let reset = Theme::reset();
    let mut plain = String::new();
    let mut styled = String::new();

    let control = |enabled: bool| {
        if enabled {
            Theme::fg(&theme.colors.text_normal)
        } else {
            format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim))
        }
    };

    plain.push_str("‹ Prev ");
    let _ = write!(styled, "{}‹ Prev{reset} ", control(pagination.has_previous));

    for button in &pagination.buttons {
        match button {
            PageButton::Page { number, current: true } => {
                let _ = write!(plain, " [{number}]");
                let _ = write!(
                    styled,
                    " {}{}{}[{number}]{reset}",
                    Theme::bold(),
                    Theme::fg(&theme.colors.current_page_fg),
                    Theme::bg(&theme.colors.current_page_bg)
                );
            }
            PageButton::Page { number, .. } => {
                let _ = write!(plain, " {number}");
                let _ = write!(styled, " {}{number}{reset}", Theme::fg(&theme.colors.text_normal));
            }
            PageButton::Gap => {
                plain.push_str(" …");
                let _ = write!(styled, " {}…{reset}", Theme::fg(&theme.colors.text_dim));
            }
        }
    }

    plain.push_str("  Next ›");
    let _ = write!(styled, "  {}Next ›{reset}", control(pagination.has_next));

    let _ = writeln!(out, "{}{styled}", " ".repeat(center_padding(&plain, cols)));
}
