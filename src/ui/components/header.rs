//! Header component renderer.
//!
//! Renders the brand bar and the navigation row beneath it.

use crate::ui::helpers::{render_centered, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;
use std::fmt::Write;

/// Renders the brand bar and navigation.
///
/// # Layout
///
/// ```text
/// [padding] DIMOSS [padding]
///   Home · Collections · New Arrivals · [Catalog] · About Us
/// ```
///
/// The brand line spans the full width with the header colors; the active
/// navigation entry is bracketed and drawn in the accent color.
pub fn render_header(out: &mut String, header: &HeaderInfo, theme: &Theme, cols: usize) {
    let mut style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        style.push_str(&Theme::bg(bg));
    }
    render_centered(out, &header.brand.to_uppercase(), &style, cols);

    let mut plain_len = 0;
    let mut line = String::new();
    for (i, link) in header.nav.iter().enumerate() {
        if i > 0 {
            let _ = write!(line, "{} · {}", Theme::fg(&theme.colors.text_dim), Theme::reset());
            plain_len += 3;
        }
        if link.active {
            let label = format!("[{}]", link.label);
            plain_len += width(&label);
            let _ = write!(line, "{}{}{label}{}", Theme::bold(), Theme::fg(&theme.colors.accent), Theme::reset());
        } else {
            plain_len += width(&link.label);
            let _ = write!(line, "{}{}{}", Theme::fg(&theme.colors.text_normal), link.label, Theme::reset());
        }
    }

    let padding = cols.saturating_sub(plain_len) / 2;
    let _ = writeln!(out, "{}{line}", " ".repeat(padding));
}
