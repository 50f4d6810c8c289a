//! Product detail overlay renderer.
//!
//! The overlay replaces the grid while open: gallery position and image,
//! price, specifications, optional stone table and the WhatsApp inquiry link.

use crate::ui::helpers::{pad_right, render_border, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::OverlayInfo;
use std::fmt::Write;

const SPEC_LABEL_WIDTH: usize = 16;

/// Renders the overlay for the open product.
///
/// A product without images shows a `[ no image available ]` placeholder in
/// place of the gallery.
pub fn render_overlay(out: &mut String, overlay: &OverlayInfo, theme: &Theme, cols: usize) {
    let reset = Theme::reset();
    let accent = Theme::fg(&theme.colors.accent);
    let dim = Theme::fg(&theme.colors.text_dim);
    let normal = Theme::fg(&theme.colors.text_normal);

    render_border(out, &theme.colors.border, cols);
    let _ = write!(out, "  {}{accent}{}{reset}", Theme::bold(), overlay.code);
    if !overlay.in_stock {
        let _ = write!(
            out,
            "  {}{} OUT OF STOCK {reset}",
            Theme::fg(&theme.colors.out_of_stock_fg),
            Theme::bg(&theme.colors.out_of_stock_bg)
        );
    }
    let _ = writeln!(out, "{dim}   [close: x]{reset}");

    match &overlay.image_url {
        Some(url) => {
            let _ = writeln!(
                out,
                "  {dim}Image {}/{}:{reset} {normal}{}{reset}",
                overlay.image_position + 1,
                overlay.image_count,
                truncate(url, cols.saturating_sub(16))
            );
        }
        None => {
            let _ = writeln!(out, "  {dim}[ no image available ]{reset}");
        }
    }
    out.push('\n');

    let _ = writeln!(out, "  {}{}{}{reset}", Theme::bold(), Theme::fg(&theme.colors.price_fg), overlay.price);
    let _ = writeln!(out, "  {dim}Including taxes & free shipping{reset}");
    let _ = writeln!(out, "  {dim}Estimated Delivery:{reset} {normal}3-4 Business Days{reset}");
    out.push('\n');

    let _ = writeln!(out, "  {}{accent}Product Specifications{reset}", Theme::bold());
    for (label, value) in &overlay.specifications {
        let _ = writeln!(
            out,
            "    {dim}{}{reset}{normal}{value}{reset}",
            pad_right(&format!("{label}:"), SPEC_LABEL_WIDTH)
        );
    }

    if !overlay.stones.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "  {}{accent}Stone Details{reset}", Theme::bold());
        let _ = writeln!(
            out,
            "    {}{}{}{}Rate{reset}",
            Theme::bold(),
            Theme::fg(&theme.colors.header_fg),
            pad_right("Type", 12),
            pad_right("Weight (ct)", 14)
        );
        for stone in &overlay.stones {
            let _ = writeln!(
                out,
                "    {normal}{}{}{reset}{accent}{}{reset}",
                pad_right(&stone.kind, 12),
                pad_right(&stone.carats, 14),
                stone.rate
            );
        }
    }

    out.push('\n');
    let _ = writeln!(out, "  {normal}Need Assistance?{reset} {dim}Our jewelry experts are available to help{reset}");
    let _ = writeln!(
        out,
        "  {}Inquire on WhatsApp:{reset} {}",
        Theme::fg(&theme.colors.link_fg),
        overlay.inquiry_link
    );
    render_border(out, &theme.colors.border, cols);
}
