//! Footer component renderer.
//!
//! Renders the brand blurb, contact details and social links, followed by the
//! floating WhatsApp bubble link.

use crate::ui::helpers::{render_border, render_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;
use std::fmt::Write;

/// Renders the footer.
///
/// # Layout
///
/// ```text
/// ──────────────────────────────
///   Dimoss
///   Discover our exquisite collection...
///   Address: Sarafa Bazar, Karnal, Haryana
///   Email:   avdeshb@hotmail.com
///   Phone:   +91 702 770 1770
///   Facebook: https://...
///   Instagram: https://...
///           © 2026 Dimoss Jewelry. All rights reserved.
///   WhatsApp us: https://wa.me/...?text=Hi
/// ```
pub fn render_footer(out: &mut String, footer: &FooterInfo, whatsapp_link: &str, theme: &Theme, cols: usize) {
    let reset = Theme::reset();
    let dim = Theme::fg(&theme.colors.text_dim);
    let normal = Theme::fg(&theme.colors.text_normal);

    render_border(out, &theme.colors.border, cols);
    let _ = writeln!(out, "  {}{}{}{reset}", Theme::bold(), Theme::fg(&theme.colors.accent), footer.brand);
    let _ = writeln!(out, "  {dim}{}{reset}", footer.blurb);
    let _ = writeln!(out, "  {dim}Address:{reset} {normal}{}{reset}", footer.address);
    let _ = writeln!(out, "  {dim}Email:{reset}   {normal}{}{reset}", footer.email);
    let _ = writeln!(out, "  {dim}Phone:{reset}   {normal}{}{reset}", footer.phone);
    for (network, url) in &footer.social {
        let _ = writeln!(out, "  {dim}{network}:{reset} {}{url}{reset}", Theme::fg(&theme.colors.link_fg));
    }
    render_centered(out, &footer.copyright, &format!("{}{dim}", Theme::dim()), cols);
    let _ = writeln!(
        out,
        "  {}WhatsApp us:{reset} {whatsapp_link}",
        Theme::fg(&theme.colors.link_fg)
    );
}
