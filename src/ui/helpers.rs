//! Shared rendering utilities and helpers.
//!
//! Components write into a `String` buffer rather than stdout, so a page can
//! be rendered, inspected in tests, and printed in one go. Widths are counted
//! in characters, not bytes, because prices carry the `₹` sign.

use crate::ui::theme::Theme;
use std::fmt::Write;

/// Display width of `text` in characters.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` characters, ending with `…` when shortened.
///
/// # Example
///
/// ```rust
/// use dimoss_catalog::ui::helpers::truncate;
///
/// assert_eq!(truncate("Women's Ring", 20), "Women's Ring");
/// assert_eq!(truncate("Women's Ring", 6), "Women…");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// Pads `text` on the right to `target` characters.
#[must_use]
pub fn pad_right(text: &str, target: usize) -> String {
    let mut padded = text.to_string();
    padded.push_str(&" ".repeat(target.saturating_sub(width(text))));
    padded
}

/// Left padding that centers `text` within `cols`.
#[must_use]
pub fn center_padding(text: &str, cols: usize) -> usize {
    cols.saturating_sub(width(text)) / 2
}

/// Writes a full-width horizontal rule.
pub fn render_border(out: &mut String, color: &str, cols: usize) {
    let _ = writeln!(out, "{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset());
}

/// Writes `text` centered within `cols` using `style` as a prefix.
pub fn render_centered(out: &mut String, text: &str, style: &str, cols: usize) {
    let text = truncate(text, cols);
    let padding = center_padding(&text, cols);
    let _ = writeln!(
        out,
        "{style}{}{text}{}{}",
        " ".repeat(padding),
        " ".repeat(cols.saturating_sub(padding + width(&text))),
        Theme::reset()
    );
}

/// Removes ANSI escape sequences, leaving the visible text.
///
/// # Example
///
/// ```rust
/// use dimoss_catalog::ui::helpers::strip_ansi;
///
/// assert_eq!(strip_ansi("\u{1b}[1mbold\u{1b}[0m"), "bold");
/// ```
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for terminator in chars.by_ref() {
                if terminator.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    plain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_count_characters() {
        assert_eq!(width("₹1,000"), 6);
        assert_eq!(pad_right("₹9", 4), "₹9  ");
        assert_eq!(center_padding("abcd", 10), 3);
    }

    #[test]
    fn centered_line_fills_width() {
        let mut out = String::new();
        render_centered(&mut out, "Dimoss", "", 10);
        assert_eq!(strip_ansi(&out), "  Dimoss  \n");
    }
}
