//! Filter selections and result summary.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;
use std::fmt::Write;

/// Renders the current selections, the available options and the result count.
pub fn render_filters(out: &mut String, filters: &FilterBarInfo, theme: &Theme) {
    let label = Theme::fg(&theme.colors.text_dim);
    let value = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent));
    let reset = Theme::reset();
    let stock = if filters.in_stock_only { "[x]" } else { "[ ]" };

    let _ = writeln!(
        out,
        "  {label}Type:{reset} {value}{}{reset}   {label}Purity:{reset} {value}{}{reset}   \
         {stock} In Stock Only   {label}Sort:{reset} {value}{}{reset}",
        filters.category, filters.purity, filters.sort
    );

    if !filters.category_options.is_empty() {
        let _ = writeln!(
            out,
            "  {label}Types: {}{reset}",
            filters.category_options.join(", ")
        );
    }
    if !filters.purity_options.is_empty() {
        let _ = writeln!(
            out,
            "  {label}Purities: {}{reset}",
            filters.purity_options.join(", ")
        );
    }

    let _ = writeln!(out, "  {}{}{reset}", Theme::fg(&theme.colors.text_normal), filters.summary);
}
