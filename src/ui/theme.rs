//! Storefront color themes and the ANSI escapes that apply them.
//!
//! Two palettes ship with the crate; any other palette can be supplied as a
//! TOML file. Colors are `#rrggbb` strings turned into 24-bit escapes.
//!
//! # Built-in Themes
//!
//! - `amber`: Warm gold tones on the terminal background (default)
//! - `onyx`: Muted silver tones with a dark header band
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#fde68a"
//! header_bg = "#78350f"
//! accent = "#d97706"
//! text_normal = "#e7e5e4"
//! text_dim = "#a8a29e"
//! border = "#57534e"
//! search_bar_border = "#f59e0b"
//! price_fg = "#f59e0b"
//! in_stock_fg = "#4ade80"
//! out_of_stock_fg = "#ffffff"
//! out_of_stock_bg = "#dc2626"
//! current_page_fg = "#1c1917"
//! current_page_bg = "#f59e0b"
//! empty_state_fg = "#fbbf24"
//! link_fg = "#22c55e"
//! ```
//!
//! # Example
//!
//! ```rust
//! use dimoss_catalog::ui::Theme;
//!
//! let theme = Theme::from_name("amber").unwrap();
//! let price = format!("{}{}₹45,200{}", Theme::bold(), Theme::fg(&theme.colors.price_fg), Theme::reset());
//! assert!(price.ends_with("\u{1b}[0m"));
//! ```

use crate::domain::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A named palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Name matched by the `theme` configuration key.
    pub name: String,
    pub colors: ThemeColors,
}

/// Colors of each page element, as `#rrggbb` strings.
///
/// Only `header_bg` may be omitted; the header then uses the terminal
/// background.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Band behind the brand line.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Brand accent: product codes, section titles, active navigation.
    pub accent: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (secondary info, footer).
    pub text_dim: String,

    /// Horizontal rules.
    pub border: String,
    /// Search box border color.
    pub search_bar_border: String,

    /// Price color on cards and in the overlay.
    pub price_fg: String,
    /// In-stock indicator color.
    pub in_stock_fg: String,
    /// Out-of-stock badge foreground.
    pub out_of_stock_fg: String,
    /// Out-of-stock badge background.
    pub out_of_stock_bg: String,

    /// Current page button foreground.
    pub current_page_fg: String,
    /// Current page button background.
    pub current_page_bg: String,

    /// "No products found" message.
    pub empty_state_fg: String,

    /// WhatsApp and external link color.
    pub link_fg: String,
}

const BOLD: &str = "\u{1b}[1m";
const DIM: &str = "\u{1b}[2m";
const RESET: &str = "\u{1b}[0m";

/// Fallback for colors that are not `#rrggbb`.
const WHITE: (u8, u8, u8) = (255, 255, 255);

impl Theme {
    /// Built-in theme `name` (`amber` or `onyx`), or `None` for any other name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let source = match name {
            "amber" => include_str!("../../themes/amber.toml"),
            "onyx" => include_str!("../../themes/onyx.toml"),
            _ => return None,
        };

        toml::from_str(source).ok()
    }

    /// Reads a custom theme from a TOML file.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Theme`] when the file is unreadable or does not
    /// describe every color.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| CatalogError::Theme(format!("cannot read {}: {e}", path.display())))?;

        toml::from_str(&text).map_err(|e| CatalogError::Theme(format!("invalid theme {}: {e}", path.display())))
    }

    /// Splits `#rrggbb` (the `#` is optional) into channels.
    fn rgb(hex: &str) -> (u8, u8, u8) {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return WHITE;
        }
        let Ok(packed) = u32::from_str_radix(digits, 16) else {
            return WHITE;
        };
        let [_, r, g, b] = packed.to_be_bytes();
        (r, g, b)
    }

    /// 24-bit foreground escape for a hex color.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dimoss_catalog::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#d97706"), "\u{1b}[38;2;217;119;6m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::rgb(hex);
        format!("\u{1b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::rgb(hex);
        format!("\u{1b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        BOLD
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        DIM
    }

    /// Ends every style started by the other escapes.
    #[must_use]
    pub const fn reset() -> &'static str {
        RESET
    }
}

impl Default for Theme {
    /// The `amber` theme.
    ///
    /// # Panics
    ///
    /// Only if the bundled `amber.toml` is broken, which the tests rule out.
    fn default() -> Self {
        Self::from_name("amber").expect("bundled amber theme parses")
    }
}
