//! Domain layer for the catalog engine.
//!
//! This module contains the core domain types of the storefront, independent of
//! how the catalog is fetched, rendered or navigated.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`product`]: Product model, labels and display helpers
//! - [`format`]: Price, weight and date formatting for display

pub mod error;
pub mod format;
pub mod product;

pub use error::{CatalogError, Result};
pub use format::{format_date, format_inr, format_weight};
pub use product::{category_display_name, Label, Product, StockImage, StoneRecord, Tag};
