//! Derived catalog views.
//!
//! # Modules
//!
//! - [`criteria`]: Query criteria, sort options and per-session settings
//! - [`engine`]: Search, filter, sort and page slicing
//! - [`pager`]: Page counts and pagination buttons

pub mod criteria;
pub mod engine;
pub mod pager;

pub use criteria::{CatalogQuery, CatalogSettings, FeaturedOrder, SortOption};
pub use engine::{derive_page, filter_options, filter_products, CatalogPage, FilterOption, FilterOptions};
pub use pager::{page_buttons, total_pages, PageButton};
