//! View model types representing renderable catalog state.
//!
//! This module defines immutable view models computed from application state.
//! View models contain pre-formatted display strings (prices, weights, codes),
//! so renderers never touch [`Product`](crate::domain::Product) directly.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.

use crate::domain::{format_inr, format_weight, Product};
use crate::query::PageButton;

/// Complete view model of the catalog page.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogViewModel {
    /// Brand bar and navigation.
    pub header: HeaderInfo,

    /// Search box, filter selections and result summary.
    pub filter_bar: FilterBarInfo,

    /// Loading indicator, empty state or product grid.
    pub body: CatalogBody,

    /// Pagination bar, absent when everything fits on one page.
    pub pagination: Option<PaginationInfo>,

    /// Detail overlay, present while a product is open.
    pub overlay: Option<OverlayInfo>,

    /// Address, contact and social links.
    pub footer: FooterInfo,

    /// Target of the floating WhatsApp bubble.
    pub whatsapp_link: String,
}

/// Main content area of the catalog page.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogBody {
    /// The catalog fetch has not completed.
    Loading,
    /// No product matched the criteria.
    Empty(EmptyState),
    /// Products of the current page.
    Grid(Vec<ProductCard>),
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub brand: String,
    pub nav: Vec<NavLink>,
}

/// Entry of the header navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// Current filter selections, as shown in the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarInfo {
    pub search: String,
    /// Selected category display name, or "All Types".
    pub category: String,
    /// Selected purity with karat suffix, or "All Purities".
    pub purity: String,
    pub in_stock_only: bool,
    pub sort: String,
    /// e.g. "Showing 20 of 25 products".
    pub summary: String,
    /// Options available in the category dropdown.
    pub category_options: Vec<String>,
    /// Options available in the purity dropdown.
    pub purity_options: Vec<String>,
}

/// One tile of the product grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub index: u64,
    pub code: String,
    pub category: String,
    pub net_weight: String,
    /// Present only when the product carries stones.
    pub stone_weight: Option<String>,
    pub gross_weight: String,
    pub purity: String,
    pub price: String,
    /// `None` renders the "no image" placeholder.
    pub image_url: Option<String>,
    pub in_stock: bool,
    /// Marked as a favorite in this session.
    pub favorite: bool,
}

impl ProductCard {
    /// Pre-formats `product` for the grid, resolving its cover image against `image_base`.
    #[must_use]
    pub fn from_product(product: &Product, image_base: &str) -> Self {
        Self {
            index: product.index,
            code: product.code(),
            category: product.ornament.name.clone(),
            net_weight: format_weight(product.net_wt),
            stone_weight: (product.stone_wt > 0.0).then(|| format_weight(product.stone_wt)),
            gross_weight: format_weight(product.gross_wt),
            purity: product.purity_karats(),
            price: format_inr(product.selling_price),
            image_url: product.cover_image_url(image_base),
            in_stock: product.is_in_stock,
            favorite: false,
        }
    }
}

/// Pagination bar state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    pub buttons: Vec<PageButton>,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Detail overlay contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayInfo {
    pub code: String,
    pub price: String,
    /// Image currently shown; `None` when the product has no gallery.
    pub image_url: Option<String>,
    /// Zero-based position of the shown image.
    pub image_position: usize,
    pub image_count: usize,
    /// Label/value rows of the specification table.
    pub specifications: Vec<(String, String)>,
    pub stones: Vec<StoneRow>,
    pub in_stock: bool,
    pub inquiry_link: String,
}

/// Row of the stone details table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoneRow {
    pub kind: String,
    pub carats: String,
    /// Per-carat rate, e.g. "₹65,000/ct".
    pub rate: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub brand: String,
    pub blurb: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub social: Vec<(String, String)>,
    pub copyright: String,
}

/// Card of the Collections page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionInfo {
    pub code: String,
    pub name: String,
    pub product_count: usize,
    pub image_url: Option<String>,
    pub link: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No products found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
