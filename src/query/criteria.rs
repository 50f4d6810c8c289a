//! Query criteria and catalog settings.
//!
//! [`CatalogQuery`] is the user-controlled part of a catalog view (search term,
//! filters, sort and page). [`CatalogSettings`] holds the knobs that differ
//! between storefront variants and are fixed for a session.

use std::fmt;
use std::str::FromStr;

/// Sort order selected by the shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// No explicit sort; order is decided by [`FeaturedOrder`].
    #[default]
    Featured,
    /// Ascending selling price (`price-asc`).
    PriceAsc,
    /// Descending selling price (`price-desc`).
    PriceDesc,
}

impl SortOption {
    /// URL token for this option, `None` for the featured default.
    #[must_use]
    pub const fn as_param(self) -> Option<&'static str> {
        match self {
            Self::Featured => None,
            Self::PriceAsc => Some("price-asc"),
            Self::PriceDesc => Some("price-desc"),
        }
    }

    /// Label shown in the sort selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
        }
    }
}

impl FromStr for SortOption {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "" | "featured" => Ok(Self::Featured),
            _ => Err(()),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param().unwrap_or("featured"))
    }
}

/// Order used when no explicit sort is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeaturedOrder {
    /// Newest `createdDate` first; products without a date go last.
    #[default]
    Newest,
    /// The order in which the endpoint returned the products.
    Catalog,
}

impl FromStr for FeaturedOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "catalog" => Ok(Self::Catalog),
            _ => Err(()),
        }
    }
}

/// Per-session settings of the catalog view.
///
/// # Fields
///
/// - `page_size`: Products per page, at least 1
/// - `default_in_stock`: In-stock filter value when the URL carries no `inStock`
/// - `featured_order`: Order used by the featured sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSettings {
    pub page_size: usize,
    pub default_in_stock: bool,
    pub featured_order: FeaturedOrder,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            page_size: 20,
            default_in_stock: true,
            featured_order: FeaturedOrder::Newest,
        }
    }
}

/// User-controlled view criteria.
///
/// `page` is one-based. Filters are exact label matches; `None` means "all".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search: String,
    pub category: Option<String>,
    pub purity: Option<String>,
    pub in_stock_only: bool,
    pub sort: SortOption,
    pub page: usize,
}

impl CatalogQuery {
    /// Query with no search, no filters, featured sort and page 1.
    #[must_use]
    pub fn new(settings: &CatalogSettings) -> Self {
        Self {
            search: String::new(),
            category: None,
            purity: None,
            in_stock_only: settings.default_in_stock,
            sort: SortOption::Featured,
            page: 1,
        }
    }

    /// Returns `true` if any criterion narrows the list beyond the defaults.
    #[must_use]
    pub fn has_active_filters(&self, settings: &CatalogSettings) -> bool {
        !self.search.is_empty()
            || self.category.is_some()
            || self.purity.is_some()
            || self.in_stock_only != settings.default_in_stock
    }
}
