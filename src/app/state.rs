//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container of a catalog
//! session, along with methods for overlay management, URL derivation and view
//! model generation. It is the single source of truth for all transient state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the shared product list, settings) from
//! user-controlled state (query criteria, overlay). Derived views such as the
//! current page are recomputed on demand and never stored.
//!
//! # State Components
//!
//! - **Products**: Immutable list shared with the catalog store
//! - **Query**: Search term, filters, sort and page
//! - **Load State**: Progress of the one-shot fetch
//! - **Hydration**: Whether URL parameters have been applied after the load
//! - **Overlay**: Detail overlay, owning the page scroll lock while open
//!
//! # Example
//!
//! ```rust
//! use dimoss_catalog::app::{AppState, Storefront};
//! use dimoss_catalog::query::CatalogSettings;
//! use dimoss_catalog::ui::Theme;
//!
//! let state = AppState::new(CatalogSettings::default(), Storefront::default(), Theme::default());
//! assert!(state.page().items.is_empty());
//! assert_eq!(state.current_url(), "/catalog");
//! ```

use super::effects::BodyScroll;
use super::modes::{LoadState, Overlay};
use crate::contact::{greeting_link, inquiry_link};
use crate::domain::{category_display_name, format_date, format_inr, format_weight, Product};
use crate::location::UrlParams;
use crate::query::{derive_page, filter_options, page_buttons, CatalogPage, CatalogQuery, CatalogSettings};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CatalogBody, CatalogViewModel, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, NavLink,
    OverlayInfo, PaginationInfo, ProductCard, StoneRow,
};
use std::collections::BTreeSet;
use std::sync::Arc;

const FOOTER_BLURB: &str = "Discover our exquisite collection of handcrafted jewelry pieces, \
                            designed to celebrate life's most precious moments.";
const FOOTER_ADDRESS: &str = "Sarafa Bazar, Karnal, Haryana";
const FOOTER_EMAIL: &str = "avdeshb@hotmail.com";
const FOOTER_PHONE: &str = "+91 702 770 1770";
const FACEBOOK_URL: &str = "https://www.facebook.com/profile.php?id=100095082944854";
const INSTAGRAM_URL: &str = "https://www.instagram.com/dimoss.in/";

/// Storefront endpoints and identity.
///
/// # Fields
///
/// - `brand`: Name shown in the header and footer
/// - `image_base`: Prefix joined with each image file name
/// - `whatsapp_number`: Number used in `wa.me` links, country code first
/// - `site_base`: Public origin used in inquiry messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storefront {
    pub brand: String,
    pub image_base: String,
    pub whatsapp_number: String,
    pub site_base: String,
}

impl Default for Storefront {
    fn default() -> Self {
        Self {
            brand: "Dimoss".to_string(),
            image_base: "https://stock.divyanshbansal.com/uploads/".to_string(),
            whatsapp_number: "917404413382".to_string(),
            site_base: "https://dimoss.in".to_string(),
        }
    }
}

/// Central application state container.
///
/// Mutated by the event handler in response to user input, load results and
/// history navigation. View models are computed on demand from state snapshots.
#[derive(Debug)]
pub struct AppState {
    /// Catalog shared with the store; empty until loaded or after a failure.
    pub products: Arc<[Product]>,

    /// Per-session view settings.
    pub settings: CatalogSettings,

    /// Current search, filters, sort and page.
    pub query: CatalogQuery,

    /// Progress of the catalog fetch.
    pub load_state: LoadState,

    /// Set once the URL parameters have been applied after the load.
    pub hydrated: bool,

    /// URL the session was opened with, applied at hydration.
    pub pending_location: Option<String>,

    /// Detail overlay.
    pub overlay: Overlay,

    /// Page scroll handle the overlay locks while open.
    pub body_scroll: BodyScroll,

    /// Endpoints and contact identity.
    pub storefront: Storefront,

    /// Color scheme for terminal rendering.
    pub theme: Theme,

    /// Ids of products marked as favorites. Not persisted.
    pub favorites: BTreeSet<String>,
}

impl AppState {
    /// Creates a state with an empty catalog that is waiting to be mounted.
    #[must_use]
    pub fn new(settings: CatalogSettings, storefront: Storefront, theme: Theme) -> Self {
        Self {
            products: Arc::from(Vec::new()),
            query: CatalogQuery::new(&settings),
            settings,
            load_state: LoadState::Pending,
            hydrated: false,
            pending_location: None,
            overlay: Overlay::Closed,
            body_scroll: BodyScroll::new(),
            storefront,
            theme,
            favorites: BTreeSet::new(),
        }
    }

    /// Derives the visible page from the current query.
    #[must_use]
    pub fn page(&self) -> CatalogPage<'_> {
        derive_page(&self.products, &self.query, &self.settings)
    }

    /// Number of pages for the current filters.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.page().total_pages
    }

    /// Position in the product list of the product with `index`.
    #[must_use]
    pub fn position_of(&self, index: u64) -> Option<usize> {
        self.products.iter().position(|product| product.index == index)
    }

    /// Product shown in the overlay, if it is open.
    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.overlay
            .product()
            .and_then(|position| self.products.get(position))
    }

    /// Flips the favorite mark of the product with `index`.
    ///
    /// Returns the new mark, or `None` when no product has this index.
    pub fn toggle_favorite(&mut self, index: u64) -> Option<bool> {
        let id = &self.products.iter().find(|p| p.index == index)?.id;
        if self.favorites.remove(id) {
            Some(false)
        } else {
            self.favorites.insert(id.clone());
            Some(true)
        }
    }

    /// Opens the overlay on the product at `position`.
    ///
    /// Switching from one product to another keeps the existing scroll lock;
    /// the gallery always restarts at the first image.
    pub fn open_product(&mut self, position: usize) {
        let lock = match std::mem::take(&mut self.overlay) {
            Overlay::Open { lock, .. } => lock,
            Overlay::Closed => self.body_scroll.lock(),
        };
        self.overlay = Overlay::Open {
            product: position,
            image: 0,
            lock,
        };
    }

    /// Closes the overlay, releasing the scroll lock. Returns `true` if it was open.
    pub fn close_overlay(&mut self) -> bool {
        let was_open = self.overlay.is_open();
        self.overlay = Overlay::Closed;
        was_open
    }

    /// Shows gallery image `image` of the open product.
    ///
    /// Returns `false` when the overlay is closed or the image does not exist.
    pub fn show_image(&mut self, image: usize) -> bool {
        let count = self.selected_product().map_or(0, |p| p.stock_image.len());
        match &mut self.overlay {
            Overlay::Open { image: current, .. } if image < count && *current != image => {
                *current = image;
                true
            }
            _ => false,
        }
    }

    /// Moves the gallery one image forward or back, wrapping at either end.
    pub fn step_image(&mut self, forward: bool) -> bool {
        let count = self.selected_product().map_or(0, |p| p.stock_image.len());
        if count < 2 {
            return false;
        }
        match &mut self.overlay {
            Overlay::Open { image, .. } => {
                *image = if forward {
                    (*image + 1) % count
                } else {
                    (*image + count - 1) % count
                };
                true
            }
            Overlay::Closed => false,
        }
    }

    /// Applies URL parameters to the query without resetting the page.
    ///
    /// A page outside `[1, total_pages]` falls back to 1.
    pub fn apply_params(&mut self, params: &UrlParams) {
        self.query = params.to_catalog_query(&self.settings);
        let total = self.total_pages();
        if self.query.page > total.max(1) {
            tracing::debug!(page = self.query.page, total, "page out of range, showing first page");
            self.query.page = 1;
        }
    }

    /// URL parameters describing the current state, including the open product.
    #[must_use]
    pub fn url_params(&self) -> UrlParams {
        let product = self.selected_product().map(|p| p.index);
        UrlParams::from_query(&self.query, &self.settings, product)
    }

    /// Canonical catalog URL of the current state.
    #[must_use]
    pub fn current_url(&self) -> String {
        self.url_params().to_url()
    }

    /// Computes a renderable view model from the current state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dimoss_catalog::app::{AppState, Storefront};
    /// use dimoss_catalog::query::CatalogSettings;
    /// use dimoss_catalog::ui::{CatalogBody, Theme};
    ///
    /// let state = AppState::new(CatalogSettings::default(), Storefront::default(), Theme::default());
    /// let vm = state.compute_viewmodel();
    /// assert_eq!(vm.body, CatalogBody::Loading);
    /// assert!(vm.overlay.is_none());
    /// ```
    #[must_use]
    pub fn compute_viewmodel(&self) -> CatalogViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", products = self.products.len()).entered();

        let page = self.page();

        let body = match self.load_state {
            LoadState::Pending => CatalogBody::Loading,
            LoadState::Failed => CatalogBody::Empty(EmptyState {
                message: "No products found".to_string(),
                subtitle: "The catalog is unavailable right now. Please try again later.".to_string(),
            }),
            LoadState::Ready if page.is_empty() => CatalogBody::Empty(EmptyState {
                message: "No products found matching your criteria.".to_string(),
                subtitle: "Try a different search term or clear the filters.".to_string(),
            }),
            LoadState::Ready => CatalogBody::Grid(
                page.items
                    .iter()
                    .map(|product| ProductCard {
                        favorite: self.favorites.contains(&product.id),
                        ..ProductCard::from_product(product, &self.storefront.image_base)
                    })
                    .collect(),
            ),
        };

        let pagination = (page.total_pages > 1).then(|| PaginationInfo {
            buttons: page_buttons(page.page, page.total_pages),
            has_previous: page.page > 1,
            has_next: page.page < page.total_pages,
        });

        CatalogViewModel {
            header: self.compute_header(),
            filter_bar: self.compute_filter_bar(&page),
            body,
            pagination,
            overlay: self.compute_overlay(),
            footer: self.compute_footer(),
            whatsapp_link: greeting_link(&self.storefront.whatsapp_number),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let nav = [
            ("Home", "/"),
            ("Collections", "/collections"),
            ("New Arrivals", "/new-arrivals"),
            ("Catalog", "/catalog"),
            ("About Us", "/us"),
        ]
        .into_iter()
        .map(|(label, href)| NavLink {
            label: label.to_string(),
            href: href.to_string(),
            active: href == "/catalog",
        })
        .collect();

        HeaderInfo {
            brand: self.storefront.brand.clone(),
            nav,
        }
    }

    fn compute_filter_bar(&self, page: &CatalogPage<'_>) -> FilterBarInfo {
        let options = filter_options(&self.products);

        FilterBarInfo {
            search: self.query.search.clone(),
            category: self
                .query
                .category
                .as_deref()
                .map_or_else(|| "All Types".to_string(), |c| category_display_name(c).to_string()),
            purity: self
                .query
                .purity
                .as_deref()
                .map_or_else(|| "All Purities".to_string(), |p| format!("{p}K")),
            in_stock_only: self.query.in_stock_only,
            sort: self.query.sort.label().to_string(),
            summary: format!(
                "Showing {} of {} products",
                page.items.len(),
                page.filtered_count
            ),
            category_options: options.categories.into_iter().map(|o| o.label).collect(),
            purity_options: options.purities.into_iter().map(|o| o.label).collect(),
        }
    }

    fn compute_overlay(&self) -> Option<OverlayInfo> {
        let product = self.selected_product()?;
        let image = self.overlay.image().unwrap_or(0);
        let base = &self.storefront.image_base;

        let specifications = vec![
            ("Gross Weight".to_string(), format_weight(product.gross_wt)),
            ("Net Weight".to_string(), format_weight(product.net_wt)),
            ("Stone Weight".to_string(), format_weight(product.stone_wt)),
            ("Purity".to_string(), product.purity_karats()),
            ("Type".to_string(), product.stock_type.name.clone()),
            ("Category".to_string(), product.category_name().to_string()),
            ("Added".to_string(), format_date(product.created_date.as_ref())),
        ];

        let stones = product
            .stones()
            .iter()
            .map(|stone| StoneRow {
                kind: stone.kind.name.clone(),
                carats: stone.ct_weight.to_string(),
                rate: format!("{}/ct", format_inr(stone.sell_rate)),
            })
            .collect();

        Some(OverlayInfo {
            code: product.code(),
            price: format_inr(product.selling_price),
            image_url: product
                .stock_image
                .get(image)
                .map(|img| format!("{base}{}", img.file_name)),
            image_position: image,
            image_count: product.stock_image.len(),
            specifications,
            stones,
            in_stock: product.is_in_stock,
            inquiry_link: inquiry_link(
                &self.storefront.whatsapp_number,
                product,
                &self.storefront.site_base,
            ),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        FooterInfo {
            brand: self.storefront.brand.clone(),
            blurb: FOOTER_BLURB.to_string(),
            address: FOOTER_ADDRESS.to_string(),
            email: FOOTER_EMAIL.to_string(),
            phone: FOOTER_PHONE.to_string(),
            social: vec![
                ("Facebook".to_string(), FACEBOOK_URL.to_string()),
                ("Instagram".to_string(), INSTAGRAM_URL.to_string()),
            ],
            copyright: format!(
                "© {} {} Jewelry. All rights reserved.",
                chrono::Utc::now().format("%Y"),
                self.storefront.brand
            ),
        }
    }
}
