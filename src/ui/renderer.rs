//! Top-level rendering coordinator.
//!
//! This module provides the rendering entry points, coordinating view model
//! computation and delegation to UI components.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `CatalogViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! Output is returned as an ANSI-styled `String`; printing it is the caller's
//! job.
//!
//! # Example
//!
//! ```rust
//! use dimoss_catalog::app::{AppState, Storefront};
//! use dimoss_catalog::query::CatalogSettings;
//! use dimoss_catalog::ui::{render, Theme};
//!
//! let state = AppState::new(CatalogSettings::default(), Storefront::default(), Theme::default());
//! let page = render(&state, 80);
//! assert!(page.contains("Loading catalog"));
//! ```

use crate::app::{AppState, Storefront};
use crate::domain::Product;
use crate::showcase::{collections, new_arrivals, NEW_ARRIVALS_LIMIT};
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CatalogViewModel, CollectionInfo, ProductCard};

/// Renders the catalog page for the current state.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `cols` - Terminal width in columns
#[must_use]
pub fn render(state: &AppState, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, &state.theme, cols)
}

/// Renders a pre-computed view model.
#[must_use]
pub fn render_viewmodel(vm: &CatalogViewModel, theme: &Theme, cols: usize) -> String {
    let mut out = String::new();
    components::render_catalog_page(&mut out, vm, theme, cols);
    out
}

/// Renders the New Arrivals page: in-stock products, newest first.
#[must_use]
pub fn render_new_arrivals(products: &[Product], storefront: &Storefront, theme: &Theme, cols: usize) -> String {
    let cards: Vec<ProductCard> = new_arrivals(products, NEW_ARRIVALS_LIMIT)
        .into_iter()
        .map(|product| ProductCard::from_product(product, &storefront.image_base))
        .collect();

    let mut out = String::new();
    components::render_arrivals(&mut out, &cards, theme, cols);
    out
}

/// Renders the Collections page.
#[must_use]
pub fn render_collections_page(products: &[Product], storefront: &Storefront, theme: &Theme, cols: usize) -> String {
    let infos: Vec<CollectionInfo> = collections(products)
        .into_iter()
        .map(|card| CollectionInfo {
            code: card.code.to_string(),
            name: card.name.to_string(),
            product_count: card.product_count,
            image_url: card
                .representative
                .and_then(|product| product.cover_image_url(&storefront.image_base)),
            link: card.link,
        })
        .collect();

    let mut out = String::new();
    components::render_collections(&mut out, &infos, theme, cols);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event};
    use crate::domain::{Label, StoneRecord};
    use crate::query::CatalogSettings;
    use crate::ui::helpers::strip_ansi;
    use std::sync::Arc;

    fn loaded(products: Vec<Product>) -> AppState {
        let mut state = AppState::new(
            CatalogSettings::default(),
            Storefront::default(),
            Theme::default(),
        );
        handle_event(&mut state, &Event::Mount { location: "/catalog".into() }).unwrap();
        handle_event(
            &mut state,
            &Event::CatalogLoaded {
                products: Arc::from(products),
            },
        )
        .unwrap();
        state
    }

    #[test]
    fn renders_grid_with_prices_and_badges() {
        let mut sold = Product::sample(2);
        sold.is_in_stock = false;
        sold.selling_price = 123_456.0;
        let mut state = loaded(vec![Product::sample(1), sold]);
        handle_event(&mut state, &Event::InStockToggled(false)).unwrap();

        let page = strip_ansi(&render(&state, 100));

        assert!(page.contains("DIMOSS"));
        assert!(page.contains("DM-1"));
        assert!(page.contains("₹1,23,456"));
        assert!(page.contains("OUT OF STOCK"));
        assert!(page.contains("Showing 2 of 2 products"));
        assert!(page.contains("https://wa.me/917404413382?text=Hi"));
    }

    #[test]
    fn renders_empty_state_for_unmatched_search() {
        let mut state = loaded(vec![Product::sample(1)]);
        handle_event(&mut state, &Event::SearchChanged("no-such-thing".into())).unwrap();

        let page = strip_ansi(&render(&state, 80));
        assert!(page.contains("No products found matching your criteria."));
        assert!(!page.contains("Next ›"));
    }

    #[test]
    fn renders_overlay_with_stones_and_placeholder() {
        let mut product = Product::sample(5);
        product.stock_image.clear();
        product.stone_table = Some(vec![StoneRecord {
            kind: Label::new("VVS"),
            ct_weight: 0.31,
            sell_rate: 65_000.0,
        }]);
        let mut state = loaded(vec![product]);
        handle_event(&mut state, &Event::SelectProduct { index: 5 }).unwrap();

        let page = strip_ansi(&render(&state, 100));
        assert!(page.contains("[ no image available ]"));
        assert!(page.contains("Stone Details"));
        assert!(page.contains("₹65,000/ct"));
        assert!(page.contains("Inquire on WhatsApp: https://wa.me/917404413382?text="));
    }

    #[test]
    fn renders_pagination_for_multiple_pages() {
        let state = loaded((1..=45).map(Product::sample).collect());

        let page = strip_ansi(&render(&state, 100));
        assert!(page.contains("‹ Prev  [1] 2 3  Next ›"));
    }

    #[test]
    fn renders_showcase_pages() {
        let products: Vec<Product> = (1..=3).map(Product::sample).collect();
        let storefront = Storefront::default();
        let theme = Theme::default();

        let arrivals = strip_ansi(&render_new_arrivals(&products, &storefront, &theme, 100));
        assert!(arrivals.contains("New Arrivals"));
        assert!(arrivals.contains("DM-3"));

        let collections = strip_ansi(&render_collections_page(&products, &storefront, &theme, 100));
        assert!(collections.contains("Women's Ring"));
        assert!(collections.contains("3 pieces"));
        assert!(collections.contains("/catalog?category=LR"));
        assert!(collections.contains("https://stock.divyanshbansal.com/uploads/"));
    }
}
