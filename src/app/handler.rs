//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! catalog load results and history navigation, translating them into state
//! changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the runtime (user input, fetch results, back/forward)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # URL synchronization
//!
//! URL parameters are applied once per mount, after the catalog load completes
//! (hydration). From then on every state change re-encodes the URL: filter,
//! page and overlay-close changes replace the current history entry, selecting
//! a product pushes a new one so the back button closes the overlay.
//!
//! # Example
//!
//! ```rust
//! use dimoss_catalog::app::{handle_event, Action, AppState, Event, Storefront};
//! use dimoss_catalog::query::CatalogSettings;
//! use dimoss_catalog::ui::Theme;
//!
//! let mut state = AppState::new(CatalogSettings::default(), Storefront::default(), Theme::default());
//! let (_, actions) = handle_event(&mut state, &Event::Mount { location: "/catalog".into() })?;
//! assert_eq!(actions, vec![Action::FetchCatalog]);
//! # Ok::<(), dimoss_catalog::CatalogError>(())
//! ```

use super::modes::LoadState;
use crate::app::{Action, AppState};
use crate::contact::{greeting_link, inquiry_link};
use crate::domain::error::Result;
use crate::domain::Product;
use crate::location::UrlParams;
use crate::query::SortOption;
use std::sync::Arc;

/// Events triggered by user input, load results or history navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The catalog route was opened with `location` in the address bar.
    Mount {
        /// Path and query, e.g. `/catalog?category=LR`.
        location: String,
    },

    /// The one-shot fetch succeeded.
    CatalogLoaded {
        products: Arc<[Product]>,
    },

    /// The one-shot fetch failed; the catalog stays empty.
    CatalogFailed {
        error: String,
    },

    /// Replaces the search term.
    SearchChanged(String),
    /// Selects an ornament category, or all categories with `None`.
    CategoryChanged(Option<String>),
    /// Selects a purity, or all purities with `None`.
    PurityChanged(Option<String>),
    /// Sets the in-stock-only flag.
    InStockToggled(bool),
    /// Changes the sort order.
    SortChanged(SortOption),
    /// Resets search and filters to their defaults, keeping the sort.
    ClearFilters,

    /// Jumps to a one-based page.
    GoToPage(usize),
    NextPage,
    PreviousPage,

    /// Opens the detail overlay for the product with this `index`.
    SelectProduct {
        index: u64,
    },
    /// Closes the detail overlay.
    CloseOverlay,
    /// Shows a specific gallery image of the open product.
    ShowImage(usize),
    NextImage,
    PreviousImage,

    /// Opens a WhatsApp inquiry for the open product.
    Inquire,
    /// Opens the WhatsApp greeting chat (floating bubble).
    Greet,

    /// Marks or unmarks the product with this `index` as a favorite.
    ToggleFavorite {
        index: u64,
    },

    /// The address bar changed through back/forward navigation.
    LocationChanged {
        location: String,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// A tuple of `(should_render, actions)`. `should_render` is `false` when the
/// event left the visible state unchanged (e.g. an out-of-range page request).
///
/// # Errors
///
/// Reserved for fallible transitions; none of the current events fail.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind(event)).entered();

    match event {
        Event::Mount { location } => {
            tracing::debug!(%location, "catalog mounted");
            state.pending_location = Some(location.clone());
            state.load_state = LoadState::Pending;
            state.hydrated = false;
            state.close_overlay();
            Ok((true, vec![Action::FetchCatalog]))
        }
        Event::CatalogLoaded { products } => {
            tracing::debug!(count = products.len(), "catalog ready");
            state.products = Arc::clone(products);
            state.load_state = LoadState::Ready;
            Ok((true, hydrate(state)))
        }
        Event::CatalogFailed { error } => {
            tracing::debug!(%error, "catalog unavailable");
            state.products = Arc::from(Vec::new());
            state.load_state = LoadState::Failed;
            Ok((true, hydrate(state)))
        }
        Event::SearchChanged(term) => Ok(update_query(state, |q| {
            q.search.clone_from(term);
        })),
        Event::CategoryChanged(category) => Ok(update_query(state, |q| {
            q.category.clone_from(category);
        })),
        Event::PurityChanged(purity) => Ok(update_query(state, |q| {
            q.purity.clone_from(purity);
        })),
        Event::InStockToggled(in_stock) => Ok(update_query(state, |q| {
            q.in_stock_only = *in_stock;
        })),
        Event::SortChanged(sort) => Ok(update_query(state, |q| {
            q.sort = *sort;
        })),
        Event::ClearFilters => {
            let defaults = crate::query::CatalogQuery::new(&state.settings);
            Ok(update_query(state, |q| {
                q.search = defaults.search;
                q.category = None;
                q.purity = None;
                q.in_stock_only = defaults.in_stock_only;
            }))
        }
        Event::GoToPage(page) => Ok(go_to_page(state, *page)),
        Event::NextPage => {
            let next = state.query.page + 1;
            Ok(go_to_page(state, next))
        }
        Event::PreviousPage => {
            let previous = state.query.page.saturating_sub(1);
            Ok(go_to_page(state, previous))
        }
        Event::SelectProduct { index } => {
            let Some(position) = state.position_of(*index) else {
                tracing::debug!(index, "no product with this index");
                return Ok((false, vec![]));
            };
            if state.overlay.product() == Some(position) {
                return Ok((false, vec![]));
            }

            state.open_product(position);
            tracing::debug!(index, position, "product overlay opened");

            let actions = if state.hydrated {
                vec![Action::PushUrl(state.current_url())]
            } else {
                vec![]
            };
            Ok((true, actions))
        }
        Event::CloseOverlay => {
            if !state.close_overlay() {
                return Ok((false, vec![]));
            }
            tracing::debug!("product overlay closed");
            Ok((true, url_sync(state)))
        }
        Event::ShowImage(image) => Ok((state.show_image(*image), vec![])),
        Event::NextImage => Ok((state.step_image(true), vec![])),
        Event::PreviousImage => Ok((state.step_image(false), vec![])),
        Event::Inquire => {
            let Some(product) = state.selected_product() else {
                tracing::debug!("inquiry without an open product");
                return Ok((false, vec![]));
            };
            let link = inquiry_link(
                &state.storefront.whatsapp_number,
                product,
                &state.storefront.site_base,
            );
            Ok((false, vec![Action::OpenLink(link)]))
        }
        Event::Greet => Ok((
            false,
            vec![Action::OpenLink(greeting_link(&state.storefront.whatsapp_number))],
        )),
        Event::ToggleFavorite { index } => match state.toggle_favorite(*index) {
            Some(true) => {
                tracing::debug!(index, "favorite added");
                Ok((true, vec![Action::ShowToast("Added to favorites!".to_string())]))
            }
            Some(false) => {
                tracing::debug!(index, "favorite removed");
                Ok((true, vec![]))
            }
            None => Ok((false, vec![])),
        },
        Event::LocationChanged { location } => {
            if !state.hydrated {
                tracing::debug!(%location, "location changed before hydration");
                state.pending_location = Some(location.clone());
                return Ok((false, vec![]));
            }
            Ok((true, follow_location(state, location)))
        }
    }
}

/// Applies the pending URL once the load has settled.
///
/// Emits a `ReplaceUrl` only when the canonical URL differs from the one the
/// session was opened with, e.g. after stripping an unknown `product`.
fn hydrate(state: &mut AppState) -> Vec<Action> {
    if state.hydrated {
        return vec![];
    }

    let location = state.pending_location.take().unwrap_or_default();
    let requested = UrlParams::parse(&location);
    tracing::debug!(%location, "hydrating from URL");

    let actions = apply_location(state, &requested);
    state.hydrated = true;
    actions
}

/// Re-reads the URL after back/forward navigation.
///
/// Filters follow the URL without a page reset and the overlay follows the
/// `product` parameter.
fn follow_location(state: &mut AppState, location: &str) -> Vec<Action> {
    let requested = UrlParams::parse(location);
    tracing::debug!(%location, "following history navigation");
    apply_location(state, &requested)
}

fn apply_location(state: &mut AppState, requested: &UrlParams) -> Vec<Action> {
    state.apply_params(requested);

    match requested.product {
        Some(index) => match state.position_of(index) {
            Some(position) => {
                if state.overlay.product() != Some(position) {
                    state.open_product(position);
                }
            }
            None => {
                tracing::debug!(index, "stripping unknown product from URL");
                state.close_overlay();
            }
        },
        None => {
            state.close_overlay();
        }
    }

    let canonical = state.current_url();
    if canonical == requested.to_url() {
        vec![]
    } else {
        vec![Action::ReplaceUrl(canonical)]
    }
}

/// Applies a filter change, resetting to page 1. Re-sending the current
/// value keeps the page.
fn update_query(
    state: &mut AppState,
    change: impl FnOnce(&mut crate::query::CatalogQuery),
) -> (bool, Vec<Action>) {
    let before = state.query.clone();
    change(&mut state.query);
    if state.query == before {
        return (false, vec![]);
    }
    state.query.page = 1;

    tracing::debug!(query = ?state.query, "query updated");
    (true, url_sync(state))
}

/// Moves to `page` when it is within `[1, total_pages]`; otherwise a no-op.
fn go_to_page(state: &mut AppState, page: usize) -> (bool, Vec<Action>) {
    let total = state.total_pages();
    if page < 1 || page > total || page == state.query.page {
        tracing::debug!(page, total, "page request ignored");
        return (false, vec![]);
    }

    state.query.page = page;
    let mut actions = url_sync(state);
    actions.push(Action::ScrollToProducts);
    (true, actions)
}

fn url_sync(state: &AppState) -> Vec<Action> {
    if state.hydrated {
        vec![Action::ReplaceUrl(state.current_url())]
    } else {
        vec![]
    }
}

/// Logs the event variant without dumping a whole product list.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::CatalogLoaded { products } => {
                write!(f, "CatalogLoaded({} products)", products.len())
            }
            other => write!(f, "{other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Storefront;
    use crate::domain::Label;
    use crate::query::CatalogSettings;
    use crate::ui::theme::Theme;

    fn catalog(count: u64) -> Arc<[Product]> {
        (1..=count)
            .map(|i| {
                let mut product = Product::sample(i);
                if i % 2 == 0 {
                    product.ornament = Label::new("PDL");
                }
                product
            })
            .collect::<Vec<_>>()
            .into()
    }

    fn mounted(location: &str, count: u64) -> (AppState, Vec<Action>) {
        let mut state = AppState::new(
            CatalogSettings::default(),
            Storefront::default(),
            Theme::default(),
        );
        let (_, actions) = handle_event(
            &mut state,
            &Event::Mount {
                location: location.to_string(),
            },
        )
        .unwrap();
        assert_eq!(actions, vec![Action::FetchCatalog]);

        let (_, actions) = handle_event(
            &mut state,
            &Event::CatalogLoaded {
                products: catalog(count),
            },
        )
        .unwrap();
        (state, actions)
    }

    #[test]
    fn hydrates_filters_and_page_without_reset() {
        let (state, actions) = mounted("/catalog?category=LR&page=1", 45);
        assert!(actions.is_empty());
        assert_eq!(state.query.category.as_deref(), Some("LR"));

        let (state, actions) = mounted("/catalog?page=2", 45);
        assert_eq!(state.query.page, 2);
        assert!(actions.is_empty());
        assert!(state.hydrated);
    }

    #[test]
    fn hydrated_page_out_of_range_falls_back() {
        let (state, actions) = mounted("/catalog?page=7", 25);

        assert_eq!(state.query.page, 1);
        assert_eq!(actions, vec![Action::ReplaceUrl("/catalog".to_string())]);
    }

    #[test]
    fn unknown_product_is_stripped() {
        let (state, actions) = mounted("/catalog?category=LR&product=999", 5);

        assert!(!state.overlay.is_open());
        assert_eq!(
            actions,
            vec![Action::ReplaceUrl("/catalog?category=LR".to_string())]
        );
    }

    #[test]
    fn product_param_opens_overlay_on_load() {
        let (state, actions) = mounted("/catalog?product=3", 5);

        assert!(actions.is_empty());
        assert_eq!(state.selected_product().map(|p| p.index), Some(3));
        assert!(state.body_scroll.is_locked());
    }

    #[test]
    fn filter_change_resets_page_and_replaces_url() {
        let (mut state, _) = mounted("/catalog?page=2", 45);

        let (render, actions) =
            handle_event(&mut state, &Event::CategoryChanged(Some("PDL".to_string()))).unwrap();

        assert!(render);
        assert_eq!(state.query.page, 1);
        assert_eq!(
            actions,
            vec![Action::ReplaceUrl("/catalog?category=PDL".to_string())]
        );
    }

    #[test]
    fn unchanged_filter_is_a_no_op() {
        let (mut state, _) = mounted("/catalog?sort=price-asc", 5);

        let (render, actions) =
            handle_event(&mut state, &Event::SortChanged(SortOption::PriceAsc)).unwrap();

        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn resending_current_filter_keeps_page() {
        let (mut state, _) = mounted("/catalog?category=PDL&page=2", 45);
        assert_eq!(state.query.page, 2);

        let resend = [
            Event::CategoryChanged(Some("PDL".to_string())),
            Event::SearchChanged(String::new()),
            Event::InStockToggled(state.query.in_stock_only),
        ];
        for event in &resend {
            assert_eq!(handle_event(&mut state, event).unwrap(), (false, vec![]));
        }
        assert_eq!(state.query.page, 2);
    }

    #[test]
    fn remount_hydrates_the_new_location() {
        let (mut state, _) = mounted("/catalog?product=3", 5);
        assert!(state.body_scroll.is_locked());

        let (_, actions) = handle_event(
            &mut state,
            &Event::Mount {
                location: "/catalog?category=PDL".to_string(),
            },
        )
        .unwrap();
        assert_eq!(actions, vec![Action::FetchCatalog]);
        assert!(!state.hydrated);
        assert!(!state.overlay.is_open());
        assert!(!state.body_scroll.is_locked());

        let (_, actions) = handle_event(
            &mut state,
            &Event::CatalogLoaded { products: catalog(5) },
        )
        .unwrap();
        assert!(actions.is_empty());
        assert!(state.hydrated);
        assert_eq!(state.query.category.as_deref(), Some("PDL"));
        assert_eq!(state.current_url(), "/catalog?category=PDL");
    }

    #[test]
    fn favorite_toggle_toasts_only_when_added() {
        let (mut state, _) = mounted("/catalog", 5);
        let toggle = Event::ToggleFavorite { index: 2 };

        let (render, actions) = handle_event(&mut state, &toggle).unwrap();
        assert!(render);
        assert_eq!(actions, vec![Action::ShowToast("Added to favorites!".to_string())]);
        assert!(state.favorites.contains("id-2"));

        let (render, actions) = handle_event(&mut state, &toggle).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(state.favorites.is_empty());

        assert_eq!(
            handle_event(&mut state, &Event::ToggleFavorite { index: 99 }).unwrap(),
            (false, vec![])
        );
    }

    #[test]
    fn page_requests_outside_range_are_ignored() {
        let (mut state, _) = mounted("/catalog", 25);

        assert_eq!(handle_event(&mut state, &Event::GoToPage(3)).unwrap(), (false, vec![]));
        assert_eq!(handle_event(&mut state, &Event::GoToPage(0)).unwrap(), (false, vec![]));
        assert_eq!(handle_event(&mut state, &Event::PreviousPage).unwrap(), (false, vec![]));

        let (render, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
        assert!(render);
        assert_eq!(
            actions,
            vec![
                Action::ReplaceUrl("/catalog?page=2".to_string()),
                Action::ScrollToProducts
            ]
        );
        assert_eq!(handle_event(&mut state, &Event::NextPage).unwrap(), (false, vec![]));
    }

    #[test]
    fn select_pushes_and_close_replaces() {
        let (mut state, _) = mounted("/catalog?category=LR", 5);

        let (_, actions) = handle_event(&mut state, &Event::SelectProduct { index: 3 }).unwrap();
        assert_eq!(
            actions,
            vec![Action::PushUrl("/catalog?category=LR&product=3".to_string())]
        );

        let (_, actions) = handle_event(&mut state, &Event::SearchChanged("3".to_string())).unwrap();
        assert_eq!(
            actions,
            vec![Action::ReplaceUrl(
                "/catalog?category=LR&search=3&product=3".to_string()
            )]
        );

        let (_, actions) = handle_event(&mut state, &Event::CloseOverlay).unwrap();
        assert_eq!(
            actions,
            vec![Action::ReplaceUrl("/catalog?category=LR&search=3".to_string())]
        );
        assert!(!state.body_scroll.is_locked());
    }

    #[test]
    fn back_navigation_closes_overlay_and_keeps_filters() {
        let (mut state, _) = mounted("/catalog?category=LR&page=1", 45);
        handle_event(&mut state, &Event::GoToPage(2)).unwrap();
        handle_event(&mut state, &Event::SelectProduct { index: 41 }).unwrap();
        assert!(state.overlay.is_open());

        let (_, actions) = handle_event(
            &mut state,
            &Event::LocationChanged {
                location: "/catalog?category=LR&page=2".to_string(),
            },
        )
        .unwrap();

        assert!(actions.is_empty());
        assert!(!state.overlay.is_open());
        assert_eq!(state.query.category.as_deref(), Some("LR"));
        assert_eq!(state.query.page, 2);
        assert!(!state.body_scroll.is_locked());
    }

    #[test]
    fn failed_load_still_hydrates() {
        let mut state = AppState::new(
            CatalogSettings::default(),
            Storefront::default(),
            Theme::default(),
        );
        handle_event(
            &mut state,
            &Event::Mount {
                location: "/catalog?purity=22&product=4".to_string(),
            },
        )
        .unwrap();

        let (_, actions) = handle_event(
            &mut state,
            &Event::CatalogFailed {
                error: "timeout".to_string(),
            },
        )
        .unwrap();

        assert!(state.hydrated);
        assert!(state.products.is_empty());
        assert_eq!(
            actions,
            vec![Action::ReplaceUrl("/catalog?purity=22".to_string())]
        );
    }

    #[test]
    fn inquiry_requires_open_product() {
        let (mut state, _) = mounted("/catalog", 3);
        assert_eq!(handle_event(&mut state, &Event::Inquire).unwrap(), (false, vec![]));

        handle_event(&mut state, &Event::SelectProduct { index: 2 }).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Inquire).unwrap();

        let [Action::OpenLink(link)] = actions.as_slice() else {
            panic!("expected one link, got {actions:?}");
        };
        assert!(link.starts_with("https://wa.me/917404413382?text="));
        assert!(link.ends_with("product%3D2"));
    }
}
