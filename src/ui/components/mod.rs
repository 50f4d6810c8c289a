//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements. Each component is responsible for one part of the page and
//! appends its lines to a shared output buffer.
//!
//! # Components
//!
//! - [`header`]: Brand bar and navigation
//! - [`search`]: Search input box
//! - [`filters`]: Filter selections and result summary
//! - [`grid`]: Product cards with fixed columns
//! - [`pagination`]: Page buttons with gaps
//! - [`overlay`]: Product detail overlay
//! - [`empty`]: Loading and empty states
//! - [`footer`]: Contact details and WhatsApp bubble
//! - [`showcase`]: New Arrivals and Collections pages
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Search Bar - 3 lines]
//! [Filters]
//! [Border]
//! [Overlay | Loading | Empty | Grid Headers + Rows]
//! [Pagination]
//! [Footer]
//! ```

mod empty;
mod filters;
mod footer;
mod grid;
mod header;
mod overlay;
mod pagination;
mod search;
mod showcase;

pub use empty::{render_empty_state, render_loading};
pub use grid::{render_grid_headers, render_grid_rows};
pub use showcase::{render_arrivals, render_collections};

use crate::ui::helpers::render_border;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CatalogBody, CatalogViewModel};

use filters::render_filters;
use footer::render_footer;
use header::render_header;
use overlay::render_overlay;
use pagination::render_pagination;
use search::render_search_bar;

/// Renders the full catalog page layout.
///
/// While the overlay is open it takes the place of the grid, the way a modal
/// covers the page; the pagination bar stays hidden until it closes.
pub fn render_catalog_page(out: &mut String, vm: &CatalogViewModel, theme: &Theme, cols: usize) {
    render_header(out, &vm.header, theme, cols);
    render_border(out, &theme.colors.border, cols);
    render_search_bar(out, &vm.filter_bar.search, theme, cols);
    render_filters(out, &vm.filter_bar, theme);
    render_border(out, &theme.colors.border, cols);

    if let Some(overlay) = &vm.overlay {
        render_overlay(out, overlay, theme, cols);
    } else {
        match &vm.body {
            CatalogBody::Loading => render_loading(out, theme, cols),
            CatalogBody::Empty(empty) => render_empty_state(out, empty, theme, cols),
            CatalogBody::Grid(cards) => {
                render_grid_headers(out, theme);
                render_grid_rows(out, cards, theme, cols);
            }
        }

        if let Some(pagination) = &vm.pagination {
            out.push('\n');
            render_pagination(out, pagination, theme, cols);
        }
    }

    render_footer(out, &vm.footer, &vm.whatsapp_link, theme, cols);
}
