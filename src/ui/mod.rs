//! User interface rendering layer with component-based architecture.
//!
//! This module turns view models into ANSI-styled text through composable
//! rendering components. It provides theme support and width-aware layout for
//! the catalog, New Arrivals and Collections pages.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → CatalogViewModel → render → ANSI String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable page state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (width, truncation, centering)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation
//!
//! # Example
//!
//! ```rust
//! use dimoss_catalog::app::{AppState, Storefront};
//! use dimoss_catalog::query::CatalogSettings;
//! use dimoss_catalog::ui::{render, CatalogBody, Theme};
//!
//! let state = AppState::new(CatalogSettings::default(), Storefront::default(), Theme::default());
//! assert_eq!(state.compute_viewmodel().body, CatalogBody::Loading);
//! print!("{}", render(&state, 80));
//! ```

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_collections_page, render_new_arrivals, render_viewmodel};
pub use theme::Theme;
pub use viewmodel::{
    CatalogBody, CatalogViewModel, CollectionInfo, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, NavLink,
    OverlayInfo, PaginationInfo, ProductCard, StoneRow,
};
