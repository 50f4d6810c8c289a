//! Dimoss Catalog: the catalog engine of a jewellery storefront.
//!
//! The crate provides:
//! - A one-shot catalog fetch shared by every consumer of a session
//! - Search, category, purity and stock filters with price sorting and pagination
//! - Two-way synchronization between page state and the catalog URL
//! - A product detail overlay with image gallery and WhatsApp inquiry links
//! - Terminal rendering of the catalog, New Arrivals and Collections pages

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs) + Session runtime (runtime/)         │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Query Layer   │   │ Catalog Layer │
//! │ (ui/)         │   │ (query/)      │   │ (catalog/)    │
//! │ - Rendering   │   │ - Filters     │   │ - HTTP / file │
//! │ - Theming     │   │ - Sorting     │   │ - Decoding    │
//! │ - Components  │   │ - Pagination  │   │ - One-shot    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Location, Contact, Showcase, Domain                │
//! │  - URL contract and history (location/)             │
//! │  - WhatsApp links (contact/)                        │
//! │  - New Arrivals and Collections (showcase/)         │
//! │  - Product model, formatting, errors (domain/)      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Catalog sources and the one-shot store
//! - [`query`]: Filter, sort and paginate engine
//! - [`location`]: URL parameter contract and navigation history
//! - [`contact`]: WhatsApp inquiry links
//! - [`showcase`]: New Arrivals and Collections selections
//! - [`domain`]: Core domain types (Product, errors, formatting)
//! - [`runtime`]: Session loop executing actions
//! - [`ui`]: Terminal rendering with theme support
//! - [`infrastructure`]: Configuration paths
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! Configuration is read from `~/.config/dimoss/config.toml` (or the file
//! given with `--config`) and can be overridden per run with `--set`:
//!
//! ```toml
//! endpoint = "https://stock.divyanshbansal.com/dimoss-website"
//! page_size = 20
//! default_in_stock = true
//! featured_order = "newest"
//! theme = "onyx"
//! trace_level = "debug"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use dimoss_catalog::{handle_event, initialize, Action, Config, Event, Product};
//! use std::sync::Arc;
//!
//! let mut state = initialize(&Config::default());
//!
//! let (_, actions) = handle_event(&mut state, &Event::Mount { location: "/catalog?page=2".into() })?;
//! assert_eq!(actions, vec![Action::FetchCatalog]);
//!
//! let products: Vec<Product> = (1..=25).map(Product::sample).collect();
//! handle_event(&mut state, &Event::CatalogLoaded { products: Arc::from(products) })?;
//! assert_eq!(state.page().items.len(), 5);
//! # Ok::<(), dimoss_catalog::CatalogError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod contact;
pub mod domain;
pub mod infrastructure;
pub mod location;
pub mod query;
pub mod runtime;
pub mod showcase;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Storefront};
pub use catalog::{CatalogSource, CatalogStore, FileSource, HttpSource};
pub use domain::{CatalogError, Product, Result};
pub use query::{CatalogSettings, FeaturedOrder, SortOption};
pub use runtime::Session;
pub use ui::Theme;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Engine configuration.
///
/// Every field has a default, so a configuration file only needs the keys it
/// changes.
///
/// # Example
///
/// ```toml
/// endpoint = "https://stock.divyanshbansal.com/dimoss-website"
/// whatsapp_number = "917404413382"
/// page_size = 24
/// theme_file = "~/.config/dimoss/theme.toml"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Catalog endpoint answering `GET` with a JSON array of products.
    pub endpoint: String,

    /// Prefix joined with each image file name.
    pub image_base: String,

    /// WhatsApp number, country code first, digits only.
    pub whatsapp_number: String,

    /// Public origin used in inquiry messages.
    pub site_base: String,

    /// Products per page. Values below 1 are treated as 1.
    pub page_size: usize,

    /// Whether the in-stock-only filter starts enabled.
    pub default_in_stock: bool,

    /// Order under the "Featured" sort: `newest` or `catalog`.
    pub featured_order: String,

    /// Timeout of the catalog request, in seconds.
    pub request_timeout_secs: u64,

    /// Built-in theme name to use.
    ///
    /// Options: `amber`, `onyx`. Ignored if `theme_file` is set.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Log level for the stderr subscriber.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"warn"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "https://stock.divyanshbansal.com/dimoss-website".to_string(),
            image_base: "https://stock.divyanshbansal.com/uploads/".to_string(),
            whatsapp_number: "917404413382".to_string(),
            site_base: "https://dimoss.in".to_string(),
            page_size: 20,
            default_in_stock: true,
            featured_order: "newest".to_string(),
            request_timeout_secs: 15,
            theme: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Reads a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read and
    /// [`CatalogError::Config`] if it is not valid TOML or names an unknown key.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| CatalogError::Config(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Loads `explicit` if given, otherwise the default configuration file if
    /// it exists, otherwise built-in defaults.
    ///
    /// # Errors
    ///
    /// Fails when the chosen file cannot be read or parsed. A missing default
    /// file is not an error; a missing explicit file is.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match infrastructure::default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Builds a configuration from `key=value` pairs over the defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use dimoss_catalog::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "12".to_string());
    /// map.insert("default_in_stock".to_string(), "false".to_string());
    ///
    /// let config = Config::from_pairs(&map);
    /// assert_eq!(config.page_size, 12);
    /// assert!(!config.default_in_stock);
    /// ```
    #[must_use]
    pub fn from_pairs(pairs: &BTreeMap<String, String>) -> Self {
        Self::default().with_pairs(pairs)
    }

    /// Applies `key=value` overrides.
    ///
    /// # Parsing Rules
    ///
    /// - String keys are taken as given; an empty value clears optional keys
    /// - `page_size`, `request_timeout_secs`: integers, kept on parse error
    /// - `default_in_stock`: `true`/`false`/`1`/`0`, kept on parse error
    /// - `featured_order`: `newest` or `catalog`, kept otherwise
    /// - Unknown keys are logged and ignored
    #[must_use]
    pub fn with_pairs(mut self, pairs: &BTreeMap<String, String>) -> Self {
        for (key, value) in pairs {
            let value = value.trim();
            match key.as_str() {
                "endpoint" => self.endpoint = value.to_string(),
                "image_base" => self.image_base = value.to_string(),
                "whatsapp_number" => self.whatsapp_number = value.to_string(),
                "site_base" => self.site_base = value.to_string(),
                "page_size" => match value.parse::<usize>() {
                    Ok(size) => self.page_size = size,
                    Err(_) => tracing::warn!(%value, "ignoring invalid page_size"),
                },
                "request_timeout_secs" => match value.parse::<u64>() {
                    Ok(secs) => self.request_timeout_secs = secs,
                    Err(_) => tracing::warn!(%value, "ignoring invalid request_timeout_secs"),
                },
                "default_in_stock" => match value {
                    "true" | "1" => self.default_in_stock = true,
                    "false" | "0" => self.default_in_stock = false,
                    _ => tracing::warn!(%value, "ignoring invalid default_in_stock"),
                },
                "featured_order" => {
                    if value.parse::<FeaturedOrder>().is_ok() {
                        self.featured_order = value.to_string();
                    } else {
                        tracing::warn!(%value, "ignoring invalid featured_order");
                    }
                }
                "theme" => self.theme = non_empty(value),
                "theme_file" => self.theme_file = non_empty(value),
                "trace_level" => self.trace_level = non_empty(value),
                other => tracing::warn!(key = other, "ignoring unknown configuration key"),
            }
        }
        self
    }

    /// View settings derived from this configuration.
    #[must_use]
    pub fn settings(&self) -> CatalogSettings {
        CatalogSettings {
            page_size: self.page_size.max(1),
            default_in_stock: self.default_in_stock,
            featured_order: self.featured_order.parse().unwrap_or_default(),
        }
    }

    /// Storefront identity derived from this configuration.
    #[must_use]
    pub fn storefront(&self) -> Storefront {
        Storefront {
            image_base: self.image_base.clone(),
            whatsapp_number: self.whatsapp_number.clone(),
            site_base: self.site_base.clone(),
            ..Storefront::default()
        }
    }

    /// Catalog request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Builds the catalog source: the snapshot file when given, otherwise the
    /// configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn catalog_source(&self, snapshot: Option<&Path>) -> Result<Box<dyn CatalogSource>> {
        match snapshot {
            Some(path) => {
                let path = infrastructure::expand_tilde(&path.to_string_lossy());
                Ok(Box::new(FileSource::new(path)))
            }
            None => Ok(Box::new(HttpSource::new(self.endpoint.clone(), self.request_timeout())?)),
        }
    }

    /// Resolves the theme: file first, then built-in name, then the default.
    ///
    /// Failures are logged and fall back to the default theme.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                    tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        )
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Creates the application state for a catalog session.
///
/// The state starts with an empty catalog in the pending load state; mounting
/// it (see [`Event::Mount`]) requests the fetch.
///
/// # Example
///
/// ```rust
/// use dimoss_catalog::{initialize, Config};
///
/// let config = Config {
///     theme: Some("onyx".to_string()),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.theme.name, "onyx");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing catalog session");
    AppState::new(config.settings(), config.storefront(), config.resolve_theme())
}
