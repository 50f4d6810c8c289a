//! Actions representing side effects to be executed by the runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or load results.
//! Actions bridge pure state transitions and effectful operations like fetching
//! the catalog, rewriting the address bar or opening an external link.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event, allowing
//! multiple side effects to be queued atomically. The runtime executes them in
//! order; [`Action::FetchCatalog`] feeds its result back as a new event.
//!
//! # Example
//!
//! ```rust
//! use dimoss_catalog::app::Action;
//!
//! let actions = vec![
//!     Action::ReplaceUrl("/catalog?category=LR".to_string()),
//!     Action::ScrollToProducts,
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Loads the catalog through the one-shot store.
    ///
    /// The runtime answers with `CatalogLoaded` or `CatalogFailed`.
    FetchCatalog,

    /// Rewrites the current history entry with a new catalog URL.
    ///
    /// Used for filter, search, sort and page changes and for closing the
    /// overlay, so those never add back-button entries.
    ReplaceUrl(String),

    /// Adds a history entry. Used when a product is selected, so the back
    /// button closes the overlay.
    PushUrl(String),

    /// Brings the product grid into view after a page change.
    ScrollToProducts,

    /// Opens an external link (WhatsApp) in a new window.
    OpenLink(String),

    /// Shows a short-lived notice to the shopper.
    ShowToast(String),
}
