//! URL state: query-string codec and navigation history.
//!
//! - [`params`]: Parsing and encoding of the `/catalog` query string
//! - [`history`]: Push/replace/back/forward stack used by the runtime

pub mod history;
pub mod params;

pub use history::History;
pub use params::{UrlParams, CATALOG_PATH};
