//! Catalog acquisition layer.
//!
//! - [`source`]: Where the product list comes from (remote endpoint or snapshot file)
//! - [`decode`]: Lenient decoding of the JSON array payload
//! - [`store`]: One-shot store that fetches the list at most once per session

pub mod decode;
pub mod source;
pub mod store;

pub use decode::decode_products;
pub use source::{CatalogSource, FileSource, HttpSource};
pub use store::{CatalogStore, LoadOutcome};
