//! Showcase pages built from the same catalog: New Arrivals and Collections.
//!
//! Both are pure functions of the product list; they share the catalog store
//! with the main grid and never trigger a fetch of their own.

use crate::domain::{category_display_name, Product};
use crate::location::UrlParams;
use std::cmp::Ordering;

/// Number of products shown on the New Arrivals page.
pub const NEW_ARRIVALS_LIMIT: usize = 20;

/// Ornament codes featured on the Collections page, in display order.
pub const COLLECTION_CODES: [&str; 10] = [
    "LR", "KADE", "B.BALI", "BCLT", "NP", "PDL", "TOPS", "GR", "SET", "CH",
];

/// Card of the Collections page.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionCard<'a> {
    pub code: &'static str,
    pub name: &'static str,
    /// Products in the category, with or without images.
    pub product_count: usize,
    /// Product whose cover image represents the category.
    pub representative: Option<&'a Product>,
    /// Catalog URL pre-filtered on the category.
    pub link: String,
}

/// In-stock products, newest first, at most `limit` of them.
///
/// Products without a creation date sort after every dated product.
#[must_use]
pub fn new_arrivals(products: &[Product], limit: usize) -> Vec<&Product> {
    let mut in_stock: Vec<&Product> = products.iter().filter(|p| p.is_in_stock).collect();
    in_stock.sort_by(|a, b| match (&a.created_date, &b.created_date) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    in_stock.truncate(limit);
    in_stock
}

/// Builds one card per featured category.
///
/// The representative is the highest-priced in-stock product that has an
/// image, falling back to the highest-priced product with an image. Among
/// equal prices the earliest product in the feed wins.
#[must_use]
pub fn collections(products: &[Product]) -> Vec<CollectionCard<'_>> {
    COLLECTION_CODES
        .iter()
        .map(|&code| {
            let in_category = || products.iter().filter(move |p| p.ornament.name == code);

            // `min_by` keeps the first of equal elements; `max_by` would keep the last.
            let priciest = |a: &&Product, b: &&Product| b.selling_price.total_cmp(&a.selling_price);
            let with_image = in_category().filter(|p| !p.stock_image.is_empty());
            let representative = with_image
                .clone()
                .filter(|p| p.is_in_stock)
                .min_by(priciest)
                .or_else(|| with_image.min_by(priciest));

            CollectionCard {
                code,
                name: category_display_name(code),
                product_count: in_category().count(),
                representative,
                link: UrlParams {
                    category: Some(code.to_string()),
                    ..UrlParams::default()
                }
                .to_url(),
            }
        })
        .collect()
}
