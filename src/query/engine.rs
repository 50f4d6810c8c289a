//! Filter, sort and paginate derivation.
//!
//! Views are derived, never stored: every call recomputes the visible page from
//! the full product list and the current [`CatalogQuery`]. Derived lists borrow
//! from the shared catalog, so no product is cloned.

use super::criteria::{CatalogQuery, CatalogSettings, FeaturedOrder, SortOption};
use super::pager::total_pages;
use crate::domain::{category_display_name, Product};
use std::cmp::Ordering;
use std::collections::HashSet;

/// One page of the filtered and sorted catalog.
///
/// `items` holds at most `page_size` products; `filtered_count` counts every
/// product that passed the filters, across all pages.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage<'a> {
    pub items: Vec<&'a Product>,
    pub filtered_count: usize,
    pub total_pages: usize,
    pub page: usize,
}

impl CatalogPage<'_> {
    /// Returns `true` when no product matched the criteria.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }
}

/// Selectable value of a filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

/// Distinct filter values present in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub categories: Vec<FilterOption>,
    pub purities: Vec<FilterOption>,
}

/// Applies search, filters and sort to the full list.
///
/// Steps run in order: text search, category, purity, in-stock, then a stable
/// sort. An empty search term disables the text step. Whitespace in the term
/// is matched literally.
#[must_use]
pub fn filter_products<'a>(
    products: &'a [Product],
    query: &CatalogQuery,
    settings: &CatalogSettings,
) -> Vec<&'a Product> {
    let _span = tracing::debug_span!(
        "filter_products",
        total = products.len(),
        search_len = query.search.len(),
        sort = %query.sort
    )
    .entered();

    let term = query.search.to_lowercase();

    let mut filtered: Vec<&Product> = products
        .iter()
        .filter(|product| term.is_empty() || product.matches_search(&term))
        .filter(|product| {
            query
                .category
                .as_ref()
                .map_or(true, |category| &product.ornament.name == category)
        })
        .filter(|product| {
            query
                .purity
                .as_ref()
                .map_or(true, |purity| &product.purity.name == purity)
        })
        .filter(|product| !query.in_stock_only || product.is_in_stock)
        .collect();

    match query.sort {
        SortOption::PriceAsc => {
            filtered.sort_by(|a, b| a.selling_price.total_cmp(&b.selling_price));
        }
        SortOption::PriceDesc => {
            filtered.sort_by(|a, b| b.selling_price.total_cmp(&a.selling_price));
        }
        SortOption::Featured => match settings.featured_order {
            FeaturedOrder::Newest => filtered.sort_by(|a, b| newest_first(a, b)),
            FeaturedOrder::Catalog => {}
        },
    }

    tracing::debug!(filtered_count = filtered.len(), "catalog filtered");
    filtered
}

/// Derives the visible page for `query`.
///
/// The page is not clamped here: a page past the end yields no items. Keeping
/// `query.page` within `[1, total_pages]` is the caller's job.
///
/// # Examples
///
/// ```
/// use dimoss_catalog::domain::Product;
/// use dimoss_catalog::query::{derive_page, CatalogQuery, CatalogSettings};
///
/// let products: Vec<Product> = (1..=25).map(Product::sample).collect();
/// let settings = CatalogSettings::default();
/// let mut query = CatalogQuery::new(&settings);
///
/// let first = derive_page(&products, &query, &settings);
/// assert_eq!((first.items.len(), first.total_pages), (20, 2));
///
/// query.page = 2;
/// assert_eq!(derive_page(&products, &query, &settings).items.len(), 5);
/// ```
#[must_use]
pub fn derive_page<'a>(
    products: &'a [Product],
    query: &CatalogQuery,
    settings: &CatalogSettings,
) -> CatalogPage<'a> {
    let filtered = filter_products(products, query, settings);
    let size = settings.page_size.max(1);
    let filtered_count = filtered.len();

    let start = query.page.saturating_sub(1).saturating_mul(size);
    let items = filtered.into_iter().skip(start).take(size).collect();

    CatalogPage {
        items,
        filtered_count,
        total_pages: total_pages(filtered_count, size),
        page: query.page,
    }
}

/// Collects distinct ornament and purity labels in first-appearance order.
///
/// Category options carry the shopper-facing name of each ornament code.
#[must_use]
pub fn filter_options(products: &[Product]) -> FilterOptions {
    let mut seen_categories = HashSet::new();
    let mut seen_purities = HashSet::new();
    let mut options = FilterOptions::default();

    for product in products {
        let category = &product.ornament.name;
        if seen_categories.insert(category.as_str()) {
            options.categories.push(FilterOption {
                value: category.clone(),
                label: category_display_name(category).to_string(),
            });
        }

        let purity = &product.purity.name;
        if seen_purities.insert(purity.as_str()) {
            options.purities.push(FilterOption {
                value: purity.clone(),
                label: product.purity_karats(),
            });
        }
    }

    options
}

fn newest_first(a: &Product, b: &Product) -> Ordering {
    match (&a.created_date, &b.created_date) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Label, Tag};
    use chrono::{TimeZone, Utc};

    fn product(index: u64, ornament: &str, purity: &str, price: f64, in_stock: bool) -> Product {
        let mut product = Product::sample(index);
        product.ornament = Label::new(ornament);
        product.purity = Label::new(purity);
        product.selling_price = price;
        product.is_in_stock = in_stock;
        product
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "LR", "22", 5000.0, true),
            product(2, "PDL", "18", 12000.0, true),
            product(3, "LR", "18", 8000.0, false),
            product(4, "NP", "22", 1500.0, true),
            product(5, "PDL", "22", 30000.0, true),
        ]
    }

    fn indices(items: &[&Product]) -> Vec<u64> {
        items.iter().map(|p| p.index).collect()
    }

    fn settings() -> CatalogSettings {
        CatalogSettings {
            featured_order: FeaturedOrder::Catalog,
            ..CatalogSettings::default()
        }
    }

    fn query() -> CatalogQuery {
        CatalogQuery {
            in_stock_only: false,
            ..CatalogQuery::new(&settings())
        }
    }

    #[test]
    fn no_criteria_keeps_everything_in_catalog_order() {
        let products = catalog();
        let page = derive_page(&products, &query(), &settings());

        assert_eq!(indices(&page.items), vec![1, 2, 3, 4, 5]);
        assert_eq!(page.filtered_count, products.len());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn filters_combine() {
        let products = catalog();
        let mut q = query();
        q.category = Some("LR".to_string());
        assert_eq!(indices(&filter_products(&products, &q, &settings())), vec![1, 3]);

        q.purity = Some("18".to_string());
        assert_eq!(indices(&filter_products(&products, &q, &settings())), vec![3]);

        q.in_stock_only = true;
        assert!(filter_products(&products, &q, &settings()).is_empty());
    }

    #[test]
    fn search_matches_index_tag_ornament_and_remark() {
        let mut products = catalog();
        products[1].remark = Some("Temple Pendant".to_string());
        products[3].tag = Some(Tag::Text("Bridal".to_string()));

        let mut q = query();
        q.search = "TEMPLE".to_string();
        assert_eq!(indices(&filter_products(&products, &q, &settings())), vec![2]);

        q.search = "bridal".to_string();
        assert_eq!(indices(&filter_products(&products, &q, &settings())), vec![4]);

        q.search = "np".to_string();
        assert_eq!(indices(&filter_products(&products, &q, &settings())), vec![4]);

        q.search = "5".to_string();
        assert_eq!(indices(&filter_products(&products, &q, &settings())), vec![5]);
    }

    #[test]
    fn search_whitespace_is_significant() {
        let mut products = catalog();
        products[0].remark = Some("Ring".to_string());
        products[1].remark = Some("Ring set".to_string());

        let mut q = query();
        q.search = "ring ".to_string();
        assert_eq!(indices(&filter_products(&products, &q, &settings())), vec![2]);

        q.search = " ".to_string();
        assert_eq!(indices(&filter_products(&products, &q, &settings())), vec![2]);
    }

    #[test]
    fn unmatched_search_yields_empty_page() {
        let products = catalog();
        let mut q = query();
        q.search = "zzz-no-such".to_string();

        let page = derive_page(&products, &q, &settings());
        assert!(page.is_empty());
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn price_sorts_are_reverse_of_each_other() {
        let products = catalog();
        let mut q = query();

        q.sort = SortOption::PriceAsc;
        let asc = indices(&filter_products(&products, &q, &settings()));
        q.sort = SortOption::PriceDesc;
        let mut desc = indices(&filter_products(&products, &q, &settings()));

        assert_eq!(asc, vec![4, 1, 3, 2, 5]);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn featured_newest_puts_undated_last() {
        let mut products = catalog();
        products[0].created_date = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        products[2].created_date = Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        products[4].created_date = Some(Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap());

        let newest = CatalogSettings {
            featured_order: FeaturedOrder::Newest,
            ..settings()
        };
        let ordered = indices(&filter_products(&products, &query(), &newest));

        assert_eq!(ordered, vec![3, 1, 5, 2, 4]);
    }

    #[test]
    fn paginates_twenty_five_products() {
        let products: Vec<Product> = (1..=25).map(Product::sample).collect();
        let mut q = query();

        let first = derive_page(&products, &q, &settings());
        assert_eq!(first.items.len(), 20);
        assert_eq!(first.total_pages, 2);

        q.page = 2;
        let second = derive_page(&products, &q, &settings());
        assert_eq!(indices(&second.items), vec![21, 22, 23, 24, 25]);

        q.page = 3;
        assert!(derive_page(&products, &q, &settings()).items.is_empty());
    }

    #[test]
    fn filter_options_are_distinct_in_first_appearance_order() {
        let options = filter_options(&catalog());

        let categories: Vec<(&str, &str)> = options
            .categories
            .iter()
            .map(|o| (o.value.as_str(), o.label.as_str()))
            .collect();
        assert_eq!(
            categories,
            vec![("LR", "Women's Ring"), ("PDL", "Pendant"), ("NP", "Nose Pin")]
        );

        let purities: Vec<&str> = options.purities.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(purities, vec!["22K", "18K"]);
    }
}
