//! Catalog query-string contract.
//!
//! The catalog route carries its whole view state in the query string:
//!
//! ```text
//! /catalog?category=LR&purity=22&inStock=false&sort=price-asc&search=ring&page=2&product=1042
//! ```
//!
//! Keys are always written in that order and parameters equal to their default
//! are omitted, so the same state always encodes to the same URL.

use crate::query::{CatalogQuery, CatalogSettings, SortOption};
use url::form_urlencoded;

/// Path of the catalog route.
pub const CATALOG_PATH: &str = "/catalog";

/// Parsed catalog URL parameters.
///
/// Every field is optional: `None` means the parameter was absent (or could not
/// be parsed) and the default applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParams {
    pub category: Option<String>,
    pub purity: Option<String>,
    pub in_stock: Option<bool>,
    pub sort: Option<SortOption>,
    pub search: Option<String>,
    pub page: Option<usize>,
    pub product: Option<u64>,
}

impl UrlParams {
    /// Parses a query string.
    ///
    /// Accepts a bare query (`category=LR`), a `?`-prefixed query or a full path
    /// with a query (`/catalog?category=LR`). Unknown keys, empty values and
    /// values that fail to parse are ignored. When a key repeats, the first
    /// occurrence wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use dimoss_catalog::location::UrlParams;
    /// use dimoss_catalog::query::SortOption;
    ///
    /// let params = UrlParams::parse("/catalog?sort=price-desc&page=2&bogus=1");
    /// assert_eq!(params.sort, Some(SortOption::PriceDesc));
    /// assert_eq!(params.page, Some(2));
    /// assert_eq!(params.category, None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let query = input.split_once('?').map_or(input, |(_, query)| query);
        let query = query.split_once('#').map_or(query, |(query, _)| query);

        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            match &*key {
                "category" if params.category.is_none() => {
                    params.category = Some(value.into_owned());
                }
                "purity" if params.purity.is_none() => {
                    params.purity = Some(value.into_owned());
                }
                "inStock" if params.in_stock.is_none() => {
                    params.in_stock = parse_flag(&value);
                }
                "sort" if params.sort.is_none() => {
                    params.sort = value.parse().ok().filter(|sort| *sort != SortOption::Featured);
                }
                "search" if params.search.is_none() => {
                    params.search = Some(value.into_owned());
                }
                "page" if params.page.is_none() => {
                    params.page = value.parse().ok().filter(|page| *page >= 1);
                }
                "product" if params.product.is_none() => {
                    params.product = value.parse().ok();
                }
                _ => {}
            }
        }

        params
    }

    /// Encodes the parameters as a form-urlencoded query without a leading `?`.
    ///
    /// Defaults are omitted: featured sort, an empty search and page 1 never
    /// appear in the output.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        if let Some(category) = &self.category {
            serializer.append_pair("category", category);
        }
        if let Some(purity) = &self.purity {
            serializer.append_pair("purity", purity);
        }
        if let Some(in_stock) = self.in_stock {
            serializer.append_pair("inStock", if in_stock { "true" } else { "false" });
        }
        if let Some(sort) = self.sort.and_then(SortOption::as_param) {
            serializer.append_pair("sort", sort);
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            serializer.append_pair("search", search);
        }
        if let Some(page) = self.page.filter(|page| *page > 1) {
            serializer.append_pair("page", &page.to_string());
        }
        if let Some(product) = self.product {
            serializer.append_pair("product", &product.to_string());
        }

        serializer.finish()
    }

    /// Full catalog URL, e.g. `/catalog?category=LR`, or `/catalog` when empty.
    #[must_use]
    pub fn to_url(&self) -> String {
        let query = self.to_query();
        if query.is_empty() {
            CATALOG_PATH.to_string()
        } else {
            format!("{CATALOG_PATH}?{query}")
        }
    }

    /// Builds the parameters describing `query`, omitting defaults.
    ///
    /// `inStock` is only written when it differs from
    /// [`CatalogSettings::default_in_stock`].
    #[must_use]
    pub fn from_query(query: &CatalogQuery, settings: &CatalogSettings, product: Option<u64>) -> Self {
        Self {
            category: query.category.clone(),
            purity: query.purity.clone(),
            in_stock: (query.in_stock_only != settings.default_in_stock).then_some(query.in_stock_only),
            sort: (query.sort != SortOption::Featured).then_some(query.sort),
            search: (!query.search.is_empty()).then(|| query.search.clone()),
            page: (query.page > 1).then_some(query.page),
            product,
        }
    }

    /// Converts the parameters into view criteria, filling in defaults.
    #[must_use]
    pub fn to_catalog_query(&self, settings: &CatalogSettings) -> CatalogQuery {
        CatalogQuery {
            search: self.search.clone().unwrap_or_default(),
            category: self.category.clone(),
            purity: self.purity.clone(),
            in_stock_only: self.in_stock.unwrap_or(settings.default_in_stock),
            sort: self.sort.unwrap_or_default(),
            page: self.page.unwrap_or(1),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_key() {
        let params = UrlParams::parse(
            "?category=B.BALI&purity=22&inStock=false&sort=price-asc&search=gold+ring&page=3&product=1042",
        );

        assert_eq!(params.category.as_deref(), Some("B.BALI"));
        assert_eq!(params.purity.as_deref(), Some("22"));
        assert_eq!(params.in_stock, Some(false));
        assert_eq!(params.sort, Some(SortOption::PriceAsc));
        assert_eq!(params.search.as_deref(), Some("gold ring"));
        assert_eq!(params.page, Some(3));
        assert_eq!(params.product, Some(1042));
    }

    #[test]
    fn ignores_garbage_values() {
        let params = UrlParams::parse("page=0&product=abc&inStock=maybe&sort=random&category=");

        assert_eq!(params, UrlParams::default());
    }

    #[test]
    fn writes_keys_in_fixed_order() {
        let params = UrlParams {
            product: Some(7),
            page: Some(2),
            search: Some("tops & chain".to_string()),
            sort: Some(SortOption::PriceDesc),
            in_stock: Some(false),
            purity: Some("18".to_string()),
            category: Some("TOPS".to_string()),
        };

        assert_eq!(
            params.to_url(),
            "/catalog?category=TOPS&purity=18&inStock=false&sort=price-desc&search=tops+%26+chain&page=2&product=7"
        );
        assert_eq!(UrlParams::parse(&params.to_url()), params);
    }

    #[test]
    fn omits_defaults() {
        let settings = CatalogSettings::default();
        let query = CatalogQuery::new(&settings);
        let params = UrlParams::from_query(&query, &settings, None);

        assert_eq!(params.to_query(), "");
        assert_eq!(params.to_url(), "/catalog");
    }

    #[test]
    fn in_stock_is_written_relative_to_default() {
        let in_stock_default = CatalogSettings::default();
        let all_default = CatalogSettings {
            default_in_stock: false,
            ..CatalogSettings::default()
        };

        let mut query = CatalogQuery::new(&in_stock_default);
        query.in_stock_only = false;
        assert_eq!(
            UrlParams::from_query(&query, &in_stock_default, None).to_query(),
            "inStock=false"
        );
        assert_eq!(UrlParams::from_query(&query, &all_default, None).to_query(), "");

        let hydrated = UrlParams::default().to_catalog_query(&in_stock_default);
        assert!(hydrated.in_stock_only);
    }
}
