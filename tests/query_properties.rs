//! Invariants of the filter/sort/paginate engine and the URL contract.

use chrono::{Duration, TimeZone, Utc};
use dimoss_catalog::app::{handle_event, AppState, Event, Storefront};
use dimoss_catalog::domain::Label;
use dimoss_catalog::location::UrlParams;
use dimoss_catalog::query::{derive_page, filter_products, CatalogQuery, CatalogSettings, SortOption};
use dimoss_catalog::{Product, Theme};
use proptest::prelude::*;
use std::sync::Arc;

const CATEGORIES: [&str; 3] = ["LR", "PDL", "GR"];
const PURITIES: [&str; 2] = ["18", "22"];

fn product_strategy() -> impl Strategy<Value = (usize, usize, u32, bool, Option<i64>)> {
    (
        0..CATEGORIES.len(),
        0..PURITIES.len(),
        0u32..200_000,
        any::<bool>(),
        proptest::option::of(0i64..1_000),
    )
}

fn build(specs: &[(usize, usize, u32, bool, Option<i64>)]) -> Vec<Product> {
    let epoch = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    specs
        .iter()
        .enumerate()
        .map(|(i, &(category, purity, price, in_stock, age))| {
            let mut product = Product::sample(i as u64 + 1);
            product.ornament = Label::new(CATEGORIES[category]);
            product.purity = Label::new(PURITIES[purity]);
            product.selling_price = f64::from(price);
            product.is_in_stock = in_stock;
            product.created_date = age.map(|days| epoch + Duration::days(days));
            product
        })
        .collect()
}

fn query_strategy() -> impl Strategy<Value = CatalogQuery> {
    (
        "[a-z0-9 ]{0,4}",
        proptest::option::of(0..CATEGORIES.len()),
        proptest::option::of(0..PURITIES.len()),
        any::<bool>(),
        0..3usize,
        1usize..6,
    )
        .prop_map(|(search, category, purity, in_stock_only, sort, page)| CatalogQuery {
            search,
            category: category.map(|c| CATEGORIES[c].to_string()),
            purity: purity.map(|p| PURITIES[p].to_string()),
            in_stock_only,
            sort: [SortOption::Featured, SortOption::PriceAsc, SortOption::PriceDesc][sort],
            page,
        })
}

fn settings(page_size: usize) -> CatalogSettings {
    CatalogSettings {
        page_size,
        ..CatalogSettings::default()
    }
}

proptest! {
    /// Filtering never adds products, and without criteria keeps them all.
    #[test]
    fn filtered_count_is_bounded(
        specs in proptest::collection::vec(product_strategy(), 0..40),
        query in query_strategy(),
    ) {
        let products = build(&specs);
        let settings = settings(7);

        prop_assert!(filter_products(&products, &query, &settings).len() <= products.len());

        let mut unfiltered = CatalogQuery::new(&settings);
        unfiltered.in_stock_only = false;
        prop_assert_eq!(filter_products(&products, &unfiltered, &settings).len(), products.len());
    }

    /// With distinct prices, descending order is ascending order reversed.
    #[test]
    fn price_sorts_are_mirror_images(
        prices in proptest::collection::btree_set(0u32..1_000_000, 0..40),
        in_stock_only in any::<bool>(),
    ) {
        let specs: Vec<_> = prices.iter().enumerate().map(|(i, &price)| (i % 3, i % 2, price, i % 4 != 0, None)).collect();
        let products = build(&specs);
        let settings = settings(20);

        let mut query = CatalogQuery::new(&settings);
        query.in_stock_only = in_stock_only;
        query.sort = SortOption::PriceAsc;
        let ascending: Vec<u64> = filter_products(&products, &query, &settings).iter().map(|p| p.index).collect();
        query.sort = SortOption::PriceDesc;
        let mut descending: Vec<u64> = filter_products(&products, &query, &settings).iter().map(|p| p.index).collect();
        descending.reverse();

        prop_assert_eq!(ascending, descending);
    }

    /// Encoding a query into the URL and reading it back shows the same page.
    #[test]
    fn url_round_trip_preserves_visible_list(
        specs in proptest::collection::vec(product_strategy(), 0..40),
        query in query_strategy(),
        default_in_stock in any::<bool>(),
    ) {
        let products = build(&specs);
        let settings = CatalogSettings { page_size: 5, default_in_stock, ..CatalogSettings::default() };

        let url = UrlParams::from_query(&query, &settings, None).to_url();
        let restored = UrlParams::parse(&url).to_catalog_query(&settings);

        let before: Vec<u64> = derive_page(&products, &query, &settings).items.iter().map(|p| p.index).collect();
        let after: Vec<u64> = derive_page(&products, &restored, &settings).items.iter().map(|p| p.index).collect();
        prop_assert_eq!(before, after);
    }

    /// Whatever page the URL asks for, the hydrated page is within range.
    #[test]
    fn hydrated_page_is_within_range(
        specs in proptest::collection::vec(product_strategy(), 0..60),
        requested in 0usize..20,
        category in proptest::option::of(0..CATEGORIES.len()),
    ) {
        let products = build(&specs);
        let mut state = AppState::new(settings(5), Storefront::default(), Theme::default());
        let mut location = format!("/catalog?page={requested}");
        if let Some(category) = category {
            location.push_str("&category=");
            location.push_str(CATEGORIES[category]);
        }

        handle_event(&mut state, &Event::Mount { location }).unwrap();
        handle_event(&mut state, &Event::CatalogLoaded { products: Arc::from(products) }).unwrap();

        let total = state.total_pages();
        prop_assert!(state.query.page >= 1);
        prop_assert!(state.query.page <= total.max(1));

        let toggled = !state.query.in_stock_only;
        handle_event(&mut state, &Event::InStockToggled(toggled)).unwrap();
        prop_assert_eq!(state.query.page, 1);
    }
}
