//! One-shot catalog store.
//!
//! The store owns a [`CatalogSource`] and fetches from it at most once. The
//! guard is a run-once initializer: the first `load()` call runs the fetch and
//! records its outcome, and every later or concurrent call observes that same
//! outcome. A failed fetch is recorded as well, so it is never retried for the
//! lifetime of the store.

use crate::catalog::source::CatalogSource;
use crate::domain::Product;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::Instrument;

/// Result of the single catalog fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The catalog was fetched and decoded.
    Loaded(Arc<[Product]>),

    /// The fetch failed; the catalog stays empty.
    Failed(String),
}

impl LoadOutcome {
    /// Products of a successful load, or an empty list after a failure.
    #[must_use]
    pub fn products(&self) -> Arc<[Product]> {
        match self {
            Self::Loaded(products) => Arc::clone(products),
            Self::Failed(_) => Arc::from(Vec::new()),
        }
    }
}

/// Holds the fetched product list for one catalog session.
pub struct CatalogStore {
    source: Box<dyn CatalogSource>,
    outcome: OnceCell<LoadOutcome>,
}

impl CatalogStore {
    /// Creates a store that has not fetched anything yet.
    #[must_use]
    pub fn new(source: Box<dyn CatalogSource>) -> Self {
        Self {
            source,
            outcome: OnceCell::new(),
        }
    }

    /// Fetches the catalog on first call and returns the recorded outcome.
    ///
    /// Failures are logged at `error` level and recorded; they are not
    /// propagated and never trigger a retry.
    pub async fn load(&self) -> &LoadOutcome {
        self.outcome
            .get_or_init(|| {
                let span = tracing::debug_span!("catalog_load", source = %self.source.describe());
                async {
                    match self.source.fetch().await {
                        Ok(products) => {
                            tracing::debug!(count = products.len(), "catalog loaded");
                            LoadOutcome::Loaded(products.into())
                        }
                        Err(e) => {
                            tracing::error!(source = %self.source.describe(), error = %e, "error fetching products");
                            LoadOutcome::Failed(e.to_string())
                        }
                    }
                }
                .instrument(span)
            })
            .await
    }

    /// Returns `true` once the single fetch has completed, successfully or not.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.outcome.initialized()
    }

    /// Products loaded so far; empty before the fetch settles or after a failure.
    #[must_use]
    pub fn products(&self) -> Arc<[Product]> {
        self.outcome
            .get()
            .map_or_else(|| Arc::from(Vec::new()), LoadOutcome::products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CatalogError, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl CatalogSource for CountingSource {
        async fn fetch(&self) -> Result<Vec<Product>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(CatalogError::Decode("boom".to_string()))
            } else {
                Ok(vec![Product::sample(1), Product::sample(2)])
            }
        }

        fn describe(&self) -> String {
            "counting".to_string()
        }
    }

    fn store(fail: bool) -> (CatalogStore, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = CountingSource {
            calls: Arc::clone(&calls),
            fail,
        };
        (CatalogStore::new(Box::new(source)), calls)
    }

    #[tokio::test]
    async fn fetches_once_across_repeated_loads() {
        let (store, calls) = store(false);
        assert!(!store.is_settled());
        assert!(store.products().is_empty());

        let first = store.load().await.clone();
        let second = store.load().await.clone();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(first, second);
        assert!(store.is_settled());
        assert_eq!(store.products().len(), 2);
    }

    #[tokio::test]
    async fn concurrent_loads_share_one_fetch() {
        let (store, calls) = store(false);

        let (a, b) = tokio::join!(store.load(), store.load());

        assert_eq!(a, b);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failure_is_recorded_and_not_retried() {
        let (store, calls) = store(true);

        assert!(matches!(store.load().await, LoadOutcome::Failed(_)));
        assert!(matches!(store.load().await, LoadOutcome::Failed(_)));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(store.is_settled());
        assert!(store.products().is_empty());
    }
}
