//! Catalog session: state, store and history driven through one loop.
//!
//! The session plays the part of the page host. It feeds events into
//! [`handle_event`], executes the returned actions, and turns the results of
//! effectful actions back into events. The action queue is drained before a
//! dispatch returns, so a `Mount` resolves all the way through the fetch and
//! hydration in a single call.

use crate::app::{handle_event, Action, AppState, Event};
use crate::catalog::{CatalogStore, LoadOutcome};
use crate::domain::error::Result;
use crate::location::History;
use std::collections::VecDeque;
use std::sync::Arc;

/// One open catalog page.
pub struct Session {
    app: AppState,
    store: Arc<CatalogStore>,
    history: History,
    opened_links: Vec<String>,
    toasts: Vec<String>,
    scroll_requests: usize,
}

impl Session {
    /// Creates a session over `store`. Nothing is fetched until [`Session::open`].
    ///
    /// The store is shared, so several sessions (or the showcase pages) can
    /// await the same single fetch.
    #[must_use]
    pub fn new(app: AppState, store: Arc<CatalogStore>) -> Self {
        Self {
            app,
            store,
            history: History::new(crate::location::CATALOG_PATH),
            opened_links: Vec::new(),
            toasts: Vec::new(),
            scroll_requests: 0,
        }
    }

    /// Opens the catalog at `location` and runs the load to completion.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub async fn open(&mut self, location: &str) -> Result<bool> {
        self.history = History::new(location);
        self.dispatch(Event::Mount {
            location: location.to_string(),
        })
        .await
    }

    /// Handles `event` and every event its actions produce.
    ///
    /// Returns `true` if any step changed the visible state.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub async fn dispatch(&mut self, event: Event) -> Result<bool> {
        let mut queue = VecDeque::from([event]);
        let mut rendered = false;

        while let Some(event) = queue.pop_front() {
            let (should_render, actions) = handle_event(&mut self.app, &event)?;
            tracing::debug!(action_count = actions.len(), should_render, "event handled");
            rendered |= should_render;

            for action in actions {
                if let Some(follow_up) = self.execute_action(action).await {
                    queue.push_back(follow_up);
                }
            }
        }

        Ok(rendered)
    }

    /// Steps back in history, as the browser back button does.
    ///
    /// Returns `false` when already at the oldest entry.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub async fn back(&mut self) -> Result<bool> {
        let Some(location) = self.history.back().map(str::to_string) else {
            return Ok(false);
        };
        self.dispatch(Event::LocationChanged { location }).await
    }

    /// Steps forward in history.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub async fn forward(&mut self) -> Result<bool> {
        let Some(location) = self.history.forward().map(str::to_string) else {
            return Ok(false);
        };
        self.dispatch(Event::LocationChanged { location }).await
    }

    async fn execute_action(&mut self, action: Action) -> Option<Event> {
        tracing::debug!(action = ?action, "executing action");

        match action {
            Action::FetchCatalog => Some(match self.store.load().await {
                LoadOutcome::Loaded(products) => Event::CatalogLoaded {
                    products: Arc::clone(products),
                },
                LoadOutcome::Failed(error) => Event::CatalogFailed { error: error.clone() },
            }),
            Action::ReplaceUrl(url) => {
                self.history.replace(url);
                None
            }
            Action::PushUrl(url) => {
                self.history.push(url);
                None
            }
            Action::ScrollToProducts => {
                self.scroll_requests += 1;
                None
            }
            Action::OpenLink(url) => {
                tracing::info!(%url, "opening link");
                self.opened_links.push(url);
                None
            }
            Action::ShowToast(message) => {
                self.toasts.push(message);
                None
            }
        }
    }

    /// Renders the current page.
    #[must_use]
    pub fn render(&self, cols: usize) -> String {
        crate::ui::render(&self.app, cols)
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.app
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Address bar contents.
    #[must_use]
    pub fn current_url(&self) -> &str {
        self.history.current()
    }

    /// Links opened so far, oldest first.
    #[must_use]
    pub fn opened_links(&self) -> &[String] {
        &self.opened_links
    }

    /// Toast messages shown so far, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[String] {
        &self.toasts
    }

    /// Number of times the grid was scrolled into view.
    #[must_use]
    pub const fn scroll_requests(&self) -> usize {
        self.scroll_requests
    }

    #[must_use]
    pub fn store(&self) -> &Arc<CatalogStore> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSource;
    use crate::domain::{CatalogError, Product};
    use crate::query::CatalogSettings;
    use crate::app::Storefront;
    use crate::ui::Theme;
    use async_trait::async_trait;

    struct StaticSource(Result<Vec<Product>>);

    #[async_trait]
    impl CatalogSource for StaticSource {
        async fn fetch(&self) -> Result<Vec<Product>> {
            match &self.0 {
                Ok(products) => Ok(products.clone()),
                Err(e) => Err(CatalogError::Decode(e.to_string())),
            }
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }

    fn session(source: StaticSource) -> Session {
        let app = AppState::new(CatalogSettings::default(), Storefront::default(), Theme::default());
        Session::new(app, Arc::new(CatalogStore::new(Box::new(source))))
    }

    fn products(count: u64) -> StaticSource {
        StaticSource(Ok((1..=count).map(Product::sample).collect()))
    }

    #[tokio::test]
    async fn open_runs_fetch_and_hydration() {
        let mut session = session(products(45));

        assert!(session.open("/catalog?page=3").await.unwrap());

        assert!(session.state().hydrated);
        assert_eq!(session.state().query.page, 3);
        assert_eq!(session.current_url(), "/catalog?page=3");
        assert!(session.store().is_settled());
    }

    #[tokio::test]
    async fn page_change_replaces_url_and_scrolls() {
        let mut session = session(products(45));
        session.open("/catalog").await.unwrap();

        session.dispatch(Event::NextPage).await.unwrap();

        assert_eq!(session.current_url(), "/catalog?page=2");
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.scroll_requests(), 1);
    }

    #[tokio::test]
    async fn back_and_forward_follow_overlay() {
        let mut session = session(products(3));
        session.open("/catalog?category=LR").await.unwrap();

        session.dispatch(Event::SelectProduct { index: 2 }).await.unwrap();
        assert_eq!(session.current_url(), "/catalog?category=LR&product=2");

        assert!(session.back().await.unwrap());
        assert!(!session.state().overlay.is_open());
        assert_eq!(session.state().query.category.as_deref(), Some("LR"));

        assert!(session.forward().await.unwrap());
        assert!(session.state().overlay.is_open());
        assert!(!session.forward().await.unwrap());
    }

    #[tokio::test]
    async fn failed_fetch_shows_empty_catalog() {
        let mut session = session(StaticSource(Err(CatalogError::Decode("boom".into()))));

        session.open("/catalog?product=7").await.unwrap();

        assert!(session.state().products.is_empty());
        assert_eq!(session.current_url(), "/catalog");
        assert!(session.render(80).contains("No products found"));
    }

    #[tokio::test]
    async fn inquiry_records_link() {
        let mut session = session(products(2));
        session.open("/catalog?product=1").await.unwrap();

        session.dispatch(Event::Inquire).await.unwrap();

        assert_eq!(session.opened_links().len(), 1);
        assert!(session.opened_links()[0].starts_with("https://wa.me/917404413382?text="));
    }
}
