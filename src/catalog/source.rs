//! Catalog source abstraction.
//!
//! This module defines the [`CatalogSource`] trait that abstracts over where the
//! product list comes from. The storefront reads a remote endpoint; a JSON
//! snapshot on disk serves offline use and tests.

use crate::catalog::decode::decode_products;
use crate::domain::error::Result;
use crate::domain::Product;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

/// Abstraction over catalog backends.
///
/// A source returns the whole catalog in one call; no filtering, paging or
/// query parameters are pushed down to it.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches the full product list.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or the payload is not a JSON array.
    async fn fetch(&self) -> Result<Vec<Product>>;

    /// Short description used in logs.
    fn describe(&self) -> String;
}

/// Remote catalog endpoint, read with a single unauthenticated `GET`.
pub struct HttpSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSource {
    /// Creates a source for `endpoint` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<Product>> {
        tracing::debug!(endpoint = %self.endpoint, "requesting catalog");
        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        tracing::debug!(bytes = body.len(), "catalog response received");

        decode_products(&body)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

/// Catalog snapshot stored as a JSON file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading the snapshot at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    async fn fetch(&self) -> Result<Vec<Product>> {
        tracing::debug!(path = ?self.path, "reading catalog snapshot");
        let body = tokio::fs::read_to_string(&self.path).await?;
        decode_products(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
