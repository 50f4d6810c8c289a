//! Error types for the catalog engine.
//!
//! This module defines the centralized error type [`CatalogError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for catalog operations.
///
/// This enum consolidates all error conditions that can occur while fetching,
/// decoding, configuring or driving a catalog session. Variants wrapping errors
/// from external crates use `#[from]` for automatic conversion.
///
/// # Examples
///
/// ```
/// use dimoss_catalog::CatalogError;
///
/// fn validate_page_size(size: usize) -> Result<(), CatalogError> {
///     if size == 0 {
///         return Err(CatalogError::Config("page_size must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog endpoint could not be reached or answered with an error status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, such as reading a
    /// catalog snapshot or a configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog payload could not be decoded.
    ///
    /// Raised when the body is not a JSON array. Individual malformed records
    /// are skipped rather than reported through this variant.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A shell command could not be understood.
    #[error("Command error: {0}")]
    Command(String),
}

/// A specialized `Result` type for catalog operations.
///
/// # Examples
///
/// ```
/// use dimoss_catalog::Result;
///
/// fn load_nothing() -> Result<()> {
///     Ok(())
/// }
/// # load_nothing().unwrap();
/// ```
pub type Result<T> = std::result::Result<T, CatalogError>;
