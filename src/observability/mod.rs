//! Structured logging for the catalog engine.
//!
//! The crate emits `tracing` events and spans throughout: spans around event
//! handling, filtering and view model computation, `debug!` for state
//! transitions, and `warn!`/`error!` for decode and fetch failures. This module
//! installs the subscriber that turns them into human-readable lines on stderr,
//! keeping stdout free for rendered pages.
//!
//! # Configuration
//!
//! Log level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` option in the configuration file or `--set`
//! 3. Default: `"warn"`
//!
//! # Usage
//!
//! Initialize tracing once, early in the process:
//!
//! ```rust
//! use dimoss_catalog::observability::init_tracing;
//! use dimoss_catalog::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("catalog engine initialized");
//! ```

mod init;

pub use init::{build_filter, init_tracing};
