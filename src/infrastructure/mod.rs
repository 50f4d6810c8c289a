//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module resolves where configuration lives on the host and expands
//! user-supplied paths before they reach the filesystem.

pub mod paths;

pub use paths::{config_dir, default_config_path, expand_tilde};
