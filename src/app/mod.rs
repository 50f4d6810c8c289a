//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! runtime (session loop, CLI) and the catalog/query/location layers. It
//! implements the event-driven architecture that powers the catalog page.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └────────── Load Results ──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`effects`]: Scoped page effects (scroll lock)
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Load and overlay state machine types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod effects;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use effects::{BodyScroll, ScrollLock};
pub use handler::{handle_event, Event};
pub use modes::{LoadState, Overlay};
pub use state::{AppState, Storefront};
