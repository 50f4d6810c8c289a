//! Load and overlay state machines.
//!
//! # State Machine
//!
//! The catalog moves through three load states:
//! - **Pending**: Fetch requested, nothing to show yet
//! - **Ready**: Products available
//! - **Failed**: Fetch failed; the catalog stays empty for the session
//!
//! The detail overlay is either closed or open on one product:
//!
//! ```text
//! Closed ──select / URL product──▶ Open { product, image }
//!   ▲                                 │  │
//!   └──close / URL product removed────┘  └─select other──▶ Open { other, 0 }
//! ```

use super::effects::ScrollLock;

/// Progress of the one-shot catalog fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// The fetch has been requested but has not completed.
    Pending,

    /// The catalog loaded successfully.
    Ready,

    /// The fetch failed. No retry is attempted.
    Failed,
}

impl LoadState {
    /// Returns `true` once the fetch completed, successfully or not.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Detail overlay state.
///
/// `product` is a position in the shared product list, never a copy of the
/// product. The overlay owns the page scroll lock while open.
#[derive(Debug, Default)]
pub enum Overlay {
    #[default]
    Closed,

    Open {
        /// Position of the shown product in the catalog list.
        product: usize,
        /// Gallery image currently shown.
        image: usize,
        /// Held for as long as the overlay is open.
        lock: ScrollLock,
    },
}

impl Overlay {
    /// Position of the open product, if any.
    #[must_use]
    pub const fn product(&self) -> Option<usize> {
        match self {
            Self::Closed => None,
            Self::Open { product, .. } => Some(*product),
        }
    }

    /// Gallery position of the open product, if any.
    #[must_use]
    pub const fn image(&self) -> Option<usize> {
        match self {
            Self::Closed => None,
            Self::Open { image, .. } => Some(*image),
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}
