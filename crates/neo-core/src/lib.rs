//! Reactive view state for the close-approach dashboard.
//!
//! [`ViewState`] owns the loaded rows and runs the derivation steps from
//! `neo-transform` in a fixed order on every change. Presentation code reads a
//! [`ViewSnapshot`] and registers a [`ViewObserver`] to be told when to
//! re-render.

pub mod error;
pub mod observer;
pub mod snapshot;
pub mod state;
pub mod status;

pub use error::{CoreError, Result};
pub use observer::{SubscriptionId, ViewEvent, ViewObserver};
pub use snapshot::ViewSnapshot;
pub use state::ViewState;
pub use status::LoadStatus;
