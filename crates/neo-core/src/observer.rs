//! Change notification for the presentation layer.

use crate::snapshot::ViewSnapshot;

/// What caused a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// A fetch started.
    Loading,
    /// Data was loaded and committed.
    Loaded,
    /// The fetch failed; see [`crate::LoadStatus::Failed`].
    LoadFailed,
    /// The fetch was dropped before it completed.
    LoadCancelled,
    /// The range window changed.
    Filtered,
    /// The sort column or direction changed.
    Sorted,
}

/// Receives the committed view after every change.
pub trait ViewObserver {
    fn on_view_change(&mut self, event: ViewEvent, view: &ViewSnapshot<'_>);
}

impl<F> ViewObserver for F
where
    F: FnMut(ViewEvent, &ViewSnapshot<'_>),
{
    fn on_view_change(&mut self, event: ViewEvent, view: &ViewSnapshot<'_>) {
        self(event, view);
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);
