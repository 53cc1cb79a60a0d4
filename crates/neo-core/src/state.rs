//! The dashboard's single mutable model.
//!
//! # Pipeline
//!
//! ```text
//! fetch -> flatten -> metadata (min date, range options)
//!                  -> filter -> aggregate -> sort -> commit
//! ```
//!
//! `raw_rows`, `min_date` and `range_options` are fixed once the load
//! completes. Filtering always starts again from `raw_rows`; sorting works on
//! whatever was last filtered. Every operation finishes with a commit that
//! moves the working rows into `display_rows` and notifies observers, so an
//! observer never sees a half-applied change.

use std::fmt;
use std::mem;

use tracing::{Instrument, debug, error, info, info_span, warn};

use neo_feed::{FeedError, FeedPayload, FeedSource};
use neo_model::{
    AggregateSet, COLUMNS, ColumnKey, ColumnSpec, DASHBOARD_TITLE, Row, SortDirection,
    parse_range_days,
};
use neo_transform::{DateSpan, aggregate, filter_by_range, flatten, range_options, sort_rows};

use crate::error::Result;
use crate::observer::{SubscriptionId, ViewEvent, ViewObserver};
use crate::snapshot::ViewSnapshot;
use crate::status::LoadStatus;

/// Data half of [`ViewState`], kept apart from the observer list so that a
/// snapshot can be borrowed while observers are called.
#[derive(Debug, Default)]
struct ViewData {
    status: LoadStatus,
    raw_rows: Vec<Row>,
    /// Rows between a filter/sort step and its commit. Empty otherwise.
    working_rows: Vec<Row>,
    display_rows: Vec<Row>,
    aggregates: AggregateSet,
    range_days: u32,
    range_options: Vec<u32>,
    sort_key: ColumnKey,
    sort_direction: SortDirection,
    min_date: i64,
    skipped_records: usize,
}

impl ViewData {
    fn snapshot(&self) -> ViewSnapshot<'_> {
        ViewSnapshot {
            title: DASHBOARD_TITLE,
            status: &self.status,
            columns: &COLUMNS,
            rows: &self.display_rows,
            aggregates: &self.aggregates,
            range: self.range_days,
            range_options: &self.range_options,
            min_date: self.min_date,
            sort_key: self.sort_key,
            sort_direction: self.sort_direction,
        }
    }

    fn apply_payload(&mut self, payload: &FeedPayload) {
        let flattened = flatten(&payload.near_earth_objects);
        self.skipped_records = flattened.skipped;
        self.raw_rows = flattened.rows;

        match DateSpan::of(&self.raw_rows) {
            Some(span) => {
                self.min_date = span.min;
                self.range_days = span.day_count();
            }
            None => {
                self.min_date = 0;
                self.range_days = 1;
            }
        }
        self.range_options = range_options(self.range_days);

        self.working_rows = self.raw_rows.clone();
        self.aggregates = aggregate(&self.working_rows);
        self.sort_working();
        self.commit();
        self.status = LoadStatus::Populated;

        info!(
            rows = self.raw_rows.len(),
            skipped = self.skipped_records,
            range_days = self.range_days,
            "feed loaded"
        );
    }

    fn sort_working(&mut self) {
        let rows = mem::take(&mut self.working_rows);
        self.working_rows = sort_rows(rows, self.sort_key.spec(), self.sort_direction);
    }

    fn commit(&mut self) {
        self.display_rows = mem::take(&mut self.working_rows);
    }
}

struct Subscription {
    id: SubscriptionId,
    observer: Box<dyn ViewObserver>,
}

/// Holds raw, working and displayed rows plus the metadata derived from them.
///
/// Create one per dashboard and pass it to whatever drives it; there is no
/// shared global instance.
pub struct ViewState {
    data: ViewData,
    subscriptions: Vec<Subscription>,
    next_subscription: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewState")
            .field("status", &self.data.status)
            .field("raw_rows", &self.data.raw_rows.len())
            .field("display_rows", &self.data.display_rows.len())
            .field("range_days", &self.data.range_days)
            .field("sort_key", &self.data.sort_key)
            .field("sort_direction", &self.data.sort_direction)
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}

impl ViewState {
    /// Creates an empty view sorted by date ascending.
    pub fn new() -> Self {
        Self {
            data: ViewData::default(),
            subscriptions: Vec::new(),
            next_subscription: 0,
        }
    }

    // ------------------------------------------------------------------
    // Presentation boundary
    // ------------------------------------------------------------------

    pub fn snapshot(&self) -> ViewSnapshot<'_> {
        self.data.snapshot()
    }

    pub fn status(&self) -> &LoadStatus {
        &self.data.status
    }

    pub fn is_populated(&self) -> bool {
        self.data.status.is_populated()
    }

    pub fn display_rows(&self) -> &[Row] {
        &self.data.display_rows
    }

    /// The full flattened dataset.
    pub fn raw_rows(&self) -> &[Row] {
        &self.data.raw_rows
    }

    pub fn columns(&self) -> &'static [ColumnSpec] {
        &COLUMNS
    }

    pub fn aggregates(&self) -> &AggregateSet {
        &self.data.aggregates
    }

    pub fn range_days(&self) -> u32 {
        self.data.range_days
    }

    pub fn range_options(&self) -> &[u32] {
        &self.data.range_options
    }

    pub fn min_date(&self) -> i64 {
        self.data.min_date
    }

    pub fn sort_key(&self) -> ColumnKey {
        self.data.sort_key
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.data.sort_direction
    }

    /// Feed records dropped while flattening.
    pub fn skipped_records(&self) -> usize {
        self.data.skipped_records
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    pub fn subscribe(&mut self, observer: Box<dyn ViewObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscriptions.push(Subscription { id, observer });
        id
    }

    /// Subscribes a closure.
    pub fn subscribe_fn<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(ViewEvent, &ViewSnapshot<'_>) + 'static,
    {
        self.subscribe(Box::new(observer))
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|subscription| subscription.id != id);
        self.subscriptions.len() != before
    }

    fn notify(&mut self, event: ViewEvent) {
        let snapshot = self.data.snapshot();
        for subscription in &mut self.subscriptions {
            subscription.observer.on_view_change(event, &snapshot);
        }
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Fetches the feed once and derives the initial view.
    ///
    /// Does nothing while a load is in flight or after one succeeded. The
    /// status is set to `Loading` before the fetch starts, so repeated calls
    /// cannot issue duplicate requests. A failure is recorded in
    /// [`LoadStatus::Failed`]; nothing is retried automatically. If the
    /// returned future is dropped before the fetch completes, the status
    /// returns to `Empty`.
    pub async fn populate<S: FeedSource>(&mut self, source: &S) {
        if !self.begin_load() {
            return;
        }
        let span = info_span!("populate", source = %source.describe());
        let guard = LoadGuard::new(self);
        let result = source.fetch().instrument(span.clone()).await;
        span.in_scope(|| guard.finish(result));
    }

    /// Applies an already-decoded payload as the initial load.
    ///
    /// Returns false, leaving the state untouched, when a load is in flight or
    /// already completed.
    pub fn load_payload(&mut self, payload: &FeedPayload) -> bool {
        if !self.begin_load() {
            return false;
        }
        self.data.apply_payload(payload);
        self.notify(ViewEvent::Loaded);
        true
    }

    fn begin_load(&mut self) -> bool {
        if !self.data.status.accepts_load() {
            debug!(status = %self.data.status, "load already requested");
            return false;
        }
        self.data.raw_rows.clear();
        self.data.working_rows.clear();
        self.data.status = LoadStatus::Loading;
        self.notify(ViewEvent::Loading);
        true
    }

    fn finish_load(&mut self, result: std::result::Result<FeedPayload, FeedError>) {
        match result {
            Ok(payload) => {
                self.data.apply_payload(&payload);
                self.notify(ViewEvent::Loaded);
            }
            Err(err) => {
                error!(error = %err, "Fetch failed");
                self.data.status = LoadStatus::Failed(err);
                self.notify(ViewEvent::LoadFailed);
            }
        }
    }

    fn cancel_load(&mut self) {
        if self.data.status == LoadStatus::Loading {
            warn!("load cancelled before the feed responded");
            self.data.status = LoadStatus::Empty;
            self.notify(ViewEvent::LoadCancelled);
        }
    }

    // ------------------------------------------------------------------
    // Filtering and sorting
    // ------------------------------------------------------------------

    /// Restricts the view to `range_days` days from the earliest approach.
    ///
    /// Returns false when the selection is unchanged. Aggregates are
    /// recomputed over the filtered rows and the current sort is reapplied.
    pub fn filter(&mut self, range_days: u32) -> bool {
        if range_days == self.data.range_days {
            return false;
        }
        let span = info_span!("filter", range_days);
        let _guard = span.enter();

        let data = &mut self.data;
        data.range_days = range_days;
        data.working_rows = filter_by_range(&data.raw_rows, data.min_date, range_days);
        data.aggregates = aggregate(&data.working_rows);
        data.sort_working();
        debug!(rows = data.working_rows.len(), "filtered");
        data.commit();
        self.notify(ViewEvent::Filtered);
        true
    }

    /// [`Self::filter`] for a raw selector value such as `"3"`.
    pub fn filter_input(&mut self, input: &str) -> Result<bool> {
        let range_days = parse_range_days(input)?;
        Ok(self.filter(range_days))
    }

    /// Sorts the view by `key`.
    ///
    /// Without a direction the current one is toggled. Unsortable columns are
    /// ignored and return false. The rows sorted are the pending working rows
    /// if any, otherwise the displayed rows.
    pub fn sort(&mut self, key: ColumnKey, direction: Option<SortDirection>) -> bool {
        if !key.spec().sortable {
            debug!(column = %key, "column is not sortable");
            return false;
        }
        let data = &mut self.data;
        let current = data.sort_direction;
        data.sort_key = key;
        data.sort_direction = direction.unwrap_or_else(|| current.toggled());

        let span = info_span!("sort", column = %key, direction = %data.sort_direction);
        let _guard = span.enter();

        if data.working_rows.is_empty() {
            data.working_rows = mem::take(&mut data.display_rows);
        }
        data.sort_working();
        data.commit();
        self.notify(ViewEvent::Sorted);
        true
    }

    /// [`Self::sort`] for a raw column key such as `"missDistance"`.
    pub fn sort_input(&mut self, key: &str, direction: Option<SortDirection>) -> Result<bool> {
        let key: ColumnKey = key.parse()?;
        Ok(self.sort(key, direction))
    }
}

/// Returns the view to `Empty` if a load is abandoned mid-flight.
struct LoadGuard<'a> {
    view: &'a mut ViewState,
    finished: bool,
}

impl<'a> LoadGuard<'a> {
    fn new(view: &'a mut ViewState) -> Self {
        Self {
            view,
            finished: false,
        }
    }

    fn finish(mut self, result: std::result::Result<FeedPayload, FeedError>) {
        self.view.finish_load(result);
        self.finished = true;
    }
}

impl Drop for LoadGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.view.cancel_load();
        }
    }
}
