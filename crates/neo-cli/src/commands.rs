use anyhow::{Context, Result};
use tracing::{debug, info_span, warn};

use neo_cli::render::columns_table;
use neo_core::ViewState;
use neo_feed::FeedConfig;
use neo_model::{ColumnKey, SortDirection};

use crate::cli::ShowArgs;

pub fn run_columns() {
    println!("{}", columns_table());
}

/// Loads the feed and applies the requested range and sort.
///
/// A failed fetch is not an error here; it is left in the view's status for
/// the caller to report.
pub fn run_show(args: &ShowArgs) -> Result<ViewState> {
    let config = FeedConfig::default()
        .with_endpoint(args.url.clone())
        .with_timeout_secs(args.timeout_secs)
        .with_input(args.input.clone());
    let source = config.source().context("create feed source")?;

    let mut view = ViewState::new();
    view.subscribe_fn(|event, snapshot| {
        debug!(
            ?event,
            rows = snapshot.rows.len(),
            range = snapshot.range,
            "view updated"
        );
    });

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("start async runtime")?;
    runtime.block_on(view.populate(&source));
    if !view.is_populated() {
        return Ok(view);
    }

    let span = info_span!("apply_selection");
    let _guard = span.enter();

    if let Some(range) = &args.range {
        view.filter_input(range)
            .with_context(|| format!("apply range {range:?}"))?;
    }
    if args.sort.is_some() || args.direction.is_some() {
        let key = args.sort.map_or(view.sort_key(), ColumnKey::from);
        let direction = args.direction.map_or(SortDirection::Asc, SortDirection::from);
        if !view.sort(key, Some(direction)) {
            warn!(column = %key, "column is not sortable; keeping current order");
        }
    }
    Ok(view)
}
