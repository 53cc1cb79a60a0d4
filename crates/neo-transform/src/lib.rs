//! Pure derivation steps from raw feed data to display rows.
//!
//! - [`flatten`] turns date buckets of objects into [`neo_model::Row`]s.
//! - [`filter_by_range`] keeps rows inside a day window.
//! - [`aggregate`] summarises the filtered rows.
//! - [`sort_rows`] orders rows by a column.

pub mod aggregate;
pub mod error;
pub mod extract;
pub mod flatten;
pub mod range;
pub mod sort;

pub use aggregate::aggregate;
pub use error::{ExtractError, Result};
pub use extract::{extract, extract_cell};
pub use flatten::{EPOCH_YEARS, Flattened, flatten, is_usable_epoch};
pub use range::{DateSpan, filter_by_range, range_options, window_end};
pub use sort::{compare_cells, compare_rows, sort_rows};
