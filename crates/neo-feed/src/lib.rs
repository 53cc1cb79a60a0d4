//! Transport for the close-approach feed.
//!
//! The dashboard needs exactly one thing from the outside world: the JSON
//! body of a single GET shaped as
//! `{ "near_earth_objects": { "<date>": [ <object>, ... ] } }`.
//!
//! - [`HttpFeed`] issues that request with `reqwest`. Only HTTP 200 counts as
//!   success.
//! - [`FileFeed`] reads a saved response body from disk.
//! - [`FeedConfig`] chooses between them.
//!
//! Failures are reported as [`FeedError`]: [`FeedError::Status`] for a non-200
//! answer, and the transport variants for network, decoding and file errors.

pub mod client;
pub mod config;
pub mod error;
pub mod file;
pub mod payload;
pub mod source;

pub use client::HttpFeed;
pub use config::{DEFAULT_ENDPOINT, FeedConfig};
pub use error::{FeedError, Result};
pub use file::FileFeed;
pub use payload::FeedPayload;
pub use source::{AnyFeed, FeedSource};
