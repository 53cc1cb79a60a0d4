//! CLI library components for the close-approach dashboard.

pub mod logging;
pub mod render;
