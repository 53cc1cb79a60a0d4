use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid range selection: {0:?}")]
    InvalidRange(String),
    #[error("unknown column: {0:?}")]
    UnknownColumn(String),
    #[error("invalid sort direction: {0:?} (expected asc or desc)")]
    InvalidDirection(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
