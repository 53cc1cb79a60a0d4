use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// A non-object value was reached before the path was exhausted.
    #[error("cannot read {key:?} of path {path:?}: value is not an object")]
    NotTraversable { path: String, key: String },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
