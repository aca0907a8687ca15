use thiserror::Error;

/// Errors raised while constructing a message catalog.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("catalog is missing the required \"default\" entry")]
    MissingDefault,
    #[error("catalog entry {0:?} has an empty message")]
    EmptyMessage(String),
}
