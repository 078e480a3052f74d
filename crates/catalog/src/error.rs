use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store is closed")]
    Closed,

    #[error("capacity exceeded ({max} books)")]
    CapacityExceeded { max: usize },

    #[error("duplicate isbn: {0}")]
    DuplicateIsbn(String),

    #[error("{0}")]
    Other(String),
}
