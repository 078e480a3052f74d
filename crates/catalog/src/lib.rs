//! A small book catalog built on outcome values.
//!
//! The service returns [`verdict_outcome::Outcome`]s for every operation and
//! the endpoints turn them into [`verdict_http::Reply`]s.

mod book;
mod endpoints;
mod error;
mod memory;
mod service;
mod store;
mod validation;

pub use book::{Book, BookRequest};
pub use endpoints::{BookBody, BookEndpoints};
pub use error::StoreError;
pub use memory::{MemoryBookStore, MemoryBookStoreConfig};
pub use service::{BookOutcome, BookService};
pub use store::BookStore;
pub use validation::{FieldError, check, map_errors, validate};
