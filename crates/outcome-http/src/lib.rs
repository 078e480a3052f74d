//! HTTP-facing adapter for [`verdict_outcome`].
//!
//! Maps tags to status codes with a total function and wraps results in a
//! `{ success, code, message, data }` envelope. No server is included; the
//! produced [`Reply`] is handed to whatever transport the caller runs.

mod config;
mod envelope;
mod error;
mod responder;
mod status;

pub use config::{AdapterConfig, CONTENT_TYPE_ENV, FIELD_NAMING_ENV, FieldNaming};
pub use envelope::{ApiResponse, Reply};
pub use error::HttpError;
pub use responder::Responder;
pub use status::{StatusCode, status_for_bad, status_for_good};
