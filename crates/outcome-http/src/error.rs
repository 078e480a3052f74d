use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("invalid config value for {key}: {value}")]
    Config { key: &'static str, value: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
