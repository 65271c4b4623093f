use thiserror::Error;

/// Why an address could not be resolved
#[derive(Debug, Error)]
pub enum AddressError {
    /// Not exactly eight digits, never sent to the service
    #[error("invalid CEP {0:?}")]
    InvalidCep(String),

    /// The service answered but knows no such CEP
    #[error("CEP not found")]
    NotFound,

    /// Non-success HTTP status
    #[error("address service returned HTTP {0}")]
    Status(u16),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
