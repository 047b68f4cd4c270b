//! Error types for rate fetching and conversion

use thiserror::Error;

/// Failure to obtain a rate table from the upstream service.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("No API key configured")]
    MissingApiKey,

    #[error("Request error: {0}")]
    Transport(String),

    #[error("HTTP error: {0}")]
    Status(reqwest::StatusCode),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Response contains no conversion_rates")]
    MissingRates,

    #[error("Failed to parse JSON response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Status(status),
            None => FetchError::Transport(err.to_string()),
        }
    }
}

/// A conversion request that cannot be computed from the given rate table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("Die Ausgangs- und Zielwährungen sind identisch.")]
    IdenticalCurrency,

    #[error("Ungültige Währung(en) verwendet: von {from} zu {to}")]
    UnknownCurrency { from: String, to: String },
}
