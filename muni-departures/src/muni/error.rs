//! 511 client error types.

use crate::domain::StopCode;

/// Errors from fetching or decoding departures.
///
/// All variants are terminal: nothing is retried and no partial schedule
/// is returned alongside an error.
#[derive(Debug, thiserror::Error)]
pub enum MuniError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Response body was not the expected XML
    #[error("XML parse error: {message}{}", body_suffix(.body))]
    Xml {
        message: String,
        body: Option<String>,
    },

    /// Well-formed response without any agency
    #[error("no route data for stop {stop_code}")]
    NoData { stop_code: StopCode },

    /// Configured base URL cannot form a request URL
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(body) => format!(" (body: {body})"),
        None => String::new(),
    }
}
