use std::fmt;

use async_trait::async_trait;

use crate::core::country::Country;

/// Errors that can occur while loading the country list.
#[derive(Debug)]
pub enum FetchError {
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// The endpoint answered with a non-success status.
    Api { status: u16, message: String },
    /// The body was not a JSON array of countries.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Where the countries come from, for logs and the status bar.
    fn location(&self) -> &str;

    /// Loads the full country list in one request.
    async fn fetch_countries(&self) -> Result<Vec<Country>, FetchError>;
}
