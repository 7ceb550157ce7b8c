//! Error types for fetching GDP series.

use thiserror::Error;

/// Failure to obtain a series from the data source.
///
/// Distinct from a successful fetch that returned no records; an empty
/// response body is `Ok(vec![])`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FetchError {
    /// No API credential was configured.
    #[error("missing API key (set the {0} environment variable)")]
    MissingApiKey(&'static str),

    /// The request URL could not be built from the configured base URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// Connection, TLS or body transfer failure.
    #[error("HTTP request failed: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {status} fetching GDP for '{country}'")]
    Status { status: u16, country: String },

    /// The response body was not a JSON array of observations.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
