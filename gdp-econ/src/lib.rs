//! Core types and Trading Economics API client for historical GDP series.
//!
//! - `country`: the fixed set of selectable countries
//! - `observation`: raw records as returned by the historical endpoint
//! - `config`: the API credential
//! - `client`: HTTP adapter (behind the `api` feature)

pub mod config;
pub mod country;
pub mod error;
pub mod observation;

#[cfg(feature = "api")]
pub mod client;

pub use config::ApiKey;
pub use country::Country;
pub use error::FetchError;
pub use observation::RawObservation;
