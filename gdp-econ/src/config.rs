use crate::error::FetchError;
use std::fmt;

/// Trading Economics API credential.
///
/// Passed explicitly to the client; `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Environment variable the credential is read from.
    pub const ENV_VAR: &'static str = "API_KEY";

    /// Wrap a credential, rejecting blank values.
    pub fn new(key: impl Into<String>) -> Result<Self, FetchError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(FetchError::MissingApiKey(Self::ENV_VAR));
        }
        Ok(Self(key.trim().to_string()))
    }

    /// Read the credential from `API_KEY`.
    pub fn from_env() -> Result<Self, FetchError> {
        match std::env::var(Self::ENV_VAR) {
            Ok(value) => Self::new(value),
            Err(_) => Err(FetchError::MissingApiKey(Self::ENV_VAR)),
        }
    }

    /// The raw secret, for building the request query string.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
