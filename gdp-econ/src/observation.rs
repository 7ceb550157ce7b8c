use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single record from the Trading Economics historical endpoint.
///
/// Field names follow the API's PascalCase JSON. Every field is optional on
/// the wire. `Country`, `DateTime` and `Value` decode leniently (see
/// [`coerce_text`] and [`coerce_number`]) so one malformed record does not
/// fail the whole response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    #[serde(rename = "Country", default, deserialize_with = "lenient_country")]
    pub country: Option<String>,
    #[serde(rename = "Category", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// ISO-like date string, e.g. "1960-12-31T00:00:00"
    #[serde(rename = "DateTime", default, deserialize_with = "lenient_date_time")]
    pub date_time: Option<String>,
    /// GDP magnitude in billions of USD
    #[serde(
        rename = "Value",
        default = "missing_value",
        deserialize_with = "lenient_number"
    )]
    pub value: f64,
    #[serde(rename = "Frequency", default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(
        rename = "HistoricalDataSymbol",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub historical_data_symbol: Option<String>,
    #[serde(rename = "LastUpdate", default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
}

impl RawObservation {
    /// Minimal record with just the three fields the normalizer reads.
    pub fn new(country: Option<&str>, date_time: &str, value: f64) -> Self {
        Self {
            country: country.map(str::to_string),
            category: None,
            date_time: Some(date_time.to_string()),
            value,
            frequency: None,
            historical_data_symbol: None,
            last_update: None,
        }
    }

    /// True when the record names a country. Blank names count as missing.
    pub fn has_country(&self) -> bool {
        self.country.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// Parse a response body (a JSON array) into observations.
    pub fn parse_observations(body: &str) -> Result<Vec<RawObservation>, serde_json::Error> {
        serde_json::from_str(body)
    }
}

fn missing_value() -> f64 {
    f64::NAN
}

fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(coerce_number(&raw))
}

fn lenient_country<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(coerce_text(&raw))
}

/// A date that is not a string cannot be parsed; it is kept as missing.
fn lenient_date_time<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Coerce an arbitrary JSON value to a country name.
///
/// Strings pass through. Other truthy values (non-zero numbers, `true`,
/// arrays, objects) become their JSON text. `null`, `false` and zero are
/// missing.
pub fn coerce_text(raw: &Value) -> Option<String> {
    match raw {
        Value::String(s) => Some(s.clone()),
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64().is_some_and(|v| v == 0.0 || v.is_nan()) => None,
        other => Some(other.to_string()),
    }
}

/// Coerce an arbitrary JSON value to a GDP magnitude.
///
/// Numbers pass through. Strings are trimmed and parsed, with the empty
/// string reading as zero. Booleans are 1 or 0. Everything else is `NaN`.
pub fn coerce_number(raw: &Value) -> f64 {
    match raw {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}
