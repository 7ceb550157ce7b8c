use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A country whose GDP history can be selected.
///
/// The serialized form is the lower-case API slug (`"new zealand"` keeps its
/// space); `Display` gives the human label.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[default]
    #[serde(rename = "mexico")]
    Mexico,
    #[serde(rename = "sweden")]
    Sweden,
    #[serde(rename = "new zealand")]
    NewZealand,
    #[serde(rename = "thailand")]
    Thailand,
}

/// Returned when a slug is not one of the supported countries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown country '{0}' (expected one of: mexico, sweden, new zealand, thailand)")]
pub struct ParseCountryError(pub String);

impl Country {
    /// Every selectable country, in dropdown order.
    pub const ALL: [Country; 4] = [
        Country::Mexico,
        Country::Sweden,
        Country::NewZealand,
        Country::Thailand,
    ];

    /// Path segment used by the historical endpoint.
    pub fn slug(&self) -> &'static str {
        match self {
            Country::Mexico => "mexico",
            Country::Sweden => "sweden",
            Country::NewZealand => "new zealand",
            Country::Thailand => "thailand",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Country::Mexico => "Mexico",
            Country::Sweden => "Sweden",
            Country::NewZealand => "New Zealand",
            Country::Thailand => "Thailand",
        }
    }

    /// File-name friendly slug (`new_zealand`).
    pub fn file_stem(&self) -> String {
        self.slug().replace(' ', "_")
    }

    pub fn from_slug(slug: &str) -> Option<Country> {
        Country::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Country {
    type Err = ParseCountryError;

    /// Accepts slugs and labels case-insensitively; `_` and `-` stand in for
    /// the space in "new zealand".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        Country::from_slug(&normalized).ok_or_else(|| ParseCountryError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_and_labels() {
        let pairs: Vec<(&str, &str)> = Country::ALL.iter().map(|c| (c.slug(), c.label())).collect();
        assert_eq!(
            pairs,
            vec![
                ("mexico", "Mexico"),
                ("sweden", "Sweden"),
                ("new zealand", "New Zealand"),
                ("thailand", "Thailand"),
            ]
        );
    }

    #[test]
    fn test_parse_country() {
        assert_eq!("mexico".parse::<Country>(), Ok(Country::Mexico));
        assert_eq!("New Zealand".parse::<Country>(), Ok(Country::NewZealand));
        assert_eq!("new_zealand".parse::<Country>(), Ok(Country::NewZealand));
        assert_eq!(
            "atlantis".parse::<Country>(),
            Err(ParseCountryError("atlantis".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&Country::NewZealand).unwrap();
        assert_eq!(json, "\"new zealand\"");
        let back: Country = serde_json::from_str("\"thailand\"").unwrap();
        assert_eq!(back, Country::Thailand);
    }

    #[test]
    fn test_default_and_file_stem() {
        assert_eq!(Country::default(), Country::Mexico);
        assert_eq!(Country::NewZealand.file_stem(), "new_zealand");
    }
}
