//! Incoming feed query

use serde::{Deserialize, Serialize};

pub const DEFAULT_STATE: &str = "Selangor";
pub const DEFAULT_DISTRICT: &str = "Shah Alam";

/// Administrative area to build the feed for.
///
/// Deserializing fills a missing or `null` field with its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawQuery")]
pub struct FloodQuery {
    pub state: String,
    pub district: String,
}

impl FloodQuery {
    pub fn new(state: impl Into<String>, district: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            district: district.into(),
        }
    }
}

impl Default for FloodQuery {
    fn default() -> Self {
        Self::new(DEFAULT_STATE, DEFAULT_DISTRICT)
    }
}

/// Wire shape of the query, every field optional
#[derive(Deserialize)]
struct RawQuery {
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    district: Option<String>,
}

impl From<RawQuery> for FloodQuery {
    fn from(raw: RawQuery) -> Self {
        Self {
            state: raw.state.unwrap_or_else(|| DEFAULT_STATE.to_string()),
            district: raw.district.unwrap_or_else(|| DEFAULT_DISTRICT.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_per_field() {
        let q: FloodQuery = serde_json::from_str(r#"{"district":"Klang"}"#).unwrap();
        assert_eq!(q, FloodQuery::new("Selangor", "Klang"));

        let q: FloodQuery = serde_json::from_str(r#"{"state":"Johor","district":null}"#).unwrap();
        assert_eq!(q, FloodQuery::new("Johor", "Shah Alam"));

        let q: FloodQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q, FloodQuery::default());
    }

    #[test]
    fn test_ignores_unknown_fields() {
        let q: FloodQuery =
            serde_json::from_str(r#"{"state":"Kelantan","district":"Kota Bharu","lang":"ms"}"#)
                .unwrap();
        assert_eq!(q.state, "Kelantan");
        assert_eq!(q.district, "Kota Bharu");
    }

    #[test]
    fn test_empty_strings_are_kept() {
        let q: FloodQuery = serde_json::from_str(r#"{"state":"","district":""}"#).unwrap();
        assert_eq!(q, FloodQuery::new("", ""));
    }
}
