//! API-specific types for NewsData.io

use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ============================================================================
// NewsData.io Types
// ============================================================================

/// NewsData.io `/news` response
#[derive(Debug, Deserialize)]
pub struct NewsDataResponse {
    /// Response status ("success" or "error")
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    /// Matching articles, kept raw so one bad entry can't sink the rest
    #[serde(default)]
    pub results: Option<Vec<Value>>,
}

impl NewsDataResponse {
    /// Articles that decode; entries that are not objects are dropped
    pub fn articles(self) -> Vec<NewsDataArticle> {
        self.results
            .unwrap_or_default()
            .into_iter()
            .filter_map(|raw| NewsDataArticle::deserialize(raw).ok())
            .collect()
    }
}

/// A single NewsData.io article.
///
/// Every field is optional and read leniently: a value of the wrong type is
/// treated as absent rather than failing the article.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewsDataArticle {
    /// Article ID
    #[serde(deserialize_with = "lenient_string")]
    pub article_id: Option<String>,
    /// Headline
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    /// Short description
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    /// Outlet identifier (e.g. "thestar", "bharian")
    #[serde(deserialize_with = "lenient_string")]
    pub source_id: Option<String>,
    /// Article URL
    #[serde(deserialize_with = "lenient_string")]
    pub link: Option<String>,
    /// Lead image
    #[serde(deserialize_with = "lenient_string")]
    pub image_url: Option<String>,
    /// Publication date, `YYYY-MM-DD HH:MM:SS` in UTC
    #[serde(rename = "pubDate", deserialize_with = "lenient_string")]
    pub pub_date: Option<String>,
    /// Author(s)
    #[serde(deserialize_with = "lenient_creator")]
    pub creator: Option<Creator>,
}

/// Strings pass through and numbers are stringified; anything else is absent
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_creator<'de, D>(deserializer: D) -> Result<Option<Creator>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(Creator::deserialize(value).ok())
}

/// NewsData returns `creator` as either a list or a bare string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Creator {
    Many(Vec<String>),
    One(String),
}

impl Creator {
    /// First listed author
    pub fn first(self) -> Option<String> {
        match self {
            Creator::Many(names) => names.into_iter().next(),
            Creator::One(name) => Some(name),
        }
    }
}
