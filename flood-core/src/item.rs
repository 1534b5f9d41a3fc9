//! The normalized flood item every source maps into

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ItemSource;

/// Number of characters of the normalized title used as the dedup key
pub const FINGERPRINT_LEN: usize = 40;

/// Per-source trust label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerificationStatus {
    /// Official channel (e.g. the JPS alert feed)
    Verified,
    /// Published by a news outlet
    PartiallyVerified,
    /// Community or synthetic content
    Unverified,
}

/// A single flood report, normalized from one of the upstream sources
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloodItem {
    /// Source-prefixed identifier (e.g. `news_...`, `jps_...`, `social_...`)
    pub id: String,
    /// Headline, also the basis of the dedup fingerprint
    pub title: String,
    /// Human-readable body or snippet
    pub summary: String,
    /// Original untranslated text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
    /// Provenance label
    pub source: ItemSource,
    /// Outbound link
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Publication time, used for ranking
    #[serde(with = "crate::timestamp::iso_millis")]
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement_count: Option<u64>,
    /// District label echoed from the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub verification_status: VerificationStatus,
    /// Title mentions a warning or emergency
    pub is_breaking: bool,
}

impl FloodItem {
    /// Dedup key for this item's title
    pub fn fingerprint(&self) -> String {
        fingerprint(&self.title)
    }
}

/// Normalize a title into its dedup key: lower-cased, all whitespace removed,
/// truncated to the first [`FINGERPRINT_LEN`] characters.
pub fn fingerprint(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .take(FINGERPRINT_LEN)
        .collect()
}
