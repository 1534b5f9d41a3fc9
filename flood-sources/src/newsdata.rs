//! NewsData.io client for flood news search
//!
//! Searches Malaysian outlets for flood coverage of a district and its state
//! over the last 24 hours. Without an API key, or when the API is unreachable,
//! a fixed pair of mock articles is returned so the feed still has news.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument, warn};

use flood_core::{parse_timestamp, FloodItem, FloodQuery, ItemSource, VerificationStatus};

use crate::adapter::SourceAdapter;
use crate::error::SourceError;
use crate::types::{Creator, NewsDataArticle, NewsDataResponse};
use crate::uri::encode_component;

/// Default NewsData.io search endpoint
pub const NEWSDATA_BASE_URL: &str = "https://newsdata.io/api/1/news";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Lower-cased headline terms that mark an article as breaking
const BREAKING_KEYWORDS: [&str; 3] = ["amaran", "warning", "darurat"];

/// NewsData.io API client
pub struct NewsDataClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl NewsDataClient {
    /// Create a client against the public endpoint.
    ///
    /// An empty key is treated the same as no key.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, NEWSDATA_BASE_URL)
    }

    /// Create a client against a custom endpoint
    pub fn with_base_url(api_key: Option<String>, base_url: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: base_url.to_string(),
        }
    }

    /// Whether a real API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search flood news for a district and its state.
    ///
    /// Never fails: a missing key or any request/parse error yields the mock
    /// articles instead.
    #[instrument(skip(self))]
    pub async fn fetch_flood_news(&self, state: &str, district: &str) -> Vec<FloodItem> {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("No NewsData API key configured, using mock news");
            return mock_news_items(district);
        };

        match self.search_all(api_key, state, district).await {
            Ok(items) => {
                info!("NewsData returned {} articles for {}", items.len(), district);
                items
            }
            Err(e) => {
                warn!("NewsData error: {}", e);
                mock_news_items(district)
            }
        }
    }

    /// Run the district query then the state query, concatenating results.
    /// Any status other than 200 skips that query only.
    async fn search_all(
        &self,
        api_key: &str,
        state: &str,
        district: &str,
    ) -> Result<Vec<FloodItem>, SourceError> {
        let queries = [
            format!("banjir {} OR flood {}", district, district),
            format!("banjir {} OR flood {}", state, state),
        ];

        let mut all_items = Vec::new();

        for query in &queries {
            match self.search(api_key, query, district).await {
                Ok(items) => all_items.extend(items),
                Err(SourceError::ApiError { status, .. }) => {
                    debug!("NewsData query '{}' returned status {}, skipping", query, status);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(all_items)
    }

    /// Run a single search query
    async fn search(
        &self,
        api_key: &str,
        query: &str,
        district: &str,
    ) -> Result<Vec<FloodItem>, SourceError> {
        debug!("Searching NewsData: query='{}'", query);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("apikey", api_key),
                ("q", query),
                ("country", "my"),
                ("language", "en,ms"),
                ("timeframe", "24"),
            ])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(SourceError::ApiError {
                status: response.status().as_u16(),
                message: format!("NewsData search failed for '{}'", query),
            });
        }

        let body = response.text().await?;
        let parsed: NewsDataResponse =
            serde_json::from_str(&body).map_err(|e| SourceError::ParseError(e.to_string()))?;

        Ok(parsed
            .articles()
            .into_iter()
            .map(|article| normalize_article(article, district))
            .collect())
    }
}

#[async_trait]
impl SourceAdapter for NewsDataClient {
    fn name(&self) -> &'static str {
        "newsdata"
    }

    async fn fetch(&self, query: &FloodQuery) -> Vec<FloodItem> {
        self.fetch_flood_news(&query.state, &query.district).await
    }
}

/// Map a NewsData article into a flood item
fn normalize_article(article: NewsDataArticle, district: &str) -> FloodItem {
    let id = match article.article_id {
        Some(article_id) => format!("news_{}", article_id),
        None => format!("news_{}", rand::random::<u64>()),
    };
    let title = article.title.unwrap_or_default();
    let summary = article.description.unwrap_or_else(|| title.clone());
    let source = ItemSource::from_news_source_id(article.source_id.as_deref().unwrap_or_default());
    let timestamp = article
        .pub_date
        .as_deref()
        .map(parse_timestamp)
        .unwrap_or_else(Utc::now);
    let is_breaking = is_breaking_headline(&title);

    FloodItem {
        id,
        summary,
        original_text: None,
        source,
        url: article.link.unwrap_or_else(|| "https://newsdata.io".to_string()),
        image_url: article.image_url,
        video_url: None,
        timestamp,
        author: article.creator.and_then(Creator::first),
        engagement_count: None,
        location: Some(district.to_string()),
        verification_status: VerificationStatus::PartiallyVerified,
        is_breaking,
        title,
    }
}

/// Case-insensitive warning/emergency keyword match
fn is_breaking_headline(title: &str) -> bool {
    let lower = title.to_lowercase();
    BREAKING_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Placeholder articles used when NewsData is unavailable
pub fn mock_news_items(district: &str) -> Vec<FloodItem> {
    let now = Utc::now();
    let encoded = encode_component(district);

    vec![
        FloodItem {
            id: "mock_news_1".to_string(),
            title: format!("Banjir kilat melanda {}", district),
            summary: format!(
                "Flash floods reported in {} following heavy rainfall. \
                 Residents advised to stay alert and monitor water levels.",
                district
            ),
            original_text: None,
            source: ItemSource::BeritaHarian,
            url: format!("https://newsdata.io/search?q=banjir+{}", encoded),
            image_url: None,
            video_url: None,
            timestamp: now,
            author: None,
            engagement_count: None,
            location: None,
            verification_status: VerificationStatus::Unverified,
            is_breaking: false,
        },
        FloodItem {
            id: "mock_news_2".to_string(),
            title: format!("JPS issues flood warning for {}", district),
            summary: format!(
                "The Department of Irrigation and Drainage has issued a flood \
                 advisory for {}. Water levels are rising.",
                district
            ),
            original_text: None,
            source: ItemSource::TheStar,
            url: format!("https://newsdata.io/search?q=flood+{}", encoded),
            image_url: None,
            video_url: None,
            timestamp: now - chrono::Duration::hours(1),
            author: None,
            engagement_count: None,
            location: None,
            verification_status: VerificationStatus::Unverified,
            is_breaking: true,
        },
    ]
}
