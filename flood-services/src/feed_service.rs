//! Flood Feed Service
//!
//! Runs every source adapter concurrently for a query, merges whatever they
//! return in source precedence order, then deduplicates and ranks the result.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info, instrument, warn};

use flood_core::{FloodItem, FloodQuery};
use flood_sources::{JpsFeedClient, NewsDataClient, SocialCards, SourceAdapter};

use crate::dedup::dedupe;
use crate::ranking::rank;

/// Merges the flood sources into one feed
#[derive(Clone)]
pub struct FloodFeedService {
    /// Adapters in precedence order; earlier sources win dedup ties
    adapters: Vec<Arc<dyn SourceAdapter>>,
}

impl FloodFeedService {
    /// Create a service over the standard sources: news, then the JPS alert
    /// feed, then the social cards.
    pub fn new(news: NewsDataClient, alerts: JpsFeedClient) -> Self {
        Self::with_adapters(vec![Arc::new(news), Arc::new(alerts), Arc::new(SocialCards)])
    }

    /// Create a service over custom adapters, given in precedence order
    pub fn with_adapters(adapters: Vec<Arc<dyn SourceAdapter>>) -> Self {
        Self { adapters }
    }

    /// Fetch from every adapter concurrently and concatenate the results.
    ///
    /// Each adapter runs in its own task and is never cancelled once started.
    /// A task that panics contributes nothing; the other sources are unaffected.
    #[instrument(skip(self))]
    pub async fn collect(&self, query: &FloodQuery) -> Vec<FloodItem> {
        let handles: Vec<_> = self
            .adapters
            .iter()
            .map(|adapter| {
                let adapter = Arc::clone(adapter);
                let query = query.clone();
                tokio::spawn(async move { adapter.fetch(&query).await })
            })
            .collect();

        let results = join_all(handles).await;

        let mut all_items = Vec::new();
        for (adapter, result) in self.adapters.iter().zip(results) {
            match result {
                Ok(items) => {
                    debug!("Got {} items from {}", items.len(), adapter.name());
                    all_items.extend(items);
                }
                Err(e) => {
                    warn!("Source {} failed: {}", adapter.name(), e);
                }
            }
        }

        all_items
    }

    /// Build the ranked, deduplicated feed for a query
    #[instrument(skip(self))]
    pub async fn build_feed(&self, query: &FloodQuery) -> Vec<FloodItem> {
        let collected = self.collect(query).await;
        let total = collected.len();

        let feed = rank(dedupe(collected));

        info!(
            "Built flood feed for {}, {}: {} items ({} duplicates dropped)",
            query.district,
            query.state,
            feed.len(),
            total - feed.len()
        );
        feed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use flood_core::{ItemSource, VerificationStatus};

    fn item(id: &str, title: &str, minutes_ago: i64) -> FloodItem {
        FloodItem {
            id: id.to_string(),
            title: title.to_string(),
            summary: String::new(),
            original_text: None,
            source: ItemSource::Other,
            url: String::new(),
            image_url: None,
            video_url: None,
            timestamp: Utc::now() - Duration::minutes(minutes_ago),
            author: None,
            engagement_count: None,
            location: None,
            verification_status: VerificationStatus::Unverified,
            is_breaking: false,
        }
    }

    struct Fixed(&'static str, Vec<FloodItem>);

    #[async_trait]
    impl SourceAdapter for Fixed {
        fn name(&self) -> &'static str {
            self.0
        }

        async fn fetch(&self, _query: &FloodQuery) -> Vec<FloodItem> {
            self.1.clone()
        }
    }

    struct Slow(std::time::Duration, Vec<FloodItem>);

    #[async_trait]
    impl SourceAdapter for Slow {
        fn name(&self) -> &'static str {
            "slow"
        }

        async fn fetch(&self, _query: &FloodQuery) -> Vec<FloodItem> {
            tokio::time::sleep(self.0).await;
            self.1.clone()
        }
    }

    struct Panicking;

    #[async_trait]
    impl SourceAdapter for Panicking {
        fn name(&self) -> &'static str {
            "panicking"
        }

        async fn fetch(&self, _query: &FloodQuery) -> Vec<FloodItem> {
            panic!("upstream exploded")
        }
    }

    fn ids(items: &[FloodItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_collect_keeps_source_precedence() {
        let service = FloodFeedService::with_adapters(vec![
            Arc::new(Slow(
                std::time::Duration::from_millis(50),
                vec![item("news_1", "a", 0), item("news_2", "b", 0)],
            )),
            Arc::new(Fixed("jps", vec![item("jps_1", "c", 0)])),
            Arc::new(Fixed("social", vec![item("social_1", "d", 0)])),
        ]);

        let items = service.collect(&FloodQuery::default()).await;
        assert_eq!(ids(&items), ["news_1", "news_2", "jps_1", "social_1"]);
    }

    #[tokio::test]
    async fn test_panicking_source_is_isolated() {
        let service = FloodFeedService::with_adapters(vec![
            Arc::new(Fixed("news", vec![item("news_1", "a", 0)])),
            Arc::new(Panicking),
            Arc::new(Fixed("social", vec![item("social_1", "b", 0)])),
        ]);

        let items = service.collect(&FloodQuery::default()).await;
        assert_eq!(ids(&items), ["news_1", "social_1"]);
    }

    #[tokio::test]
    async fn test_build_feed_dedupes_by_precedence_then_ranks() {
        let service = FloodFeedService::with_adapters(vec![
            Arc::new(Fixed(
                "news",
                vec![item("news_1", "Banjir di Klang", 30), item("news_2", "Other story", 10)],
            )),
            Arc::new(Fixed("jps", vec![item("jps_1", "BANJIR DI KLANG", 0)])),
            Arc::new(Fixed("social", vec![item("social_1", "Social card", 20)])),
        ]);

        let feed = service.build_feed(&FloodQuery::default()).await;
        assert_eq!(ids(&feed), ["news_2", "social_1", "news_1"]);
    }

    #[tokio::test]
    async fn test_standard_sources_without_key_or_feed() {
        let news = NewsDataClient::new(None);
        let alerts = JpsFeedClient::with_feed_url("http://127.0.0.1:9/rss/flood_alert.xml");
        let service = FloodFeedService::new(news, alerts);

        let feed = service.build_feed(&FloodQuery::default()).await;

        assert_eq!(feed.len(), 10);
        assert!(feed.iter().any(|i| i.id == "mock_news_1"));
        assert!(feed.iter().any(|i| i.id == "mock_news_2"));
        assert!(feed.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }
}
