//! Flood report sources
//!
//! Each adapter fetches from one upstream and normalizes it into
//! [`FloodItem`](flood_core::FloodItem)s:
//! - NewsData.io: keyword search over Malaysian news (mock fallback without a key)
//! - JPS InfoBanjir: the government flood alert RSS feed (authoritative)
//! - Social cards: deep links into TikTok, X and Facebook searches (offline)

pub mod adapter;
pub mod error;
pub mod jps_feed;
pub mod newsdata;
pub mod social_cards;
pub mod types;
pub mod uri;

pub use adapter::SourceAdapter;
pub use error::SourceError;
pub use jps_feed::{JpsFeedClient, JPS_FEED_URL};
pub use newsdata::{mock_news_items, NewsDataClient, NEWSDATA_BASE_URL};
pub use social_cards::{build_social_cards, SocialCards};
