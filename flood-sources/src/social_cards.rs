//! Social media search cards
//!
//! Builds deep links into TikTok, X and Facebook searches for a district.
//! Nothing is fetched; the cards point users at live community footage.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use flood_core::{FloodItem, FloodQuery, ItemSource, VerificationStatus};

use crate::adapter::SourceAdapter;
use crate::uri::encode_component;

/// Gap between consecutive card timestamps
const CARD_STAGGER_MINUTES: i64 = 5;

/// Offline adapter producing the social search cards
#[derive(Debug, Clone, Copy, Default)]
pub struct SocialCards;

#[async_trait]
impl SourceAdapter for SocialCards {
    fn name(&self) -> &'static str {
        "social"
    }

    async fn fetch(&self, query: &FloodQuery) -> Vec<FloodItem> {
        build_social_cards(&query.state, &query.district)
    }
}

/// Build the eight social search cards for a state and district.
///
/// Card timestamps step back from now in five minute increments so cards keep
/// a fixed relative order.
pub fn build_social_cards(state: &str, district: &str) -> Vec<FloodItem> {
    let now = Utc::now();
    let q = encode_component(&format!("banjir {}", district));
    let tag: String = strip_whitespace(district).to_lowercase();
    let tag_state = strip_whitespace(state);

    let cards = [
        Card {
            id: "social_tiktok_district",
            title: format!("#banjir{} — TikTok", tag),
            summary: format!(
                "Tap to see live TikTok videos about flooding in {}. \
                 Real footage from residents showing current conditions on the ground.",
                district
            ),
            source: ItemSource::Tiktok,
            url: format!("https://www.tiktok.com/search?q={}", q),
            verification_status: VerificationStatus::Unverified,
        },
        Card {
            id: "social_tiktok_daruratbanjir",
            title: format!("#DaruratBanjir{} — TikTok", tag_state),
            summary: format!(
                "Tap to see the #DaruratBanjir{} hashtag on TikTok. \
                 Community videos showing flood conditions across {}.",
                tag_state, state
            ),
            source: ItemSource::Tiktok,
            url: format!(
                "https://www.tiktok.com/tag/daruratbanjir{}",
                tag_state.to_lowercase()
            ),
            verification_status: VerificationStatus::Unverified,
        },
        Card {
            id: "social_x_district",
            title: format!("banjir {} — X Live Search", district),
            summary: format!(
                "Tap to see the most recent posts on X about flooding in {}. \
                 Sorted by latest so you see real-time reports first.",
                district
            ),
            source: ItemSource::X,
            url: format!("https://x.com/search?q={}&f=live", q),
            verification_status: VerificationStatus::Unverified,
        },
        Card {
            id: "social_x_hashtag",
            title: format!("#Banjir{} — X", tag_state),
            summary: format!(
                "Tap to see the #Banjir{} hashtag on X. \
                 Real-time flood reports from residents and emergency services.",
                tag_state
            ),
            source: ItemSource::X,
            url: format!("https://x.com/hashtag/Banjir{}?f=live", tag_state),
            verification_status: VerificationStatus::Unverified,
        },
        Card {
            id: "social_x_daruratbanjir",
            title: "#DaruratBanjir — X Live".to_string(),
            summary: "Tap to see the #DaruratBanjir hashtag on X for nationwide \
                      flood emergency updates from across Malaysia."
                .to_string(),
            source: ItemSource::X,
            url: "https://x.com/hashtag/DaruratBanjir?f=live".to_string(),
            verification_status: VerificationStatus::Verified,
        },
        Card {
            id: "social_fb_infobanjir",
            title: "myinfobanjir — Official JPS Facebook".to_string(),
            summary: "Tap to visit the official JPS InfoBanjir Facebook page. \
                      Verified flood warnings, water level alerts, and evacuation notices."
                .to_string(),
            source: ItemSource::Facebook,
            url: "https://www.facebook.com/myinfobanjir".to_string(),
            verification_status: VerificationStatus::Verified,
        },
        Card {
            id: "social_fb_search",
            title: format!("banjir {} — Facebook Posts", district),
            summary: format!(
                "Tap to search Facebook for recent flood posts in {}. \
                 Community reports, rescue requests, and relief centre updates.",
                district
            ),
            source: ItemSource::Facebook,
            url: format!("https://www.facebook.com/search/posts/?q={}", q),
            verification_status: VerificationStatus::Unverified,
        },
        Card {
            id: "social_fb_group",
            title: "Komuniti Banjir Malaysia — Facebook Group".to_string(),
            summary: "Tap to view the Komuniti Banjir Malaysia group. \
                      Active community sharing real-time conditions, rescue boats, and aid."
                .to_string(),
            source: ItemSource::Facebook,
            url: "https://www.facebook.com/groups/komuniti.banjir.malaysia".to_string(),
            verification_status: VerificationStatus::Unverified,
        },
    ];

    cards
        .into_iter()
        .enumerate()
        .map(|(i, card)| card.into_item(staggered(now, i)))
        .collect()
}

/// Hand-authored card content, before timestamping
struct Card {
    id: &'static str,
    title: String,
    summary: String,
    source: ItemSource,
    url: String,
    verification_status: VerificationStatus,
}

impl Card {
    fn into_item(self, timestamp: DateTime<Utc>) -> FloodItem {
        FloodItem {
            id: self.id.to_string(),
            title: self.title,
            summary: self.summary,
            original_text: None,
            source: self.source,
            url: self.url,
            image_url: None,
            video_url: None,
            timestamp,
            author: None,
            engagement_count: None,
            location: None,
            verification_status: self.verification_status,
            is_breaking: false,
        }
    }
}

fn staggered(now: DateTime<Utc>, index: usize) -> DateTime<Utc> {
    now - Duration::minutes(CARD_STAGGER_MINUTES * index as i64)
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
