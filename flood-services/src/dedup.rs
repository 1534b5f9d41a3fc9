//! Cross-source deduplication

use std::collections::HashSet;

use flood_core::FloodItem;

/// Drop items whose title fingerprint was already seen.
///
/// Order-preserving: the first item for each fingerprint wins, so among
/// duplicates the earlier source in concatenation order survives.
pub fn dedupe(mut items: Vec<FloodItem>) -> Vec<FloodItem> {
    let mut seen = HashSet::new();
    items.retain(|item| seen.insert(item.fingerprint()));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use flood_core::{ItemSource, VerificationStatus};

    fn item(id: &str, title: &str) -> FloodItem {
        FloodItem {
            id: id.to_string(),
            title: title.to_string(),
            summary: String::new(),
            original_text: None,
            source: ItemSource::Other,
            url: String::new(),
            image_url: None,
            video_url: None,
            timestamp: Utc::now(),
            author: None,
            engagement_count: None,
            location: None,
            verification_status: VerificationStatus::Unverified,
            is_breaking: false,
        }
    }

    fn ids(items: &[FloodItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_first_seen_wins() {
        let items = vec![
            item("news_1", "Banjir Kilat Di Shah Alam"),
            item("jps_1", "banjir kilat di  SHAH ALAM"),
            item("social_1", "Something else"),
        ];
        assert_eq!(ids(&dedupe(items)), ["news_1", "social_1"]);
    }

    #[test]
    fn test_shared_forty_char_prefix_is_duplicate() {
        let prefix = "Flood waters rise across Klang valley as";
        assert_eq!(prefix.chars().filter(|c| !c.is_whitespace()).count(), 34);
        let a = format!("{prefix} rivers burst banks overnight");
        let b = format!("{prefix} rivers burst — residents evacuated");
        let items = vec![item("a", &a), item("b", &b)];
        assert_eq!(ids(&dedupe(items)), ["a"]);
    }

    #[test]
    fn test_only_first_forty_chars_count() {
        let base = "x".repeat(40);
        let items = vec![
            item("a", &format!("{base}AAAA")),
            item("b", &format!("{base}BBBB")),
        ];
        assert_eq!(ids(&dedupe(items)), ["a"]);

        // differing at the 40th character keeps both
        let items = vec![
            item("a", &format!("{}A", "x".repeat(39))),
            item("b", &format!("{}B", "x".repeat(39))),
        ];
        assert_eq!(ids(&dedupe(items)), ["a", "b"]);
    }

    #[test]
    fn test_reworded_opening_is_not_merged() {
        let items = vec![
            item("a", "Floods hit Shah Alam after heavy rain"),
            item("b", "Heavy rain brings floods to Shah Alam"),
        ];
        assert_eq!(dedupe(items).len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(dedupe(Vec::new()).is_empty());
    }
}
