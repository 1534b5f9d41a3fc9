//! Provenance labels for flood items

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a flood item came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemSource {
    /// Jabatan Pengairan dan Saliran (Department of Irrigation and Drainage)
    Jps,
    TheStar,
    BeritaHarian,
    AstroAwani,
    FreeMalaysia,
    Tiktok,
    X,
    Facebook,
    /// Any outlet not in the table
    Other,
}

impl ItemSource {
    /// Map a news API `source_id` to a label.
    ///
    /// Substring match on the lower-cased identifier, first rule wins.
    pub fn from_news_source_id(source_id: &str) -> Self {
        let id = source_id.to_lowercase();
        if id.contains("star") {
            ItemSource::TheStar
        } else if id.contains("bharian") || id.contains("berita") {
            ItemSource::BeritaHarian
        } else if id.contains("awani") {
            ItemSource::AstroAwani
        } else if id.contains("fmt") || id.contains("freemalaysia") {
            ItemSource::FreeMalaysia
        } else {
            ItemSource::Other
        }
    }

    /// Wire label, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemSource::Jps => "jps",
            ItemSource::TheStar => "theStar",
            ItemSource::BeritaHarian => "beritaHarian",
            ItemSource::AstroAwani => "astroAwani",
            ItemSource::FreeMalaysia => "freeMalaysia",
            ItemSource::Tiktok => "tiktok",
            ItemSource::X => "x",
            ItemSource::Facebook => "facebook",
            ItemSource::Other => "other",
        }
    }
}

impl fmt::Display for ItemSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_source_table() {
        assert_eq!(ItemSource::from_news_source_id("thestar"), ItemSource::TheStar);
        assert_eq!(ItemSource::from_news_source_id("TheStar_MY"), ItemSource::TheStar);
        assert_eq!(ItemSource::from_news_source_id("bharian"), ItemSource::BeritaHarian);
        assert_eq!(ItemSource::from_news_source_id("beritaharian"), ItemSource::BeritaHarian);
        assert_eq!(ItemSource::from_news_source_id("astroawani"), ItemSource::AstroAwani);
        assert_eq!(ItemSource::from_news_source_id("fmt"), ItemSource::FreeMalaysia);
        assert_eq!(ItemSource::from_news_source_id("freemalaysiatoday"), ItemSource::FreeMalaysia);
        assert_eq!(ItemSource::from_news_source_id("malaymail"), ItemSource::Other);
        assert_eq!(ItemSource::from_news_source_id(""), ItemSource::Other);
    }

    #[test]
    fn test_wire_labels_match_serde() {
        for source in [
            ItemSource::Jps,
            ItemSource::TheStar,
            ItemSource::BeritaHarian,
            ItemSource::AstroAwani,
            ItemSource::FreeMalaysia,
            ItemSource::Tiktok,
            ItemSource::X,
            ItemSource::Facebook,
            ItemSource::Other,
        ] {
            let json = serde_json::to_value(source).unwrap();
            assert_eq!(json, source.as_str());
        }
    }
}
