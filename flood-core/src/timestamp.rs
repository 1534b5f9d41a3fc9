//! Timestamp parsing and ISO-8601 serialization

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse an upstream date string, falling back to now.
///
/// Accepts RFC 3339, RFC 2822 (RSS `pubDate`) and `YYYY-MM-DD HH:MM:SS`
/// (taken as UTC).
pub fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    try_parse_timestamp(raw).unwrap_or_else(Utc::now)
}

fn try_parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .map(|d| d.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|d| d.and_utc())
        })
}

/// Serde adapter emitting `2025-01-01T10:00:00.000Z`
pub mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|d| d.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_parses_rss_pub_date() {
        let ts = parse_timestamp("Tue, 10 Dec 2024 08:30:00 +0800");
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 12, 10, 0, 30, 0).unwrap());
    }

    #[test]
    fn test_parses_rfc3339() {
        let ts = parse_timestamp("2024-12-10T00:30:00Z");
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 12, 10, 0, 30, 0).unwrap());
    }

    #[test]
    fn test_parses_newsdata_format_as_utc() {
        let ts = parse_timestamp("2024-12-10 00:30:00");
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 12, 10, 0, 30, 0).unwrap());
    }

    #[test]
    fn test_invalid_dates_fall_back_to_now() {
        for raw in ["", "   ", "yesterday", "2024-13-45"] {
            let before = Utc::now();
            let ts = parse_timestamp(raw);
            assert!(ts >= before, "{raw:?} should fall back to now");
            assert!(ts - before < Duration::seconds(5));
        }
    }
}
