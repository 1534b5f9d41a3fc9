//! Flood feed endpoint

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{info, warn};

use flood_core::{FloodItem, FloodQuery};

use crate::AppState;

/// Create flood feed routes
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/flood-feed",
        post(get_flood_feed).get(get_flood_feed).options(preflight),
    )
}

/// Original function path, served at the root
pub fn compat_routes() -> Router<AppState> {
    Router::new().route(
        "/getFloodSocialMedia",
        post(get_flood_feed).get(get_flood_feed).options(preflight),
    )
}

/// POST /api/flood-feed - Ranked flood items for `{state?, district?}`
///
/// Source failures only shrink the list; this always answers 200.
async fn get_flood_feed(State(state): State<AppState>, body: Bytes) -> Json<Vec<FloodItem>> {
    let query = parse_query(&body);
    info!("Flood feed requested for {}, {}", query.district, query.state);

    match tokio::time::timeout(state.request_timeout, state.feed_service.build_feed(&query)).await
    {
        Ok(feed) => Json(feed),
        Err(_) => {
            warn!(
                "Flood feed for {} exceeded {}s, returning empty feed",
                query.district,
                state.request_timeout.as_secs()
            );
            Json(Vec::new())
        }
    }
}

/// OPTIONS pre-flight
async fn preflight() -> Response {
    (
        StatusCode::NO_CONTENT,
        [
            (
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static("GET, POST, OPTIONS"),
            ),
            (
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("content-type, authorization"),
            ),
        ],
    )
        .into_response()
}

/// Read the query from a JSON body, defaulting when absent or malformed
fn parse_query(body: &[u8]) -> FloodQuery {
    if body.iter().all(u8::is_ascii_whitespace) {
        return FloodQuery::default();
    }

    match serde_json::from_slice::<Option<FloodQuery>>(body) {
        Ok(query) => query.unwrap_or_default(),
        Err(e) => {
            warn!("Ignoring malformed flood feed body: {}", e);
            FloodQuery::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_defaults() {
        assert_eq!(parse_query(b""), FloodQuery::default());
        assert_eq!(parse_query(b"  \n"), FloodQuery::default());
        assert_eq!(parse_query(b"null"), FloodQuery::default());
        assert_eq!(parse_query(b"{}"), FloodQuery::default());
    }

    #[test]
    fn test_parse_query_reads_fields() {
        assert_eq!(
            parse_query(br#"{"state":"Kelantan","district":"Kota Bharu"}"#),
            FloodQuery::new("Kelantan", "Kota Bharu")
        );
        assert_eq!(
            parse_query(br#"{"district":"Klang"}"#),
            FloodQuery::new("Selangor", "Klang")
        );
    }

    #[test]
    fn test_parse_query_malformed_falls_back() {
        assert_eq!(parse_query(b"state=Johor"), FloodQuery::default());
        assert_eq!(parse_query(br#"{"state": 42}"#), FloodQuery::default());
        assert_eq!(parse_query(b"[1,2]"), FloodQuery::default());
    }
}
