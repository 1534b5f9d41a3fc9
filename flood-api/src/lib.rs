//! Flood Situation Feed API
//!
//! HTTP API that merges flood news, official JPS alerts and social search
//! cards for a district into one ranked feed.

pub mod config;
mod routes;

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json, Router,
};
use flood_core::FloodItem;
use flood_services::FloodFeedService;
use flood_sources::{JpsFeedClient, NewsDataClient};
use tower_http::{
    catch_panic::CatchPanicLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};
use tracing::error;

pub use config::FloodConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub feed_service: Arc<FloodFeedService>,
    /// Ceiling for building one feed
    pub request_timeout: Duration,
    pub news_api_configured: bool,
}

impl AppState {
    /// Wire the standard sources from configuration
    pub fn from_config(config: &FloodConfig) -> Self {
        let news =
            NewsDataClient::with_base_url(config.newsdata_key.clone(), &config.newsdata_base_url);
        let news_api_configured = news.has_api_key();
        let alerts = JpsFeedClient::with_feed_url(&config.jps_feed_url);

        Self {
            feed_service: Arc::new(FloodFeedService::new(news, alerts)),
            request_timeout: config.request_timeout,
            news_api_configured,
        }
    }
}

/// Build the router with CORS, panic and tracing layers
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::api_routes())
        .merge(routes::compat_routes())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Turn a handler panic into a well-formed, empty feed
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Request handler panicked: {}", detail);

    (StatusCode::INTERNAL_SERVER_ERROR, Json(Vec::<FloodItem>::new())).into_response()
}
