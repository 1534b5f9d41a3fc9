//! API route definitions

mod flood;
mod health;

use axum::Router;
use crate::AppState;

/// Create all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(flood::routes())
        .merge(health::routes())
}

/// Routes kept at the root for existing clients
pub fn compat_routes() -> Router<AppState> {
    flood::compat_routes()
}
