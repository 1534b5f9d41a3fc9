//! Business logic services for the flood situation feed
//!
//! This crate merges the source adapters into one ranked, deduplicated feed.

pub mod dedup;
pub mod feed_service;
pub mod ranking;

pub use dedup::dedupe;
pub use feed_service::FloodFeedService;
pub use ranking::rank;
