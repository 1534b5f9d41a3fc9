//! Core types for the flood situation feed
//!
//! This crate defines the shared data structures used across the feed,
//! including the normalized item every source maps into, source labels,
//! and the incoming query.

pub mod item;
pub mod query;
pub mod source;
pub mod timestamp;

pub use item::{fingerprint, FloodItem, VerificationStatus, FINGERPRINT_LEN};
pub use query::{FloodQuery, DEFAULT_DISTRICT, DEFAULT_STATE};
pub use source::ItemSource;
pub use timestamp::parse_timestamp;
