//! Recency ranking

use std::cmp::Reverse;

use flood_core::FloodItem;

/// Sort newest first. Stable, so equal timestamps keep their incoming order.
///
/// Compared at millisecond precision, the precision timestamps are served at.
pub fn rank(mut items: Vec<FloodItem>) -> Vec<FloodItem> {
    items.sort_by_key(|item| Reverse(item.timestamp.timestamp_millis()));
    items
}
