//! Common interface for flood sources

use async_trait::async_trait;

use flood_core::{FloodItem, FloodQuery};

/// A source that produces normalized flood items for a query.
///
/// Implementations never fail: upstream errors are logged and turned into a
/// fallback or an empty list at this boundary.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Fetch and normalize items for `query`
    async fn fetch(&self, query: &FloodQuery) -> Vec<FloodItem>;
}
