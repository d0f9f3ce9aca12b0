use async_trait::async_trait;
use storefront_core::types::ProductSummary;

use crate::error::SearchError;

/// Remote product lookup behind the instant search controller.
///
/// Implementations issue one request per call; debouncing, cancellation, and
/// result ordering are the controller's job.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, term: &str) -> Result<Vec<ProductSummary>, SearchError>;
}
