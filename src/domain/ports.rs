use crate::utils::error::Result;
use async_trait::async_trait;

/// The one capability the estimator needs from the outside world: fetch the
/// plain-text body behind a URL. Keeps the normalizer and parser testable
/// without any network.
#[async_trait]
pub trait TextFetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String>;
}
