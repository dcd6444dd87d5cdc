use crate::domain::model::PriceRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn iterations(&self) -> usize;
    fn interval_secs(&self) -> u64;
}

/// One scrape, split at the seam the tests mock: `extract` fetches the page
/// and returns the flattened info-bar text, `transform` turns that text into
/// a timestamped record.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<String>;
    async fn transform(&self, raw: String) -> Result<PriceRecord>;
}
