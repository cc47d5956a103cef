use crate::domain::model::KeywordRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of keyword estimates for a seed query.
///
/// Implementations return records already sorted by volume, highest first.
#[async_trait]
pub trait KeywordProvider: Send + Sync {
    async fn fetch_keywords(&self, query: &str) -> Result<Vec<KeywordRecord>>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> &str;
    fn model(&self) -> &str;
    fn base_url(&self) -> &str;
}
