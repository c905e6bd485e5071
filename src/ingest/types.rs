// src/ingest/types.rs
use anyhow::Result;

/// One candidate news story. `url` is the dedup key; `summary` is already
/// truncated to the ingest character budget.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub summary: String,
    pub url: String,
}

#[async_trait::async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<NewsItem>>;
    fn name(&self) -> &'static str;
}
