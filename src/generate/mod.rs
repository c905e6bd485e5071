// src/generate/mod.rs
//! Post generation: one opaque call to a generative-text service that picks
//! the most promising news item and drafts the post variants. The service is
//! behind the `PostGenerator` trait so tests can substitute a stub.
pub mod claude;
pub mod extract;
pub mod prompt;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::ingest::types::NewsItem;

/// One drafted post. Every field defaults to empty when the model reply
/// omits it; nothing here is validated beyond structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostDraft {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub format_type: String,
    #[serde(default)]
    pub hook: String,
}

/// The sole artifact handed from generation to publishing. 0..=3 posts are
/// expected; extras are tolerated and ignored downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationResult {
    #[serde(default)]
    pub selected_news: String,
    #[serde(default)]
    pub selected_news_url: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub posts: Vec<PostDraft>,
}

#[async_trait::async_trait]
pub trait PostGenerator: Send + Sync {
    /// Select the best candidate and draft posts from it. Any failure here
    /// (transport, empty reply, malformed JSON) is fatal for the run.
    async fn generate(&self, candidates: &[NewsItem]) -> Result<GenerationResult>;
    /// Provider name for diagnostics.
    fn name(&self) -> &'static str;
}
