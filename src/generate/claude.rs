// src/generate/claude.rs
//! Anthropic Messages API client. One prompt, one reply, no conversation
//! state and no retries.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::generate::{extract, prompt, GenerationResult, PostGenerator};
use crate::ingest::types::NewsItem;

/// Messages API version header value.
const ANTHROPIC_VERSION: &str = "2023-06-01";
const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
/// Output ceiling; three long-form drafts fit comfortably.
const MAX_TOKENS: u32 = 4000;

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

pub struct ClaudeGenerator {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl ClaudeGenerator {
    /// Reads `ANTHROPIC_API_KEY`. An absent key is tolerated here and only
    /// fails once `generate` runs, after the fetch phase.
    /// `model_override`: pass Some("claude-...") to override the default.
    pub fn from_env(model_override: Option<&str>) -> Self {
        let api_key = std::env::var(API_KEY_ENV).unwrap_or_default();
        Self::build(api_key, model_override)
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::build(api_key.into(), None)
    }

    fn build(api_key: String, model_override: Option<&str>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model: model_override.unwrap_or(DEFAULT_MODEL).to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at another host (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// One-shot completion: send the prompt, return the first content
    /// block's text.
    async fn complete(&self, prompt_text: &str) -> Result<String> {
        let req = MessagesRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user",
                content: prompt_text,
            }],
        };

        let resp = self
            .http
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&req)
            .send()
            .await
            .context("anthropic messages request")?
            .error_for_status()
            .context("anthropic non-2xx")?;

        let body: MessagesResponse = resp.json().await.context("anthropic response body")?;
        let text = body
            .content
            .into_iter()
            .next()
            .map(|block| block.text)
            .unwrap_or_default();
        if text.is_empty() {
            bail!("empty reply from model");
        }
        Ok(text)
    }
}

#[async_trait]
impl PostGenerator for ClaudeGenerator {
    async fn generate(&self, candidates: &[NewsItem]) -> Result<GenerationResult> {
        if self.api_key.is_empty() {
            bail!("Missing {API_KEY_ENV} env var");
        }
        let prompt_text = prompt::build_prompt(candidates)?;
        let raw = self.complete(&prompt_text).await?;
        extract::parse_reply(&raw)
    }

    fn name(&self) -> &'static str {
        "claude"
    }
}
