// src/ingest/tavily.rs
//! Tavily search client: one POST per query with fixed parameters.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ingest::types::{NewsItem, SearchProvider};
use crate::ingest::{truncate_chars, SUMMARY_MAX_CHARS};

const DEFAULT_BASE_URL: &str = "https://api.tavily.com";
const SEARCH_DEPTH: &str = "advanced";
const MAX_RESULTS_PER_QUERY: u32 = 5;
/// Social platforms are excluded: a post about the news is not the news.
const EXCLUDE_DOMAINS: [&str; 3] = ["youtube.com", "twitter.com", "x.com"];

#[derive(Serialize)]
struct SearchRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    search_depth: &'a str,
    max_results: u32,
    exclude_domains: &'a [&'a str],
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<RawResult>,
}

#[derive(Deserialize)]
struct RawResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    url: String,
}

pub struct TavilyProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl TavilyProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the provider at another host (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn to_news_items(resp: SearchResponse) -> Vec<NewsItem> {
        let mut out = Vec::with_capacity(resp.results.len());
        for r in resp.results {
            // Without a URL there is no dedup key; drop the item.
            if r.url.is_empty() {
                continue;
            }
            out.push(NewsItem {
                title: r.title,
                summary: truncate_chars(&r.content, SUMMARY_MAX_CHARS),
                url: r.url,
            });
        }
        out
    }
}

#[async_trait]
impl SearchProvider for TavilyProvider {
    async fn search(&self, query: &str) -> Result<Vec<NewsItem>> {
        let req = SearchRequest {
            api_key: &self.api_key,
            query,
            search_depth: SEARCH_DEPTH,
            max_results: MAX_RESULTS_PER_QUERY,
            exclude_domains: &EXCLUDE_DOMAINS,
        };

        let resp = self
            .client
            .post(format!("{}/search", self.base_url))
            .json(&req)
            .send()
            .await
            .context("tavily search request")?
            .error_for_status()
            .context("tavily non-2xx")?;

        let body: SearchResponse = resp.json().await.context("tavily response body")?;
        Ok(Self::to_news_items(body))
    }

    fn name(&self) -> &'static str {
        "tavily"
    }
}
