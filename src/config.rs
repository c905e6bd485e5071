// src/config.rs
//! Startup configuration: the required search credential and the query list.
//! Queries come from a TOML (or JSON) file when one exists, otherwise from
//! built-in defaults; order in the file is preserved because query order
//! decides which items survive the candidate cap.

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const API_KEY_ENV: &str = "TAVILY_API_KEY";
const QUERIES_PATH_ENV: &str = "SEARCH_QUERIES_PATH";

/// Built-in query list, used when no queries file is present.
const DEFAULT_QUERIES: [&str; 3] = [
    "AI Agent 採用 人材 2025",
    "AIエージェント 人事 HR",
    "採用AI 自動化 最新",
];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub tavily_api_key: String,
    pub queries: Vec<String>,
}

impl AppConfig {
    /// Resolve everything the run needs before any network call. A missing
    /// search key is the one fatal startup error.
    pub fn from_env() -> Result<Self> {
        let tavily_api_key =
            std::env::var(API_KEY_ENV).map_err(|_| anyhow!("Missing {API_KEY_ENV} env var"))?;
        let queries = load_queries_default()?;
        Ok(Self {
            tavily_api_key,
            queries,
        })
    }
}

#[derive(Deserialize)]
struct QueriesFile {
    queries: Vec<String>,
}

/// Load queries from an explicit path. Supports TOML or JSON formats.
pub fn load_queries_from(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading queries from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let raw = parse_queries(&content, ext.as_str())?;
    let cleaned: Vec<String> = raw
        .into_iter()
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
        .collect();
    if cleaned.is_empty() {
        bail!("queries file {} configures no queries", path.display());
    }
    Ok(cleaned)
}

/// Load queries using env var + fallbacks:
/// 1) $SEARCH_QUERIES_PATH
/// 2) config/queries.toml
/// 3) config/queries.json
/// 4) built-in defaults
pub fn load_queries_default() -> Result<Vec<String>> {
    if let Ok(p) = std::env::var(QUERIES_PATH_ENV) {
        let pb = PathBuf::from(p);
        if !pb.exists() {
            bail!("{QUERIES_PATH_ENV} points to non-existent path");
        }
        return load_queries_from(&pb);
    }
    let toml_p = PathBuf::from("config/queries.toml");
    if toml_p.exists() {
        return load_queries_from(&toml_p);
    }
    let json_p = PathBuf::from("config/queries.json");
    if json_p.exists() {
        return load_queries_from(&json_p);
    }
    Ok(DEFAULT_QUERIES.iter().map(|s| s.to_string()).collect())
}

fn parse_queries(s: &str, hint_ext: &str) -> Result<Vec<String>> {
    // Try TOML first unless the extension says JSON.
    if hint_ext != "json" {
        if let Ok(f) = toml::from_str::<QueriesFile>(s) {
            return Ok(f.queries);
        }
    }
    if let Ok(v) = serde_json::from_str::<Vec<String>>(s) {
        return Ok(v);
    }
    if hint_ext == "json" {
        if let Ok(f) = toml::from_str::<QueriesFile>(s) {
            return Ok(f.queries);
        }
    }
    bail!("queries file is neither TOML with a `queries` array nor a JSON array")
}
