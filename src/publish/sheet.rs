// src/publish/sheet.rs
//! Spreadsheet webhook client. Fire-and-forget: the caller logs a failure
//! and moves on; the response body is never read.

use anyhow::{Context, Result};
use reqwest::Client;

use super::PublishRecord;

const WEBHOOK_URL_ENV: &str = "SHEET_WEBHOOK_URL";

pub struct SheetPublisher {
    webhook_url: Option<String>,
    client: Client,
}

impl SheetPublisher {
    /// Reads `SHEET_WEBHOOK_URL`; when unset, publishing is disabled and
    /// `publish` becomes a no-op.
    pub fn from_env() -> Self {
        Self {
            webhook_url: std::env::var(WEBHOOK_URL_ENV).ok(),
            client: Client::new(),
        }
    }

    /// Explicit URL, for tests/tools.
    pub fn new(url: String) -> Self {
        Self {
            webhook_url: Some(url),
            client: Client::new(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            webhook_url: None,
            client: Client::new(),
        }
    }

    /// One POST of the record as JSON. Non-2xx maps to an error; the caller
    /// decides whether that matters.
    pub async fn publish(&self, record: &PublishRecord) -> Result<()> {
        let Some(url) = &self.webhook_url else {
            tracing::debug!("sheet publishing disabled (no {WEBHOOK_URL_ENV})");
            return Ok(());
        };

        self.client
            .post(url)
            .json(record)
            .send()
            .await
            .context("sheet post")?
            .error_for_status()
            .context("sheet non-2xx")?;
        Ok(())
    }
}
