// src/pipeline.rs
//! Run orchestration: fetch → generate → publish, once, in order. The
//! terminal state is surfaced as a `RunOutcome` so the binary and the
//! integration tests can observe it without parsing console output.
//!
//! The human report goes to stdout via `println!` because it is the
//! program's deliverable; diagnostics go through `tracing`.

use anyhow::Result;
use chrono::Local;

use crate::generate::{GenerationResult, PostGenerator};
use crate::ingest::types::SearchProvider;
use crate::ingest::{self, truncate_chars};
use crate::publish::{build_record, sheet::SheetPublisher};

/// Candidate list cap across all queries.
pub const MAX_CANDIDATES: usize = 10;
/// Title preview length in the candidate listing.
const TITLE_PREVIEW_CHARS: usize = 50;

/// How a run ended. Both variants are a successful process exit; only a
/// generation failure propagates as `Err`.
#[derive(Debug)]
pub enum RunOutcome {
    /// Every query failed or returned nothing; generation never ran.
    NoNews,
    Completed {
        result: GenerationResult,
        /// False when the webhook call failed; the run still counts.
        published: bool,
    },
}

pub async fn run(
    provider: &dyn SearchProvider,
    queries: &[String],
    generator: &dyn PostGenerator,
    publisher: &SheetPublisher,
) -> Result<RunOutcome> {
    println!("{}", "=".repeat(60));
    println!("AI採用ニュース → 投稿生成");
    println!("{}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("{}", "=".repeat(60));

    println!("\nニュース取得中...");
    let candidates = ingest::collect_news(provider, queries, MAX_CANDIDATES).await;
    tracing::info!(count = candidates.len(), "collected candidates");
    println!("  → {}件取得", candidates.len());

    if candidates.is_empty() {
        println!("ニュースが取得できませんでした");
        return Ok(RunOutcome::NoNews);
    }

    for (i, item) in candidates.iter().enumerate() {
        println!(
            "  {}. {}",
            i + 1,
            truncate_chars(&item.title, TITLE_PREVIEW_CHARS)
        );
    }

    println!("\n投稿生成中...");
    let result = generator.generate(&candidates).await?;
    print_report(&result);

    let record = build_record(&result, Local::now());
    let published = match publisher.publish(&record).await {
        Ok(()) => {
            println!("\nスプレッドシートに送信完了");
            true
        }
        Err(e) => {
            tracing::warn!(error = ?e, "sheet publish failed");
            false
        }
    };

    Ok(RunOutcome::Completed { result, published })
}

fn print_report(result: &GenerationResult) {
    println!("\n{}", "=".repeat(60));
    println!("選択: {}", result.selected_news);
    println!("URL: {}", result.selected_news_url);
    println!("理由: {}", result.reason);
    println!("{}", "=".repeat(60));

    for (i, post) in result.posts.iter().enumerate() {
        println!("\n【案{}】{}", i + 1, post.format_type);
        println!("フック: {}", post.hook);
        println!("{}", "-".repeat(60));
        println!("{}", post.text);
        println!("\n→ {}文字", post.text.chars().count());
    }
}
