//! Post-generator binary entrypoint: load `.env`, init tracing, resolve
//! configuration, wire the three components, run the pipeline once.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hr_post_generator::generate::claude::ClaudeGenerator;
use hr_post_generator::ingest::tavily::TavilyProvider;
use hr_post_generator::publish::sheet::SheetPublisher;
use hr_post_generator::{pipeline, AppConfig, RunOutcome};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local runs; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = AppConfig::from_env()?;
    let provider = TavilyProvider::new(&config.tavily_api_key);
    let generator = ClaudeGenerator::from_env(None);
    let publisher = SheetPublisher::from_env();

    match pipeline::run(&provider, &config.queries, &generator, &publisher).await? {
        RunOutcome::NoNews => {
            tracing::info!("no candidates collected; nothing generated");
        }
        RunOutcome::Completed { result, published } => {
            tracing::info!(
                posts = result.posts.len(),
                published,
                "run completed"
            );
        }
    }
    Ok(())
}
