// src/lib.rs
// Public library surface for the binary and the integration tests.

pub mod config;
pub mod generate;
pub mod ingest;
pub mod pipeline;
pub mod publish;

// ---- Re-exports for the common entry points ----
pub use crate::config::AppConfig;
pub use crate::pipeline::{run, RunOutcome, MAX_CANDIDATES};
