//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with retry logic
//! - HTML parsing and link extraction
//! - The frontier of pending and visited URLs
//! - Depth-bounded round orchestration

mod coordinator;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::{CrawlOrchestrator, CrawlReport};
pub use fetcher::{build_http_client, FetchError, Fetcher, HttpFetcher};
pub use frontier::Frontier;
pub use parser::{HtmlExtractor, PageExtractor};

use crate::config::Config;
use crate::storage::{FrequencyStore, RunStatus, SqliteStore};
use crate::Result;
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Runs every job in `config` against the configured index database
///
/// This is the main entry point for a crawl. It will:
/// 1. Open (or create) the SQLite index
/// 2. Build the HTTP fetcher and extraction pipeline
/// 3. Run one crawl job per seed, in order, recording each as a run
///
/// Jobs share the index, so document counts and term frequencies accumulate
/// across seeds. Cancellation stops the current job and skips the rest.
///
/// # Example
///
/// ```no_run
/// use lexicrawl::config::load_config_with_hash;
/// use lexicrawl::crawler::crawl;
/// use std::path::Path;
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let (config, hash) = load_config_with_hash(Path::new("lexicrawl.toml"))?;
/// let reports = crawl(&config, &hash, CancellationToken::new()).await?;
/// # Ok(())
/// # }
/// ```
pub async fn crawl(
    config: &Config,
    config_hash: &str,
    cancel: CancellationToken,
) -> Result<Vec<CrawlReport>> {
    let store = Arc::new(SqliteStore::open(Path::new(&config.index.database_path))?);
    let index: Arc<dyn FrequencyStore> = store.clone();
    let orchestrator = CrawlOrchestrator::from_config(config, index)?;

    let mut reports = Vec::new();
    for job in config.jobs() {
        if cancel.is_cancelled() {
            tracing::info!("Skipping {}: crawl cancelled", job.seed_url);
            continue;
        }

        let run_id = store.create_run(&job.seed_url, config_hash)?;

        match orchestrator.run(&job, cancel.clone()).await {
            Ok(report) => {
                let status = if report.cancelled {
                    RunStatus::Cancelled
                } else {
                    RunStatus::Completed
                };
                store.finish_run(run_id, status, report.documents_indexed, report.failures())?;
                reports.push(report);
            }
            Err(e) => {
                if let Err(store_error) = store.finish_run(run_id, RunStatus::Failed, 0, 1) {
                    tracing::error!("Failed to record run {} as failed: {}", run_id, store_error);
                }
                return Err(e);
            }
        }
    }

    Ok(reports)
}
