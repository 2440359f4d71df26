//! Crawl orchestration
//!
//! This module contains the round loop that coordinates one crawl job:
//! - Draining the frontier into a batch per depth
//! - Running fetch, extraction, indexing and link resolution for every batch URL
//!   concurrently
//! - Feeding newly discovered in-scope links back into the frontier
//! - Stopping on the depth bound, an empty frontier or cancellation

use crate::config::{Config, CrawlJob};
use crate::crawler::{Fetcher, FetchError, Frontier, HtmlExtractor, HttpFetcher, PageExtractor};
use crate::index::{IndexError, IndexOutcome, IndexingEngine, TermExtractor};
use crate::state::CrawlState;
use crate::storage::FrequencyStore;
use crate::text::{Normalizer, RuleNormalizer};
use crate::url::{parse_seed, LinkResolver, Resolution};
use crate::{CrawlError, Result};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Summary of one crawl job
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlReport {
    pub seed: String,
    /// Rounds whose every task finished
    pub rounds_completed: u32,
    /// Pages whose body was fetched
    pub pages_fetched: u64,
    pub documents_indexed: u64,
    /// Fetched pages that produced no index entries (no title or no terms)
    pub documents_skipped: u64,
    pub fetch_failures: u64,
    pub store_failures: u64,
    /// Links dropped by resolution or the scope filter
    pub links_rejected: u64,
    pub cancelled: bool,
}

impl CrawlReport {
    fn new(seed: &str) -> Self {
        Self {
            seed: seed.to_string(),
            ..Self::default()
        }
    }

    /// Failures of any kind
    pub fn failures(&self) -> u64 {
        self.fetch_failures + self.store_failures
    }
}

/// What happened to one page of a batch
#[derive(Debug)]
enum PageOutcome {
    Indexed,
    Skipped,
    FetchFailed(FetchError),
    StoreFailed,
}

#[derive(Debug)]
struct PageResult {
    url: String,
    outcome: PageOutcome,
    links: Vec<Url>,
    rejected: u64,
}

/// Per-job processing shared by every task of every round
struct PagePipeline {
    fetcher: Arc<dyn Fetcher>,
    terms: TermExtractor,
    engine: IndexingEngine,
    resolver: LinkResolver,
}

impl PagePipeline {
    /// Fetch, extract, index and resolve one URL
    ///
    /// Only a fetch failure stops the pipeline early; a page that could not be
    /// indexed still contributes its links.
    async fn process(&self, url: String) -> PageResult {
        let body = match self.fetcher.fetch(&url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", url, e);
                return PageResult {
                    url,
                    outcome: PageOutcome::FetchFailed(e),
                    links: Vec::new(),
                    rejected: 0,
                };
            }
        };

        let document = self.terms.extract(&url, &body);
        let outcome = match self.engine.index(&document) {
            Ok(IndexOutcome::Indexed { entries }) => {
                tracing::debug!("Indexed {} with {} rank entries", url, entries);
                PageOutcome::Indexed
            }
            Ok(IndexOutcome::Empty) => {
                tracing::warn!("Not indexing {}: no terms", url);
                PageOutcome::Skipped
            }
            Err(IndexError::MissingTitle(_)) => {
                tracing::warn!("Not indexing {}: no title", url);
                PageOutcome::Skipped
            }
            Err(IndexError::Store(e)) => {
                tracing::error!("Failed to commit {} to the index: {}", url, e);
                PageOutcome::StoreFailed
            }
        };

        let (links, rejected) = match Url::parse(&url) {
            Ok(base) => self.resolve_links(&self.terms.links(&body), &base),
            Err(e) => {
                tracing::debug!("Cannot resolve links on {}: {}", url, e);
                (Vec::new(), 0)
            }
        };

        PageResult {
            url,
            outcome,
            links,
            rejected,
        }
    }

    fn resolve_links(&self, hrefs: &[String], base: &Url) -> (Vec<Url>, u64) {
        let mut accepted = Vec::with_capacity(hrefs.len());
        let mut rejected = 0;

        for href in hrefs {
            match self.resolver.resolve(href, base) {
                Resolution::Accepted(url) => accepted.push(url),
                Resolution::Rejected(reason) => {
                    tracing::debug!("Dropping link {:?} on {}: {:?}", href, base, reason);
                    rejected += 1;
                }
            }
        }

        (accepted, rejected)
    }
}

/// Drives depth-bounded crawl rounds for a job
///
/// Every collaborator is injected, so tests can swap the network or the store
/// for fakes.
pub struct CrawlOrchestrator {
    fetcher: Arc<dyn Fetcher>,
    extractor: Arc<dyn PageExtractor>,
    normalizer: Arc<dyn Normalizer>,
    engine: IndexingEngine,
    content_tags: Vec<String>,
    max_concurrent_fetches: usize,
}

impl CrawlOrchestrator {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        extractor: Arc<dyn PageExtractor>,
        normalizer: Arc<dyn Normalizer>,
        engine: IndexingEngine,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            normalizer,
            engine,
            content_tags: vec!["p".to_string()],
            max_concurrent_fetches: 16,
        }
    }

    /// Builds an orchestrator with the default HTTP fetcher, HTML extractor and
    /// normalizer, writing to `store`
    pub fn from_config(config: &Config, store: Arc<dyn FrequencyStore>) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config.http)?;
        let extractor = HtmlExtractor::new(config.crawler.max_links_per_page);
        let engine = IndexingEngine::new(store, config.index.idf);

        Ok(Self::new(
            Arc::new(fetcher),
            Arc::new(extractor),
            Arc::new(RuleNormalizer::new()),
            engine,
        )
        .with_content_tags(config.crawler.content_tags.clone())
        .with_max_concurrent_fetches(config.crawler.max_concurrent_fetches))
    }

    /// Sets the elements whose text is indexed
    pub fn with_content_tags(mut self, content_tags: Vec<String>) -> Self {
        self.content_tags = content_tags;
        self
    }

    /// Bounds the number of fetches running at once within a round
    pub fn with_max_concurrent_fetches(mut self, max: usize) -> Self {
        self.max_concurrent_fetches = max.max(1);
        self
    }

    pub fn engine(&self) -> &IndexingEngine {
        &self.engine
    }

    /// Runs `job` until the depth bound, an empty frontier or cancellation
    ///
    /// Round `d` fetches every URL discovered during round `d - 1`, and no URL is
    /// fetched twice. Failing to fetch the seed is the only fatal page error.
    /// Cancelling aborts the current round's tasks; documents already committed
    /// stay in the index.
    pub async fn run(&self, job: &CrawlJob, cancel: CancellationToken) -> Result<CrawlReport> {
        let seed = parse_seed(&job.seed_url)?;
        let pipeline = Arc::new(PagePipeline {
            fetcher: Arc::clone(&self.fetcher),
            terms: TermExtractor::new(
                Arc::clone(&self.extractor),
                Arc::clone(&self.normalizer),
                self.content_tags.clone(),
            ),
            engine: self.engine.clone(),
            resolver: LinkResolver::for_job(job)?,
        });
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent_fetches));

        let frontier = Frontier::with_seed(seed.as_str());
        let mut report = CrawlReport::new(seed.as_str());
        let mut state = CrawlState::Idle;
        let mut depth = 0;

        tracing::info!(
            "Starting crawl from {} (max depth {}, scope {})",
            seed,
            job.max_depth,
            if job.follow_external_links {
                "any host"
            } else {
                pipeline.resolver.seed_host()
            }
        );

        state.transition(CrawlState::RoundActive(depth))?;

        loop {
            if cancel.is_cancelled() {
                report.cancelled = true;
                break;
            }

            if depth > job.max_depth {
                tracing::debug!("Depth limit {} reached", job.max_depth);
                break;
            }

            state.transition(CrawlState::Draining(depth))?;
            let batch = frontier.drain_batch();
            if batch.is_empty() {
                tracing::debug!("Frontier empty after {} rounds", depth);
                break;
            }

            tracing::info!("Round {}: fetching {} URLs", depth, batch.len());

            state.transition(CrawlState::Dispatching(depth))?;
            let mut tasks = JoinSet::new();
            for url in batch {
                let pipeline = Arc::clone(&pipeline);
                let semaphore = Arc::clone(&semaphore);
                tasks.spawn(async move {
                    let _permit = semaphore.acquire_owned().await.ok();
                    pipeline.process(url).await
                });
            }

            state.transition(CrawlState::Collecting(depth))?;
            let finished = collect_round(&mut tasks, &frontier, &mut report, depth, &cancel).await?;
            if !finished {
                report.cancelled = true;
                break;
            }

            report.rounds_completed += 1;
            tracing::info!(
                "Round {} complete: {} indexed, {} skipped, {} failed, {} URLs pending",
                depth,
                report.documents_indexed,
                report.documents_skipped,
                report.failures(),
                frontier.pending_len()
            );

            let Some(next) = depth.checked_add(1) else {
                break;
            };
            state.transition(CrawlState::RoundActive(next))?;
            depth = next;
        }

        state.transition(CrawlState::Done)?;

        if report.cancelled {
            tracing::warn!("Crawl from {} cancelled after {} rounds", seed, report.rounds_completed);
        } else {
            tracing::info!(
                "Crawl from {} finished: {} pages fetched, {} documents indexed, {} URLs visited",
                seed,
                report.pages_fetched,
                report.documents_indexed,
                frontier.visited_len()
            );
        }

        Ok(report)
    }
}

/// Waits for every task of a round, enqueuing links as each one finishes
///
/// Returns `Ok(false)` if the round was cut short by cancellation.
async fn collect_round(
    tasks: &mut JoinSet<PageResult>,
    frontier: &Frontier,
    report: &mut CrawlReport,
    depth: u32,
    cancel: &CancellationToken,
) -> Result<bool> {
    loop {
        let joined = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            joined = tasks.join_next() => Some(joined),
        };

        let Some(joined) = joined else {
            tracing::info!("Cancellation requested, aborting {} in-flight tasks", tasks.len());
            tasks.abort_all();
            while tasks.join_next().await.is_some() {}
            return Ok(false);
        };

        let result = match joined {
            None => return Ok(true),
            Some(Ok(result)) => result,
            Some(Err(e)) => {
                tracing::error!("Crawl task did not complete: {}", e);
                report.fetch_failures += 1;
                continue;
            }
        };

        match result.outcome {
            PageOutcome::FetchFailed(source) => {
                if depth == 0 {
                    return Err(CrawlError::SeedUnreachable {
                        url: result.url,
                        source,
                    });
                }
                report.fetch_failures += 1;
                continue;
            }
            PageOutcome::Indexed => report.documents_indexed += 1,
            PageOutcome::Skipped => report.documents_skipped += 1,
            PageOutcome::StoreFailed => report.store_failures += 1,
        }

        report.pages_fetched += 1;
        report.links_rejected += result.rejected;
        for link in result.links {
            frontier.enqueue(link.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IdfFormula;
    use crate::index::RankEntry;
    use crate::storage::{IndexCommit, MemoryStore, StorageError, StorageResult};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Serves canned pages and records every URL requested
    struct FakeFetcher {
        pages: HashMap<String, String>,
        fetched: Mutex<Vec<String>>,
    }

    impl FakeFetcher {
        fn new(pages: &[(&str, &str)]) -> Self {
            Self {
                pages: pages
                    .iter()
                    .map(|(url, html)| (url.to_string(), html.to_string()))
                    .collect(),
                fetched: Mutex::new(Vec::new()),
            }
        }

        fn fetched(&self) -> Vec<String> {
            self.fetched.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Fetcher for FakeFetcher {
        async fn fetch(&self, url: &str) -> std::result::Result<String, FetchError> {
            self.fetched.lock().unwrap().push(url.to_string());
            self.pages
                .get(url)
                .cloned()
                .ok_or(FetchError::Status(404))
        }
    }

    fn page(title: &str, body: &str, links: &[&str]) -> String {
        let anchors: String = links
            .iter()
            .map(|href| format!(r#"<a href="{}">link</a>"#, href))
            .collect();
        format!(
            "<html><head><title>{}</title></head><body><p>{}</p>{}</body></html>",
            title, body, anchors
        )
    }

    fn job(max_depth: u32) -> CrawlJob {
        CrawlJob {
            seed_url: "https://a.example/".to_string(),
            max_depth,
            follow_external_links: false,
        }
    }

    fn orchestrator(fetcher: Arc<FakeFetcher>) -> CrawlOrchestrator {
        CrawlOrchestrator::new(
            fetcher,
            Arc::new(HtmlExtractor::default()),
            Arc::new(RuleNormalizer::new()),
            IndexingEngine::new(Arc::new(MemoryStore::new()), IdfFormula::Reference),
        )
        .with_max_concurrent_fetches(4)
    }

    #[tokio::test]
    async fn test_depth_one_scenario() {
        let seed_page = page("Seed", "ocean", &["/b", "https://other.example/c"]);
        let b_page = page("B", "reef", &["/deeper"]);
        let fetcher = Arc::new(FakeFetcher::new(&[
            ("https://a.example/", &seed_page),
            ("https://a.example/b", &b_page),
        ]));

        let orchestrator = orchestrator(Arc::clone(&fetcher));
        let report = orchestrator
            .run(&job(1), CancellationToken::new())
            .await
            .unwrap();

        let mut fetched = fetcher.fetched();
        fetched.sort();
        assert_eq!(fetched, vec!["https://a.example/", "https://a.example/b"]);
        assert_eq!(report.rounds_completed, 2);
        assert_eq!(report.pages_fetched, 2);
        assert_eq!(report.documents_indexed, 2);
        assert_eq!(report.links_rejected, 1);
        assert!(!report.cancelled);

        let store = orchestrator.engine().store();
        assert_eq!(store.document_count().unwrap(), 2);
        assert_eq!(store.rank_entries("reef").unwrap().len(), 1);
    }

    #[test]
    fn test_from_config_uses_configured_formula() {
        let config = crate::config::parse_config(
            r#"
[crawler]
seeds = ["https://a.example/"]
max-depth = 1

[index]
database-path = "unused.db"
idf = "standard"
"#,
        )
        .unwrap();

        let orchestrator =
            CrawlOrchestrator::from_config(&config, Arc::new(MemoryStore::new())).unwrap();
        assert_eq!(orchestrator.engine().formula(), IdfFormula::Standard);
    }

    #[tokio::test]
    async fn test_depth_zero_fetches_only_seed() {
        let seed_page = page("Seed", "ocean", &["/b"]);
        let fetcher = Arc::new(FakeFetcher::new(&[("https://a.example/", &seed_page)]));

        let report = orchestrator(Arc::clone(&fetcher))
            .run(&job(0), CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(fetcher.fetched(), vec!["https://a.example/"]);
        assert_eq!(report.rounds_completed, 1);
    }

    #[tokio::test]
    async fn test_each_url_fetched_once() {
        let seed_page = page("Seed", "ocean", &["/b", "/c", "/b"]);
        let b_page = page("B", "reef", &["/", "/c"]);
        let c_page = page("C", "kelp", &["/b", "/"]);
        let fetcher = Arc::new(FakeFetcher::new(&[
            ("https://a.example/", &seed_page),
            ("https://a.example/b", &b_page),
            ("https://a.example/c", &c_page),
        ]));

        orchestrator(Arc::clone(&fetcher))
            .run(&job(5), CancellationToken::new())
            .await
            .unwrap();

        let mut fetched = fetcher.fetched();
        fetched.sort();
        assert_eq!(
            fetched,
            vec![
                "https://a.example/",
                "https://a.example/b",
                "https://a.example/c"
            ]
        );
    }

    #[tokio::test]
    async fn test_rounds_are_breadth_first() {
        let seed_page = page("Seed", "ocean", &["/a", "/b"]);
        let a_page = page("A", "reef", &["/c"]);
        let b_page = page("B", "kelp", &["/d"]);
        let c_page = page("C", "tide", &[]);
        let d_page = page("D", "wave", &[]);
        let fetcher = Arc::new(FakeFetcher::new(&[
            ("https://a.example/", &seed_page),
            ("https://a.example/a", &a_page),
            ("https://a.example/b", &b_page),
            ("https://a.example/c", &c_page),
            ("https://a.example/d", &d_page),
        ]));

        orchestrator(Arc::clone(&fetcher))
            .run(&job(2), CancellationToken::new())
            .await
            .unwrap();

        let fetched = fetcher.fetched();
        let position = |url: &str| fetched.iter().position(|u| u == url).unwrap();
        let last_round_one = position("https://a.example/a").max(position("https://a.example/b"));
        let first_round_two = position("https://a.example/c").min(position("https://a.example/d"));
        assert!(last_round_one < first_round_two);
    }

    #[tokio::test]
    async fn test_missing_title_page_links_still_followed() {
        let seed_page = "<html><body><p>untitled</p><a href=\"/b\">b</a></body></html>";
        let b_page = page("B", "reef", &[]);
        let fetcher = Arc::new(FakeFetcher::new(&[
            ("https://a.example/", seed_page),
            ("https://a.example/b", &b_page),
        ]));

        let report = orchestrator(Arc::clone(&fetcher))
            .run(&job(1), CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(report.documents_skipped, 1);
        assert_eq!(report.documents_indexed, 1);
        assert!(fetcher.fetched().contains(&"https://a.example/b".to_string()));
    }

    #[tokio::test]
    async fn test_failed_page_is_skipped() {
        let seed_page = page("Seed", "ocean", &["/missing", "/b"]);
        let b_page = page("B", "reef", &[]);
        let fetcher = Arc::new(FakeFetcher::new(&[
            ("https://a.example/", &seed_page),
            ("https://a.example/b", &b_page),
        ]));

        let report = orchestrator(fetcher)
            .run(&job(1), CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(report.fetch_failures, 1);
        assert_eq!(report.documents_indexed, 2);
    }

    #[tokio::test]
    async fn test_unreachable_seed_is_fatal() {
        let fetcher = Arc::new(FakeFetcher::new(&[]));

        let result = orchestrator(fetcher)
            .run(&job(1), CancellationToken::new())
            .await;

        assert!(matches!(result, Err(CrawlError::SeedUnreachable { .. })));
    }

    #[tokio::test]
    async fn test_invalid_seed() {
        let fetcher = Arc::new(FakeFetcher::new(&[]));
        let job = CrawlJob {
            seed_url: "mailto:someone@a.example".to_string(),
            max_depth: 1,
            follow_external_links: false,
        };

        let result = orchestrator(fetcher).run(&job, CancellationToken::new()).await;
        assert!(matches!(result, Err(CrawlError::InvalidSeed(_))));
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let seed_page = page("Seed", "ocean", &[]);
        let fetcher = Arc::new(FakeFetcher::new(&[("https://a.example/", &seed_page)]));
        let cancel = CancellationToken::new();
        cancel.cancel();

        let report = orchestrator(Arc::clone(&fetcher))
            .run(&job(3), cancel)
            .await
            .unwrap();

        assert!(report.cancelled);
        assert_eq!(report.rounds_completed, 0);
        assert!(fetcher.fetched().is_empty());
    }

    #[tokio::test]
    async fn test_external_links_followed_when_enabled() {
        let seed_page = page("Seed", "ocean", &["https://other.example/c"]);
        let c_page = page("C", "reef", &[]);
        let fetcher = Arc::new(FakeFetcher::new(&[
            ("https://a.example/", &seed_page),
            ("https://other.example/c", &c_page),
        ]));
        let job = CrawlJob {
            follow_external_links: true,
            ..job(1)
        };

        let report = orchestrator(Arc::clone(&fetcher))
            .run(&job, CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(report.documents_indexed, 2);
        assert!(fetcher
            .fetched()
            .contains(&"https://other.example/c".to_string()));
    }

    /// Delegates to a memory store but refuses to commit one document
    struct FailingStore {
        inner: MemoryStore,
        fail_for: String,
    }

    impl FrequencyStore for FailingStore {
        fn occurrence_frequency(&self, term: &str) -> StorageResult<u64> {
            self.inner.occurrence_frequency(term)
        }

        fn increment_occurrence_frequency(&self, term: &str, delta: u64) -> StorageResult<()> {
            self.inner.increment_occurrence_frequency(term, delta)
        }

        fn document_frequency(&self, term: &str) -> StorageResult<u64> {
            self.inner.document_frequency(term)
        }

        fn document_count(&self) -> StorageResult<u64> {
            self.inner.document_count()
        }

        fn increment_document_count(&self) -> StorageResult<()> {
            self.inner.increment_document_count()
        }

        fn upsert_rank_entry(&self, entry: &RankEntry) -> StorageResult<()> {
            self.inner.upsert_rank_entry(entry)
        }

        fn document_terms(&self, document_id: &str) -> StorageResult<HashMap<String, u64>> {
            self.inner.document_terms(document_id)
        }

        fn rank_entries(&self, term: &str) -> StorageResult<Vec<RankEntry>> {
            self.inner.rank_entries(term)
        }

        fn commit(&self, commit: &IndexCommit) -> StorageResult<()> {
            if commit.document_id == self.fail_for {
                return Err(StorageError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "disk full",
                )));
            }
            self.inner.commit(commit)
        }
    }

    #[tokio::test]
    async fn test_store_failure_keeps_crawling() {
        let seed_page = page("Seed", "ocean", &["/b"]);
        let b_page = page("B", "reef", &[]);
        let fetcher = Arc::new(FakeFetcher::new(&[
            ("https://a.example/", &seed_page),
            ("https://a.example/b", &b_page),
        ]));
        let store = Arc::new(FailingStore {
            inner: MemoryStore::new(),
            fail_for: "https://a.example/".to_string(),
        });

        let report = CrawlOrchestrator::new(
            Arc::clone(&fetcher) as Arc<dyn Fetcher>,
            Arc::new(HtmlExtractor::default()),
            Arc::new(RuleNormalizer::new()),
            IndexingEngine::new(
                Arc::clone(&store) as Arc<dyn FrequencyStore>,
                IdfFormula::Reference,
            ),
        )
        .run(&job(1), CancellationToken::new())
        .await
        .unwrap();

        assert_eq!(report.store_failures, 1);
        assert_eq!(report.documents_indexed, 1);
        assert_eq!(report.pages_fetched, 2);
        assert!(fetcher.fetched().contains(&"https://a.example/b".to_string()));

        assert_eq!(store.document_count().unwrap(), 1);
        assert!(store.rank_entries("ocean").unwrap().is_empty());
        assert_eq!(store.rank_entries("reef").unwrap().len(), 1);
    }

    /// Serves the seed, then cancels the crawl and hangs on every other URL
    struct CancellingFetcher {
        seed_page: String,
        cancel: CancellationToken,
    }

    #[async_trait]
    impl Fetcher for CancellingFetcher {
        async fn fetch(&self, url: &str) -> std::result::Result<String, FetchError> {
            if url == "https://a.example/" {
                return Ok(self.seed_page.clone());
            }
            self.cancel.cancel();
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_cancel_mid_round_keeps_committed_documents() {
        let cancel = CancellationToken::new();
        let fetcher = Arc::new(CancellingFetcher {
            seed_page: page("Seed", "ocean", &["/b", "/c"]),
            cancel: cancel.clone(),
        });
        let store = Arc::new(MemoryStore::new());

        let report = CrawlOrchestrator::new(
            fetcher,
            Arc::new(HtmlExtractor::default()),
            Arc::new(RuleNormalizer::new()),
            IndexingEngine::new(
                Arc::clone(&store) as Arc<dyn FrequencyStore>,
                IdfFormula::Reference,
            ),
        )
        .run(&job(3), cancel)
        .await
        .unwrap();

        assert!(report.cancelled);
        assert_eq!(report.rounds_completed, 1);
        assert_eq!(report.pages_fetched, 1);
        assert_eq!(report.documents_indexed, 1);

        assert_eq!(store.document_count().unwrap(), 1);
        assert_eq!(store.rank_entries("ocean").unwrap().len(), 1);
    }
}
