use serde::Deserialize;

/// Main configuration structure for Lexicrawl
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub http: HttpConfig,
    pub index: IndexConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Seed URLs; each one becomes its own crawl job
    pub seeds: Vec<String>,

    /// Maximum depth to crawl from each seed URL
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Follow links whose host differs from the seed host
    #[serde(rename = "follow-external-links", default)]
    pub follow_external_links: bool,

    /// Maximum number of links taken from a single page
    #[serde(rename = "max-links-per-page", default = "default_max_links_per_page")]
    pub max_links_per_page: usize,

    /// Maximum number of page fetches in flight within one round
    #[serde(
        rename = "max-concurrent-fetches",
        default = "default_max_concurrent_fetches"
    )]
    pub max_concurrent_fetches: usize,

    /// Element names whose text forms the body of a document
    #[serde(rename = "content-tags", default = "default_content_tags")]
    pub content_tags: Vec<String>,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// User agent sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection timeout (seconds)
    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Retries after the first attempt for transient failures
    #[serde(rename = "max-retries", default = "default_max_retries")]
    pub max_retries: u32,

    /// Delay between retry attempts (milliseconds)
    #[serde(rename = "retry-delay-ms", default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

/// Index configuration
#[derive(Debug, Clone, Deserialize)]
pub struct IndexConfig {
    /// Path to the SQLite database file
    #[serde(rename = "database-path")]
    pub database_path: String,

    /// IDF formula used when scoring terms
    #[serde(default)]
    pub idf: IdfFormula,
}

/// Inverse document frequency formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdfFormula {
    /// Document count divided by the term's global occurrence count
    #[default]
    Reference,

    /// `log10(N / df)` over the corpus including the document being indexed
    Standard,
}

/// Immutable configuration for one traversal run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlJob {
    pub seed_url: String,
    pub max_depth: u32,
    pub follow_external_links: bool,
}

impl Config {
    /// Builds one crawl job per configured seed
    pub fn jobs(&self) -> Vec<CrawlJob> {
        self.crawler
            .seeds
            .iter()
            .map(|seed| CrawlJob {
                seed_url: seed.clone(),
                max_depth: self.crawler.max_depth,
                follow_external_links: self.crawler.follow_external_links,
            })
            .collect()
    }
}

fn default_max_links_per_page() -> usize {
    10
}

fn default_max_concurrent_fetches() -> usize {
    16
}

fn default_content_tags() -> Vec<String> {
    vec!["p".to_string()]
}

fn default_user_agent() -> String {
    format!("lexicrawl/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    5000
}
