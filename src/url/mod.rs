//! URL handling module for Lexicrawl
//!
//! This module turns the hrefs found on a page into absolute URLs and decides
//! whether they fall inside the scope of the current crawl job.

mod domain;

use crate::config::CrawlJob;
use crate::{UrlError, UrlResult};
use url::Url;

pub use domain::extract_host;

/// Why a discovered link was not accepted
///
/// Rejections are not failures: the link is dropped without being fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeRejection {
    /// The href was empty or whitespace
    Empty,
    /// The href only points at a fragment of the current page
    FragmentOnly,
    /// The resolved URL does not use http or https
    UnsupportedScheme(String),
    /// The href could not be resolved into a URL with a host
    Malformed(String),
    /// The link leaves the seed host while external links are disabled
    External(String),
}

/// Outcome of resolving one href
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Accepted(Url),
    Rejected(ScopeRejection),
}

impl Resolution {
    /// Returns the accepted URL, if any
    pub fn accepted(self) -> Option<Url> {
        match self {
            Self::Accepted(url) => Some(url),
            Self::Rejected(_) => None,
        }
    }
}

/// Resolves hrefs against a base URL and applies the seed-host scope filter
#[derive(Debug, Clone)]
pub struct LinkResolver {
    seed_host: String,
    follow_external_links: bool,
}

impl LinkResolver {
    /// Creates a resolver scoped to the host of `seed`
    pub fn new(seed: &Url, follow_external_links: bool) -> UrlResult<Self> {
        let seed_host = extract_host(seed).ok_or(UrlError::MissingHost)?;
        Ok(Self {
            seed_host,
            follow_external_links,
        })
    }

    /// Creates a resolver for a crawl job
    pub fn for_job(job: &CrawlJob) -> UrlResult<Self> {
        let seed = parse_seed(&job.seed_url)?;
        Self::new(&seed, job.follow_external_links)
    }

    /// The host every in-scope URL must share when external links are disabled
    pub fn seed_host(&self) -> &str {
        &self.seed_host
    }

    /// Resolves `href` found on the page at `base`
    ///
    /// Absolute hrefs are used as they are; relative ones are joined with the base
    /// using standard relative-reference resolution. No canonicalization is applied,
    /// so `/a` and `/a/` stay distinct.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexicrawl::url::{LinkResolver, Resolution};
    /// use url::Url;
    ///
    /// let seed = Url::parse("https://a.example/").unwrap();
    /// let resolver = LinkResolver::new(&seed, false).unwrap();
    ///
    /// let resolved = resolver.resolve("/b", &seed).accepted().unwrap();
    /// assert_eq!(resolved.as_str(), "https://a.example/b");
    ///
    /// assert!(matches!(
    ///     resolver.resolve("https://other.example/c", &seed),
    ///     Resolution::Rejected(_)
    /// ));
    /// ```
    pub fn resolve(&self, href: &str, base: &Url) -> Resolution {
        let href = href.trim();

        if href.is_empty() {
            return Resolution::Rejected(ScopeRejection::Empty);
        }

        if href.starts_with('#') {
            return Resolution::Rejected(ScopeRejection::FragmentOnly);
        }

        let absolute = match base.join(href) {
            Ok(url) => url,
            Err(e) => return Resolution::Rejected(ScopeRejection::Malformed(e.to_string())),
        };

        if absolute.scheme() != "http" && absolute.scheme() != "https" {
            return Resolution::Rejected(ScopeRejection::UnsupportedScheme(
                absolute.scheme().to_string(),
            ));
        }

        let host = match extract_host(&absolute) {
            Some(host) => host,
            None => {
                return Resolution::Rejected(ScopeRejection::Malformed(format!(
                    "no host in {}",
                    absolute
                )))
            }
        };

        if !self.is_in_scope(&absolute) {
            return Resolution::Rejected(ScopeRejection::External(host));
        }

        Resolution::Accepted(absolute)
    }

    /// Returns true if `url` may be fetched under this resolver's scope
    pub fn is_in_scope(&self, url: &Url) -> bool {
        self.follow_external_links
            || extract_host(url).is_some_and(|host| host == self.seed_host)
    }
}

/// Parses a seed URL, requiring http(s) and a host
pub fn parse_seed(seed: &str) -> UrlResult<Url> {
    let url = Url::parse(seed).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    Ok(url)
}
