//! Documents handed to the indexer and the entries it produces

use crate::crawler::PageExtractor;
use crate::text::Normalizer;
use std::sync::Arc;

/// A fetched page reduced to what the indexer needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawledDocument {
    /// The URL the page was fetched from
    pub document_id: String,
    pub title: Option<String>,
    pub title_terms: Vec<String>,
    pub body_terms: Vec<String>,
}

impl CrawledDocument {
    /// Title terms followed by body terms
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.title_terms
            .iter()
            .chain(self.body_terms.iter())
            .map(String::as_str)
    }

    pub fn term_count(&self) -> usize {
        self.title_terms.len() + self.body_terms.len()
    }
}

/// Relevance of one document for one term
#[derive(Debug, Clone, PartialEq)]
pub struct RankEntry {
    pub term: String,
    pub document_id: String,
    pub title: String,
    pub score: f64,
}

/// Turns a fetched page into a [`CrawledDocument`]
///
/// Combines the page extractor with the normalizer so the crawler only ever
/// deals with raw HTML on one side and terms on the other.
#[derive(Clone)]
pub struct TermExtractor {
    extractor: Arc<dyn PageExtractor>,
    normalizer: Arc<dyn Normalizer>,
    content_tags: Vec<String>,
}

impl TermExtractor {
    pub fn new(
        extractor: Arc<dyn PageExtractor>,
        normalizer: Arc<dyn Normalizer>,
        content_tags: Vec<String>,
    ) -> Self {
        Self {
            extractor,
            normalizer,
            content_tags,
        }
    }

    /// Extracts title and body terms from `html`
    pub fn extract(&self, document_id: &str, html: &str) -> CrawledDocument {
        let title = self.extractor.extract_title(html);
        let title_terms = title
            .as_deref()
            .map(|t| self.normalizer.normalize(t))
            .unwrap_or_default();
        let body = self.extractor.extract_content_text(html, &self.content_tags);
        let body_terms = self.normalizer.normalize(&body);

        CrawledDocument {
            document_id: document_id.to_string(),
            title,
            title_terms,
            body_terms,
        }
    }

    /// Raw hrefs on the page, in document order
    pub fn links(&self, html: &str) -> Vec<String> {
        self.extractor.extract_links(html)
    }
}
