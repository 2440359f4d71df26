//! HTML extraction for links, titles and body text
//!
//! The crawler depends only on the [`PageExtractor`] trait; [`HtmlExtractor`] is the
//! default implementation built on `scraper`.

use scraper::{Html, Selector};

/// Extracts the raw pieces of a page that the crawler and indexer need
pub trait PageExtractor: Send + Sync {
    /// Returns raw href values in document order, capped at the extractor's limit
    fn extract_links(&self, html: &str) -> Vec<String>;

    /// Returns the trimmed page title, or `None` if there is no non-empty title
    fn extract_title(&self, html: &str) -> Option<String>;

    /// Returns the text of every element named in `content_tags`, space separated
    fn extract_content_text(&self, html: &str, content_tags: &[String]) -> String;
}

/// `scraper`-based extractor
#[derive(Debug, Clone)]
pub struct HtmlExtractor {
    max_links: usize,
}

impl HtmlExtractor {
    /// Creates an extractor that keeps at most `max_links` links per page
    pub fn new(max_links: usize) -> Self {
        Self { max_links }
    }
}

impl Default for HtmlExtractor {
    fn default() -> Self {
        Self::new(10)
    }
}

impl PageExtractor for HtmlExtractor {
    /// # Link Extraction Rules
    ///
    /// - `<a href="...">` tags only, in document order
    /// - `<a ... download>` links are skipped
    /// - hrefs are returned untouched; resolution and scope filtering happen later
    fn extract_links(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let Ok(selector) = Selector::parse("a[href]") else {
            return Vec::new();
        };

        document
            .select(&selector)
            .filter(|element| element.value().attr("download").is_none())
            .filter_map(|element| element.value().attr("href"))
            .take(self.max_links)
            .map(str::to_string)
            .collect()
    }

    fn extract_title(&self, html: &str) -> Option<String> {
        let document = Html::parse_document(html);
        let selector = Selector::parse("title").ok()?;

        document
            .select(&selector)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn extract_content_text(&self, html: &str, content_tags: &[String]) -> String {
        let document = Html::parse_document(html);
        let mut chunks: Vec<String> = Vec::new();

        for tag in content_tags {
            let selector = match Selector::parse(tag) {
                Ok(selector) => selector,
                Err(_) => {
                    tracing::debug!("Skipping unparseable content tag selector {:?}", tag);
                    continue;
                }
            };

            for element in document.select(&selector) {
                let text = element.text().collect::<Vec<_>>().join(" ");
                let text = text.trim();
                if !text.is_empty() {
                    chunks.push(text.to_string());
                }
            }
        }

        chunks.join(" ")
    }
}
