//! Rule-based term normalizer
//!
//! Splits text on anything that is not a letter, lowercases, drops single letters
//! and stopwords, and strips a small set of inflectional suffixes. It stands in
//! for a full lemmatizer.

use crate::text::stopwords::is_stopword;
use crate::text::Normalizer;

/// Suffixes removed from terms, checked in order
const SUFFIXES: &[&str] = &["ing", "ed", "ly"];

/// Shortest stem a suffix may be stripped down to
const MIN_STEM_LEN: usize = 3;

/// Default normalizer: lowercase letter runs, stopwords removed, light stemming
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleNormalizer;

impl RuleNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Normalizer for RuleNormalizer {
    fn normalize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphabetic())
            .filter(|token| token.chars().count() > 1)
            .map(str::to_lowercase)
            .filter(|token| !is_stopword(token))
            .map(|token| strip_suffix(&token))
            .collect()
    }
}

/// Strips the first matching suffix if the remaining stem is long enough
fn strip_suffix(term: &str) -> String {
    for suffix in SUFFIXES {
        if let Some(stem) = term.strip_suffix(suffix) {
            if stem.chars().count() >= MIN_STEM_LEN {
                return stem.to_string();
            }
        }
    }
    term.to_string()
}
