//! Text normalization
//!
//! The indexing engine never looks at raw text; it consumes the ordered term
//! sequences produced by a [`Normalizer`].

mod normalizer;
mod stopwords;

pub use normalizer::RuleNormalizer;
pub use stopwords::is_stopword;

/// Turns raw text into an ordered sequence of normalized terms
///
/// Implementations must lowercase terms and drop stopwords and punctuation. Order
/// and repetition are preserved because term frequency depends on them.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, text: &str) -> Vec<String>;
}
