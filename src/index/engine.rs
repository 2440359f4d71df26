//! Incremental TF-IDF indexing
//!
//! The engine reads the corpus statistics it needs from the store, scores every
//! distinct term of one document and hands the complete write set back to the
//! store as a single [`IndexCommit`].

use crate::config::IdfFormula;
use crate::index::tfidf::{reference_idf, standard_idf, term_frequency};
use crate::index::{CrawledDocument, RankEntry};
use crate::storage::{FrequencyStore, IndexCommit, StorageError};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// Reasons a document was not indexed
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("document {0} has no title")]
    MissingTitle(String),

    #[error("store failure: {0}")]
    Store(#[from] StorageError),
}

/// Result of indexing one document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOutcome {
    /// The document was committed with one rank entry per distinct term
    Indexed { entries: usize },
    /// The document had a title but no terms; nothing was written
    Empty,
}

/// Scores documents and commits them to a [`FrequencyStore`]
#[derive(Clone)]
pub struct IndexingEngine {
    store: Arc<dyn FrequencyStore>,
    formula: IdfFormula,
}

impl IndexingEngine {
    pub fn new(store: Arc<dyn FrequencyStore>, formula: IdfFormula) -> Self {
        Self { store, formula }
    }

    pub fn store(&self) -> &Arc<dyn FrequencyStore> {
        &self.store
    }

    pub fn formula(&self) -> IdfFormula {
        self.formula
    }

    /// Indexes one document
    ///
    /// Title and body terms are scored together. If the document was indexed
    /// before, its earlier counts are left out of the statistics used for scoring,
    /// so re-indexing unchanged content yields unchanged scores.
    pub fn index(&self, document: &CrawledDocument) -> Result<IndexOutcome, IndexError> {
        let title = document
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| IndexError::MissingTitle(document.document_id.clone()))?;

        let total_terms = document.term_count();
        if total_terms == 0 {
            return Ok(IndexOutcome::Empty);
        }

        let mut term_counts: BTreeMap<String, u64> = BTreeMap::new();
        for term in document.terms() {
            *term_counts.entry(term.to_string()).or_insert(0) += 1;
        }

        let previous = self.store.document_terms(&document.document_id)?;
        let reindexing = !previous.is_empty();
        let document_count = self
            .store
            .document_count()?
            .saturating_sub(u64::from(reindexing));

        let mut entries = Vec::with_capacity(term_counts.len());
        for (term, occurrences) in &term_counts {
            let prior = previous.get(term).copied().unwrap_or(0);
            let idf = match self.formula {
                IdfFormula::Reference => {
                    let occurrence_frequency = self
                        .store
                        .occurrence_frequency(term)?
                        .saturating_sub(prior);
                    reference_idf(document_count, occurrence_frequency)
                }
                IdfFormula::Standard => {
                    let document_frequency = self
                        .store
                        .document_frequency(term)?
                        .saturating_sub(u64::from(prior > 0));
                    standard_idf(document_count + 1, document_frequency + 1)
                }
            };

            entries.push(RankEntry {
                term: term.clone(),
                document_id: document.document_id.clone(),
                title: title.to_string(),
                score: term_frequency(*occurrences, total_terms) * idf,
            });
        }

        let entry_count = entries.len();
        self.store.commit(&IndexCommit {
            document_id: document.document_id.clone(),
            title: title.to_string(),
            term_counts,
            entries,
        })?;

        tracing::debug!(
            "Indexed {} ({} terms, {} entries)",
            document.document_id,
            total_terms,
            entry_count
        );

        Ok(IndexOutcome::Indexed {
            entries: entry_count,
        })
    }
}
