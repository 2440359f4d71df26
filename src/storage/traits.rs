//! Storage traits and error types
//!
//! This module defines the trait interface for frequency stores and
//! associated error types.

use crate::index::RankEntry;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Run not found: {0}")]
    RunNotFound(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// The complete write set produced by indexing one document
///
/// A store applies a commit as one unit: either every counter, term row and
/// rank entry changes, or none do.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexCommit {
    pub document_id: String,
    pub title: String,
    /// Occurrences of each distinct term in this document
    pub term_counts: BTreeMap<String, u64>,
    /// One entry per distinct term
    pub entries: Vec<RankEntry>,
}

/// Durable term and document counters plus the ranked term index
///
/// Implementations must be safe to share between crawl tasks. Every method
/// takes `&self`; the store does its own locking and increments are atomic
/// per key.
pub trait FrequencyStore: Send + Sync {
    /// Total occurrences of `term` across indexed documents, 0 if unseen
    fn occurrence_frequency(&self, term: &str) -> StorageResult<u64>;

    /// Adds `delta` to the occurrence frequency of `term`
    fn increment_occurrence_frequency(&self, term: &str, delta: u64) -> StorageResult<()>;

    /// Number of indexed documents containing `term`, 0 if unseen
    fn document_frequency(&self, term: &str) -> StorageResult<u64>;

    /// Number of distinct documents indexed so far
    fn document_count(&self) -> StorageResult<u64>;

    /// Adds one to the document count
    fn increment_document_count(&self) -> StorageResult<()>;

    /// Inserts or replaces the entry for `(entry.term, entry.document_id)`
    fn upsert_rank_entry(&self, entry: &RankEntry) -> StorageResult<()>;

    /// Term counts recorded for `document_id` by its last commit, empty if never indexed
    fn document_terms(&self, document_id: &str) -> StorageResult<HashMap<String, u64>>;

    /// Entries for `term`, highest score first
    fn rank_entries(&self, term: &str) -> StorageResult<Vec<RankEntry>>;

    /// Applies one document's write set atomically
    ///
    /// If the document was indexed before, its previous term counts are
    /// subtracted from the global frequencies, its stale rank entries are removed
    /// and the document count is left unchanged.
    fn commit(&self, commit: &IndexCommit) -> StorageResult<()>;
}
