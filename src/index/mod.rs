//! Index module for Lexicrawl
//!
//! This module turns fetched pages into term sequences and maintains the TF-IDF
//! index in a [`FrequencyStore`](crate::storage::FrequencyStore).
//!
//! # Example
//!
//! ```
//! use lexicrawl::index::{CrawledDocument, IdfFormula, IndexingEngine};
//! use lexicrawl::storage::{FrequencyStore, MemoryStore};
//! use std::sync::Arc;
//!
//! let engine = IndexingEngine::new(Arc::new(MemoryStore::new()), IdfFormula::Reference);
//! let document = CrawledDocument {
//!     document_id: "https://a.example/".to_string(),
//!     title: Some("Ocean".to_string()),
//!     title_terms: vec!["ocean".to_string()],
//!     body_terms: vec!["wave".to_string()],
//! };
//!
//! engine.index(&document).unwrap();
//! assert_eq!(engine.store().rank_entries("ocean").unwrap().len(), 1);
//! ```

mod document;
mod engine;
pub mod tfidf;

pub use crate::config::IdfFormula;
pub use document::{CrawledDocument, RankEntry, TermExtractor};
pub use engine::{IndexError, IndexOutcome, IndexingEngine};
