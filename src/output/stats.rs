//! Statistics generation from the index database
//!
//! This module provides functionality for extracting and displaying
//! index statistics from the storage layer.

use crate::storage::{FrequencyStore, RunRecord, SqliteStore, StorageResult, TermStats};

/// How many terms and runs the statistics view lists
const TOP_TERMS: usize = 10;
const RECENT_RUNS: usize = 5;

/// Index statistics summary
#[derive(Debug, Clone)]
pub struct IndexStatistics {
    /// Value of the store-wide document counter
    pub document_count: u64,

    /// Rows in the documents table
    pub documents: u64,

    /// Terms present in at least one document
    pub distinct_terms: u64,

    /// Total ranked (term, document) entries
    pub rank_entries: u64,

    /// Most frequent terms, highest occurrence first
    pub top_terms: Vec<(String, TermStats)>,

    /// Latest crawl runs, newest first
    pub recent_runs: Vec<RunRecord>,
}

/// Loads statistics from the index database
pub fn load_statistics(store: &SqliteStore) -> StorageResult<IndexStatistics> {
    Ok(IndexStatistics {
        document_count: store.document_count()?,
        documents: store.count_documents()?,
        distinct_terms: store.count_terms()?,
        rank_entries: store.count_rank_entries()?,
        top_terms: store.top_terms(TOP_TERMS)?,
        recent_runs: store.recent_runs(RECENT_RUNS)?,
    })
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &IndexStatistics) {
    println!("=== Index Statistics ===\n");

    println!("Overview:");
    println!("  Documents indexed: {}", stats.document_count);
    println!("  Distinct terms: {}", stats.distinct_terms);
    println!("  Rank entries: {}", stats.rank_entries);
    if stats.documents != stats.document_count {
        println!(
            "  Warning: document table holds {} rows but the counter reads {}",
            stats.documents, stats.document_count
        );
    }
    println!();

    if !stats.top_terms.is_empty() {
        println!("Top Terms:");
        for (term, term_stats) in &stats.top_terms {
            println!(
                "  {}: {} occurrences in {} documents",
                term, term_stats.occurrence_frequency, term_stats.document_frequency
            );
        }
        println!();
    }

    if stats.recent_runs.is_empty() {
        println!("No crawl runs recorded");
        return;
    }

    println!("Recent Runs:");
    for run in &stats.recent_runs {
        println!(
            "  #{} {} [{}] started {}, {} documents, {} failures",
            run.id,
            run.seed_url,
            run.status.to_db_string(),
            run.started_at,
            run.documents_indexed,
            run.failures
        );
    }
}
