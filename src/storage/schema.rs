//! Database schema definitions
//!
//! This module contains all SQL schema definitions for the index database.

/// Counter row holding the store-wide document count
pub const DOCUMENT_COUNT: &str = "document_count";

/// SQL schema for the database
pub const SCHEMA_SQL: &str = r#"
-- Track crawl runs
CREATE TABLE IF NOT EXISTS runs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    seed_url TEXT NOT NULL,
    started_at TEXT NOT NULL,
    finished_at TEXT,
    config_hash TEXT NOT NULL,
    status TEXT NOT NULL,
    documents_indexed INTEGER NOT NULL DEFAULT 0,
    failures INTEGER NOT NULL DEFAULT 0
);

-- Every successfully indexed document
CREATE TABLE IF NOT EXISTS documents (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    term_count INTEGER NOT NULL,
    indexed_at TEXT NOT NULL
);

-- Per-document term counts from the last commit of each document
CREATE TABLE IF NOT EXISTS document_terms (
    document_id TEXT NOT NULL,
    term TEXT NOT NULL,
    occurrences INTEGER NOT NULL,
    PRIMARY KEY (document_id, term)
);

-- Global term statistics
CREATE TABLE IF NOT EXISTS terms (
    term TEXT PRIMARY KEY,
    occurrence_frequency INTEGER NOT NULL DEFAULT 0,
    document_frequency INTEGER NOT NULL DEFAULT 0
);

-- Ranked term -> document mapping
CREATE TABLE IF NOT EXISTS rank_entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    term TEXT NOT NULL,
    document_id TEXT NOT NULL,
    title TEXT NOT NULL,
    score REAL NOT NULL,
    UNIQUE(term, document_id)
);

CREATE INDEX IF NOT EXISTS idx_rank_entries_term ON rank_entries(term, score DESC);
CREATE INDEX IF NOT EXISTS idx_rank_entries_document ON rank_entries(document_id);

-- Named global counters
CREATE TABLE IF NOT EXISTS counters (
    name TEXT PRIMARY KEY,
    value INTEGER NOT NULL DEFAULT 0
);
"#;

/// Initializes the database schema
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
