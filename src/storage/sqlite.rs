//! SQLite storage implementation
//!
//! This module provides a SQLite-based implementation of the FrequencyStore trait,
//! plus the run bookkeeping and statistics queries used by the CLI.

use crate::index::RankEntry;
use crate::storage::schema::{initialize_schema, DOCUMENT_COUNT};
use crate::storage::traits::{FrequencyStore, IndexCommit, StorageError, StorageResult};
use crate::storage::{RunRecord, RunStatus, TermStats};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// SQLite storage backend
///
/// The connection sits behind a mutex so the store can be shared between crawl
/// tasks; each commit runs in its own transaction.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Opens or creates the database at `path`, creating parent directories as needed
    pub fn open(path: &Path) -> StorageResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Creates an in-memory database
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ===== Run Management =====

    /// Records the start of a crawl run and returns its ID
    pub fn create_run(&self, seed_url: &str, config_hash: &str) -> StorageResult<i64> {
        let conn = self.lock();
        let now = Utc::now().to_rfc3339();
        conn.execute(
            "INSERT INTO runs (seed_url, started_at, config_hash, status) VALUES (?1, ?2, ?3, ?4)",
            params![seed_url, now, config_hash, RunStatus::Running.to_db_string()],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Marks a run as finished with its final status and counts
    pub fn finish_run(
        &self,
        run_id: i64,
        status: RunStatus,
        documents_indexed: u64,
        failures: u64,
    ) -> StorageResult<()> {
        let now = Utc::now().to_rfc3339();
        let updated = self.lock().execute(
            "UPDATE runs SET status = ?1, finished_at = ?2, documents_indexed = ?3, failures = ?4
             WHERE id = ?5",
            params![
                status.to_db_string(),
                now,
                to_sql_count(documents_indexed),
                to_sql_count(failures),
                run_id
            ],
        )?;

        if updated == 0 {
            return Err(StorageError::RunNotFound(run_id));
        }
        Ok(())
    }

    /// Gets a run by ID
    pub fn get_run(&self, run_id: i64) -> StorageResult<RunRecord> {
        self.lock()
            .query_row(
                "SELECT id, seed_url, started_at, finished_at, config_hash, status,
                 documents_indexed, failures FROM runs WHERE id = ?1",
                params![run_id],
                run_from_row,
            )
            .optional()?
            .ok_or(StorageError::RunNotFound(run_id))
    }

    /// Gets the most recent runs, newest first
    pub fn recent_runs(&self, limit: usize) -> StorageResult<Vec<RunRecord>> {
        let conn = self.lock();
        let mut stmt = conn.prepare(
            "SELECT id, seed_url, started_at, finished_at, config_hash, status,
             documents_indexed, failures FROM runs ORDER BY id DESC LIMIT ?1",
        )?;
        let runs = stmt
            .query_map(params![to_sql_count(limit as u64)], run_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(runs)
    }

    // ===== Statistics =====

    /// Number of rows in the documents table
    pub fn count_documents(&self) -> StorageResult<u64> {
        self.count("SELECT COUNT(*) FROM documents")
    }

    /// Number of distinct terms seen in at least one indexed document
    pub fn count_terms(&self) -> StorageResult<u64> {
        self.count("SELECT COUNT(*) FROM terms WHERE document_frequency > 0")
    }

    /// Total number of rank entries
    pub fn count_rank_entries(&self) -> StorageResult<u64> {
        self.count("SELECT COUNT(*) FROM rank_entries")
    }

    /// Terms with the highest occurrence frequency
    pub fn top_terms(&self, limit: usize) -> StorageResult<Vec<(String, TermStats)>> {
        let conn = self.lock();
        let mut stmt = conn.prepare(
            "SELECT term, occurrence_frequency, document_frequency FROM terms
             WHERE document_frequency > 0
             ORDER BY occurrence_frequency DESC, term ASC LIMIT ?1",
        )?;
        let terms = stmt
            .query_map(params![to_sql_count(limit as u64)], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    TermStats {
                        occurrence_frequency: from_sql_count(row.get(1)?),
                        document_frequency: from_sql_count(row.get(2)?),
                    },
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(terms)
    }

    fn count(&self, sql: &str) -> StorageResult<u64> {
        let count: i64 = self.lock().query_row(sql, [], |row| row.get(0))?;
        Ok(from_sql_count(count))
    }
}

impl FrequencyStore for SqliteStore {
    fn occurrence_frequency(&self, term: &str) -> StorageResult<u64> {
        let value: Option<i64> = self
            .lock()
            .query_row(
                "SELECT occurrence_frequency FROM terms WHERE term = ?1",
                params![term],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value.map(from_sql_count).unwrap_or(0))
    }

    fn increment_occurrence_frequency(&self, term: &str, delta: u64) -> StorageResult<()> {
        self.lock().execute(
            "INSERT INTO terms (term, occurrence_frequency) VALUES (?1, ?2)
             ON CONFLICT(term) DO UPDATE SET occurrence_frequency = occurrence_frequency + excluded.occurrence_frequency",
            params![term, to_sql_count(delta)],
        )?;
        Ok(())
    }

    fn document_frequency(&self, term: &str) -> StorageResult<u64> {
        let value: Option<i64> = self
            .lock()
            .query_row(
                "SELECT document_frequency FROM terms WHERE term = ?1",
                params![term],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value.map(from_sql_count).unwrap_or(0))
    }

    fn document_count(&self) -> StorageResult<u64> {
        let value: Option<i64> = self
            .lock()
            .query_row(
                "SELECT value FROM counters WHERE name = ?1",
                params![DOCUMENT_COUNT],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value.map(from_sql_count).unwrap_or(0))
    }

    fn increment_document_count(&self) -> StorageResult<()> {
        increment_counter(&self.lock(), DOCUMENT_COUNT)?;
        Ok(())
    }

    fn upsert_rank_entry(&self, entry: &RankEntry) -> StorageResult<()> {
        upsert_rank_entry(&self.lock(), entry)?;
        Ok(())
    }

    fn document_terms(&self, document_id: &str) -> StorageResult<HashMap<String, u64>> {
        let conn = self.lock();
        Ok(load_document_terms(&conn, document_id)?)
    }

    fn rank_entries(&self, term: &str) -> StorageResult<Vec<RankEntry>> {
        let conn = self.lock();
        let mut stmt = conn.prepare(
            "SELECT term, document_id, title, score FROM rank_entries
             WHERE term = ?1 ORDER BY score DESC, document_id ASC",
        )?;
        let entries = stmt
            .query_map(params![term], |row| {
                Ok(RankEntry {
                    term: row.get(0)?,
                    document_id: row.get(1)?,
                    title: row.get(2)?,
                    score: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    fn commit(&self, commit: &IndexCommit) -> StorageResult<()> {
        let mut conn = self.lock();
        let tx = conn.transaction()?;
        // Dropping `tx` on an early return rolls everything back
        apply_commit(&tx, commit)?;
        tx.commit()?;
        Ok(())
    }
}

fn apply_commit(tx: &Transaction<'_>, commit: &IndexCommit) -> rusqlite::Result<()> {
    let previous = load_document_terms(tx, &commit.document_id)?;
    let already_indexed: bool = tx
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM documents WHERE id = ?1)",
            params![commit.document_id],
            |row| row.get(0),
        )?;

    for (term, occurrences) in &previous {
        tx.execute(
            "UPDATE terms SET occurrence_frequency = MAX(occurrence_frequency - ?2, 0),
             document_frequency = MAX(document_frequency - 1, 0) WHERE term = ?1",
            params![term, to_sql_count(*occurrences)],
        )?;
    }

    for (term, occurrences) in &commit.term_counts {
        tx.execute(
            "INSERT INTO terms (term, occurrence_frequency, document_frequency) VALUES (?1, ?2, 1)
             ON CONFLICT(term) DO UPDATE SET
                occurrence_frequency = occurrence_frequency + excluded.occurrence_frequency,
                document_frequency = document_frequency + 1",
            params![term, to_sql_count(*occurrences)],
        )?;
    }

    tx.execute(
        "DELETE FROM document_terms WHERE document_id = ?1",
        params![commit.document_id],
    )?;
    for (term, occurrences) in &commit.term_counts {
        tx.execute(
            "INSERT INTO document_terms (document_id, term, occurrences) VALUES (?1, ?2, ?3)",
            params![commit.document_id, term, to_sql_count(*occurrences)],
        )?;
    }

    tx.execute(
        "DELETE FROM rank_entries WHERE document_id = ?1",
        params![commit.document_id],
    )?;
    for entry in &commit.entries {
        upsert_rank_entry(tx, entry)?;
    }

    let total_terms: u64 = commit.term_counts.values().sum();
    tx.execute(
        "INSERT INTO documents (id, title, term_count, indexed_at) VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(id) DO UPDATE SET
            title = excluded.title,
            term_count = excluded.term_count,
            indexed_at = excluded.indexed_at",
        params![
            commit.document_id,
            commit.title,
            to_sql_count(total_terms),
            Utc::now().to_rfc3339()
        ],
    )?;

    if !already_indexed {
        increment_counter(tx, DOCUMENT_COUNT)?;
    }

    Ok(())
}

fn load_document_terms(
    conn: &Connection,
    document_id: &str,
) -> rusqlite::Result<HashMap<String, u64>> {
    let mut stmt =
        conn.prepare("SELECT term, occurrences FROM document_terms WHERE document_id = ?1")?;
    let rows = stmt.query_map(params![document_id], |row| {
        Ok((row.get::<_, String>(0)?, from_sql_count(row.get(1)?)))
    })?;
    rows.collect()
}

fn upsert_rank_entry(conn: &Connection, entry: &RankEntry) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO rank_entries (term, document_id, title, score) VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(term, document_id) DO UPDATE SET title = excluded.title, score = excluded.score",
        params![entry.term, entry.document_id, entry.title, entry.score],
    )?;
    Ok(())
}

fn increment_counter(conn: &Connection, name: &str) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO counters (name, value) VALUES (?1, 1)
         ON CONFLICT(name) DO UPDATE SET value = value + 1",
        params![name],
    )?;
    Ok(())
}

fn run_from_row(row: &Row<'_>) -> rusqlite::Result<RunRecord> {
    Ok(RunRecord {
        id: row.get(0)?,
        seed_url: row.get(1)?,
        started_at: row.get(2)?,
        finished_at: row.get(3)?,
        config_hash: row.get(4)?,
        status: RunStatus::from_db_string(&row.get::<_, String>(5)?).unwrap_or(RunStatus::Failed),
        documents_indexed: from_sql_count(row.get(6)?),
        failures: from_sql_count(row.get(7)?),
    })
}

fn to_sql_count(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn from_sql_count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}
