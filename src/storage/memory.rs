//! In-memory storage implementation
//!
//! Holds all index state behind one mutex. Nothing survives the process, which
//! makes it the store of choice for tests and `--dry-run` style experiments.

use crate::index::RankEntry;
use crate::storage::traits::{FrequencyStore, IndexCommit, StorageResult};
use crate::storage::TermStats;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct MemoryState {
    terms: HashMap<String, TermStats>,
    document_count: u64,
    documents: HashMap<String, HashMap<String, u64>>,
    rank_entries: HashMap<(String, String), RankEntry>,
}

/// Volatile frequency store
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FrequencyStore for MemoryStore {
    fn occurrence_frequency(&self, term: &str) -> StorageResult<u64> {
        Ok(self
            .lock()
            .terms
            .get(term)
            .map(|stats| stats.occurrence_frequency)
            .unwrap_or(0))
    }

    fn increment_occurrence_frequency(&self, term: &str, delta: u64) -> StorageResult<()> {
        self.lock()
            .terms
            .entry(term.to_string())
            .or_default()
            .occurrence_frequency += delta;
        Ok(())
    }

    fn document_frequency(&self, term: &str) -> StorageResult<u64> {
        Ok(self
            .lock()
            .terms
            .get(term)
            .map(|stats| stats.document_frequency)
            .unwrap_or(0))
    }

    fn document_count(&self) -> StorageResult<u64> {
        Ok(self.lock().document_count)
    }

    fn increment_document_count(&self) -> StorageResult<()> {
        self.lock().document_count += 1;
        Ok(())
    }

    fn upsert_rank_entry(&self, entry: &RankEntry) -> StorageResult<()> {
        self.lock().rank_entries.insert(
            (entry.term.clone(), entry.document_id.clone()),
            entry.clone(),
        );
        Ok(())
    }

    fn document_terms(&self, document_id: &str) -> StorageResult<HashMap<String, u64>> {
        Ok(self
            .lock()
            .documents
            .get(document_id)
            .cloned()
            .unwrap_or_default())
    }

    fn rank_entries(&self, term: &str) -> StorageResult<Vec<RankEntry>> {
        let mut entries: Vec<RankEntry> = self
            .lock()
            .rank_entries
            .values()
            .filter(|entry| entry.term == term)
            .cloned()
            .collect();
        entries.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.document_id.cmp(&b.document_id))
        });
        Ok(entries)
    }

    fn commit(&self, commit: &IndexCommit) -> StorageResult<()> {
        let mut state = self.lock();

        let previous = state.documents.remove(&commit.document_id);
        let already_indexed = previous.is_some();

        for (term, occurrences) in previous.iter().flatten() {
            if let Some(stats) = state.terms.get_mut(term) {
                stats.occurrence_frequency = stats.occurrence_frequency.saturating_sub(*occurrences);
                stats.document_frequency = stats.document_frequency.saturating_sub(1);
            }
        }

        for (term, occurrences) in &commit.term_counts {
            let stats = state.terms.entry(term.clone()).or_default();
            stats.occurrence_frequency += occurrences;
            stats.document_frequency += 1;
        }

        state
            .rank_entries
            .retain(|(_, document_id), _| document_id != &commit.document_id);
        for entry in &commit.entries {
            state.rank_entries.insert(
                (entry.term.clone(), entry.document_id.clone()),
                entry.clone(),
            );
        }

        state.documents.insert(
            commit.document_id.clone(),
            commit
                .term_counts
                .iter()
                .map(|(term, count)| (term.clone(), *count))
                .collect(),
        );

        if !already_indexed {
            state.document_count += 1;
        }

        Ok(())
    }
}
