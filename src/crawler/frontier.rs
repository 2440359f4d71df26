//! Crawl frontier: pending URLs plus the visited set
//!
//! This module handles:
//! - FIFO ordering of URLs waiting for the next round
//! - Deduplication against both pending and already drained URLs
//! - Draining a whole round's batch in one critical section

use std::collections::{HashSet, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct FrontierState {
    pending: VecDeque<String>,
    pending_set: HashSet<String>,
    visited: HashSet<String>,
}

/// Shared traversal state for one crawl job
///
/// URLs are compared as exact strings: `https://a.example/x` and
/// `https://a.example/x/` are two different entries.
#[derive(Debug, Default)]
pub struct Frontier {
    state: Mutex<FrontierState>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a frontier with `seed` already pending
    pub fn with_seed(seed: &str) -> Self {
        let frontier = Self::new();
        frontier.enqueue(seed);
        frontier
    }

    fn lock(&self) -> MutexGuard<'_, FrontierState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds `url` unless it is already pending or was drained before
    ///
    /// Returns true if the URL was added.
    pub fn enqueue(&self, url: &str) -> bool {
        let mut state = self.lock();
        if state.visited.contains(url) || state.pending_set.contains(url) {
            return false;
        }
        state.pending_set.insert(url.to_string());
        state.pending.push_back(url.to_string());
        true
    }

    /// Removes every pending URL in FIFO order and marks each as visited
    pub fn drain_batch(&self) -> Vec<String> {
        let mut state = self.lock();
        let batch: Vec<String> = state.pending.drain(..).collect();
        state.pending_set.clear();
        state.visited.extend(batch.iter().cloned());
        batch
    }

    pub fn pending_len(&self) -> usize {
        self.lock().pending.len()
    }

    pub fn visited_len(&self) -> usize {
        self.lock().visited.len()
    }
}
