/// Crawl state definitions for tracking round progress
///
/// This module defines every state a crawl job passes through and which moves
/// between them are legal.
use crate::CrawlError;
use std::fmt;

/// Represents where a crawl job is in its round cycle
///
/// ```text
/// Idle -> RoundActive(0) -> Draining(0) -> Dispatching(0) -> Collecting(0)
///      -> RoundActive(1) -> ... -> Done
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrawlState {
    /// Seed enqueued, no round started yet
    Idle,

    /// A round at the given depth is about to drain the frontier
    RoundActive(u32),

    /// Pending URLs are being moved into this round's batch
    Draining(u32),

    /// One task per batch URL is being spawned
    Dispatching(u32),

    /// Waiting for the round's tasks and enqueuing their links
    Collecting(u32),

    /// Terminal: depth limit reached, frontier empty, or cancelled
    Done,
}

impl CrawlState {
    /// Returns true if this is the terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Returns true if moving from `self` to `next` is legal
    ///
    /// Any non-terminal state may move to `Done`, which is how cancellation ends
    /// a job mid-round.
    pub fn can_transition_to(&self, next: CrawlState) -> bool {
        match (*self, next) {
            (from, _) if from.is_terminal() => false,
            (_, Self::Done) => true,
            (Self::Idle, Self::RoundActive(0)) => true,
            (Self::RoundActive(d), Self::Draining(n)) => d == n,
            (Self::Draining(d), Self::Dispatching(n)) => d == n,
            (Self::Dispatching(d), Self::Collecting(n)) => d == n,
            (Self::Collecting(d), Self::RoundActive(n)) => d.checked_add(1) == Some(n),
            _ => false,
        }
    }

    /// Moves to `next`, or fails with [`CrawlError::InvalidTransition`]
    pub fn transition(&mut self, next: CrawlState) -> Result<(), CrawlError> {
        if !self.can_transition_to(next) {
            return Err(CrawlError::InvalidTransition {
                from: *self,
                to: next,
            });
        }
        *self = next;
        Ok(())
    }
}

impl fmt::Display for CrawlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::RoundActive(d) => write!(f, "round {} active", d),
            Self::Draining(d) => write!(f, "round {} draining", d),
            Self::Dispatching(d) => write!(f, "round {} dispatching", d),
            Self::Collecting(d) => write!(f, "round {} collecting", d),
            Self::Done => write!(f, "done"),
        }
    }
}
