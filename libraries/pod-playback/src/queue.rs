//! Episode queue with index-based navigation
//!
//! Holds the ordered episode list and the current position. Navigation
//! is non-destructive: moving forward or backward only moves the index,
//! so "previous" can always walk the same list the listener saw.

use crate::error::{PlayerError, Result};
use crate::types::Episode;

/// Ordered episode list plus current position
///
/// Invariant: `current` is `Some(i)` with `i < episodes.len()` exactly
/// when the queue is non-empty, and `None` when it is empty. Every
/// mutating method preserves this.
#[derive(Debug, Clone, Default)]
pub struct EpisodeQueue {
    /// Episodes eligible for navigation
    episodes: Vec<Episode>,

    /// Position of the active episode
    current: Option<usize>,
}

impl EpisodeQueue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self {
            episodes: Vec::new(),
            current: None,
        }
    }

    /// Replace the queue with a single episode, active immediately
    pub fn replace_single(&mut self, episode: Episode) {
        self.episodes = vec![episode];
        self.current = Some(0);
    }

    /// Replace the queue with a new list, starting at `index`
    ///
    /// Rejects an empty list and an out-of-range index; the previous
    /// contents are left untouched on rejection.
    pub fn replace(&mut self, episodes: Vec<Episode>, index: usize) -> Result<()> {
        if episodes.is_empty() {
            return Err(PlayerError::EmptyQueue);
        }
        if index >= episodes.len() {
            return Err(PlayerError::IndexOutOfBounds(index));
        }

        self.episodes = episodes;
        self.current = Some(index);
        Ok(())
    }

    /// Clear the queue
    pub fn clear(&mut self) {
        self.episodes.clear();
        self.current = None;
    }

    /// Episode at the current position
    pub fn current(&self) -> Option<&Episode> {
        self.current.and_then(|i| self.episodes.get(i))
    }

    /// Current position, None when empty
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// All queued episodes in order
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    /// Number of queued episodes
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// Check if a sequential step forward is possible
    pub fn has_next(&self) -> bool {
        match self.current {
            Some(i) => i + 1 < self.episodes.len(),
            None => false,
        }
    }

    /// Check if a step backward is possible
    pub fn has_previous(&self) -> bool {
        matches!(self.current, Some(i) if i > 0)
    }

    /// Step forward one position
    ///
    /// Returns true if the index moved, false at the end of the queue.
    pub fn advance(&mut self) -> bool {
        if self.has_next() {
            self.current = self.current.map(|i| i + 1);
            true
        } else {
            false
        }
    }

    /// Step backward one position
    ///
    /// Returns true if the index moved, false at the start of the queue.
    pub fn retreat(&mut self) -> bool {
        if self.has_previous() {
            self.current = self.current.map(|i| i - 1);
            true
        } else {
            false
        }
    }

    /// Move the current position to `index`
    ///
    /// Returns true if `index` is in range and the position moved.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index < self.episodes.len() {
            self.current = Some(index);
            true
        } else {
            false
        }
    }
}
