//! Core types for queue management

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Episode information for queue management
///
/// Contains all metadata needed for playback and display.
/// Records arrive pre-shaped from the catalog layer; the controller
/// never fetches or formats anything itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Unique episode identifier from the catalog
    pub id: String,

    /// Episode title
    pub title: String,

    /// Thumbnail image reference
    pub thumbnail: String,

    /// Participants label (hosts and guests)
    pub members: String,

    /// Playback URL for the media element
    pub url: String,

    /// Episode duration
    pub duration: Duration,
}

/// Configuration for the playback controller
///
/// Initial values for the mode flags. A fresh session starts with both
/// off; a host application restoring user preferences can start from
/// a saved configuration instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial loop flag (default: false)
    pub looping: bool,

    /// Initial shuffle flag (default: false)
    pub shuffling: bool,
}

/// Immutable snapshot of the full controller state
///
/// Handed to readers so that no UI component can hold a divergent
/// mutable copy of what should be playing. The controller remains the
/// single source of truth; snapshots are plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Episodes currently eligible for navigation
    pub episodes: Vec<Episode>,

    /// Position of the active episode, None when the queue is empty
    pub current_index: Option<usize>,

    /// Whether playback is active
    pub is_playing: bool,

    /// Whether the current episode loops on the media element
    pub is_looping: bool,

    /// Whether "next" picks a random queue position
    pub is_shuffling: bool,
}

impl PlayerSnapshot {
    /// Episode at the snapshot's current index, if any
    pub fn current_episode(&self) -> Option<&Episode> {
        self.current_index.and_then(|i| self.episodes.get(i))
    }
}
