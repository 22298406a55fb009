//! Player events
//!
//! Two channels cross the controller boundary and they are kept as
//! distinct types: `PlayerEvent` flows outward to the surface after a
//! state transition, while `TransportEvent` flows inward as a fact the
//! native media element reports. A transport fact is authoritative; the
//! controller resyncs to it instead of rejecting it.

use serde::{Deserialize, Serialize};

/// Events emitted by the controller for UI synchronization
///
/// Queued internally and drained by the surface with
/// [`drain_events`](crate::PlaybackController::drain_events).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Play/pause state changed
    StateChanged {
        /// The new playing flag
        is_playing: bool,
    },

    /// The active episode changed
    EpisodeChanged {
        /// ID of the new current episode
        episode_id: String,
        /// ID of the previous episode (if any)
        previous_episode_id: Option<String>,
    },

    /// Queue replaced or cleared
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Loop or shuffle flag changed
    ModeChanged {
        /// Current loop flag
        is_looping: bool,
        /// Current shuffle flag
        is_shuffling: bool,
    },
}

/// Facts reported by the native playback surface
///
/// These originate outside the controller (user taps the media
/// element's own controls, or an episode runs out) and are delivered
/// through [`handle_transport`](crate::PlaybackController::handle_transport).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportEvent {
    /// The media element started playing
    Played,

    /// The media element paused
    Paused,

    /// The current episode played to its end
    Ended,
}
