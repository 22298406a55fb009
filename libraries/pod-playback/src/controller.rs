//! Playback controller - core orchestration
//!
//! Single authority for "what is the current episode and is it
//! playing". UI components issue commands; the playback surface reads
//! snapshots, drives the native media element, and reports transport
//! facts back in. Nothing outside this type mutates playback state.

use tracing::debug;

use crate::{
    error::Result,
    events::{PlayerEvent, TransportEvent},
    queue::EpisodeQueue,
    shuffle::pick_position,
    types::{Episode, PlayerConfig, PlayerSnapshot},
};

/// Central playback queue management
///
/// Holds the episode queue and the three mode flags (playing, looping,
/// shuffling), and exposes the command surface that manipulates them.
/// Commands are synchronous and total: where an action is not
/// applicable they do nothing instead of failing. The one precondition
/// is `play_list`, which rejects an out-of-range start index.
pub struct PlaybackController {
    // Queue
    queue: EpisodeQueue,

    // Mode flags
    playing: bool,
    looping: bool,
    shuffling: bool,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl PlaybackController {
    /// Create new playback controller
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            queue: EpisodeQueue::new(),
            playing: false,
            looping: config.looping,
            shuffling: config.shuffling,
            pending_events: Vec::new(),
        }
    }

    // ===== Playback Commands =====

    /// Play a single episode outside any list context
    ///
    /// The queue becomes that one episode and playback starts.
    pub fn play(&mut self, episode: Episode) {
        let previous_id = self.current_episode().map(|e| e.id.clone());
        let episode_id = episode.id.clone();

        debug!(episode_id = %episode_id, "play single episode");

        self.queue.replace_single(episode);
        self.emit_episode_changed(episode_id, previous_id);
        self.emit_queue_changed();
        self.set_playing(true);
    }

    /// Play an episode list starting at `index`
    ///
    /// Replaces the whole queue. The index must address an episode in
    /// the given list; an out-of-range index (for instance from a
    /// caller's stale view of the catalog) is rejected as a typed error
    /// and the previous state is left untouched.
    pub fn play_list(&mut self, episodes: Vec<Episode>, index: usize) -> Result<()> {
        let previous_id = self.current_episode().map(|e| e.id.clone());

        self.queue.replace(episodes, index)?;

        debug!(index, length = self.queue.len(), "play episode list");

        if let Some(episode) = self.queue.current() {
            let episode_id = episode.id.clone();
            self.emit_episode_changed(episode_id, previous_id);
        }
        self.emit_queue_changed();
        self.set_playing(true);
        Ok(())
    }

    /// Flip the playing flag
    pub fn toggle_play(&mut self) {
        self.set_playing(!self.playing);
    }

    /// Flip the loop flag
    pub fn toggle_loop(&mut self) {
        self.looping = !self.looping;
        self.emit_mode_changed();
    }

    /// Flip the shuffle flag
    pub fn toggle_shuffle(&mut self) {
        self.shuffling = !self.shuffling;
        self.emit_mode_changed();
    }

    /// Set the playing flag to an explicit value
    ///
    /// Used when the surface reports a play/pause that did not
    /// originate from a controller command (native media controls,
    /// hardware keys). The reported value wins.
    pub fn set_playing_state(&mut self, value: bool) {
        self.set_playing(value);
    }

    /// Move to the next episode
    ///
    /// With shuffle on and a non-empty queue, picks a random position
    /// (the current one included, so repeats are possible). Otherwise
    /// advances sequentially. At the end of a non-shuffled queue this
    /// is a no-op; callers gate on [`has_next`](Self::has_next).
    pub fn play_next(&mut self) {
        let previous_id = self.current_episode().map(|e| e.id.clone());

        let moved = if self.shuffling && !self.queue.is_empty() {
            match pick_position(self.queue.len()) {
                Some(target) => self.queue.jump_to(target),
                None => false,
            }
        } else {
            self.queue.advance()
        };

        if moved {
            if let Some(episode) = self.queue.current() {
                let episode_id = episode.id.clone();
                debug!(episode_id = %episode_id, shuffling = self.shuffling, "next episode");
                self.emit_episode_changed(episode_id, previous_id);
            }
        }
    }

    /// Move to the previous episode
    ///
    /// Always walks the queue sequentially backward; shuffle does not
    /// affect "previous". At the start of the queue this is a no-op.
    pub fn play_previous(&mut self) {
        let previous_id = self.current_episode().map(|e| e.id.clone());

        if self.queue.retreat() {
            if let Some(episode) = self.queue.current() {
                let episode_id = episode.id.clone();
                debug!(episode_id = %episode_id, "previous episode");
                self.emit_episode_changed(episode_id, previous_id);
            }
        }
    }

    /// Reset to the empty state
    ///
    /// Empties the queue and returns every mode flag to its default.
    pub fn clear(&mut self) {
        debug!("clear player state");

        self.queue.clear();
        self.emit_queue_changed();
        self.set_playing(false);

        if self.looping || self.shuffling {
            self.looping = false;
            self.shuffling = false;
            self.emit_mode_changed();
        }
    }

    // ===== Transport Events =====

    /// Apply a fact reported by the playback surface
    ///
    /// Play/pause reports resync the playing flag. An `Ended` report
    /// triggers the end-of-episode policy: move on when a next episode
    /// is available, otherwise reset the player completely rather than
    /// pausing on the last episode. (A looping episode is replayed by
    /// the media element itself and never reports `Ended`.)
    pub fn handle_transport(&mut self, event: TransportEvent) {
        match event {
            TransportEvent::Played => self.set_playing(true),
            TransportEvent::Paused => self.set_playing(false),
            TransportEvent::Ended => {
                if self.has_next() {
                    self.play_next();
                } else {
                    self.clear();
                }
            }
        }
    }

    // ===== Derived Queries =====

    /// Check if a "next" target exists
    ///
    /// With shuffle on, any non-empty queue has a next episode (a
    /// random pick is always available). Otherwise true only before
    /// the last position.
    pub fn has_next(&self) -> bool {
        if self.shuffling {
            !self.queue.is_empty()
        } else {
            self.queue.has_next()
        }
    }

    /// Check if a "previous" target exists
    pub fn has_previous(&self) -> bool {
        self.queue.has_previous()
    }

    // ===== State Queries =====

    /// Currently active episode
    pub fn current_episode(&self) -> Option<&Episode> {
        self.queue.current()
    }

    /// Position of the active episode, None when the queue is empty
    pub fn current_index(&self) -> Option<usize> {
        self.queue.current_index()
    }

    /// All queued episodes in order
    pub fn episodes(&self) -> &[Episode] {
        self.queue.episodes()
    }

    /// Queue length
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Whether playback is active
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the loop flag is set
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Whether the shuffle flag is set
    pub fn is_shuffling(&self) -> bool {
        self.shuffling
    }

    /// Immutable copy of the full controller state
    ///
    /// Readers get plain data; all writes go through the command
    /// surface.
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            episodes: self.queue.episodes().to_vec(),
            current_index: self.queue.current_index(),
            is_playing: self.playing,
            is_looping: self.looping,
            is_shuffling: self.shuffling,
        }
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns the events emitted since the last drain. The surface
    /// calls this after dispatching commands to synchronize the media
    /// element and the UI.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    /// Set the playing flag, emitting only on an actual change
    fn set_playing(&mut self, value: bool) {
        if self.playing != value {
            self.playing = value;
            self.emit_state_changed();
        }
    }

    fn emit_state_changed(&mut self) {
        self.pending_events.push(PlayerEvent::StateChanged {
            is_playing: self.playing,
        });
    }

    fn emit_episode_changed(&mut self, episode_id: String, previous_episode_id: Option<String>) {
        self.pending_events.push(PlayerEvent::EpisodeChanged {
            episode_id,
            previous_episode_id,
        });
    }

    fn emit_queue_changed(&mut self) {
        self.pending_events.push(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    fn emit_mode_changed(&mut self) {
        self.pending_events.push(PlayerEvent::ModeChanged {
            is_looping: self.looping,
            is_shuffling: self.shuffling,
        });
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}
