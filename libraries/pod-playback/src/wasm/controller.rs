//! WASM-compatible PlaybackController wrapper

use super::types::WasmEpisode;
use crate::{Episode, PlaybackController, PlayerConfig, PlayerEvent, TransportEvent};
use js_sys::Function;
use wasm_bindgen::prelude::*;

/// WASM-compatible playback controller
///
/// This wraps the core PlaybackController with a JavaScript-friendly
/// API. Commands queue events internally; after each command the
/// wrapper relays them to the registered callbacks so the page can
/// update the media element and the UI.
#[wasm_bindgen]
pub struct WasmPlaybackController {
    inner: PlaybackController,

    // Event callbacks
    on_state_change: Option<Function>,
    on_episode_change: Option<Function>,
    on_queue_change: Option<Function>,
    on_mode_change: Option<Function>,
}

#[wasm_bindgen]
impl WasmPlaybackController {
    /// Create a new playback controller
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        // Enable panic hooks for better error messages in console
        console_error_panic_hook::set_once();

        Self {
            inner: PlaybackController::new(PlayerConfig::default()),
            on_state_change: None,
            on_episode_change: None,
            on_queue_change: None,
            on_mode_change: None,
        }
    }

    // ===== Playback Commands =====

    /// Play a single episode outside any list context
    pub fn play(&mut self, episode: WasmEpisode) {
        self.inner.play(episode.into());
        self.relay_events();
    }

    /// Play an episode list starting at the given index
    #[wasm_bindgen(js_name = playList)]
    pub fn play_list(&mut self, episodes: JsValue, index: usize) -> Result<(), JsValue> {
        let wasm_episodes: Vec<WasmEpisode> = serde_wasm_bindgen::from_value(episodes)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse episodes: {}", e)))?;

        let episodes: Vec<Episode> = wasm_episodes.into_iter().map(|e| e.into()).collect();

        self.inner
            .play_list(episodes, index)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.relay_events();
        Ok(())
    }

    /// Flip the playing flag
    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&mut self) {
        self.inner.toggle_play();
        self.relay_events();
    }

    /// Flip the loop flag
    #[wasm_bindgen(js_name = toggleLoop)]
    pub fn toggle_loop(&mut self) {
        self.inner.toggle_loop();
        self.relay_events();
    }

    /// Flip the shuffle flag
    #[wasm_bindgen(js_name = toggleShuffle)]
    pub fn toggle_shuffle(&mut self) {
        self.inner.toggle_shuffle();
        self.relay_events();
    }

    /// Set the playing flag from a surface report
    #[wasm_bindgen(js_name = setPlayingState)]
    pub fn set_playing_state(&mut self, value: bool) {
        self.inner.set_playing_state(value);
        self.relay_events();
    }

    /// Move to the next episode
    #[wasm_bindgen(js_name = playNext)]
    pub fn play_next(&mut self) {
        self.inner.play_next();
        self.relay_events();
    }

    /// Move to the previous episode
    #[wasm_bindgen(js_name = playPrevious)]
    pub fn play_previous(&mut self) {
        self.inner.play_previous();
        self.relay_events();
    }

    /// Reset to the empty state
    pub fn clear(&mut self) {
        self.inner.clear();
        self.relay_events();
    }

    /// Report that the media element played to the end of the episode
    #[wasm_bindgen(js_name = reportEnded)]
    pub fn report_ended(&mut self) {
        self.inner.handle_transport(TransportEvent::Ended);
        self.relay_events();
    }

    // ===== State Queries =====

    /// Check if there is a next episode
    #[wasm_bindgen(js_name = hasNext)]
    pub fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    /// Check if there is a previous episode
    #[wasm_bindgen(js_name = hasPrevious)]
    pub fn has_previous(&self) -> bool {
        self.inner.has_previous()
    }

    /// Whether playback is active
    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.inner.is_playing()
    }

    /// Whether the loop flag is set
    #[wasm_bindgen(js_name = isLooping)]
    pub fn is_looping(&self) -> bool {
        self.inner.is_looping()
    }

    /// Whether the shuffle flag is set
    #[wasm_bindgen(js_name = isShuffling)]
    pub fn is_shuffling(&self) -> bool {
        self.inner.is_shuffling()
    }

    /// Position of the active episode, undefined when the queue is empty
    #[wasm_bindgen(js_name = currentIndex)]
    pub fn current_index(&self) -> Option<usize> {
        self.inner.current_index()
    }

    /// Currently active episode, null when the queue is empty
    #[wasm_bindgen(js_name = currentEpisode)]
    pub fn current_episode(&self) -> JsValue {
        match self.inner.current_episode() {
            Some(episode) => serde_wasm_bindgen::to_value(&WasmEpisode::from(episode))
                .unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    /// All queued episodes as a JS array
    #[wasm_bindgen(js_name = getQueue)]
    pub fn get_queue(&self) -> JsValue {
        let episodes: Vec<WasmEpisode> = self
            .inner
            .episodes()
            .iter()
            .map(WasmEpisode::from)
            .collect();

        serde_wasm_bindgen::to_value(&episodes).unwrap_or(JsValue::NULL)
    }

    /// Queue length
    #[wasm_bindgen(js_name = queueLength)]
    pub fn queue_length(&self) -> usize {
        self.inner.queue_len()
    }

    // ===== Event Listeners =====

    /// Register play/pause state change callback
    #[wasm_bindgen(js_name = onStateChange)]
    pub fn on_state_change(&mut self, callback: Function) {
        self.on_state_change = Some(callback);
    }

    /// Register episode change callback
    #[wasm_bindgen(js_name = onEpisodeChange)]
    pub fn on_episode_change(&mut self, callback: Function) {
        self.on_episode_change = Some(callback);
    }

    /// Register queue change callback
    #[wasm_bindgen(js_name = onQueueChange)]
    pub fn on_queue_change(&mut self, callback: Function) {
        self.on_queue_change = Some(callback);
    }

    /// Register loop/shuffle mode change callback
    #[wasm_bindgen(js_name = onModeChange)]
    pub fn on_mode_change(&mut self, callback: Function) {
        self.on_mode_change = Some(callback);
    }

    // ===== Internal Event Relay =====

    fn relay_events(&mut self) {
        for event in self.inner.drain_events() {
            match event {
                PlayerEvent::StateChanged { is_playing } => {
                    if let Some(ref cb) = self.on_state_change {
                        cb.call1(&JsValue::NULL, &JsValue::from_bool(is_playing)).ok();
                    }
                }
                PlayerEvent::EpisodeChanged { .. } => {
                    if let Some(ref cb) = self.on_episode_change {
                        cb.call1(&JsValue::NULL, &self.current_episode()).ok();
                    }
                }
                PlayerEvent::QueueChanged { length } => {
                    if let Some(ref cb) = self.on_queue_change {
                        cb.call1(&JsValue::NULL, &JsValue::from_f64(length as f64)).ok();
                    }
                }
                PlayerEvent::ModeChanged {
                    is_looping,
                    is_shuffling,
                } => {
                    if let Some(ref cb) = self.on_mode_change {
                        cb.call2(
                            &JsValue::NULL,
                            &JsValue::from_bool(is_looping),
                            &JsValue::from_bool(is_shuffling),
                        )
                        .ok();
                    }
                }
            }
        }
    }
}

impl Default for WasmPlaybackController {
    fn default() -> Self {
        Self::new()
    }
}
