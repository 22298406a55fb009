//! WASM bindings for pod-playback
//!
//! This module provides WebAssembly bindings for the PlaybackController,
//! allowing the core queue logic to drive a player in web browsers.

#[cfg(feature = "wasm")]
pub mod types;

#[cfg(feature = "wasm")]
pub mod controller;

#[cfg(feature = "wasm")]
pub use controller::WasmPlaybackController;

#[cfg(feature = "wasm")]
pub use types::WasmEpisode;
