//! Pod Player - Playback Queue Management
//!
//! Platform-agnostic playback queue management for Pod Player.
//!
//! This crate provides:
//! - The episode queue (ordered list + current position)
//! - Play/pause, loop, and shuffle mode flags
//! - Sequential and shuffled "next", sequential "previous"
//! - End-of-episode policy (advance or fully reset)
//! - Event-based UI synchronization
//!
//! # Architecture
//!
//! `pod-playback` decides what is playing; it never plays audio. The
//! actual playback surface (a native media element plus its UI) is an
//! external collaborator: it reads controller state to drive the
//! element, and reports transport facts (play, pause, ended) back in.
//! Rendering, metadata fetching, and time formatting all live outside
//! this crate.
//!
//! # Example: Basic Queue Control
//!
//! ```rust
//! use pod_playback::{Episode, PlaybackController, PlayerConfig};
//! use std::time::Duration;
//!
//! let mut controller = PlaybackController::new(PlayerConfig::default());
//!
//! let episodes = vec![
//!     Episode {
//!         id: "ep1".to_string(),
//!         title: "First Episode".to_string(),
//!         thumbnail: "/thumbnails/ep1.jpg".to_string(),
//!         members: "Ana, Bruno".to_string(),
//!         url: "https://cdn.example.com/ep1.mp3".to_string(),
//!         duration: Duration::from_secs(2712),
//!     },
//!     Episode {
//!         id: "ep2".to_string(),
//!         title: "Second Episode".to_string(),
//!         thumbnail: "/thumbnails/ep2.jpg".to_string(),
//!         members: "Ana, Carla".to_string(),
//!         url: "https://cdn.example.com/ep2.mp3".to_string(),
//!         duration: Duration::from_secs(1984),
//!     },
//! ];
//!
//! controller.play_list(episodes, 0).unwrap();
//! assert!(controller.is_playing());
//!
//! if controller.has_next() {
//!     controller.play_next();
//! }
//! assert_eq!(controller.current_index(), Some(1));
//! ```
//!
//! # Example: Transport Facts
//!
//! ```rust
//! use pod_playback::{Episode, PlaybackController, TransportEvent};
//! use std::time::Duration;
//!
//! let mut controller = PlaybackController::default();
//! controller.play(Episode {
//!     id: "ep1".to_string(),
//!     title: "Only Episode".to_string(),
//!     thumbnail: "/thumbnails/ep1.jpg".to_string(),
//!     members: "Ana".to_string(),
//!     url: "https://cdn.example.com/ep1.mp3".to_string(),
//!     duration: Duration::from_secs(900),
//! });
//!
//! // The native element ran out on the last episode: full reset.
//! controller.handle_transport(TransportEvent::Ended);
//! assert!(controller.episodes().is_empty());
//! assert!(!controller.is_playing());
//! ```

mod controller;
mod error;
mod events;
mod queue;
mod shuffle;
pub mod types;
pub mod wasm;

// Public exports
pub use controller::PlaybackController;
pub use error::{PlayerError, Result};
pub use events::{PlayerEvent, TransportEvent};
pub use types::{Episode, PlayerConfig, PlayerSnapshot};
