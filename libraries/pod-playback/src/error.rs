//! Error types for queue management

use thiserror::Error;

/// Playback controller errors
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Queue is empty
    #[error("Queue is empty")]
    EmptyQueue,

    /// Index out of bounds
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlayerError>;
