//! WASM-compatible type definitions

use crate::Episode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use wasm_bindgen::prelude::*;

/// WASM-compatible episode record
///
/// This is a simplified version of Episode that uses JS-compatible
/// types (f64 seconds instead of Duration).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[wasm_bindgen]
pub struct WasmEpisode {
    id: String,
    title: String,
    thumbnail: String,
    members: String,
    url: String,
    duration_secs: f64,
}

#[wasm_bindgen]
impl WasmEpisode {
    /// Create a new episode record
    #[wasm_bindgen(constructor)]
    pub fn new(
        id: String,
        title: String,
        thumbnail: String,
        members: String,
        url: String,
        duration_secs: f64,
    ) -> Self {
        Self {
            id,
            title,
            thumbnail,
            members,
            url,
            duration_secs,
        }
    }

    // Getters for all fields
    #[wasm_bindgen(getter)]
    pub fn id(&self) -> String {
        self.id.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.title.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn thumbnail(&self) -> String {
        self.thumbnail.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn members(&self) -> String {
        self.members.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn url(&self) -> String {
        self.url.clone()
    }

    #[wasm_bindgen(getter, js_name = durationSecs)]
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }
}

impl From<WasmEpisode> for Episode {
    fn from(episode: WasmEpisode) -> Self {
        Episode {
            id: episode.id,
            title: episode.title,
            thumbnail: episode.thumbnail,
            members: episode.members,
            url: episode.url,
            duration: Duration::from_secs_f64(episode.duration_secs.max(0.0)),
        }
    }
}

impl From<&Episode> for WasmEpisode {
    fn from(episode: &Episode) -> Self {
        WasmEpisode {
            id: episode.id.clone(),
            title: episode.title.clone(),
            thumbnail: episode.thumbnail.clone(),
            members: episode.members.clone(),
            url: episode.url.clone(),
            duration_secs: episode.duration.as_secs_f64(),
        }
    }
}
