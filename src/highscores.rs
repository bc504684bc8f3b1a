//! Best-score persistence
//!
//! A run never ends on its own, so one best entry is enough. It updates
//! live whenever the current score passes it and survives reloads in
//! LocalStorage.

use serde::{Deserialize, Serialize};

/// The highest score seen on this browser
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BestScore {
    pub score: u32,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

impl BestScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "brain_dash_best";

    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current score; returns true when it sets a new best
    pub fn observe(&mut self, score: u32, timestamp: f64) -> bool {
        if score <= self.score {
            return false;
        }
        self.score = score;
        self.timestamp = timestamp;
        true
    }

    /// Load the best score from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(best) = serde_json::from_str::<BestScore>(&json) {
                    log::info!("Loaded best score: {}", best.score);
                    return best;
                }
            }
        }

        log::info!("No best score found, starting fresh");
        Self::new()
    }

    /// Save the best score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Best score saved ({})", self.score);
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
