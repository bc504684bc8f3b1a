//! Game settings and preferences
//!
//! Persisted in LocalStorage, separately from the best score. Nothing
//! here feeds the simulation; these are presentation and input knobs.

use serde::{Deserialize, Serialize};

/// Shadow quality levels for the engine's shadow map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ShadowQuality {
    Off,
    Medium,
    #[default]
    High,
}

impl ShadowQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShadowQuality::Off => "Off",
            ShadowQuality::Medium => "Medium",
            ShadowQuality::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "off" => Some(ShadowQuality::Off),
            "medium" | "med" => Some(ShadowQuality::Medium),
            "high" => Some(ShadowQuality::High),
            _ => None,
        }
    }

    /// Shadow map edge length in texels; zero disables shadows
    pub fn map_size(&self) -> u32 {
        match self {
            ShadowQuality::Off => 0,
            ShadowQuality::Medium => 2048,
            ShadowQuality::High => 6144,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directional-light shadow quality
    pub shadows: ShadowQuality,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Input ===
    /// Horizontal travel in px before a touch release counts as a
    /// swipe; zero steers on any sideways movement
    pub swipe_dead_zone: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shadows: ShadowQuality::High,
            show_fps: false,
            swipe_dead_zone: 0.0,
        }
    }
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "brain_dash_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip_through_json() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.shadows, settings.shadows);
        assert_eq!(back.show_fps, settings.show_fps);
        assert_eq!(back.swipe_dead_zone, settings.swipe_dead_zone);
    }

    #[test]
    fn test_shadow_quality_parse() {
        assert_eq!(ShadowQuality::from_str("off"), Some(ShadowQuality::Off));
        assert_eq!(ShadowQuality::from_str("MED"), Some(ShadowQuality::Medium));
        assert_eq!(ShadowQuality::from_str("High"), Some(ShadowQuality::High));
        assert_eq!(ShadowQuality::from_str("ultra"), None);
    }

    #[test]
    fn test_map_size_scales_with_quality() {
        assert_eq!(ShadowQuality::Off.map_size(), 0);
        assert!(ShadowQuality::Medium.map_size() < ShadowQuality::High.map_size());
    }
}
