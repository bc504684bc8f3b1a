//! Asset manifest, character rig layout and load errors
//!
//! The engine fetches and parses the GLB files; this module names them,
//! pins the rig's clip order and types the ways startup can fail.

use thiserror::Error;

use crate::scene::ModelHandle;

/// The models the game cannot run without
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Character,
    Pickup,
    TrackSegment,
}

impl AssetKind {
    pub const ALL: [AssetKind; 3] = [AssetKind::Character, AssetKind::Pickup, AssetKind::TrackSegment];

    /// Path handed to the engine's GLTF loader
    pub fn path(self) -> &'static str {
        match self {
            AssetKind::Character => "./assets/Stickman.glb",
            AssetKind::Pickup => "./assets/Brain.glb",
            AssetKind::TrackSegment => "./assets/TrackFloor.glb",
        }
    }
}

/// Clip indices inside the character rig, in the rig's authored order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationId {
    Win = 0,
    SmashHead = 1,
    Fall = 2,
    Idle = 3,
    Run = 4,
}

impl AnimationId {
    /// Number of clips a usable rig must carry
    pub const CLIP_COUNT: usize = 5;

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Why startup could not produce a playable scene
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load {path}: {reason}")]
    Load { path: &'static str, reason: String },
    #[error("character rig has {found} animation clips, need {}", AnimationId::CLIP_COUNT)]
    MissingClips { found: usize },
}

/// Engine handles for the three loaded templates
#[derive(Debug, Clone, Copy)]
pub struct LoadedAssets {
    pub character: ModelHandle,
    pub pickup: ModelHandle,
    pub track_segment: ModelHandle,
}

impl LoadedAssets {
    /// Placeholder handles for headless runs and tests, where no engine
    /// registry exists
    pub fn headless() -> Self {
        Self {
            character: ModelHandle(0),
            pickup: ModelHandle(1),
            track_segment: ModelHandle(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_paths_are_distinct_glbs() {
        for kind in AssetKind::ALL {
            assert!(kind.path().ends_with(".glb"));
        }
        assert_ne!(AssetKind::Character.path(), AssetKind::Pickup.path());
        assert_ne!(AssetKind::Pickup.path(), AssetKind::TrackSegment.path());
    }

    #[test]
    fn test_rig_clip_order() {
        assert_eq!(AnimationId::Idle.index(), 3);
        assert_eq!(AnimationId::Run.index(), 4);
        assert!(AnimationId::Run.index() < AnimationId::CLIP_COUNT);
    }

    #[test]
    fn test_asset_error_messages_name_the_file() {
        let err = AssetError::Load {
            path: AssetKind::Character.path(),
            reason: "404".into(),
        };
        let text = err.to_string();
        assert!(text.contains("Stickman.glb"));
        assert!(text.contains("404"));

        let err = AssetError::MissingClips { found: 2 };
        assert!(err.to_string().contains('2'));
    }
}
