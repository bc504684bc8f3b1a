//! Brain Dash - a three-lane endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (track pool, pickups, collisions, game state)
//! - `world`: Binds the simulation to a rendering-engine scene
//! - `scene`: Abstraction over the engine's scene graph, mixer and clock
//! - `assets`: Asset manifest, rig layout and load errors
//! - `input`: Raw browser events to game intents

pub mod assets;
pub mod highscores;
pub mod input;
pub mod scene;
pub mod settings;
pub mod sim;
pub mod world;

pub use highscores::BestScore;
pub use settings::{Settings, ShadowQuality};
pub use world::GameWorld;

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Number of pooled track segments
    pub const SEGMENT_COUNT: usize = 15;
    /// Gap between consecutive segments along z
    pub const SEGMENT_SPACING: f32 = 25.0;
    /// z position of slot 0 at startup; slot n starts at `10 - n * 25`
    pub const TRACK_START_Z: f32 = 10.0;
    /// Track scroll toward the camera, units per second
    pub const SCROLL_SPEED: f32 = 15.0;
    /// Past this z a segment is behind the camera and gets recycled
    pub const RECYCLE_Z: f32 = 50.0;
    /// Distance a recycled segment jumps back to rejoin the tail
    pub const TRACK_WRAP: f32 = 250.0;

    /// Distance between adjacent lane centers
    pub const LANE_SPACING: f32 = 3.0;
    /// Duration of the lane-change glide (seconds)
    pub const LANE_CHANGE_SECS: f32 = 0.2;

    /// Chance a recycled segment spawns no pickups at all
    pub const PICKUP_SKIP_CHANCE: f64 = 0.7;
    /// Pickup count range for a spawning segment (half-open)
    pub const PICKUP_MIN_COUNT: usize = 2;
    pub const PICKUP_MAX_COUNT: usize = 8;
    /// Gap between stacked pickups along a segment
    pub const PICKUP_STEP: f32 = 5.0;
    /// Height pickups float at
    pub const PICKUP_HEIGHT: f32 = 1.0;
    /// The pickup model is authored small; scene instances are scaled up
    pub const PICKUP_SCALE: f32 = 2.0;
    /// Pickup footprint at `PICKUP_SCALE`, as half-extents
    pub const PICKUP_HALF_EXTENTS: Vec3 = Vec3::new(1.0, 1.0, 1.0);

    /// Character footprint, as half-extents around `PLAYER_CENTER_Y`
    pub const PLAYER_HALF_EXTENTS: Vec3 = Vec3::new(0.5, 1.0, 0.5);
    pub const PLAYER_CENTER_Y: f32 = 1.0;
    /// Collision forgiveness: the player's box is shrunk so near-misses miss
    pub const PLAYER_HITBOX_SCALE: f32 = 0.6;

    /// Camera framing for the start menu and for gameplay
    pub const CAMERA_MENU_POS: Vec3 = Vec3::new(3.0, 6.0, 10.0);
    pub const CAMERA_RUN_POS: Vec3 = Vec3::new(0.0, 6.0, 10.0);
    /// Duration of the menu-to-gameplay camera move (seconds)
    pub const CAMERA_GLIDE_SECS: f32 = 1.0;

    /// Upper bound on a frame delta; tab switches produce huge gaps
    pub const MAX_FRAME_DT: f32 = 0.1;
}
