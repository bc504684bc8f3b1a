//! Game state and core simulation types
//!
//! Everything the per-frame logic reads or mutates lives here. Nothing in
//! this module touches the rendering engine or the DOM.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::spawn::SpawnConfig;
use super::track;
use super::tween::Tween;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Start menu up, character idling, track frozen
    NotStarted,
    /// Track scrolling, collisions live
    Running,
    /// Frozen mid-run
    Paused,
}

/// The three fixed lanes, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    Left,
    Middle,
    Right,
}

/// Direction of a lane-change command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneShift {
    Left,
    Right,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Left, Lane::Middle, Lane::Right];

    /// World-space x of the lane center
    pub fn x(self) -> f32 {
        match self {
            Lane::Left => -LANE_SPACING,
            Lane::Middle => 0.0,
            Lane::Right => LANE_SPACING,
        }
    }

    /// Adjacent lane in the given direction; None at the outer lanes
    pub fn shifted(self, dir: LaneShift) -> Option<Lane> {
        match (self, dir) {
            (Lane::Middle, LaneShift::Left) => Some(Lane::Left),
            (Lane::Right, LaneShift::Left) => Some(Lane::Middle),
            (Lane::Middle, LaneShift::Right) => Some(Lane::Right),
            (Lane::Left, LaneShift::Right) => Some(Lane::Middle),
            _ => None,
        }
    }
}

/// Pickup palette, in cycling order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupColor {
    Blue,
    Orange,
    Purple,
}

pub const PALETTE: [PickupColor; 3] = [PickupColor::Blue, PickupColor::Orange, PickupColor::Purple];

impl PickupColor {
    /// Palette entry for the n-th pickup in a run, wrapping
    pub fn cycle(n: usize) -> Self {
        PALETTE[n % PALETTE.len()]
    }

    /// CSS color understood by the engine's material tinting
    pub fn css(self) -> &'static str {
        match self {
            PickupColor::Blue => "blue",
            PickupColor::Orange => "#ed7811",
            PickupColor::Purple => "purple",
        }
    }
}

/// A collectible owned by one track segment
#[derive(Debug, Clone)]
pub struct Pickup {
    pub lane: Lane,
    pub color: PickupColor,
    /// Offset along the segment's long axis (0, -5, -10, ...)
    pub offset_z: f32,
    /// Set on the first overlap with the player; the scene mirrors
    /// this as visibility
    pub collected: bool,
}

impl Pickup {
    /// World position given the owning segment's z
    pub fn world_pos(&self, segment_z: f32) -> Vec3 {
        Vec3::new(self.lane.x(), PICKUP_HEIGHT, segment_z + self.offset_z)
    }
}

/// One recyclable unit of track geometry
#[derive(Debug, Clone)]
pub struct TrackSegment {
    /// Pool slot, equal to this segment's index in `GameState::segments`
    pub slot: usize,
    pub position: Vec3,
    pub pickups: Vec<Pickup>,
}

impl TrackSegment {
    pub fn new(slot: usize) -> Self {
        Self {
            slot,
            position: Vec3::new(0.0, 0.0, TRACK_START_Z - slot as f32 * SEGMENT_SPACING),
            pickups: Vec::new(),
        }
    }
}

/// Character animation states the core drives (the rig has more clips)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAnim {
    Idle,
    Run,
}

/// The runner
#[derive(Debug, Clone)]
pub struct Player {
    /// Target lane; updated the instant a lane change is accepted
    pub lane: Lane,
    /// Current x, glided toward `lane.x()` by the active tween
    pub x: f32,
    /// In-flight lane glide; a new lane change replaces it
    pub glide: Option<Tween>,
    pub anim: PlayerAnim,
    /// Tint of the last collected pickup
    pub tint: PickupColor,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            lane: Lane::Middle,
            x: 0.0,
            glide: None,
            anim: PlayerAnim::Idle,
            tint: PickupColor::Orange,
        }
    }
}

/// Events the frame logic emits for the scene and UI layers,
/// drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    PauseChanged(bool),
    /// A segment wrapped to the back and regenerated its pickups
    SegmentRecycled { slot: usize },
    /// Pickup `index` on segment `slot` was collected this frame
    PickupCollected {
        slot: usize,
        index: usize,
        color: PickupColor,
    },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Deterministic RNG; the only randomness source in the sim
    pub rng: Pcg32,
    /// Pickup generation knobs
    pub config: SpawnConfig,
    pub phase: GamePhase,
    pub score: u32,
    /// Seconds spent running (started and unpaused)
    pub run_time: f32,
    pub player: Player,
    /// The segment pool, indexed by slot
    pub segments: Vec<TrackSegment>,
    /// Pending events, drained by the world each frame
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh session with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, SpawnConfig::default())
    }

    /// Create a session with custom pickup generation knobs
    pub fn with_config(seed: u64, config: SpawnConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let segments = track::spawn_track(&mut rng, &config);
        Self {
            seed,
            rng,
            config,
            phase: GamePhase::NotStarted,
            score: 0,
            run_time: 0.0,
            player: Player::default(),
            segments,
            events: Vec::new(),
        }
    }

    pub fn started(&self) -> bool {
        self.phase != GamePhase::NotStarted
    }

    pub fn paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    /// Take the events accumulated since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
