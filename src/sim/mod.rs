//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Variable frame delta, clamped by the caller
//! - Stable iteration order (segments by slot)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod track;
pub mod tween;

pub use collision::{Aabb, collect_pickups, pickup_volume, player_volume};
pub use spawn::SpawnConfig;
pub use state::{
    GameEvent, GamePhase, GameState, Lane, LaneShift, PALETTE, Pickup, PickupColor, Player,
    PlayerAnim, TrackSegment,
};
pub use tick::{Intent, apply_intent, tick};
pub use tween::{Easing, Tween, Tween3};
