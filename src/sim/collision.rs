//! Axis-aligned overlap tests between the player and pickups
//!
//! Bounding boxes are rebuilt from fixed footprints every frame rather
//! than read back from the scene, so collision stays deterministic and
//! testable without an engine.

use glam::Vec3;

use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Axis-aligned box stored as center and half-extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec3,
    pub half: Vec3,
}

impl Aabb {
    pub fn new(center: Vec3, half: Vec3) -> Self {
        Self { center, half }
    }

    /// Overlap test, inclusive at the faces
    pub fn intersects(&self, other: &Aabb) -> bool {
        (self.center - other.center)
            .abs()
            .cmple(self.half + other.half)
            .all()
    }
}

/// Bounding volume of the character at its current x, pre-shrunk by the
/// forgiveness factor so grazing passes stay misses
pub fn player_volume(x: f32) -> Aabb {
    Aabb::new(
        Vec3::new(x, PLAYER_CENTER_Y, 0.0),
        PLAYER_HALF_EXTENTS * PLAYER_HITBOX_SCALE,
    )
}

/// Bounding volume of a pickup at the given world position
pub fn pickup_volume(pos: Vec3) -> Aabb {
    Aabb::new(pos, PICKUP_HALF_EXTENTS)
}

/// Sweep every uncollected pickup against the player.
///
/// Each overlap scores once and flips the pickup to collected; several
/// overlaps in one frame all count, and the last one wins the player
/// tint. Collected pickups stay inert until their segment recycles.
pub fn collect_pickups(state: &mut GameState) {
    let player_box = player_volume(state.player.x);
    let GameState {
        segments,
        player,
        score,
        events,
        ..
    } = state;
    for segment in segments.iter_mut() {
        let segment_z = segment.position.z;
        for (index, pickup) in segment.pickups.iter_mut().enumerate() {
            if pickup.collected {
                continue;
            }
            if player_box.intersects(&pickup_volume(pickup.world_pos(segment_z))) {
                pickup.collected = true;
                *score += 1;
                player.tint = pickup.color;
                events.push(GameEvent::PickupCollected {
                    slot: segment.slot,
                    index,
                    color: pickup.color,
                });
            }
        }
    }
}
