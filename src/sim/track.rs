//! Track pool: a fixed ring of segments forming an endless corridor
//!
//! Segments scroll toward the camera; any segment that passes behind it
//! jumps back by the wrap distance and regenerates its pickups. No
//! geometry is ever allocated after startup.

use rand_pcg::Pcg32;

use super::spawn::{self, SpawnConfig};
use super::state::{GameEvent, GameState, TrackSegment};
use crate::consts::*;

/// Build the segment pool. Slot n starts at `TRACK_START_Z - n * SEGMENT_SPACING`;
/// odd slots get an initial pickup pass so the corridor is not empty on
/// the first run-through.
pub fn spawn_track(rng: &mut Pcg32, config: &SpawnConfig) -> Vec<TrackSegment> {
    (0..SEGMENT_COUNT)
        .map(|slot| {
            let mut segment = TrackSegment::new(slot);
            if slot % 2 == 1 {
                spawn::populate(&mut segment, rng, config);
            }
            segment
        })
        .collect()
}

/// Advance every segment toward the camera and recycle the ones that
/// pass behind it. At most one wrap per segment per frame; the frame
/// delta is clamped upstream so a stall cannot teleport the track.
pub fn advance(state: &mut GameState, dt: f32) {
    let GameState {
        segments,
        rng,
        config,
        events,
        ..
    } = state;
    for segment in segments.iter_mut() {
        segment.position.z += SCROLL_SPEED * dt;
        if segment.position.z > RECYCLE_Z {
            segment.position.z -= TRACK_WRAP;
            segment.pickups.clear();
            spawn::populate(segment, rng, config);
            events.push(GameEvent::SegmentRecycled { slot: segment.slot });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Lane, Pickup, PickupColor};
    use proptest::prelude::*;

    fn test_state(seed: u64) -> GameState {
        GameState::new(seed)
    }

    #[test]
    fn test_spawn_track_layout() {
        let state = test_state(7);
        assert_eq!(state.segments.len(), SEGMENT_COUNT);
        for (n, segment) in state.segments.iter().enumerate() {
            assert_eq!(segment.slot, n);
            assert_eq!(segment.position.x, 0.0);
            assert_eq!(segment.position.y, 0.0);
            assert_eq!(
                segment.position.z,
                TRACK_START_Z - n as f32 * SEGMENT_SPACING
            );
        }
    }

    #[test]
    fn test_initial_pickups_only_on_odd_slots() {
        // Even slots are always empty at startup; odd slots roll the dice,
        // so force spawning to make them all non-empty.
        let config = SpawnConfig {
            skip_chance: 0.0,
            ..SpawnConfig::default()
        };
        let state = GameState::with_config(7, config);
        for segment in &state.segments {
            if segment.slot % 2 == 0 {
                assert!(segment.pickups.is_empty(), "slot {}", segment.slot);
            } else {
                assert!(!segment.pickups.is_empty(), "slot {}", segment.slot);
            }
        }
    }

    #[test]
    fn test_advance_scrolls_all_segments() {
        let mut state = test_state(7);
        let before: Vec<f32> = state.segments.iter().map(|s| s.position.z).collect();
        advance(&mut state, 0.1);
        for (segment, z) in state.segments.iter().zip(before) {
            assert_eq!(segment.position.z, z + SCROLL_SPEED * 0.1);
        }
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_recycle_wraps_by_fixed_distance() {
        let mut state = test_state(7);
        // Crossing the threshold mid-frame: 49.5 + 15 * 0.1 = 51, past 50,
        // so the segment lands at 51 - 250 = -199.
        state.segments[0].position.z = 49.5;
        advance(&mut state, 0.1);
        assert_eq!(state.segments[0].position.z, -199.0);
        assert_eq!(
            state.events,
            vec![GameEvent::SegmentRecycled { slot: 0 }]
        );
    }

    #[test]
    fn test_recycle_regenerates_pickups() {
        let config = SpawnConfig {
            skip_chance: 0.0,
            ..SpawnConfig::default()
        };
        let mut state = GameState::with_config(7, config);
        // Plant a collected pickup on the segment about to wrap; it must
        // not survive the recycle.
        state.segments[2].pickups = vec![Pickup {
            lane: Lane::Middle,
            color: PickupColor::Blue,
            offset_z: 0.0,
            collected: true,
        }];
        state.segments[2].position.z = RECYCLE_Z + 0.5;
        advance(&mut state, 0.01);
        let segment = &state.segments[2];
        assert!(!segment.pickups.is_empty());
        assert!(segment.pickups.iter().all(|p| !p.collected));
    }

    #[test]
    fn test_segment_at_threshold_does_not_wrap() {
        let mut state = test_state(7);
        // Landing exactly on the threshold is not past it
        state.segments[0].position.z = RECYCLE_Z - SCROLL_SPEED * 0.1;
        advance(&mut state, 0.1);
        assert_eq!(state.segments[0].position.z, RECYCLE_Z);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_long_scroll_keeps_pool_size() {
        let mut state = test_state(42);
        // Scroll for a simulated minute at 60 Hz
        for _ in 0..3600 {
            state.events.clear();
            advance(&mut state, 1.0 / 60.0);
        }
        assert_eq!(state.segments.len(), SEGMENT_COUNT);
        for segment in &state.segments {
            assert!(segment.position.z <= RECYCLE_Z);
            assert!(segment.position.z > RECYCLE_Z - TRACK_WRAP - SEGMENT_SPACING);
        }
    }

    proptest! {
        /// Segments all move in lockstep and wrap by a fixed distance, so
        /// pairwise gaps are preserved modulo the wrap length.
        #[test]
        fn test_spacing_preserved_modulo_wrap(
            seed in 0u64..256,
            deltas in prop::collection::vec(0.0f32..MAX_FRAME_DT, 1..200),
        ) {
            let mut state = GameState::new(seed);
            for dt in deltas {
                state.events.clear();
                advance(&mut state, dt);
            }
            prop_assert_eq!(state.segments.len(), SEGMENT_COUNT);
            let z0 = state.segments[0].position.z;
            for segment in &state.segments {
                let gap = (z0 - segment.position.z).rem_euclid(TRACK_WRAP);
                let expected = (segment.slot as f32 * SEGMENT_SPACING).rem_euclid(TRACK_WRAP);
                // Compare on the ring so 249.99 and 0.01 count as close
                let diff = (gap - expected).abs();
                let circular = diff.min(TRACK_WRAP - diff);
                prop_assert!(
                    circular < 1e-2,
                    "slot {} gap {} expected {}",
                    segment.slot,
                    gap,
                    expected
                );
            }
        }
    }
}
