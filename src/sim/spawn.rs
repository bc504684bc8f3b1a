//! Pickup generation for track segments
//!
//! Runs once per recycled segment (and for odd slots at startup). All
//! randomness comes from the session RNG so a seed replays exactly.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Lane, Pickup, PickupColor, TrackSegment};
use crate::consts::*;

/// Pickup generation knobs. Defaults match the shipped balance; tests
/// override them to force or forbid spawns.
#[derive(Debug, Clone)]
pub struct SpawnConfig {
    /// Probability a segment gets no pickups at all
    pub skip_chance: f64,
    /// Pickup count range for a spawning segment (half-open)
    pub min_count: usize,
    pub max_count: usize,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            skip_chance: PICKUP_SKIP_CHANCE,
            min_count: PICKUP_MIN_COUNT,
            max_count: PICKUP_MAX_COUNT,
        }
    }
}

/// Fill a segment with a fresh run of pickups.
///
/// Most segments stay empty. The rest get `min_count..max_count` pickups
/// stacked `PICKUP_STEP` apart toward the segment's far end, each in a
/// random lane, colors cycling through the palette so neighbors differ.
pub fn populate(segment: &mut TrackSegment, rng: &mut Pcg32, config: &SpawnConfig) {
    if rng.random_bool(config.skip_chance) {
        return;
    }
    let count = rng.random_range(config.min_count..config.max_count);
    for n in 0..count {
        let lane = Lane::ALL[rng.random_range(0..Lane::ALL.len())];
        segment.pickups.push(Pickup {
            lane,
            color: PickupColor::cycle(n),
            offset_z: -(n as f32) * PICKUP_STEP,
            collected: false,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn always_spawn() -> SpawnConfig {
        SpawnConfig {
            skip_chance: 0.0,
            ..SpawnConfig::default()
        }
    }

    #[test]
    fn test_skip_chance_one_spawns_nothing() {
        let mut rng = Pcg32::seed_from_u64(1);
        let config = SpawnConfig {
            skip_chance: 1.0,
            ..SpawnConfig::default()
        };
        for slot in 0..50 {
            let mut segment = TrackSegment::new(slot);
            populate(&mut segment, &mut rng, &config);
            assert!(segment.pickups.is_empty());
        }
    }

    #[test]
    fn test_forced_spawn_count_in_range() {
        let mut rng = Pcg32::seed_from_u64(2);
        let config = always_spawn();
        for slot in 0..100 {
            let mut segment = TrackSegment::new(slot);
            populate(&mut segment, &mut rng, &config);
            let count = segment.pickups.len();
            assert!((PICKUP_MIN_COUNT..PICKUP_MAX_COUNT).contains(&count));
        }
    }

    #[test]
    fn test_pickups_stack_toward_far_end() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut segment = TrackSegment::new(0);
        populate(&mut segment, &mut rng, &always_spawn());
        for (n, pickup) in segment.pickups.iter().enumerate() {
            assert_eq!(pickup.offset_z, -(n as f32) * PICKUP_STEP);
            assert!(!pickup.collected);
        }
    }

    #[test]
    fn test_colors_cycle_through_palette() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut segment = TrackSegment::new(0);
        populate(&mut segment, &mut rng, &always_spawn());
        for (n, pickup) in segment.pickups.iter().enumerate() {
            assert_eq!(pickup.color, PickupColor::cycle(n));
        }
        // The cycle wraps: entries 0 and 3 share a color, 0 and 1 differ
        assert_eq!(PickupColor::cycle(0), PickupColor::cycle(3));
        assert_ne!(PickupColor::cycle(0), PickupColor::cycle(1));
        assert_eq!(PickupColor::cycle(0), PickupColor::Blue);
        assert_eq!(PickupColor::cycle(1), PickupColor::Orange);
        assert_eq!(PickupColor::cycle(2), PickupColor::Purple);
    }

    #[test]
    fn test_same_seed_same_pickups() {
        let config = SpawnConfig::default();
        let mut rng_a = Pcg32::seed_from_u64(99);
        let mut rng_b = Pcg32::seed_from_u64(99);
        for slot in 0..50 {
            let mut seg_a = TrackSegment::new(slot);
            let mut seg_b = TrackSegment::new(slot);
            populate(&mut seg_a, &mut rng_a, &config);
            populate(&mut seg_b, &mut rng_b, &config);
            assert_eq!(seg_a.pickups.len(), seg_b.pickups.len());
            for (a, b) in seg_a.pickups.iter().zip(&seg_b.pickups) {
                assert_eq!(a.lane, b.lane);
                assert_eq!(a.color, b.color);
                assert_eq!(a.offset_z, b.offset_z);
            }
        }
    }

    #[test]
    fn test_default_skip_rate_is_mostly_empty() {
        // Deterministic seed, loose bounds: roughly 70% of segments skip
        let mut rng = Pcg32::seed_from_u64(1234);
        let config = SpawnConfig::default();
        let mut empty = 0;
        for slot in 0..400 {
            let mut segment = TrackSegment::new(slot);
            populate(&mut segment, &mut rng, &config);
            if segment.pickups.is_empty() {
                empty += 1;
            }
        }
        assert!((220..=340).contains(&empty), "empty segments: {empty}");
    }
}
