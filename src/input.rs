//! Translates raw browser events into game intents
//!
//! Listeners stay dumb: they feed coordinates and key codes in here and
//! forward whatever intent comes out. Phase gating (moves ignored while
//! paused, and so on) lives in the state machine, not in this adapter.

use crate::sim::{Intent, LaneShift};

/// Pairs touch-start and touch-end coordinates into swipe intents.
///
/// A release before the game has started is the start gesture itself,
/// matching the menu's tap-anywhere-to-play flow.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start_x: f32,
    /// Minimum horizontal travel in px before a release counts as a
    /// swipe; zero means any sideways movement steers
    dead_zone: f32,
}

impl SwipeTracker {
    pub fn new(dead_zone: f32) -> Self {
        Self {
            start_x: 0.0,
            dead_zone,
        }
    }

    pub fn touch_start(&mut self, screen_x: f32) {
        self.start_x = screen_x;
    }

    /// `started` is whether the game has left the start menu
    pub fn touch_end(&mut self, screen_x: f32, started: bool) -> Option<Intent> {
        if !started {
            return Some(Intent::Start);
        }
        let travel = screen_x - self.start_x;
        if travel < -self.dead_zone {
            Some(Intent::Move(LaneShift::Left))
        } else if travel > self.dead_zone {
            Some(Intent::Move(LaneShift::Right))
        } else {
            None
        }
    }
}

/// Map a keyboard code to an intent. `paused` is the current pause
/// state, consumed by the space-bar toggle.
pub fn key_intent(code: &str, paused: bool) -> Option<Intent> {
    match code {
        "Space" => Some(Intent::Pause(!paused)),
        "ArrowLeft" => Some(Intent::Move(LaneShift::Left)),
        "ArrowRight" => Some(Intent::Move(LaneShift::Right)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_release_starts_the_game() {
        let mut swipe = SwipeTracker::new(0.0);
        swipe.touch_start(100.0);
        assert_eq!(swipe.touch_end(40.0, false), Some(Intent::Start));
        // Once started, the same gesture steers
        swipe.touch_start(100.0);
        assert_eq!(
            swipe.touch_end(40.0, true),
            Some(Intent::Move(LaneShift::Left))
        );
    }

    #[test]
    fn test_swipe_direction_follows_travel() {
        let mut swipe = SwipeTracker::new(0.0);
        swipe.touch_start(200.0);
        assert_eq!(
            swipe.touch_end(260.0, true),
            Some(Intent::Move(LaneShift::Right))
        );
        swipe.touch_start(200.0);
        assert_eq!(
            swipe.touch_end(140.0, true),
            Some(Intent::Move(LaneShift::Left))
        );
    }

    #[test]
    fn test_stationary_tap_does_not_steer() {
        let mut swipe = SwipeTracker::new(0.0);
        swipe.touch_start(200.0);
        assert_eq!(swipe.touch_end(200.0, true), None);
    }

    #[test]
    fn test_dead_zone_swallows_jitter() {
        let mut swipe = SwipeTracker::new(24.0);
        swipe.touch_start(200.0);
        assert_eq!(swipe.touch_end(210.0, true), None);
        swipe.touch_start(200.0);
        assert_eq!(
            swipe.touch_end(230.0, true),
            Some(Intent::Move(LaneShift::Right))
        );
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            key_intent("ArrowLeft", false),
            Some(Intent::Move(LaneShift::Left))
        );
        assert_eq!(
            key_intent("ArrowRight", false),
            Some(Intent::Move(LaneShift::Right))
        );
        assert_eq!(key_intent("KeyW", false), None);
        assert_eq!(key_intent("Escape", false), None);
    }

    #[test]
    fn test_space_toggles_pause() {
        assert_eq!(key_intent("Space", false), Some(Intent::Pause(true)));
        assert_eq!(key_intent("Space", true), Some(Intent::Pause(false)));
    }
}
