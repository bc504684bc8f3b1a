//! Intent intake and the per-frame advance
//!
//! `apply_intent` is the only door user input enters through, and `tick`
//! is the only place time passes. Both are deterministic for a given
//! seed and input sequence.

use super::collision;
use super::state::{GameEvent, GamePhase, GameState, LaneShift, PlayerAnim};
use super::track;
use super::tween::{Easing, Tween};
use crate::consts::*;

/// The closed set of commands the presentation layer may issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// First user gesture: leave the start menu and begin running
    Start,
    /// Pause (true) or resume (false); a no-op before the first start
    Pause(bool),
    /// Dodge one lane in the given direction
    Move(LaneShift),
}

/// Apply one command to the state machine. Commands that make no sense
/// in the current phase are dropped here, so callers never pre-filter.
pub fn apply_intent(state: &mut GameState, intent: Intent) {
    match intent {
        Intent::Start => start(state),
        Intent::Pause(pause) => set_paused(state, pause),
        Intent::Move(dir) => move_player(state, dir),
    }
}

fn start(state: &mut GameState) {
    if state.phase != GamePhase::NotStarted {
        return;
    }
    state.phase = GamePhase::Running;
    state.player.anim = PlayerAnim::Run;
    state.events.push(GameEvent::Started);
    log::info!("run started (seed {})", state.seed);
}

fn set_paused(state: &mut GameState, pause: bool) {
    let next = match (state.phase, pause) {
        (GamePhase::Running, true) => GamePhase::Paused,
        (GamePhase::Paused, false) => GamePhase::Running,
        _ => return,
    };
    state.phase = next;
    state.events.push(GameEvent::PauseChanged(pause));
    log::info!("pause -> {pause}");
}

fn move_player(state: &mut GameState, dir: LaneShift) {
    if state.phase != GamePhase::Running {
        return;
    }
    // At an outer lane the command dies here. Otherwise the lane flips
    // immediately and a fresh glide replaces any in-flight one, so
    // rapid commands land on a lane center instead of overshooting.
    let Some(target) = state.player.lane.shifted(dir) else {
        return;
    };
    state.player.lane = target;
    state.player.glide = Some(Tween::new(
        state.player.x,
        target.x(),
        LANE_CHANGE_SECS,
        Easing::QuadOut,
    ));
}

/// Advance one frame by `dt` seconds (already clamped by the caller).
///
/// Paused frames advance nothing. Unpaused frames always run the lane
/// glide; the track, collisions and the run clock only move once the
/// game has started.
pub fn tick(state: &mut GameState, dt: f32) {
    if state.paused() {
        return;
    }

    if let Some(glide) = &mut state.player.glide {
        state.player.x = glide.advance(dt);
        if glide.finished() {
            state.player.glide = None;
        }
    }

    if state.phase != GamePhase::Running {
        return;
    }

    state.run_time += dt;
    track::advance(state, dt);
    collision::collect_pickups(state);
}
