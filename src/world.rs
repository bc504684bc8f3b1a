//! Binds the simulation to an engine scene
//!
//! `GameWorld` owns the game state and a `SceneHandle`, applies intents,
//! runs the per-frame advance and mirrors the results into the scene
//! graph: segment and player transforms, pickup visibility, tints, clips
//! and the camera. The simulation never sees the scene; the scene never
//! computes gameplay.

use glam::Vec3;

use crate::assets::{AnimationId, LoadedAssets};
use crate::consts::*;
use crate::scene::{NodeId, SceneHandle};
use crate::sim::tween::{Easing, Tween3};
use crate::sim::{self, GameEvent, GamePhase, GameState, Intent, Pickup};

pub struct GameWorld<S: SceneHandle> {
    state: GameState,
    scene: S,
    assets: LoadedAssets,
    player_node: NodeId,
    /// Scene nodes per pool slot
    segment_nodes: Vec<NodeId>,
    /// Pickup child nodes per pool slot, parallel to each segment's list
    pickup_nodes: Vec<Vec<NodeId>>,
    camera_glide: Option<Tween3>,
}

impl<S: SceneHandle> GameWorld<S> {
    /// Build the scene mirror for a fresh state: the character in idle,
    /// one node per segment with children for its pickups, and the
    /// camera at the menu framing.
    pub fn new(state: GameState, mut scene: S, assets: LoadedAssets) -> Self {
        let player_node = scene.instantiate(assets.character, None);
        scene.set_position(player_node, Vec3::new(state.player.x, 0.0, 0.0));
        scene.set_tint(player_node, state.player.tint.css());
        scene.play_clip(player_node, AnimationId::Idle.index());

        let mut segment_nodes = Vec::with_capacity(state.segments.len());
        let mut pickup_nodes = Vec::with_capacity(state.segments.len());
        for segment in &state.segments {
            let node = scene.instantiate(assets.track_segment, None);
            scene.set_position(node, segment.position);
            let children = spawn_pickup_nodes(&mut scene, &assets, node, &segment.pickups);
            segment_nodes.push(node);
            pickup_nodes.push(children);
        }

        scene.set_camera_position(CAMERA_MENU_POS);

        Self {
            state,
            scene,
            assets,
            player_node,
            segment_nodes,
            pickup_nodes,
            camera_glide: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Single intake for everything the input adapter produces
    pub fn handle_intent(&mut self, intent: Intent) {
        sim::apply_intent(&mut self.state, intent);
        self.apply_events();
    }

    /// Per-display-frame entry point.
    ///
    /// Reads the engine clock every frame so pause does not bank time,
    /// then freezes everything while paused. Unpaused frames advance the
    /// mixer and camera, run the simulation and mirror the results.
    pub fn update(&mut self) {
        let dt = self.scene.delta_seconds().min(MAX_FRAME_DT);
        if self.state.paused() {
            return;
        }

        self.scene.advance_animations(dt);
        if let Some(glide) = &mut self.camera_glide {
            let pos = glide.advance(dt);
            self.scene.set_camera_position(pos);
            if glide.finished() {
                self.camera_glide = None;
            }
        }

        sim::tick(&mut self.state, dt);
        self.apply_events();
        self.sync_transforms();
    }

    /// Mirror simulation events into scene mutations
    fn apply_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Started => {
                    self.scene.play_clip(self.player_node, AnimationId::Run.index());
                    self.camera_glide = Some(Tween3::new(
                        CAMERA_MENU_POS,
                        CAMERA_RUN_POS,
                        CAMERA_GLIDE_SECS,
                        Easing::QuadInOut,
                    ));
                }
                // HUD layers poll the phase; the scene itself is untouched
                GameEvent::PauseChanged(_) => {}
                GameEvent::SegmentRecycled { slot } => {
                    for node in self.pickup_nodes[slot].drain(..) {
                        self.scene.remove(node);
                    }
                    let children = spawn_pickup_nodes(
                        &mut self.scene,
                        &self.assets,
                        self.segment_nodes[slot],
                        &self.state.segments[slot].pickups,
                    );
                    self.pickup_nodes[slot] = children;
                }
                GameEvent::PickupCollected { slot, index, color } => {
                    self.scene.set_visible(self.pickup_nodes[slot][index], false);
                    self.scene.set_tint(self.player_node, color.css());
                }
            }
        }
    }

    fn sync_transforms(&mut self) {
        for (segment, node) in self.state.segments.iter().zip(&self.segment_nodes) {
            self.scene.set_position(*node, segment.position);
        }
        self.scene
            .set_position(self.player_node, Vec3::new(self.state.player.x, 0.0, 0.0));
    }
}

/// Instantiate scene nodes for a segment's pickups, in parent space
fn spawn_pickup_nodes<S: SceneHandle>(
    scene: &mut S,
    assets: &LoadedAssets,
    parent: NodeId,
    pickups: &[Pickup],
) -> Vec<NodeId> {
    pickups
        .iter()
        .map(|pickup| {
            let node = scene.instantiate(assets.pickup, Some(parent));
            scene.set_scale(node, PICKUP_SCALE);
            scene.set_position(
                node,
                Vec3::new(pickup.lane.x(), PICKUP_HEIGHT, pickup.offset_z),
            );
            scene.set_tint(node, pickup.color.css());
            node
        })
        .collect()
}
