//! Abstraction over the rendering engine
//!
//! The engine owns the scene graph, the GLTF templates, the animation
//! mixer, the camera and the frame clock. The game drives all of it
//! through this trait, which keeps the simulation free of platform
//! types and lets tests substitute a recording double.

use glam::Vec3;

/// A loaded GLTF template inside the engine's registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelHandle(pub u32);

/// An instantiated scene-graph node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// Operations the game needs from the engine.
///
/// Positions are world-space for root nodes and parent-space for
/// children; the engine's scene graph composes transforms.
pub trait SceneHandle {
    /// Seconds since the previous frame, from the engine clock
    fn delta_seconds(&mut self) -> f32;
    /// Clone a template into the scene, optionally under a parent node
    fn instantiate(&mut self, model: ModelHandle, parent: Option<NodeId>) -> NodeId;
    /// Remove a node and its engine-side children
    fn remove(&mut self, node: NodeId);
    fn set_position(&mut self, node: NodeId, pos: Vec3);
    fn set_scale(&mut self, node: NodeId, scale: f32);
    fn set_visible(&mut self, node: NodeId, visible: bool);
    /// Tint every material under the node with a CSS color
    fn set_tint(&mut self, node: NodeId, css_color: &str);
    /// Loop the clip at `clip` on the node's animation mixer
    fn play_clip(&mut self, node: NodeId, clip: usize);
    /// Advance all animation mixers by `dt` seconds
    fn advance_animations(&mut self, dt: f32);
    /// Move the camera; the engine keeps it aimed at the track origin
    fn set_camera_position(&mut self, pos: Vec3);
}

/// Engine stand-in for headless runs: hands out node ids, reports a
/// fixed frame delta and swallows everything else.
#[derive(Debug)]
pub struct NullScene {
    next_node: u32,
    pub frame_dt: f32,
}

impl NullScene {
    pub fn new(frame_dt: f32) -> Self {
        Self {
            next_node: 0,
            frame_dt,
        }
    }
}

impl SceneHandle for NullScene {
    fn delta_seconds(&mut self) -> f32 {
        self.frame_dt
    }

    fn instantiate(&mut self, _model: ModelHandle, _parent: Option<NodeId>) -> NodeId {
        let id = self.next_node;
        self.next_node += 1;
        NodeId(id)
    }

    fn remove(&mut self, _node: NodeId) {}
    fn set_position(&mut self, _node: NodeId, _pos: Vec3) {}
    fn set_scale(&mut self, _node: NodeId, _scale: f32) {}
    fn set_visible(&mut self, _node: NodeId, _visible: bool) {}
    fn set_tint(&mut self, _node: NodeId, _css_color: &str) {}
    fn play_clip(&mut self, _node: NodeId, _clip: usize) {}
    fn advance_animations(&mut self, _dt: f32) {}
    fn set_camera_position(&mut self, _pos: Vec3) {}
}
