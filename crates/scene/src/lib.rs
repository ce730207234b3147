//! Scene-side primitives for voicebot
//!
//! This crate provides the scene half of the voice-driven object controller:
//! - Hit testing: turning a 2D screen tap into a world-space placement point
//! - Anchors and placement: parenting the controlled object under a
//!   world-space anchor, moving it on re-placement instead of duplicating it
//! - The `SceneGraph` and `Stage` traits: seams over the platform's scene
//!   graph and transform/animation facility
//! - `MemoryScene`: an in-memory scene used by headless hosts and tests
//!
//! The crate never interprets speech and never decides where the object
//! should go next; it only executes placement and motion requests issued by
//! the control crate.

pub mod hit_test;
pub mod memory;
pub mod placement;
pub mod stage;

pub use hit_test::{HitResolver, HitTestProvider, ScriptedHitTester, WorldHit};
pub use memory::MemoryScene;
pub use placement::{PlacementManager, SceneGraph};
pub use stage::Stage;

use glam::{Quat, Vec3};

/// Identity of an entity living in the scene graph.
///
/// Entities are created by the host (loading a model, spawning into a
/// `MemoryScene`); this crate only refers to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct EntityId(u64);

impl EntityId {
    /// Wrap a raw backend identifier.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw backend identifier.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Identity of a world-space anchor in the scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AnchorId(u64);

impl AnchorId {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// A world-space pose: position plus orientation.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pose {
    /// Position in world space
    pub position: Vec3,
    /// Orientation as quaternion
    pub orientation: Quat,
}

impl Pose {
    /// Identity pose at the world origin.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };

    /// Create a pose at the given position with identity orientation.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A named animation clip available on an entity.
///
/// Clips are loaded with the model by the host; this crate only passes them
/// back to the stage for playback.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnimationClip {
    /// Clip name as exported by the asset
    pub name: String,
}

impl AnimationClip {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pose_at_has_identity_orientation() {
        let pose = Pose::at(Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(pose.position, Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(pose.orientation, Quat::IDENTITY);
    }

    #[test]
    fn ids_round_trip_raw_values() {
        assert_eq!(EntityId::from_raw(7).raw(), 7);
        assert_eq!(AnchorId::from_raw(3).raw(), 3);
    }
}
