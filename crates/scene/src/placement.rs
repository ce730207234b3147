//! Anchors and placement of the controlled object
//!
//! Each successful tap creates a fresh world-space anchor and parents the
//! controlled object under it. Re-tapping moves the object to the new anchor;
//! the previous anchor stays in the scene, now childless. That matches the
//! behavior of the tracking runtimes this targets, where anchors are cheap
//! and dropping them mid-session invalidates tracking state. Hosts that care
//! can reap the orphans through [`SceneGraph::remove_empty_anchors`].

use glam::Vec3;
use tracing::{debug, info};

use crate::{AnchorId, EntityId, Pose};

/// Seam over the platform's scene graph.
///
/// An anchor may parent at most one entity at a time; reparenting detaches
/// the entity from its previous anchor first.
pub trait SceneGraph {
    /// Add a world-space anchor at the given pose.
    fn add_anchor(&mut self, pose: Pose) -> AnchorId;

    /// Parent `entity` under `anchor`, detaching it from any previous anchor.
    /// The entity snaps to the anchor's position.
    fn reparent(&mut self, entity: EntityId, anchor: AnchorId);

    /// Remove every anchor that has no child, returning how many were
    /// removed. Opt-in cleanup for anchors orphaned by re-placement.
    fn remove_empty_anchors(&mut self) -> usize;
}

/// Owns the mapping from placement point to scene anchor for the controlled
/// object.
#[derive(Debug, Clone, Default)]
pub struct PlacementManager {
    current_anchor: Option<AnchorId>,
}

impl PlacementManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor the object is currently parented under, if placed.
    pub fn current_anchor(&self) -> Option<AnchorId> {
        self.current_anchor
    }

    /// Whether the object has been placed at least once.
    pub fn is_placed(&self) -> bool {
        self.current_anchor.is_some()
    }

    /// Place `object` at the world point `at`.
    ///
    /// Creates a new anchor and parents the object under it. If the object
    /// was already placed it moves rather than duplicates; the old anchor is
    /// left in the scene, childless. A `None` object (model not loaded yet)
    /// is a no-op and creates no anchor.
    pub fn place<G: SceneGraph>(
        &mut self,
        scene: &mut G,
        object: Option<EntityId>,
        at: Vec3,
    ) -> Option<AnchorId> {
        let Some(entity) = object else {
            debug!("placement requested before the object was loaded; ignoring");
            return None;
        };

        let anchor = scene.add_anchor(Pose::at(at));
        scene.reparent(entity, anchor);

        if let Some(previous) = self.current_anchor.replace(anchor) {
            debug!(?previous, "object moved to a new anchor");
        }
        info!(?anchor, position = ?at, "object placed");

        Some(anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryScene, Stage};

    #[test]
    fn placing_without_an_object_creates_no_anchor() {
        let mut scene = MemoryScene::new();
        let mut placement = PlacementManager::new();

        let anchor = placement.place(&mut scene, None, Vec3::new(1.0, 0.0, 2.0));

        assert_eq!(anchor, None);
        assert_eq!(scene.anchor_count(), 0);
        assert!(!placement.is_placed());
    }

    #[test]
    fn placing_parents_the_object_at_the_tap_point() {
        let mut scene = MemoryScene::new();
        let entity = scene.spawn(Vec::new());
        let mut placement = PlacementManager::new();

        let anchor = placement
            .place(&mut scene, Some(entity), Vec3::new(1.0, 0.0, 2.0))
            .unwrap();

        assert_eq!(placement.current_anchor(), Some(anchor));
        assert_eq!(scene.parent_anchor(entity), Some(anchor));
        assert_eq!(scene.translation(entity), Vec3::new(1.0, 0.0, 2.0));
    }

    #[test]
    fn replacement_moves_the_object_and_orphans_the_old_anchor() {
        let mut scene = MemoryScene::new();
        let entity = scene.spawn(Vec::new());
        let mut placement = PlacementManager::new();

        let first = placement
            .place(&mut scene, Some(entity), Vec3::new(1.0, 0.0, 2.0))
            .unwrap();
        let second = placement
            .place(&mut scene, Some(entity), Vec3::new(-3.0, 0.0, 5.0))
            .unwrap();

        assert_ne!(first, second);
        assert_eq!(scene.parent_anchor(entity), Some(second));
        assert_eq!(scene.translation(entity), Vec3::new(-3.0, 0.0, 5.0));

        // Both anchors remain, but only the newest has a child.
        assert_eq!(scene.anchor_count(), 2);
        assert_eq!(scene.empty_anchor_count(), 1);
    }

    #[test]
    fn placing_twice_at_the_same_point_keeps_one_child() {
        let mut scene = MemoryScene::new();
        let entity = scene.spawn(Vec::new());
        let mut placement = PlacementManager::new();

        let point = Vec3::new(0.5, 0.0, 0.5);
        placement.place(&mut scene, Some(entity), point);
        placement.place(&mut scene, Some(entity), point);

        assert_eq!(scene.translation(entity), point);
        assert_eq!(scene.anchor_count(), 2);
        assert_eq!(scene.empty_anchor_count(), 1);
    }

    #[test]
    fn cleanup_reaps_orphaned_anchors_only() {
        let mut scene = MemoryScene::new();
        let entity = scene.spawn(Vec::new());
        let mut placement = PlacementManager::new();

        placement.place(&mut scene, Some(entity), Vec3::ZERO);
        placement.place(&mut scene, Some(entity), Vec3::X);
        placement.place(&mut scene, Some(entity), Vec3::Z);

        let removed = scene.remove_empty_anchors();

        assert_eq!(removed, 2);
        assert_eq!(scene.anchor_count(), 1);
        assert_eq!(scene.parent_anchor(entity), placement.current_anchor());
    }
}
