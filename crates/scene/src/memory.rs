//! In-memory scene backend
//!
//! `MemoryScene` implements both scene seams (`SceneGraph` and `Stage`) with
//! plain data: entities with a transform, anchors with at most one child,
//! interpolated moves, and looping animation playback. Hosts without a
//! rendering layer (and the test suites) drive it directly; `advance(dt)`
//! plays the role of the frame tick.

use std::collections::HashMap;

use glam::{Quat, Vec3};
use tracing::warn;

use crate::{AnchorId, AnimationClip, EntityId, Pose, SceneGraph, Stage};

/// An interpolated move in flight.
#[derive(Debug, Clone)]
struct ActiveMove {
    start: Vec3,
    target: Vec3,
    elapsed: f32,
    duration: f32,
}

/// A looping animation in flight.
#[derive(Debug, Clone)]
struct ActivePlayback {
    clip: AnimationClip,
    elapsed: f32,
    repeat_for: f32,
    transition: f32,
}

#[derive(Debug, Clone)]
struct EntityRecord {
    translation: Vec3,
    orientation: Quat,
    clips: Vec<AnimationClip>,
    parent: Option<AnchorId>,
    active_move: Option<ActiveMove>,
    playback: Option<ActivePlayback>,
}

#[derive(Debug, Clone)]
struct AnchorRecord {
    pose: Pose,
    child: Option<EntityId>,
}

/// In-memory scene graph and stage.
#[derive(Debug, Default)]
pub struct MemoryScene {
    entities: HashMap<EntityId, EntityRecord>,
    anchors: HashMap<AnchorId, AnchorRecord>,
    next_id: u64,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn an entity at the origin with the given animation clips.
    pub fn spawn(&mut self, clips: Vec<AnimationClip>) -> EntityId {
        let id = EntityId::from_raw(self.next_id);
        self.next_id += 1;
        self.entities.insert(
            id,
            EntityRecord {
                translation: Vec3::ZERO,
                orientation: Quat::IDENTITY,
                clips,
                parent: None,
                active_move: None,
                playback: None,
            },
        );
        id
    }

    /// Advance interpolated moves and animation playback by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        for record in self.entities.values_mut() {
            if let Some(active) = record.active_move.as_mut() {
                active.elapsed += dt;
                if active.elapsed >= active.duration || active.duration <= 0.0 {
                    record.translation = active.target;
                    record.active_move = None;
                } else {
                    let t = active.elapsed / active.duration;
                    record.translation = active.start.lerp(active.target, t);
                }
            }

            if let Some(playback) = record.playback.as_mut() {
                playback.elapsed += dt;
                if playback.elapsed >= playback.repeat_for {
                    record.playback = None;
                }
            }
        }
    }

    /// Current orientation of an entity.
    pub fn orientation(&self, entity: EntityId) -> Quat {
        self.entities
            .get(&entity)
            .map(|record| record.orientation)
            .unwrap_or(Quat::IDENTITY)
    }

    /// Anchor the entity is currently parented under.
    pub fn parent_anchor(&self, entity: EntityId) -> Option<AnchorId> {
        self.entities.get(&entity).and_then(|record| record.parent)
    }

    /// Pose of an anchor.
    pub fn anchor_pose(&self, anchor: AnchorId) -> Option<Pose> {
        self.anchors.get(&anchor).map(|record| record.pose)
    }

    /// Total number of anchors in the scene, childless ones included.
    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    /// Number of anchors without a child.
    pub fn empty_anchor_count(&self) -> usize {
        self.anchors
            .values()
            .filter(|record| record.child.is_none())
            .count()
    }

    /// The animation currently playing on an entity, as
    /// `(clip, remaining repeat seconds, transition seconds)`.
    pub fn active_playback(&self, entity: EntityId) -> Option<(AnimationClip, f32, f32)> {
        let playback = self.entities.get(&entity)?.playback.as_ref()?;
        Some((
            playback.clip.clone(),
            playback.repeat_for - playback.elapsed,
            playback.transition,
        ))
    }

    /// The target of the move currently in flight, if any.
    pub fn move_target(&self, entity: EntityId) -> Option<Vec3> {
        let active = self.entities.get(&entity)?.active_move.as_ref()?;
        Some(active.target)
    }
}

impl SceneGraph for MemoryScene {
    fn add_anchor(&mut self, pose: Pose) -> AnchorId {
        let id = AnchorId::from_raw(self.next_id);
        self.next_id += 1;
        self.anchors.insert(id, AnchorRecord { pose, child: None });
        id
    }

    fn reparent(&mut self, entity: EntityId, anchor: AnchorId) {
        let Some(pose) = self.anchor_pose(anchor) else {
            warn!(?anchor, "reparent onto unknown anchor; ignoring");
            return;
        };
        let Some(record) = self.entities.get_mut(&entity) else {
            warn!(?entity, "reparent of unknown entity; ignoring");
            return;
        };

        let previous = record.parent.replace(anchor);
        // Placing snaps the entity to the anchor and cancels any move still
        // in flight; orientation is untouched.
        record.translation = pose.position;
        record.active_move = None;

        if let Some(previous) = previous {
            if let Some(old) = self.anchors.get_mut(&previous) {
                old.child = None;
            }
        }
        if let Some(new) = self.anchors.get_mut(&anchor) {
            new.child = Some(entity);
        }
    }

    fn remove_empty_anchors(&mut self) -> usize {
        let before = self.anchors.len();
        self.anchors.retain(|_, record| record.child.is_some());
        before - self.anchors.len()
    }
}

impl Stage for MemoryScene {
    fn translation(&self, entity: EntityId) -> Vec3 {
        self.entities
            .get(&entity)
            .map(|record| record.translation)
            .unwrap_or(Vec3::ZERO)
    }

    fn move_to(&mut self, entity: EntityId, target: Vec3, duration_secs: f32) {
        let Some(record) = self.entities.get_mut(&entity) else {
            warn!(?entity, "move requested for unknown entity; ignoring");
            return;
        };
        if duration_secs <= 0.0 {
            record.translation = target;
            record.active_move = None;
            return;
        }
        // Last write wins: a new move restarts from wherever the entity is
        // right now.
        record.active_move = Some(ActiveMove {
            start: record.translation,
            target,
            elapsed: 0.0,
            duration: duration_secs,
        });
    }

    fn set_orientation(&mut self, entity: EntityId, orientation: Quat) {
        if let Some(record) = self.entities.get_mut(&entity) {
            record.orientation = orientation;
        }
    }

    fn animation_clips(&self, entity: EntityId) -> Vec<AnimationClip> {
        self.entities
            .get(&entity)
            .map(|record| record.clips.clone())
            .unwrap_or_default()
    }

    fn play(
        &mut self,
        entity: EntityId,
        clip: AnimationClip,
        repeat_for_secs: f32,
        transition_secs: f32,
    ) {
        if let Some(record) = self.entities.get_mut(&entity) {
            record.playback = Some(ActivePlayback {
                clip,
                elapsed: 0.0,
                repeat_for: repeat_for_secs,
                transition: transition_secs,
            });
        }
    }

    fn is_moving(&self, entity: EntityId) -> bool {
        self.entities
            .get(&entity)
            .map(|record| record.active_move.is_some())
            .unwrap_or(false)
    }
}
