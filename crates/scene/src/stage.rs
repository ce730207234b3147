//! The stage seam: transform and animation playback for placed entities
//!
//! The platform's rendering layer owns the actual interpolation and clip
//! playback; the movement controller only issues fire-and-forget requests
//! through this trait. Requests are last-write-wins: issuing a new move or a
//! new playback replaces whatever was still in flight.

use glam::{Quat, Vec3};

use crate::{AnimationClip, EntityId};

/// Seam over the platform's entity transform and animation facility.
pub trait Stage {
    /// Current world-space translation of the entity.
    ///
    /// While an interpolated move is in flight this reports the interpolated
    /// position, not the target.
    fn translation(&self, entity: EntityId) -> Vec3;

    /// Begin an interpolated move of the entity to `target` over
    /// `duration_secs`, keeping its orientation. Replaces any move still in
    /// flight; the call returns immediately.
    fn move_to(&mut self, entity: EntityId, target: Vec3, duration_secs: f32);

    /// Set the entity's orientation relative to its own frame, instantly.
    ///
    /// This replaces the orientation outright; it is not composed with the
    /// previous one.
    fn set_orientation(&mut self, entity: EntityId, orientation: Quat);

    /// Animation clips loaded with the entity's model, possibly empty.
    fn animation_clips(&self, entity: EntityId) -> Vec<AnimationClip>;

    /// Play `clip` looping for `repeat_for_secs`, cross-fading in over
    /// `transition_secs`. Replaces any playback still running.
    fn play(
        &mut self,
        entity: EntityId,
        clip: AnimationClip,
        repeat_for_secs: f32,
        transition_secs: f32,
    );

    /// Whether an interpolated move is still in flight for the entity.
    fn is_moving(&self, entity: EntityId) -> bool;
}
