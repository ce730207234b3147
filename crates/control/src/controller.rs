//! Movement controller state machine
//!
//! Two states, `Idle` and `Executing`. Forward/back steps start an
//! interpolated move over the configured duration with the walk animation
//! looping for the same span; left/right turns are instantaneous. A command
//! arriving while a move is in flight preempts it outright: the stage's
//! last-write-wins semantics mean there is no queue and nothing to cancel
//! explicitly.

use glam::{Quat, Vec3};
use tracing::{debug, info};

use voicebot_scene::{AnimationClip, EntityId, Stage};
use voicebot_speech::MovementCommand;

use crate::ControlConfig;

/// Whether the controller currently has motion in flight.
///
/// Only interpolated steps occupy `Executing` for any observable span;
/// turns are instantaneous, so their `Idle -> Executing -> Idle` transition
/// is zero-length and the controller reads `Idle` again by the time the
/// apply call returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementState {
    /// No motion in flight
    Idle,
    /// An interpolated move is running
    Executing,
}

/// Drives the placed object's locomotion and walk animation.
///
/// The controller is the only writer of the object's transform; everything
/// else in the system hands it commands and leaves the transform alone.
pub struct MovementController {
    entity: EntityId,
    config: ControlConfig,
    walk_clip: Option<AnimationClip>,
}

impl MovementController {
    /// Create a controller for a placed entity.
    ///
    /// The walk clip is the first animation loaded with the model. Models
    /// without animations still move; they just do it without a walk cycle.
    pub fn new(stage: &impl Stage, entity: EntityId, config: ControlConfig) -> Self {
        let walk_clip = stage.animation_clips(entity).into_iter().next();
        if walk_clip.is_none() {
            debug!(?entity, "no animation clips loaded; moving without a walk cycle");
        }
        Self {
            entity,
            config,
            walk_clip,
        }
    }

    /// The entity this controller drives.
    pub fn entity(&self) -> EntityId {
        self.entity
    }

    /// Current state, derived from whether the stage still reports an
    /// interpolated move in flight. Turns are instantaneous and never leave
    /// the controller `Executing`.
    pub fn state(&self, stage: &impl Stage) -> MovementState {
        if stage.is_moving(self.entity) {
            MovementState::Executing
        } else {
            MovementState::Idle
        }
    }

    /// Apply one movement command.
    ///
    /// `Unknown` is a no-op; callers normally filter it out before getting
    /// here, so it is only logged.
    pub fn apply(&mut self, stage: &mut impl Stage, command: MovementCommand) {
        match command {
            MovementCommand::Forward => self.step(stage, Vec3::Z),
            MovementCommand::Backward => self.step(stage, Vec3::NEG_Z),
            MovementCommand::RotateLeft => self.turn(stage, self.config.turn_degrees),
            MovementCommand::RotateRight => self.turn(stage, -self.config.turn_degrees),
            MovementCommand::Unknown => {
                debug!("unknown command reached the movement controller; ignoring");
            }
        }
    }

    fn step(&mut self, stage: &mut impl Stage, direction: Vec3) {
        // The step is taken along world axes, not rotated into the object's
        // facing: "forward" is world +Z even after a turn.
        let current = stage.translation(self.entity);
        let target = current + direction * self.config.step_distance;

        info!(?direction, ?target, "movement step");
        stage.move_to(self.entity, target, self.config.movement_duration_secs);
        self.play_walk(stage);
    }

    fn turn(&mut self, stage: &mut impl Stage, degrees: f32) {
        // The turn replaces the orientation relative to the object's own
        // frame; repeated turns in the same direction do not accumulate.
        let orientation = Quat::from_rotation_y(degrees.to_radians());
        info!(degrees, "turn");
        stage.set_orientation(self.entity, orientation);
    }

    fn play_walk(&mut self, stage: &mut impl Stage) {
        let Some(clip) = self.walk_clip.clone() else {
            return;
        };
        stage.play(
            self.entity,
            clip,
            self.config.movement_duration_secs,
            self.config.walk_fade_in_secs,
        );
    }
}
