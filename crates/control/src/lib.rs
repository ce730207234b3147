//! Movement controller and session wiring for voicebot
//!
//! This crate drives the placed object:
//! - [`MovementController`]: the movement/animation state machine. Each
//!   accepted command computes a new target transform, issues an
//!   interpolated move through the stage, and keeps the looping walk
//!   animation in step with the motion duration. New commands preempt
//!   whatever is still in flight.
//! - [`Session`]: the one-per-session context that owns the scene, the hit
//!   resolver, the placement manager, and the speech source, and serializes
//!   all transform writes onto the context that drains the command channel.
//!
//! # Example
//!
//! ```rust,ignore
//! use voicebot_control::{ControlConfig, Session};
//! use voicebot_scene::{AnimationClip, MemoryScene, ScriptedHitTester};
//! use voicebot_speech::QueuedSpeechSource;
//!
//! let mut scene = MemoryScene::new();
//! let robot = scene.spawn(vec![AnimationClip::new("walk")]);
//!
//! let mut session = Session::new(
//!     scene,
//!     robot,
//!     ScriptedHitTester::hitting(glam::Vec3::new(1.0, 0.0, 2.0)),
//!     QueuedSpeechSource::speaking(["forward"]),
//!     ControlConfig::default(),
//! );
//!
//! session.handle_tap(glam::Vec2::new(512.0, 384.0));
//! session.start_listening();
//! // session.run().await drains the stream on the scene-owning context
//! ```

pub mod config;
pub mod controller;
pub mod session;

pub use config::ControlConfig;
pub use controller::{MovementController, MovementState};
pub use session::{Session, SpeechPath};
