//! Session context
//!
//! One `Session` per run of the feature. It owns the scene, the hit
//! resolver, the placement manager, the speech source, and (once the object
//! has been placed) the movement controller, with an explicit init/teardown
//! lifecycle instead of ambient globals.
//!
//! Transcription updates arrive on a channel from the recognizer's capture
//! context; [`Session::run`] drains them in delivery order on the calling
//! context, which is the single writer of the object's transform. A denied
//! or failed speech path is logged and disabled for the rest of the session,
//! never surfaced as an error and never retried automatically.

use glam::{Vec2, Vec3};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use voicebot_scene::{
    EntityId, HitResolver, HitTestProvider, PlacementManager, SceneGraph, Stage,
};
use voicebot_speech::{
    interpret, AuthorizationStatus, SpeechSource, TranscriptionUpdate,
};

use crate::{ControlConfig, MovementController};

/// State of the voice command path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechPath {
    /// Not listening
    Inactive,
    /// Transcription stream running
    Listening,
    /// Disabled for the rest of the session (authorization or audio failure)
    Unavailable,
}

/// The per-session context tying tap input, placement, and voice commands
/// together.
pub struct Session<W, H, S> {
    scene: W,
    resolver: HitResolver<H>,
    placement: PlacementManager,
    source: S,
    config: ControlConfig,
    entity: EntityId,
    controller: Option<MovementController>,
    updates: Option<mpsc::UnboundedReceiver<TranscriptionUpdate>>,
    speech_path: SpeechPath,
}

impl<W, H, S> Session<W, H, S>
where
    W: SceneGraph + Stage,
    H: HitTestProvider,
    S: SpeechSource,
{
    /// Create a session around an already-loaded entity.
    pub fn new(scene: W, entity: EntityId, hit_tester: H, source: S, config: ControlConfig) -> Self {
        Self {
            scene,
            resolver: HitResolver::new(hit_tester),
            placement: PlacementManager::new(),
            source,
            config,
            entity,
            controller: None,
            updates: None,
            speech_path: SpeechPath::Inactive,
        }
    }

    /// Handle a screen tap: resolve it against tracked surfaces and place
    /// (or move) the object there.
    ///
    /// Returns the placement point, or `None` when the tap missed every
    /// tracked surface.
    pub fn handle_tap(&mut self, screen_point: Vec2) -> Option<Vec3> {
        let Some(position) = self.resolver.resolve(screen_point) else {
            debug!(?screen_point, "tap missed all tracked surfaces");
            return None;
        };

        self.placement
            .place(&mut self.scene, Some(self.entity), position)?;

        // The controller takes ownership of the object on first placement
        // and stays with it across re-placements.
        if self.controller.is_none() {
            self.controller = Some(MovementController::new(
                &self.scene,
                self.entity,
                self.config.clone(),
            ));
        }

        Some(position)
    }

    /// Start the transcription stream if the speech path is available.
    ///
    /// Denied, restricted, or undetermined authorization, and audio session
    /// failures, disable voice commands for the rest of the session. Both
    /// outcomes are logged only; the tap/placement path keeps working.
    pub fn start_listening(&mut self) {
        match self.speech_path {
            SpeechPath::Listening => return,
            SpeechPath::Unavailable => {
                debug!("speech path already disabled for this session");
                return;
            }
            SpeechPath::Inactive => {}
        }

        let status = self.source.authorization();
        if status != AuthorizationStatus::Authorized {
            warn!(?status, "speech recognition not authorized; voice commands disabled");
            self.speech_path = SpeechPath::Unavailable;
            return;
        }

        match self.source.start() {
            Ok(receiver) => {
                self.updates = Some(receiver);
                self.speech_path = SpeechPath::Listening;
                info!("listening for movement commands");
            }
            Err(err) => {
                warn!(%err, "transcription stream failed to start; voice commands disabled");
                self.speech_path = SpeechPath::Unavailable;
            }
        }
    }

    /// Interpret one transcription update and forward the command.
    ///
    /// Runs for every incremental update, partial and final. Empty
    /// hypotheses and `Unknown` text are dropped here; commands arriving
    /// before the object has been placed are dropped too.
    pub fn apply_update(&mut self, update: &TranscriptionUpdate) {
        let Some(command) = interpret(update) else {
            return;
        };
        if !command.is_known() {
            return;
        }
        let Some(controller) = self.controller.as_mut() else {
            debug!(?command, "command before placement; ignoring");
            return;
        };
        controller.apply(&mut self.scene, command);
    }

    /// Drain the transcription stream until it closes, applying commands in
    /// delivery order.
    ///
    /// Must run on the context that owns the scene: it is the only writer of
    /// the object's transform.
    pub async fn run(&mut self) {
        let Some(mut receiver) = self.updates.take() else {
            debug!("run called without an active transcription stream");
            return;
        };
        while let Some(update) = receiver.recv().await {
            self.apply_update(&update);
        }
        if self.speech_path == SpeechPath::Listening {
            self.speech_path = SpeechPath::Inactive;
        }
        debug!("transcription stream closed");
    }

    /// Stop listening and drop the update stream.
    pub fn teardown(&mut self) {
        self.source.cancel();
        self.updates = None;
        if self.speech_path == SpeechPath::Listening {
            self.speech_path = SpeechPath::Inactive;
        }
    }

    /// Whether the object has been placed at least once.
    pub fn is_placed(&self) -> bool {
        self.placement.is_placed()
    }

    /// Current state of the voice command path.
    pub fn speech_path(&self) -> SpeechPath {
        self.speech_path
    }

    /// The controlled entity.
    pub fn entity(&self) -> EntityId {
        self.entity
    }

    /// The movement controller, once the object has been placed.
    pub fn controller(&self) -> Option<&MovementController> {
        self.controller.as_ref()
    }

    /// The scene this session drives.
    pub fn scene(&self) -> &W {
        &self.scene
    }

    /// Mutable access to the scene, for hosts that tick it.
    pub fn scene_mut(&mut self) -> &mut W {
        &mut self.scene
    }
}
