//! Speech-side primitives for voicebot
//!
//! This crate turns a live transcription stream into a small discrete
//! movement vocabulary:
//! - `TranscriptionUpdate`: the recognizer's current best hypothesis,
//!   revised continuously while the user speaks
//! - `SpeechSource`: seam over the platform recognizer and audio session,
//!   delivering updates on a channel so capture is never blocked
//! - `interpret`: maps the newest spoken word to a [`MovementCommand`]
//!
//! The crate never touches transforms; consumers feed the emitted commands
//! to the movement controller.

pub mod command;
pub mod source;
pub mod transcription;

pub use command::{interpret, MovementCommand};
pub use source::{QueuedSpeechSource, SpeechSource};
pub use transcription::{TranscriptionSegment, TranscriptionUpdate};

/// Authorization state of the speech recognition facility.
///
/// Only `Authorized` permits starting a transcription stream; every other
/// state disables the voice command path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AuthorizationStatus {
    /// The user has not been asked yet
    NotDetermined,
    /// Speech recognition may be used
    Authorized,
    /// The user declined
    Denied,
    /// Disallowed by device policy
    Restricted,
}

/// Error types for the speech crate
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("speech recognition not authorized ({0:?})")]
    NotAuthorized(AuthorizationStatus),

    #[error("audio session failed to start: {0}")]
    AudioSession(String),

    #[error("speech recognizer unavailable")]
    RecognizerUnavailable,

    #[error("transcription stream already running")]
    AlreadyListening,
}

/// Result type for speech operations
pub type Result<T> = std::result::Result<T, SpeechError>;
