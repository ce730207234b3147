//! Movement command vocabulary and interpreter
//!
//! The interpreter runs on every incremental transcription update, partial
//! and final, because the hypothesis is revised continuously while the user
//! speaks. That makes command emission high-rate by design; the movement
//! controller copes by letting the newest command preempt the previous one.

use tracing::debug;

use crate::TranscriptionUpdate;

/// The discrete movement vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MovementCommand {
    /// Step along world +Z
    Forward,
    /// Step along world -Z
    Backward,
    /// Turn +90 degrees about Y
    RotateLeft,
    /// Turn -90 degrees about Y
    RotateRight,
    /// Anything the vocabulary does not cover
    Unknown,
}

impl MovementCommand {
    /// Parse a single spoken word, case-insensitively.
    pub fn parse(text: &str) -> Self {
        let word = text.trim();
        if word.eq_ignore_ascii_case("forward") || word.eq_ignore_ascii_case("front") {
            Self::Forward
        } else if word.eq_ignore_ascii_case("back") {
            Self::Backward
        } else if word.eq_ignore_ascii_case("left") {
            Self::RotateLeft
        } else if word.eq_ignore_ascii_case("right") {
            Self::RotateRight
        } else {
            Self::Unknown
        }
    }

    /// Whether this is a real movement command rather than `Unknown`.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// Interpret the newest segment of a transcription update.
///
/// Returns `None` for an empty hypothesis (the update is silently dropped).
/// Unrecognized text maps to [`MovementCommand::Unknown`], which consumers
/// log and discard instead of forwarding to the movement controller.
pub fn interpret(update: &TranscriptionUpdate) -> Option<MovementCommand> {
    let segment = update.last_segment()?;
    let command = MovementCommand::parse(&segment.text);
    if !command.is_known() {
        debug!(text = %segment.text, "no movement command recognized");
    }
    Some(command)
}
