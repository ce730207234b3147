//! The speech source seam
//!
//! A `SpeechSource` wraps the platform recognizer and its audio session.
//! Starting a stream hands back a channel receiver; the recognizer pushes
//! updates from its own capture context and is never blocked by however
//! slowly the consumer drains them.

use tokio::sync::mpsc;
use tracing::debug;

use crate::{AuthorizationStatus, Result, SpeechError, TranscriptionUpdate};

/// Seam over the platform speech recognizer.
pub trait SpeechSource {
    /// Current authorization state of speech recognition.
    fn authorization(&self) -> AuthorizationStatus;

    /// Start the audio session and transcription stream.
    ///
    /// Returns the receiving end of the update channel. Fails if the source
    /// is not authorized, already running, or the audio session cannot be
    /// brought up; callers treat any failure as the speech path being
    /// unavailable for the rest of the session.
    fn start(&mut self) -> Result<mpsc::UnboundedReceiver<TranscriptionUpdate>>;

    /// Stop the audio session and transcription stream.
    fn cancel(&mut self);
}

/// Speech source that replays a preset script of updates.
///
/// Stands in for a real recognizer in headless hosts and tests. The stream
/// closes once the script has been delivered, so consumers that drain until
/// the channel closes terminate naturally.
#[derive(Debug, Clone)]
pub struct QueuedSpeechSource {
    script: Vec<TranscriptionUpdate>,
    authorization: AuthorizationStatus,
    listening: bool,
}

impl QueuedSpeechSource {
    /// Authorized source that will replay the given updates in order.
    pub fn new(script: Vec<TranscriptionUpdate>) -> Self {
        Self {
            script,
            authorization: AuthorizationStatus::Authorized,
            listening: false,
        }
    }

    /// Override the reported authorization status.
    pub fn with_authorization(mut self, authorization: AuthorizationStatus) -> Self {
        self.authorization = authorization;
        self
    }

    /// Source that replays the given words, one update per word, each marked
    /// final.
    pub fn speaking<I, T>(words: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::new(
            words
                .into_iter()
                .map(|word| TranscriptionUpdate::from_words([word.into()], true))
                .collect(),
        )
    }
}

impl SpeechSource for QueuedSpeechSource {
    fn authorization(&self) -> AuthorizationStatus {
        self.authorization
    }

    fn start(&mut self) -> Result<mpsc::UnboundedReceiver<TranscriptionUpdate>> {
        if self.authorization != AuthorizationStatus::Authorized {
            return Err(SpeechError::NotAuthorized(self.authorization));
        }
        if self.listening {
            return Err(SpeechError::AlreadyListening);
        }

        let (tx, rx) = mpsc::unbounded_channel();
        for update in self.script.drain(..) {
            // An unbounded send only fails when the receiver is gone, and we
            // still hold it.
            let _ = tx.send(update);
        }
        drop(tx);

        self.listening = true;
        debug!("scripted transcription stream started");
        Ok(rx)
    }

    fn cancel(&mut self) {
        self.listening = false;
    }
}
