//! Transcription update types
//!
//! A recognizer does not emit words once; it emits a best-guess hypothesis
//! that it keeps revising while audio arrives. Each update carries the full
//! ordered segment list of the current hypothesis, and consumers only act on
//! the newest segment.

/// One recognized segment of the current hypothesis.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TranscriptionSegment {
    /// Recognized text for this segment
    pub text: String,
    /// Recognizer confidence (0.0 - 1.0)
    pub confidence: f32,
}

impl TranscriptionSegment {
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

/// A snapshot of the recognizer's best hypothesis.
///
/// Updates arrive for partial and final results alike; `is_final` only marks
/// that the recognizer finished an utterance, it does not change how the
/// update is interpreted.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct TranscriptionUpdate {
    /// Ordered segments of the best hypothesis
    pub segments: Vec<TranscriptionSegment>,
    /// Whether the recognizer considers the utterance complete
    pub is_final: bool,
}

impl TranscriptionUpdate {
    pub fn new(segments: Vec<TranscriptionSegment>, is_final: bool) -> Self {
        Self { segments, is_final }
    }

    /// Build an update from plain words with full confidence.
    pub fn from_words<I, T>(words: I, is_final: bool) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            segments: words
                .into_iter()
                .map(|word| TranscriptionSegment::new(word, 1.0))
                .collect(),
            is_final,
        }
    }

    /// The newest segment of the hypothesis, if any.
    pub fn last_segment(&self) -> Option<&TranscriptionSegment> {
        self.segments.last()
    }

    /// Whether the hypothesis is empty.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
