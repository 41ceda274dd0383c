//! Speech Recognizer Trait
//!
//! Common interface for speech-to-text backends.

use crate::audio::AudioClip;
use async_trait::async_trait;

/// Result of a successful recognition call
#[derive(Debug, Clone)]
pub struct Transcript {
    /// Recognized text, non-empty
    pub text: String,
    /// Recognizer that produced the text
    pub provider: String,
    /// Wall-clock duration of the provider call in milliseconds
    pub duration_ms: u64,
}

/// Transcription errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum TranscriptionError {
    /// The provider could not make out any speech in the clip
    #[error("Could not understand audio")]
    Unintelligible,

    /// Network, auth, or service failure (including timeouts)
    #[error("Speech recognition service unavailable: {0}")]
    ProviderUnavailable(String),

    /// Local storage or encoding failure
    #[error("Audio I/O error: {0}")]
    IoFailure(String),
}

/// Trait for speech-to-text backends
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Transcribe a recorded clip to text. No retries are attempted;
    /// each call maps to exactly one provider request.
    async fn transcribe(&self, clip: &AudioClip) -> Result<Transcript, TranscriptionError>;

    /// Get recognizer name
    fn name(&self) -> &'static str;
}
