//! Google Web Speech Recognizer
//!
//! Cloud recognition over the Web Speech HTTP endpoint.

use super::{SpeechRecognizer, Transcript, TranscriptionError};
use crate::audio::{encode_wav, AudioClip};
use async_trait::async_trait;
use std::io::Write;
use std::time::{Duration, Instant};

const GOOGLE_SPEECH_URL: &str = "http://www.google.com/speech-api/v2/recognize";
const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Google Web Speech recognition provider
pub struct GoogleRecognizer {
    language: String,
    base_url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl GoogleRecognizer {
    /// Create a new recognizer with the default timeout
    pub fn new(language: Option<String>) -> Self {
        Self::with_timeout(language, DEFAULT_TIMEOUT_SECONDS)
    }

    /// Create a new recognizer with a custom timeout
    pub fn with_timeout(language: Option<String>, timeout_seconds: u64) -> Self {
        let timeout = Duration::from_secs(timeout_seconds);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            language: language.unwrap_or_else(|| "en-US".to_string()),
            base_url: GOOGLE_SPEECH_URL.to_string(),
            client,
            timeout,
        }
    }

    /// Override the provider endpoint (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Get the current timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Spool the clip to a transient WAV file and read the upload payload
    /// back out. The `NamedTempFile` guard removes the file on every exit
    /// path, success or failure.
    fn spool_clip(clip: &AudioClip) -> Result<Vec<u8>, TranscriptionError> {
        let wav = encode_wav(clip.samples(), clip.sample_rate())
            .map_err(|e| TranscriptionError::IoFailure(e.to_string()))?;

        let mut spool = tempfile::Builder::new()
            .prefix("speakeval-clip-")
            .suffix(".wav")
            .tempfile()
            .map_err(|e| TranscriptionError::IoFailure(e.to_string()))?;

        spool
            .write_all(&wav)
            .and_then(|_| spool.flush())
            .map_err(|e| TranscriptionError::IoFailure(e.to_string()))?;

        std::fs::read(spool.path()).map_err(|e| TranscriptionError::IoFailure(e.to_string()))
    }

    /// Pull the best transcript out of the provider reply.
    ///
    /// The endpoint answers with one JSON object per line; the first line
    /// is usually an empty `{"result":[]}` placeholder.
    fn parse_reply(body: &str) -> Option<String> {
        for line in body.lines() {
            let Ok(value) = serde_json::from_str::<serde_json::Value>(line) else {
                continue;
            };

            let transcript = value
                .get("result")
                .and_then(|r| r.get(0))
                .and_then(|r| r.get("alternative"))
                .and_then(|a| a.get(0))
                .and_then(|a| a.get("transcript"))
                .and_then(|t| t.as_str())
                .map(str::trim);

            if let Some(text) = transcript {
                if !text.is_empty() {
                    return Some(text.to_string());
                }
            }
        }
        None
    }
}

#[async_trait]
impl SpeechRecognizer for GoogleRecognizer {
    async fn transcribe(&self, clip: &AudioClip) -> Result<Transcript, TranscriptionError> {
        let start = Instant::now();

        let payload = Self::spool_clip(clip)?;

        let response = self
            .client
            .post(&self.base_url)
            .query(&[("client", "speakeval"), ("lang", self.language.as_str())])
            .header("Content-Type", "audio/x-wav")
            .body(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Recognition request failed: {}", e);
                TranscriptionError::ProviderUnavailable(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Recognition service returned {}: {}", status, body);
            return Err(TranscriptionError::ProviderUnavailable(format!(
                "HTTP {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TranscriptionError::ProviderUnavailable(e.to_string()))?;

        let text = Self::parse_reply(&body).ok_or(TranscriptionError::Unintelligible)?;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::debug!("Recognition complete in {}ms", duration_ms);

        Ok(Transcript {
            text,
            provider: self.name().to_string(),
            duration_ms,
        })
    }

    fn name(&self) -> &'static str {
        "google"
    }
}
