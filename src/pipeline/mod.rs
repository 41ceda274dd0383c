//! Assessment Pipeline
//!
//! Drives a submitted clip through transcription and judging, and records
//! completed attempts in the session ledger.

use crate::audio::AudioClip;
use crate::evaluation::{EvaluationError, EvaluationReport, Judge};
use crate::history::{HistoryEntry, Session};
use crate::transcription::{SpeechRecognizer, TranscriptionError};
use thiserror::Error;

/// Failure surfaced from the external capture collaborator
#[derive(Debug, Clone, Error)]
pub enum CaptureError {
    #[error("Recorded clip contains no audio")]
    EmptyRecording,
}

/// Terminal failure of a single submission
#[derive(Debug, Clone, Error)]
pub enum PipelineError {
    #[error("Capture failed: {0}")]
    Capture(#[from] CaptureError),

    #[error("Transcription failed: {0}")]
    Transcription(#[from] TranscriptionError),

    #[error("Evaluation failed: {0}")]
    Evaluation(#[from] EvaluationError),
}

/// Pipeline progress for the current submission.
///
/// Capturing happens outside the pipeline; a submission enters at
/// `Transcribing` and moves strictly forward to `Completed` or `Failed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PipelineState {
    #[default]
    Idle,
    Transcribing,
    Evaluating,
    Completed,
    Failed,
}

/// Successful submission outcome returned to the caller
#[derive(Debug, Clone)]
pub struct Assessment {
    pub transcript: String,
    pub report: EvaluationReport,
}

/// Orchestrates one session's capture-to-report cycle.
///
/// The pipeline owns the session ledger; `submit` takes `&mut self`, so
/// submissions within a session are fully serialized and entry N is
/// appended before submission N+1 can begin.
pub struct Pipeline {
    recognizer: Box<dyn SpeechRecognizer>,
    judge: Box<dyn Judge>,
    session: Session,
    state: PipelineState,
}

impl Pipeline {
    /// Create a pipeline for a fresh session
    pub fn new(recognizer: Box<dyn SpeechRecognizer>, judge: Box<dyn Judge>) -> Self {
        Self {
            recognizer,
            judge,
            session: Session::new(),
            state: PipelineState::Idle,
        }
    }

    /// Current state
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// The session ledger
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Tear down the pipeline, handing the ledger back to the caller
    pub fn into_session(self) -> Session {
        self.session
    }

    /// Submit a captured clip for assessment. The sole entry point:
    /// transcribes, evaluates, and on success appends a history entry
    /// before returning. Any stage failure short-circuits to `Failed`
    /// and leaves the ledger untouched; the caller may resubmit.
    pub async fn submit(&mut self, clip: AudioClip) -> Result<Assessment, PipelineError> {
        if clip.is_empty() {
            return Err(self.fail(CaptureError::EmptyRecording));
        }

        self.state = PipelineState::Transcribing;
        tracing::debug!(mode = ?clip.mode(), "Transcribing clip");

        let transcript = match self.recognizer.transcribe(&clip).await {
            Ok(transcript) => transcript,
            Err(e) => return Err(self.fail(e)),
        };
        tracing::info!(
            provider = self.recognizer.name(),
            duration_ms = transcript.duration_ms,
            "Transcription complete"
        );

        self.state = PipelineState::Evaluating;
        let report = match self
            .judge
            .evaluate(&transcript.text, clip.mode(), clip.reference_text())
            .await
        {
            Ok(report) => report,
            Err(e) => return Err(self.fail(e)),
        };

        self.session
            .append(HistoryEntry::new(clip.mode(), transcript.text.clone(), report.clone()));
        self.state = PipelineState::Completed;
        tracing::info!(score = report.score, "Assessment complete");

        Ok(Assessment {
            transcript: transcript.text,
            report,
        })
    }

    fn fail(&mut self, error: impl Into<PipelineError>) -> PipelineError {
        self.state = PipelineState::Failed;
        let error = error.into();
        tracing::warn!("Submission failed: {}", error);
        error
    }
}
