//! Judge Trait
//!
//! Common interface for evaluation backends.

use super::EvaluationReport;
use crate::audio::AssessmentMode;
use async_trait::async_trait;

/// Evaluation errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum EvaluationError {
    /// Network, auth, or HTTP-level failure (including timeouts)
    #[error("Judging service unavailable: {0}")]
    ProviderUnavailable(String),

    /// The reply was not valid JSON or lacked the expected envelope
    #[error("Failed to parse judge reply: {0}")]
    ParseFailure(String),

    /// The reply parsed but is missing the mandatory numeric score
    #[error("Judge reply is missing a numeric score")]
    SchemaViolation,

    /// Read-aloud assessment requested but no reference text could be
    /// resolved, not even a default
    #[error("No reference text available for read-aloud assessment")]
    NotConfigured,
}

/// Trait for evaluation backends
#[async_trait]
pub trait Judge: Send + Sync {
    /// Evaluate a transcript against the rubric for `mode`. A missing or
    /// blank `reference` in read-aloud mode resolves to the backend's
    /// default passage; [`EvaluationError::NotConfigured`] is reserved for
    /// backends that have no default to fall back on.
    async fn evaluate(
        &self,
        transcript: &str,
        mode: AssessmentMode,
        reference: Option<&str>,
    ) -> Result<EvaluationReport, EvaluationError>;

    /// Get judge name
    fn name(&self) -> &'static str;
}
