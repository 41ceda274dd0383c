//! Evaluation Report
//!
//! Structured judge feedback with explicit defaults.

use crate::audio::AssessmentMode;
use serde::{Deserialize, Serialize};

/// Marker used for feedback the judge did not supply
pub const NOT_AVAILABLE: &str = "not available";

/// Rubric dimensions, in presentation order, for each assessment mode
pub fn dimension_keys(mode: AssessmentMode) -> &'static [&'static str] {
    match mode {
        AssessmentMode::FreeSpeech => {
            &["pronunciation", "grammar", "vocabulary", "fluency", "coherence"]
        }
        AssessmentMode::ReadAloud => &["accuracy", "pronunciation", "fluency", "overall"],
    }
}

/// Feedback for one rubric dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
    pub feedback: String,
}

/// The structured report returned by the judging provider.
///
/// Optional fields are resolved once, here at the adapter boundary: a
/// dimension the judge skipped carries the [`NOT_AVAILABLE`] marker
/// rather than being absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Overall score as reported by the judge, nominally 1-10.
    /// Passed through unclamped; only presence and numeric type are
    /// enforced upstream.
    pub score: f64,
    /// Per-dimension feedback in rubric order
    pub dimensions: Vec<Dimension>,
    /// Ordered improvement tips
    pub improvement_tips: Vec<String>,
}

impl EvaluationReport {
    /// Build a report from the judge's decoded JSON payload. Returns
    /// `None` when the mandatory numeric `score` field is absent.
    pub fn from_payload(mode: AssessmentMode, payload: &serde_json::Value) -> Option<Self> {
        let score = payload.get("score")?.as_f64()?;

        let dimensions = dimension_keys(mode)
            .iter()
            .map(|key| Dimension {
                name: (*key).to_string(),
                feedback: payload
                    .get(*key)
                    .and_then(|v| v.as_str())
                    .unwrap_or(NOT_AVAILABLE)
                    .to_string(),
            })
            .collect();

        let improvement_tips = payload
            .get("improvement_tips")
            .and_then(|v| v.as_array())
            .map(|tips| {
                tips.iter()
                    .filter_map(|tip| tip.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            score,
            dimensions,
            improvement_tips,
        })
    }

    /// Look up feedback for a dimension by name
    pub fn feedback(&self, name: &str) -> Option<&str> {
        self.dimensions
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.feedback.as_str())
    }
}
