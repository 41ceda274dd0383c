//! Audio Clip
//!
//! Immutable recording handed over by the external capture collaborator.

use serde::{Deserialize, Serialize};

/// Which rubric the judge applies to a clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentMode {
    /// Unscripted speech scored against the fixed speaking rubric
    FreeSpeech,
    /// Speech compared against a known reference passage
    ReadAloud,
}

impl AssessmentMode {
    /// Human-readable label used in history listings
    pub fn display_name(&self) -> &'static str {
        match self {
            AssessmentMode::FreeSpeech => "Speaking Test",
            AssessmentMode::ReadAloud => "Reading Test",
        }
    }
}

/// A recorded clip queued for assessment.
///
/// Built once by the capture collaborator and never mutated afterwards.
/// Read-aloud clips always carry a non-empty reference text: a missing or
/// blank reference falls back to the built-in default passage.
#[derive(Debug, Clone)]
pub struct AudioClip {
    samples: Vec<f32>,
    sample_rate: u32,
    mode: AssessmentMode,
    reference_text: Option<String>,
}

impl AudioClip {
    /// Clip for the free-speech rubric
    pub fn free_speech(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
            mode: AssessmentMode::FreeSpeech,
            reference_text: None,
        }
    }

    /// Clip for the read-aloud rubric
    pub fn read_aloud(samples: Vec<f32>, sample_rate: u32, reference_text: Option<String>) -> Self {
        let reference = reference_text
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| crate::config::default_passage().to_string());

        Self {
            samples,
            sample_rate,
            mode: AssessmentMode::ReadAloud,
            reference_text: Some(reference),
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn mode(&self) -> AssessmentMode {
        self.mode
    }

    pub fn reference_text(&self) -> Option<&str> {
        self.reference_text.as_deref()
    }

    /// True when the capture collaborator handed over no audio at all
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Clip duration in seconds
    pub fn duration_seconds(&self) -> f32 {
        super::duration_seconds(self.samples.len(), self.sample_rate)
    }
}
