//! Groq Judge
//!
//! Skill assessment via Groq's OpenAI-compatible chat completions API.

use super::{instruction, EvaluationError, EvaluationReport, Judge};
use crate::audio::AssessmentMode;
use crate::config::{ApiCredential, JudgeSettings};
use async_trait::async_trait;
use std::time::Duration;

const GROQ_CHAT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Default judging model
pub const DEFAULT_JUDGE_MODEL: &str = "llama3-8b-8192";

/// Groq chat-completions judge
pub struct GroqJudge {
    credential: ApiCredential,
    model: String,
    temperature: f32,
    base_url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl GroqJudge {
    /// Create a judge with default model, temperature, and timeout
    pub fn new(credential: ApiCredential) -> Self {
        Self::with_config(credential, None, 0.5, DEFAULT_TIMEOUT_SECONDS)
    }

    /// Create a judge from resolved settings
    pub fn from_settings(credential: ApiCredential, settings: &JudgeSettings) -> Self {
        Self::with_config(
            credential,
            Some(settings.model.clone()),
            settings.temperature,
            settings.timeout_seconds,
        )
    }

    /// Create a judge with full configuration
    pub fn with_config(
        credential: ApiCredential,
        model: Option<String>,
        temperature: f32,
        timeout_seconds: u64,
    ) -> Self {
        let timeout = Duration::from_secs(timeout_seconds);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            credential,
            model: model.unwrap_or_else(|| DEFAULT_JUDGE_MODEL.to_string()),
            temperature,
            base_url: GROQ_CHAT_URL.to_string(),
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
}

#[async_trait]
impl Judge for GroqJudge {
    async fn evaluate(
        &self,
        transcript: &str,
        mode: AssessmentMode,
        reference: Option<&str>,
    ) -> Result<EvaluationReport, EvaluationError> {
        // A read-aloud comparison always has a passage to compare against:
        // a missing or blank reference resolves to the built-in default.
        let reference = match mode {
            AssessmentMode::ReadAloud => Some(
                reference
                    .filter(|text| !text.trim().is_empty())
                    .unwrap_or_else(|| crate::config::default_passage()),
            ),
            AssessmentMode::FreeSpeech => None,
        };

        let body = serde_json::json!({
            "model": self.model,
            "temperature": self.temperature,
            "response_format": { "type": "json_object" },
            "messages": [
                { "role": "system", "content": instruction(mode, reference) },
                { "role": "user", "content": transcript }
            ]
        });

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(self.credential.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Judge request failed: {}", e);
                EvaluationError::ProviderUnavailable(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Judging service returned {}: {}", status, body);
            return Err(EvaluationError::ProviderUnavailable(format!(
                "HTTP {}",
                status
            )));
        }

        let envelope: ChatCompletionReply = response
            .json()
            .await
            .map_err(|e| EvaluationError::ParseFailure(e.to_string()))?;

        let content = envelope
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| EvaluationError::ParseFailure("reply carried no choices".to_string()))?;

        let payload: serde_json::Value = serde_json::from_str(content)
            .map_err(|e| EvaluationError::ParseFailure(e.to_string()))?;

        let report = EvaluationReport::from_payload(mode, &payload)
            .ok_or(EvaluationError::SchemaViolation)?;

        tracing::debug!(score = report.score, "Judge report received");
        Ok(report)
    }

    fn name(&self) -> &'static str {
        "groq"
    }
}

/// Chat completions reply envelope
#[derive(serde::Deserialize)]
struct ChatCompletionReply {
    choices: Vec<ReplyChoice>,
}

#[derive(serde::Deserialize)]
struct ReplyChoice {
    message: ReplyMessage,
}

#[derive(serde::Deserialize)]
struct ReplyMessage {
    content: String,
}
