//! Integration Tests for the Assessment Pipeline
//!
//! Exercise the full flow against HTTP mocks: AudioClip -> GoogleRecognizer
//! -> GroqJudge -> Session ledger, including the failure short-circuits.

use speakeval::audio::{AssessmentMode, AudioClip};
use speakeval::config::{ApiCredential, ConfigError, Settings};
use speakeval::evaluation::{EvaluationError, GroqJudge, NOT_AVAILABLE};
use speakeval::history::Session;
use speakeval::pipeline::{Pipeline, PipelineError, PipelineState};
use speakeval::transcription::GoogleRecognizer;

const TEST_KEY: &str = "gsk_abcdefghijklmnopqrstuvwxyz123456789012345678901234";

fn test_credential() -> ApiCredential {
    let mut settings = Settings::default();
    settings.judge.api_key = Some(TEST_KEY.to_string());
    ApiCredential::resolve(None, &settings).unwrap()
}

fn speech_clip() -> AudioClip {
    AudioClip::free_speech(vec![0.1; 16000], 16000)
}

/// Recognition reply for a given transcript, in the provider's
/// line-delimited shape
fn recognition_reply(text: &str) -> String {
    format!(
        "{{\"result\":[]}}\n{{\"result\":[{{\"alternative\":[{{\"transcript\":\"{}\",\"confidence\":0.95}}],\"final\":true}}],\"result_index\":0}}",
        text
    )
}

/// Chat-completions envelope wrapping a JSON report string
fn judge_reply(content: &str) -> String {
    serde_json::to_string(&serde_json::json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    }))
    .unwrap()
}

async fn mock_recognizer(server: &mut mockito::ServerGuard, body: &str) -> GoogleRecognizer {
    server
        .mock("POST", "/")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;
    GoogleRecognizer::new(None).with_base_url(server.url())
}

async fn mock_judge(server: &mut mockito::ServerGuard, status: usize, body: &str) -> GroqJudge {
    server
        .mock("POST", "/")
        .with_status(status)
        .with_body(body)
        .create_async()
        .await;
    GroqJudge::new(test_credential()).with_base_url(server.url())
}

// ============================================================================
// SECTION 1: End-to-End Scenarios
// ============================================================================

#[tokio::test]
async fn scenario_a_free_speech_success_appends_history_entry() {
    let mut stt_server = mockito::Server::new_async().await;
    let mut judge_server = mockito::Server::new_async().await;

    let recognizer = mock_recognizer(
        &mut stt_server,
        &recognition_reply("I love traveling to Japan because of its culture"),
    )
    .await;
    let judge = mock_judge(
        &mut judge_server,
        200,
        &judge_reply(
            "{\"score\":8,\"pronunciation\":\"clear\",\"grammar\":\"good\",\"vocabulary\":\"varied\",\"fluency\":\"smooth\",\"coherence\":\"logical\",\"improvement_tips\":[\"slow down\"]}",
        ),
    )
    .await;

    let mut pipeline = Pipeline::new(Box::new(recognizer), Box::new(judge));
    assert_eq!(pipeline.state(), PipelineState::Idle);

    let assessment = pipeline.submit(speech_clip()).await.unwrap();

    assert_eq!(pipeline.state(), PipelineState::Completed);
    assert_eq!(
        assessment.transcript,
        "I love traveling to Japan because of its culture"
    );
    assert_eq!(assessment.report.score, 8.0);
    assert_eq!(assessment.report.feedback("pronunciation"), Some("clear"));
    assert_eq!(assessment.report.improvement_tips, vec!["slow down"]);

    let session = pipeline.session();
    assert_eq!(session.len(), 1);
    let entry = session.last().unwrap();
    assert_eq!(entry.score, 8.0);
    assert_eq!(
        entry.transcript,
        "I love traveling to Japan because of its culture"
    );
    assert_eq!(entry.mode, AssessmentMode::FreeSpeech);
}

#[tokio::test]
async fn scenario_b_invalid_judge_json_fails_without_ledger_mutation() {
    let mut stt_server = mockito::Server::new_async().await;
    let mut judge_server = mockito::Server::new_async().await;

    let recognizer = mock_recognizer(
        &mut stt_server,
        &recognition_reply("I love traveling to Japan because of its culture"),
    )
    .await;
    let judge = mock_judge(&mut judge_server, 200, &judge_reply("not valid json at all")).await;

    let mut pipeline = Pipeline::new(Box::new(recognizer), Box::new(judge));
    let result = pipeline.submit(speech_clip()).await;

    assert!(matches!(
        result,
        Err(PipelineError::Evaluation(EvaluationError::ParseFailure(_)))
    ));
    assert_eq!(pipeline.state(), PipelineState::Failed);
    assert!(pipeline.session().is_empty());
}

#[tokio::test]
async fn scenario_c_missing_credential_refuses_session_startup() {
    std::env::remove_var("GROQ_API_KEY");
    let settings = Settings::default();

    // Startup fails before any pipeline exists for the session.
    let result = ApiCredential::resolve(None, &settings);
    assert_eq!(result.unwrap_err(), ConfigError::MissingCredential);

    // With no pipeline, the session ledger can never be touched.
    let session = Session::new();
    assert!(session.is_empty());
}

// ============================================================================
// SECTION 2: Failure Short-Circuits
// ============================================================================

#[tokio::test]
async fn unintelligible_audio_skips_the_judge_entirely() {
    let mut stt_server = mockito::Server::new_async().await;
    let mut judge_server = mockito::Server::new_async().await;

    // Silence: recognizer finds nothing.
    let recognizer = mock_recognizer(&mut stt_server, "{\"result\":[]}").await;

    // The judge endpoint expects zero hits.
    let judge_mock = judge_server
        .mock("POST", "/")
        .expect(0)
        .create_async()
        .await;
    let judge = GroqJudge::new(test_credential()).with_base_url(judge_server.url());

    let mut pipeline = Pipeline::new(Box::new(recognizer), Box::new(judge));
    let result = pipeline.submit(speech_clip()).await;

    assert!(matches!(result, Err(PipelineError::Transcription(_))));
    assert!(pipeline.session().is_empty());
    judge_mock.assert_async().await;
}

#[tokio::test]
async fn judge_outage_fails_the_submission() {
    let mut stt_server = mockito::Server::new_async().await;
    let mut judge_server = mockito::Server::new_async().await;

    let recognizer = mock_recognizer(&mut stt_server, &recognition_reply("hello")).await;
    let judge = mock_judge(&mut judge_server, 503, "").await;

    let mut pipeline = Pipeline::new(Box::new(recognizer), Box::new(judge));
    let result = pipeline.submit(speech_clip()).await;

    assert!(matches!(
        result,
        Err(PipelineError::Evaluation(EvaluationError::ProviderUnavailable(_)))
    ));
    assert!(pipeline.session().is_empty());
}

#[tokio::test]
async fn judge_reply_without_score_is_schema_violation() {
    let mut stt_server = mockito::Server::new_async().await;
    let mut judge_server = mockito::Server::new_async().await;

    let recognizer = mock_recognizer(&mut stt_server, &recognition_reply("hello")).await;
    let judge = mock_judge(
        &mut judge_server,
        200,
        &judge_reply("{\"pronunciation\":\"clear\"}"),
    )
    .await;

    let mut pipeline = Pipeline::new(Box::new(recognizer), Box::new(judge));
    let result = pipeline.submit(speech_clip()).await;

    assert!(matches!(
        result,
        Err(PipelineError::Evaluation(EvaluationError::SchemaViolation))
    ));
    assert!(pipeline.session().is_empty());
}

// ============================================================================
// SECTION 3: Read-Aloud Mode
// ============================================================================

#[tokio::test]
async fn read_aloud_uses_default_passage_and_reading_rubric() {
    let mut stt_server = mockito::Server::new_async().await;
    let mut judge_server = mockito::Server::new_async().await;

    let recognizer = mock_recognizer(
        &mut stt_server,
        &recognition_reply("the rapid advancement of artificial intelligence"),
    )
    .await;
    // Partial reply: unsupplied dimensions must resolve to the marker.
    let judge = mock_judge(
        &mut judge_server,
        200,
        &judge_reply("{\"score\":6,\"accuracy\":\"close to the text\"}"),
    )
    .await;

    let mut pipeline = Pipeline::new(Box::new(recognizer), Box::new(judge));

    // No reference supplied: the built-in default passage kicks in, so
    // the submission never fails with NotConfigured.
    let clip = AudioClip::read_aloud(vec![0.1; 16000], 16000, None);
    let assessment = pipeline.submit(clip).await.unwrap();

    assert_eq!(assessment.report.score, 6.0);
    assert_eq!(
        assessment.report.feedback("accuracy"),
        Some("close to the text")
    );
    assert_eq!(assessment.report.feedback("overall"), Some(NOT_AVAILABLE));

    let entry = pipeline.session().last().unwrap();
    assert_eq!(entry.mode, AssessmentMode::ReadAloud);
}

// ============================================================================
// SECTION 4: Session Serialization Guarantees
// ============================================================================

#[tokio::test]
async fn n_submissions_yield_n_chronological_entries() {
    let mut stt_server = mockito::Server::new_async().await;
    let mut judge_server = mockito::Server::new_async().await;

    stt_server
        .mock("POST", "/")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(recognition_reply("practice makes perfect"))
        .expect(4)
        .create_async()
        .await;
    judge_server
        .mock("POST", "/")
        .with_status(200)
        .with_body(judge_reply("{\"score\":7,\"fluency\":\"steady\"}"))
        .expect(4)
        .create_async()
        .await;

    let recognizer = GoogleRecognizer::new(None).with_base_url(stt_server.url());
    let judge = GroqJudge::new(test_credential()).with_base_url(judge_server.url());
    let mut pipeline = Pipeline::new(Box::new(recognizer), Box::new(judge));

    for _ in 0..4 {
        pipeline.submit(speech_clip()).await.unwrap();
    }

    let session = pipeline.into_session();
    assert_eq!(session.len(), 4);
    for entry in session.entries() {
        assert_eq!(entry.transcript, "practice makes perfect");
        assert_eq!(entry.score, 7.0);
    }
    for window in session.entries().windows(2) {
        assert!(window[0].timestamp <= window[1].timestamp);
    }
}

#[tokio::test]
async fn failed_attempt_between_successes_leaves_ledger_consistent() {
    let mut stt_server = mockito::Server::new_async().await;
    let mut judge_server = mockito::Server::new_async().await;

    stt_server
        .mock("POST", "/")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(recognition_reply("steady on"))
        .expect(2)
        .create_async()
        .await;

    let ok_body = judge_reply("{\"score\":7}");
    judge_server
        .mock("POST", "/")
        .with_status(200)
        .with_body(&ok_body)
        .create_async()
        .await;

    let recognizer = GoogleRecognizer::new(None).with_base_url(stt_server.url());
    let judge = GroqJudge::new(test_credential()).with_base_url(judge_server.url());
    let mut pipeline = Pipeline::new(Box::new(recognizer), Box::new(judge));

    pipeline.submit(speech_clip()).await.unwrap();
    assert_eq!(pipeline.session().len(), 1);

    // Empty clip fails at the capture seam, no provider traffic.
    let result = pipeline
        .submit(AudioClip::free_speech(Vec::new(), 16000))
        .await;
    assert!(matches!(result, Err(PipelineError::Capture(_))));
    assert_eq!(pipeline.session().len(), 1);

    pipeline.submit(speech_clip()).await.unwrap();
    assert_eq!(pipeline.session().len(), 2);
}
