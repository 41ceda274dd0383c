//! Speakeval Library
//!
//! AI-assisted spoken-English assessment: transcribe a recorded clip,
//! have a language-model judge score it against a rubric, and keep each
//! completed attempt in the session history.
//!
//! The typical flow:
//!
//! ```no_run
//! use speakeval::audio::AudioClip;
//! use speakeval::config::{ApiCredential, Settings};
//! use speakeval::evaluation::GroqJudge;
//! use speakeval::pipeline::Pipeline;
//! use speakeval::transcription::GoogleRecognizer;
//!
//! # async fn run(samples: Vec<f32>) -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::load()?;
//! let credential = ApiCredential::resolve(None, &settings)?;
//!
//! let mut pipeline = Pipeline::new(
//!     Box::new(GoogleRecognizer::new(Some(settings.recognition.language.clone()))),
//!     Box::new(GroqJudge::from_settings(credential, &settings.judge)),
//! );
//!
//! let assessment = pipeline.submit(AudioClip::free_speech(samples, 16000)).await?;
//! println!("score: {}", assessment.report.score);
//! # Ok(())
//! # }
//! ```

pub mod audio;
pub mod config;
pub mod evaluation;
pub mod history;
pub mod pipeline;
pub mod transcription;
