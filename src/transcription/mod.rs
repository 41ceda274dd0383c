//! Transcription Module
//!
//! Speech-to-text via an external recognition provider.

mod google;
mod recognizer;

pub use google::*;
pub use recognizer::*;
