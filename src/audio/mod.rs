//! Audio Module
//!
//! Recorded clips and WAV encoding for provider upload.

mod clip;
mod format;

pub use clip::*;
pub use format::*;
