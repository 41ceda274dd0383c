//! Evaluation Module
//!
//! Structured skill assessment via an external language-model judge.

mod groq;
mod judge;
mod prompts;
mod report;

pub use groq::*;
pub use judge::*;
pub use report::*;

pub(crate) use prompts::*;
