//! Reading Passage Source
//!
//! Supplies the reference text for read-aloud assessment.

use super::ReadingSettings;

const DEFAULT_PASSAGE: &str = "The rapid advancement of artificial intelligence \
has brought significant changes to various industries. While some fear job \
displacement, others believe AI will create new opportunities and enhance human \
capabilities. Researchers continue to debate the long-term implications of these \
technologies on society, economy, and human cognition.";

/// The built-in read-aloud passage
pub fn default_passage() -> &'static str {
    DEFAULT_PASSAGE
}

/// Load the read-aloud passage from the configured file, falling back to
/// the built-in default when the file is unset, unreadable, or blank.
pub fn load_passage(settings: &ReadingSettings) -> String {
    let Some(path) = &settings.passage_file else {
        return DEFAULT_PASSAGE.to_string();
    };

    match std::fs::read_to_string(path) {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => {
            tracing::warn!("Passage file {:?} is blank, using built-in passage", path);
            DEFAULT_PASSAGE.to_string()
        }
        Err(e) => {
            tracing::warn!("Failed to read passage file {:?}: {}", path, e);
            DEFAULT_PASSAGE.to_string()
        }
    }
}
