//! Instruction Templates
//!
//! Fixed system instructions for the two assessment rubrics.

use crate::audio::AssessmentMode;

const FREE_SPEECH_INSTRUCTION: &str = r#"You are an English language expert. Evaluate the user's speech for:
1. Pronunciation/clarity
2. Grammar accuracy
3. Vocabulary range
4. Fluency/pace
5. Overall coherence

Provide detailed feedback for each category and an overall score from 1-10.
Format your response as JSON with the following structure:
{
    "score": 7,
    "pronunciation": "Feedback on pronunciation...",
    "grammar": "Feedback on grammar...",
    "vocabulary": "Feedback on vocabulary...",
    "fluency": "Feedback on fluency...",
    "coherence": "Feedback on coherence...",
    "improvement_tips": ["Tip 1", "Tip 2", "Tip 3"]
}"#;

/// Build the system instruction for `mode`. Read-aloud instructions embed
/// the reference passage the user was asked to read.
pub(crate) fn instruction(mode: AssessmentMode, reference: Option<&str>) -> String {
    match mode {
        AssessmentMode::FreeSpeech => FREE_SPEECH_INSTRUCTION.to_string(),
        AssessmentMode::ReadAloud => {
            let reference = reference.unwrap_or_default();
            format!(
                r#"You are an English language expert. Evaluate the user's reading accuracy and fluency.

Original text: "{reference}"

Compare the original text with the user's reading and evaluate:
1. Reading accuracy (how well they read the exact words)
2. Pronunciation
3. Fluency/pace
4. Overall performance

Format your response as JSON with the following structure:
{{
    "score": 7,
    "accuracy": "Feedback on reading accuracy...",
    "pronunciation": "Feedback on pronunciation...",
    "fluency": "Feedback on fluency...",
    "overall": "Overall feedback...",
    "improvement_tips": ["Tip 1", "Tip 2", "Tip 3"]
}}"#
            )
        }
    }
}
