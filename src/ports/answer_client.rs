//! Answer generation client port definition.

use thiserror::Error;

use crate::domain::PromptPayload;

/// Why a generation attempt produced no usable answer. Callers decide how
/// much of this to surface; nothing here reaches the user verbatim.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Network or service failure, including malformed responses.
    #[error("generation request failed: {message}")]
    Transport { message: String, status: Option<u16> },

    /// The service responded without any answer text.
    #[error("model response contained no answer text")]
    EmptyAnswer,
}

/// Port for answer generation. One outbound call per invocation, no retries.
pub trait AnswerClient {
    /// Generate an answer for the composed prompt.
    fn generate(&self, payload: &PromptPayload) -> Result<String, GenerationError>;
}

/// Mock client for offline runs without API calls.
#[derive(Debug, Clone, Default)]
pub struct MockAnswerClient;

impl AnswerClient for MockAnswerClient {
    fn generate(&self, payload: &PromptPayload) -> Result<String, GenerationError> {
        Ok(format!(
            "## Mock Answer\n\nLocally generated placeholder for a {}-mark answer.\n\n\
             **Question:** {}\n\nRun without --mock and with GEMINI_API_KEY set to \
             get a real answer.",
            payload.marks.marks(),
            payload.question
        ))
    }
}
