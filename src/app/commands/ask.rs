//! The ask command: compose a prompt, call the generation client, render the
//! outcome.
//!
//! Generation failures never escape this layer as process errors: the outcome
//! always carries either the answer text or one of two fixed fallback
//! sentences, with the underlying cause logged for diagnostics only.

use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, MarkTier, SavedAnswer, compose};
use crate::ports::{AnswerClient, ArchiveStore, GenerationError};

/// Shown when the service responded without any answer text.
pub const EMPTY_ANSWER_FALLBACK: &str = "Failed to generate answer. Please try again.";

/// Shown when the request itself failed.
pub const TRANSPORT_FALLBACK: &str =
    "Error generating answer. Please check your connection or API key.";

/// Context label recorded when no document or file context was used.
const GENERAL_CONTEXT_LABEL: &str = "General";

/// Inputs for one ask invocation.
#[derive(Debug, Clone, Default)]
pub struct AskOptions {
    pub question: String,
    pub marks: MarkTier,
    /// Stored document (id or name) to use as context.
    pub doc: Option<String>,
    /// File to read context text from.
    pub context_file: Option<PathBuf>,
    /// Persist the answer after a successful generation.
    pub save: bool,
    /// Render the composed prompt without calling the service.
    pub prompt_preview: bool,
    /// Use the offline mock client.
    pub mock: bool,
}

/// Result of one ask invocation.
#[derive(Debug, Clone)]
pub struct AskOutcome {
    /// Answer text, fallback sentence, or (in preview mode) the prompt.
    pub display: String,
    /// Whether this is a prompt preview rather than an answer.
    pub preview: bool,
    /// Whether generation succeeded.
    pub generated: bool,
    /// The persisted record, when `--save` was given and generation succeeded.
    pub saved: Option<SavedAnswer>,
}

/// Fixed user-facing sentence for a generation failure.
pub fn fallback_text(error: &GenerationError) -> &'static str {
    match error {
        GenerationError::EmptyAnswer => EMPTY_ANSWER_FALLBACK,
        GenerationError::Transport { .. } => TRANSPORT_FALLBACK,
    }
}

/// Run the ask flow against the given archive and client.
pub fn execute<A, C>(archive: &A, client: &C, options: AskOptions) -> Result<AskOutcome, AppError>
where
    A: ArchiveStore,
    C: AnswerClient,
{
    let question = options.question.trim();
    if question.is_empty() {
        return Err(AppError::EmptyQuestion);
    }

    let (context, context_label) = resolve_context(archive, &options)?;
    let payload = compose(question, options.marks, &context)?;

    if options.prompt_preview {
        return Ok(AskOutcome {
            display: payload.text,
            preview: true,
            generated: false,
            saved: None,
        });
    }

    match client.generate(&payload) {
        Ok(answer) => {
            let saved = if options.save {
                let record = SavedAnswer::new(
                    question,
                    answer.as_str(),
                    options.marks,
                    Some(context_label.unwrap_or_else(|| GENERAL_CONTEXT_LABEL.to_string())),
                );
                archive.add_answer(record.clone())?;
                Some(record)
            } else {
                None
            };
            Ok(AskOutcome { display: answer, preview: false, generated: true, saved })
        }
        Err(error) => {
            tracing::warn!(%error, "answer generation failed");
            Ok(AskOutcome {
                display: fallback_text(&error).to_string(),
                preview: false,
                generated: false,
                saved: None,
            })
        }
    }
}

/// Resolve the context text and its label from the selected source.
fn resolve_context<A: ArchiveStore>(
    archive: &A,
    options: &AskOptions,
) -> Result<(String, Option<String>), AppError> {
    if let Some(doc_ref) = &options.doc {
        let documents = archive.documents()?;
        let doc = documents
            .iter()
            .find(|d| d.id == *doc_ref || d.name == *doc_ref)
            .ok_or_else(|| AppError::DocumentNotFound(doc_ref.clone()))?;
        return Ok((doc.content.clone(), Some(doc.name.clone())));
    }

    if let Some(path) = &options.context_file {
        if !path.exists() {
            return Err(AppError::ContextFileNotFound(path.display().to_string()));
        }
        let text = fs::read_to_string(path)?;
        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        return Ok((text, Some(label)));
    }

    Ok((String::new(), None))
}
