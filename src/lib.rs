//! examark: mark-weighted exam-answer assistant backed by a generative-text
//! API, with all state persisted under a local `.examark/` directory.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use adapters::{FilesystemArchive, HttpGeminiClient};
use app::commands::{answers as answers_cmd, ask as ask_cmd, documents, login as auth, upload as upload_cmd};
use app::config::load_config;
use ports::MockAnswerClient;

pub use app::commands::ask::{
    AskOptions, AskOutcome, EMPTY_ANSWER_FALLBACK, TRANSPORT_FALLBACK,
};
pub use domain::{AppError, MarkTier, SavedAnswer, StoredDocument, UserProfile};

/// Log in with the mock authentication flow and persist the session.
pub fn login(email: &str, password: &str) -> Result<UserProfile, AppError> {
    let archive = FilesystemArchive::current()?;
    auth::login(&archive, email, password)
}

/// Remove the stored session.
pub fn logout() -> Result<(), AppError> {
    let archive = FilesystemArchive::current()?;
    auth::logout(&archive)
}

/// The logged-in user.
pub fn whoami() -> Result<UserProfile, AppError> {
    let archive = FilesystemArchive::current()?;
    auth::current_user(&archive)
}

/// Generate an exam-style answer for a question.
///
/// Requires a session. Uses the mock client for `--mock` and for prompt
/// previews; otherwise builds the HTTP client from `GEMINI_API_KEY` and the
/// optional `.examark/config.toml`.
pub fn ask(options: AskOptions) -> Result<AskOutcome, AppError> {
    let archive = FilesystemArchive::current()?;
    auth::current_user(&archive)?;

    if options.mock || options.prompt_preview {
        return ask_cmd::execute(&archive, &MockAnswerClient, options);
    }

    let config = load_config(archive.root())?;
    let client = HttpGeminiClient::from_env_with_config(&config.gemini)?;
    ask_cmd::execute(&archive, &client, options)
}

/// Upload a file as a stored document.
pub fn upload(file: &Path) -> Result<StoredDocument, AppError> {
    let archive = logged_in_archive()?;
    upload_cmd::execute(&archive, file)
}

/// All stored documents, most recent first.
pub fn documents_list() -> Result<Vec<StoredDocument>, AppError> {
    let archive = logged_in_archive()?;
    documents::list(&archive)
}

/// Look up a stored document by id or name.
pub fn document_show(reference: &str) -> Result<StoredDocument, AppError> {
    let archive = logged_in_archive()?;
    documents::show(&archive, reference)
}

/// Delete a stored document by id.
pub fn document_delete(id: &str) -> Result<(), AppError> {
    let archive = logged_in_archive()?;
    documents::delete(&archive, id)
}

/// Saved answers, most recent first.
pub fn answers_list(limit: Option<usize>) -> Result<Vec<SavedAnswer>, AppError> {
    let archive = logged_in_archive()?;
    answers_cmd::list(&archive, limit)
}

/// Remove all saved answers.
pub fn answers_clear() -> Result<(), AppError> {
    let archive = logged_in_archive()?;
    answers_cmd::clear(&archive)
}

fn logged_in_archive() -> Result<FilesystemArchive, AppError> {
    let archive = FilesystemArchive::current()?;
    auth::current_user(&archive)?;
    Ok(archive)
}
