mod answer;
mod app_config;
mod document;
mod error;
mod mark_tier;
mod prompt;
mod user;

pub use answer::SavedAnswer;
pub use app_config::{AppConfig, GeminiApiConfig};
pub use document::StoredDocument;
pub use error::AppError;
pub use mark_tier::MarkTier;
pub use prompt::{NO_CONTEXT_CLAUSE, PromptPayload, compose};
pub use user::{TEST_EMAIL, TEST_PASSWORD, UserProfile, authenticate};

/// Directory holding all persisted state, resolved against the working
/// directory.
pub const ARCHIVE_DIR: &str = ".examark";
