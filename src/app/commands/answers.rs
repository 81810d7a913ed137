//! Saved-answer commands.

use crate::domain::{AppError, SavedAnswer};
use crate::ports::ArchiveStore;

/// Saved answers, most recent first, optionally truncated.
pub fn list<A: ArchiveStore>(
    archive: &A,
    limit: Option<usize>,
) -> Result<Vec<SavedAnswer>, AppError> {
    let mut answers = archive.answers()?;
    if let Some(limit) = limit {
        answers.truncate(limit);
    }
    Ok(answers)
}

/// Remove all saved answers.
pub fn clear<A: ArchiveStore>(archive: &A) -> Result<(), AppError> {
    archive.clear_answers()
}
