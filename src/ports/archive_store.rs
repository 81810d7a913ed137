//! Archive storage port definition.
//!
//! Both collections are ordered most-recent-first: adds prepend, reads return
//! the stored order unchanged.

use crate::domain::{AppError, SavedAnswer, StoredDocument};

/// Port for the persisted document and answer collections.
pub trait ArchiveStore {
    /// All stored documents, most recent first.
    fn documents(&self) -> Result<Vec<StoredDocument>, AppError>;

    /// Prepend a document and rewrite the collection.
    fn add_document(&self, document: StoredDocument) -> Result<(), AppError>;

    /// Remove a document by identifier. Returns whether anything was removed.
    fn remove_document(&self, id: &str) -> Result<bool, AppError>;

    /// All saved answers, most recent first.
    fn answers(&self) -> Result<Vec<SavedAnswer>, AppError>;

    /// Prepend an answer and rewrite the collection.
    fn add_answer(&self, answer: SavedAnswer) -> Result<(), AppError>;

    /// Remove the whole saved-answers collection. There is no per-record
    /// delete path.
    fn clear_answers(&self) -> Result<(), AppError>;
}
