//! Stored-document commands.

use crate::domain::{AppError, StoredDocument};
use crate::ports::ArchiveStore;

/// All stored documents, most recent first.
pub fn list<A: ArchiveStore>(archive: &A) -> Result<Vec<StoredDocument>, AppError> {
    archive.documents()
}

/// Look up a document by id or name.
pub fn show<A: ArchiveStore>(archive: &A, reference: &str) -> Result<StoredDocument, AppError> {
    archive
        .documents()?
        .into_iter()
        .find(|doc| doc.id == reference || doc.name == reference)
        .ok_or_else(|| AppError::DocumentNotFound(reference.to_string()))
}

/// Delete a document by id.
pub fn delete<A: ArchiveStore>(archive: &A, id: &str) -> Result<(), AppError> {
    if !archive.remove_document(id)? {
        return Err(AppError::DocumentNotFound(id.to_string()));
    }
    Ok(())
}
