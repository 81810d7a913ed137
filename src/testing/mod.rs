//! In-memory test doubles for the storage and generation ports.

use std::sync::Mutex;

use crate::domain::{AppError, PromptPayload, SavedAnswer, StoredDocument, UserProfile};
use crate::ports::{AnswerClient, ArchiveStore, GenerationError, SessionStore};

/// In-memory archive + session store.
#[derive(Debug, Default)]
pub(crate) struct MemoryArchive {
    documents: Mutex<Vec<StoredDocument>>,
    answers: Mutex<Vec<SavedAnswer>>,
    user: Mutex<Option<UserProfile>>,
}

impl ArchiveStore for MemoryArchive {
    fn documents(&self) -> Result<Vec<StoredDocument>, AppError> {
        Ok(self.documents.lock().unwrap().clone())
    }

    fn add_document(&self, document: StoredDocument) -> Result<(), AppError> {
        self.documents.lock().unwrap().insert(0, document);
        Ok(())
    }

    fn remove_document(&self, id: &str) -> Result<bool, AppError> {
        let mut documents = self.documents.lock().unwrap();
        let original_len = documents.len();
        documents.retain(|doc| doc.id != id);
        Ok(documents.len() != original_len)
    }

    fn answers(&self) -> Result<Vec<SavedAnswer>, AppError> {
        Ok(self.answers.lock().unwrap().clone())
    }

    fn add_answer(&self, answer: SavedAnswer) -> Result<(), AppError> {
        self.answers.lock().unwrap().insert(0, answer);
        Ok(())
    }

    fn clear_answers(&self) -> Result<(), AppError> {
        self.answers.lock().unwrap().clear();
        Ok(())
    }
}

impl SessionStore for MemoryArchive {
    fn current_user(&self) -> Result<Option<UserProfile>, AppError> {
        Ok(self.user.lock().unwrap().clone())
    }

    fn store_user(&self, user: &UserProfile) -> Result<(), AppError> {
        *self.user.lock().unwrap() = Some(user.clone());
        Ok(())
    }

    fn clear_user(&self) -> Result<(), AppError> {
        *self.user.lock().unwrap() = None;
        Ok(())
    }
}

/// Client that always fails with the configured error.
pub(crate) struct FailingClient(pub(crate) fn() -> GenerationError);

impl AnswerClient for FailingClient {
    fn generate(&self, _payload: &PromptPayload) -> Result<String, GenerationError> {
        Err((self.0)())
    }
}

/// Client that panics when called, for asserting a path never reaches the
/// network.
pub(crate) struct UnreachableClient;

impl AnswerClient for UnreachableClient {
    fn generate(&self, _payload: &PromptPayload) -> Result<String, GenerationError> {
        panic!("generation client must not be called on this path");
    }
}
