//! Filesystem-backed archive: JSON lists under `.examark/`.
//!
//! Each collection lives in its own file and is rewritten whole on every
//! change (prepend-and-rewrite). A missing file reads as the empty
//! collection; a file that no longer parses is reported as corruption and is
//! never overwritten.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::{ARCHIVE_DIR, AppError, SavedAnswer, StoredDocument, UserProfile};
use crate::ports::{ArchiveStore, SessionStore};

const DOCUMENTS_FILE: &str = "documents.json";
const ANSWERS_FILE: &str = "answers.json";
const SESSION_FILE: &str = "session.json";

/// Filesystem archive rooted at an `.examark/` directory.
#[derive(Debug, Clone)]
pub struct FilesystemArchive {
    root: PathBuf,
}

impl FilesystemArchive {
    /// Create an archive rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create an archive under the current working directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd.join(ARCHIVE_DIR)))
    }

    /// Root directory of the archive.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn read_list<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>, AppError> {
        let path = self.file_path(name);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&path)?;
        serde_json::from_str(&raw).map_err(|e| AppError::ArchiveCorrupted {
            path: path.display().to_string(),
            details: e.to_string(),
        })
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<(), AppError> {
        fs::create_dir_all(&self.root)?;
        let raw = serde_json::to_string_pretty(value).map_err(|e| AppError::SerializeError {
            what: name.to_string(),
            details: e.to_string(),
        })?;
        fs::write(self.file_path(name), raw)?;
        Ok(())
    }

    fn remove_file(&self, name: &str) -> Result<(), AppError> {
        let path = self.file_path(name);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

impl ArchiveStore for FilesystemArchive {
    fn documents(&self) -> Result<Vec<StoredDocument>, AppError> {
        self.read_list(DOCUMENTS_FILE)
    }

    fn add_document(&self, document: StoredDocument) -> Result<(), AppError> {
        let mut documents = self.documents()?;
        documents.insert(0, document);
        self.write_json(DOCUMENTS_FILE, &documents)
    }

    fn remove_document(&self, id: &str) -> Result<bool, AppError> {
        let documents = self.documents()?;
        let original_len = documents.len();
        let remaining: Vec<StoredDocument> =
            documents.into_iter().filter(|doc| doc.id != id).collect();

        if remaining.len() == original_len {
            return Ok(false);
        }
        self.write_json(DOCUMENTS_FILE, &remaining)?;
        Ok(true)
    }

    fn answers(&self) -> Result<Vec<SavedAnswer>, AppError> {
        self.read_list(ANSWERS_FILE)
    }

    fn add_answer(&self, answer: SavedAnswer) -> Result<(), AppError> {
        let mut answers = self.answers()?;
        answers.insert(0, answer);
        self.write_json(ANSWERS_FILE, &answers)
    }

    fn clear_answers(&self) -> Result<(), AppError> {
        self.remove_file(ANSWERS_FILE)
    }
}

impl SessionStore for FilesystemArchive {
    fn current_user(&self) -> Result<Option<UserProfile>, AppError> {
        let path = self.file_path(SESSION_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)?;
        serde_json::from_str(&raw).map(Some).map_err(|e| AppError::ArchiveCorrupted {
            path: path.display().to_string(),
            details: e.to_string(),
        })
    }

    fn store_user(&self, user: &UserProfile) -> Result<(), AppError> {
        self.write_json(SESSION_FILE, user)
    }

    fn clear_user(&self) -> Result<(), AppError> {
        self.remove_file(SESSION_FILE)
    }
}
