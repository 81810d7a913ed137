//! Upload syllabus material as a stored document.
//!
//! Only plain-text files are extracted for real. Anything else gets a fixed
//! placeholder: there is no bundled PDF parser, and the stored text says so.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, StoredDocument};
use crate::ports::ArchiveStore;

/// Extensions read verbatim as text.
const TEXT_EXTENSIONS: [&str; 2] = ["txt", "md"];

/// Read a file, extract its text, and store it as a document.
pub fn execute<A: ArchiveStore>(archive: &A, path: &Path) -> Result<StoredDocument, AppError> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Configuration(format!("Not a file: {}", path.display())))?;

    let content = extract_text(path, &name)?;
    let document = StoredDocument::new(name, content);
    archive.add_document(document.clone())?;
    Ok(document)
}

fn extract_text(path: &Path, name: &str) -> Result<String, AppError> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();

    if TEXT_EXTENSIONS.contains(&extension.to_ascii_lowercase().as_str()) {
        return Ok(fs::read_to_string(path)?);
    }

    // Confirm the file exists before storing a placeholder for it.
    fs::metadata(path)?;

    if extension.eq_ignore_ascii_case("pdf") {
        return Ok(format!(
            "[{} — extraction unavailable]\n\nPDF text extraction is not available in this \
             build. Upload a .txt export of the document, or pass the text directly with \
             --context-file when asking.",
            name
        ));
    }

    Ok(format!(
        "[Mock extracted content for {}]\n\nBuilt-in text extraction only covers plain-text \
         files. Upload a .txt file, or pass the text directly with --context-file when asking.",
        name
    ))
}
