pub mod archive_filesystem;
pub mod gemini_client_http;

pub use archive_filesystem::FilesystemArchive;
pub use gemini_client_http::{API_KEY_ENV, HttpGeminiClient};
