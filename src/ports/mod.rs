mod answer_client;
mod archive_store;
mod session_store;

pub use answer_client::{AnswerClient, GenerationError, MockAnswerClient};
pub use archive_store::ArchiveStore;
pub use session_store::SessionStore;
