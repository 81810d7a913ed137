pub mod answers;
pub mod ask;
pub mod documents;
pub mod login;
pub mod upload;
