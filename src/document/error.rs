use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to load document {path}: {message}")]
    LoadFailed { path: String, message: String },
}
