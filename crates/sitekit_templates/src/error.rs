//! Error types for template operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur during template resolution and materialization.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Destination directory is not empty: {0}")]
    DestinationNotEmpty(PathBuf),

    #[error("No packaged archive for resource: {0}")]
    ResourceMissing(String),

    #[error("Entry path escapes the destination: {0}")]
    UnsafePath(String),

    #[error("Initializer hook '{hook}' failed: {message}")]
    HookFailed { hook: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}
