//! Error types for the storage interfaces.

use thiserror::Error;
use uuid::Uuid;

/// Errors raised by blob and record stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No blob stored under the requested key.
    #[error("no object stored under key {0:?}")]
    NotFound(String),

    /// A required environment variable was not set when building a config
    /// with `from_env`.
    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),

    /// A detection record references an image that was never inserted.
    #[error("detection references unknown image {0}")]
    UnknownImage(Uuid),

    /// Backend-specific failure, wrapped as a message.
    #[error("storage backend error: {0}")]
    Backend(String),
}
