use std::path::PathBuf;

use thiserror::Error as ThisError;

use crate::domain::{
    errors::{StorageError, ToolError, ValidationError},
    value_objects::ObjectKey,
};

/// Everything that can end a thumbnail invocation early.
///
/// Routing mismatches (foreign bucket, non-PDF upload) are not errors; they are reported
/// as [`crate::domain::models::ThumbnailOutcome::Skipped`].
#[derive(ThisError, Debug)]
pub enum ThumbnailError {
    #[error("cannot split object name: {0}")]
    InvalidObjectName(#[source] ValidationError),

    #[error("failed to prepare scratch directory {path:?}: {source}")]
    Scratch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to download {key}: {source}")]
    Download {
        key: ObjectKey,
        #[source]
        source: StorageError,
    },

    #[error("rasterizing first page failed: {0}")]
    Rasterize(#[source] ToolError),

    #[error("resizing thumbnail failed: {0}")]
    Resize(#[source] ToolError),

    #[error("failed to upload {key}: {source}")]
    Upload {
        key: ObjectKey,
        #[source]
        source: StorageError,
    },

    #[error("failed to remove scratch file {path:?}: {source}")]
    Cleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ThumbnailError {
    /// Stable tag for logs and responses
    pub fn kind(&self) -> &'static str {
        match self {
            ThumbnailError::InvalidObjectName(_) => "invalid_object_name",
            ThumbnailError::Scratch { .. } => "scratch",
            ThumbnailError::Download { .. } => "download",
            ThumbnailError::Rasterize(_) => "rasterize",
            ThumbnailError::Resize(_) => "resize",
            ThumbnailError::Upload { .. } => "upload",
            ThumbnailError::Cleanup { .. } => "cleanup",
        }
    }
}

/// Result type for a single thumbnail invocation
pub type ThumbnailResult<T> = Result<T, ThumbnailError>;
