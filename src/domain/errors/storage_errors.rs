use crate::domain::value_objects::ObjectKey;

/// Errors that can occur during storage operations
#[derive(Debug, Clone)]
pub enum StorageError {
    /// Object not found
    ObjectNotFound { key: ObjectKey },

    /// Access denied
    AccessDenied { key: ObjectKey, operation: String },

    /// Validation error
    ValidationError { message: String },

    /// Infrastructure error with external source
    InfrastructureError {
        message: String,
        source: Option<String>, // Store error as string to allow Clone
    },

    /// Reading or writing the local side of a transfer failed
    LocalIo { path: String, message: String },
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::ObjectNotFound { key } => {
                write!(f, "Object not found: {}", key)
            }
            StorageError::AccessDenied { key, operation } => {
                write!(
                    f,
                    "Access denied for operation '{}' on object: {}",
                    operation, key
                )
            }
            StorageError::ValidationError { message } => {
                write!(f, "Validation error: {}", message)
            }
            StorageError::InfrastructureError { message, .. } => {
                write!(f, "Infrastructure error: {}", message)
            }
            StorageError::LocalIo { path, message } => {
                write!(f, "Local file error for '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl StorageError {
    pub(crate) fn local_io(path: &std::path::Path, err: std::io::Error) -> Self {
        StorageError::LocalIo {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
