use object_store::path::Path as ObjectPath;

use crate::domain::{errors::StorageError, value_objects::ObjectKey};

/// Backend path for a key, taken literally.
///
/// `ObjectPath::from` would percent-encode characters such as `[`, `%` or `#` and address
/// a different object than the one named in the event.
pub(crate) fn object_path(key: &ObjectKey) -> Result<ObjectPath, StorageError> {
    ObjectPath::parse(key.as_str()).map_err(|e| StorageError::ValidationError {
        message: format!("'{}' is not a valid object path: {}", key, e),
    })
}

/// Attach the key and operation we were working on to a backend error
pub(crate) fn map_store_error(
    err: object_store::Error,
    key: &ObjectKey,
    operation: &str,
) -> StorageError {
    match err {
        object_store::Error::NotFound { .. } => StorageError::ObjectNotFound { key: key.clone() },
        object_store::Error::PermissionDenied { .. }
        | object_store::Error::Unauthenticated { .. } => StorageError::AccessDenied {
            key: key.clone(),
            operation: operation.to_string(),
        },
        other => StorageError::InfrastructureError {
            message: format!("Failed to {} {}: {}", operation, key, other),
            source: Some(other.to_string()),
        },
    }
}
