use std::path::Path;

use async_trait::async_trait;

use crate::domain::{
    errors::{StorageError, StorageResult},
    value_objects::ObjectKey,
};

/// Port for object storage operations
/// This abstracts the actual storage backend (GCS, S3, local disk, memory)
#[async_trait]
pub trait ObjectStore: Send + Sync + 'static {
    /// Store object data
    async fn put_object(
        &self,
        key: &ObjectKey,
        data: Vec<u8>,
        content_type: Option<&str>,
    ) -> StorageResult<()>;

    /// Retrieve object data
    async fn get_object(&self, key: &ObjectKey) -> StorageResult<Vec<u8>>;

    /// Check if object exists
    async fn object_exists(&self, key: &ObjectKey) -> StorageResult<bool>;

    /// Fetch an object into a local file, returning the number of bytes written
    async fn download(&self, key: &ObjectKey, destination: &Path) -> StorageResult<u64> {
        let data = self.get_object(key).await?;
        tokio::fs::write(destination, &data)
            .await
            .map_err(|e| StorageError::local_io(destination, e))?;
        Ok(data.len() as u64)
    }

    /// Push a local file to `destination`
    async fn upload(
        &self,
        source: &Path,
        destination: &ObjectKey,
        content_type: Option<&str>,
    ) -> StorageResult<()> {
        let data = tokio::fs::read(source)
            .await
            .map_err(|e| StorageError::local_io(source, e))?;
        self.put_object(destination, data, content_type).await
    }
}
