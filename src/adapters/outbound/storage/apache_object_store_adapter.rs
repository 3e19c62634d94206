use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use object_store::{
    Attribute, Attributes, ObjectStore as ApacheObjectStore, PutOptions, PutPayload,
};
use std::{path::Path, sync::Arc};
use tokio::io::AsyncWriteExt;

use crate::{
    adapters::outbound::storage::error::{map_store_error, object_path},
    domain::{
        errors::{StorageError, StorageResult},
        value_objects::ObjectKey,
    },
    ports::storage::ObjectStore,
};

/// Adapter that implements our ObjectStore trait using Apache object_store
pub struct ApacheObjectStoreAdapter {
    inner: Arc<dyn ApacheObjectStore>,
}

impl ApacheObjectStoreAdapter {
    pub fn new(store: Arc<dyn ApacheObjectStore>) -> Self {
        Self { inner: store }
    }
}

#[async_trait]
impl ObjectStore for ApacheObjectStoreAdapter {
    async fn put_object(
        &self,
        key: &ObjectKey,
        data: Vec<u8>,
        content_type: Option<&str>,
    ) -> StorageResult<()> {
        let path = object_path(key)?;
        let payload = PutPayload::from(Bytes::from(data));

        let mut attributes = Attributes::new();
        if let Some(content_type) = content_type {
            attributes.insert(Attribute::ContentType, content_type.to_string().into());
        }
        let opts = PutOptions {
            attributes,
            ..Default::default()
        };

        // The local filesystem backend cannot store attributes
        let result = match self.inner.put_opts(&path, payload.clone(), opts).await {
            Err(object_store::Error::NotImplemented { .. }) => self.inner.put(&path, payload).await,
            other => other,
        };

        result.map_err(|e| map_store_error(e, key, "put"))?;
        Ok(())
    }

    async fn get_object(&self, key: &ObjectKey) -> StorageResult<Vec<u8>> {
        let path = object_path(key)?;

        let result = self
            .inner
            .get(&path)
            .await
            .map_err(|e| map_store_error(e, key, "get"))?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| map_store_error(e, key, "read"))?;

        Ok(bytes.to_vec())
    }

    async fn object_exists(&self, key: &ObjectKey) -> StorageResult<bool> {
        let path = object_path(key)?;

        match self.inner.head(&path).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(map_store_error(e, key, "head")),
        }
    }

    /// Streams the object to disk instead of buffering it whole
    async fn download(&self, key: &ObjectKey, destination: &Path) -> StorageResult<u64> {
        let path = object_path(key)?;

        let result = self
            .inner
            .get(&path)
            .await
            .map_err(|e| map_store_error(e, key, "download"))?;

        let mut file = tokio::fs::File::create(destination)
            .await
            .map_err(|e| StorageError::local_io(destination, e))?;

        let mut stream = result.into_stream();
        let mut written = 0u64;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| map_store_error(e, key, "download"))?;
            file.write_all(&chunk)
                .await
                .map_err(|e| StorageError::local_io(destination, e))?;
            written += chunk.len() as u64;
        }

        file.flush()
            .await
            .map_err(|e| StorageError::local_io(destination, e))?;

        Ok(written)
    }
}
