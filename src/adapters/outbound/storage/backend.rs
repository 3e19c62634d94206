//! Construction of the concrete `object_store` backends.

use object_store::{
    aws::AmazonS3Builder, gcp::GoogleCloudStorageBuilder, local::LocalFileSystem,
    memory::InMemory, ObjectStore as ObjectStoreBackend,
};
use std::{path::PathBuf, sync::Arc};

use crate::domain::value_objects::BucketName;

/// Storage backend configuration
#[derive(Debug, Clone)]
pub enum StorageBackend {
    /// Google Cloud Storage; credentials come from the standard `GOOGLE_*` variables
    Gcs,
    S3 {
        region: String,
        endpoint: Option<String>,
        access_key: Option<String>,
        secret_key: Option<String>,
    },
    /// Directory per bucket under `root`
    Local { root: PathBuf },
    InMemory,
}

impl StorageBackend {
    pub fn name(&self) -> &'static str {
        match self {
            StorageBackend::Gcs => "gcs",
            StorageBackend::S3 { .. } => "s3",
            StorageBackend::Local { .. } => "local",
            StorageBackend::InMemory => "memory",
        }
    }
}

/// Create the backend store for `bucket`. Called once at startup.
pub fn create_store(
    backend: &StorageBackend,
    bucket: &BucketName,
) -> object_store::Result<Arc<dyn ObjectStoreBackend>> {
    let store: Arc<dyn ObjectStoreBackend> = match backend {
        StorageBackend::Gcs => Arc::new(
            GoogleCloudStorageBuilder::from_env()
                .with_bucket_name(bucket.as_str())
                .build()?,
        ),
        StorageBackend::S3 {
            region,
            endpoint,
            access_key,
            secret_key,
        } => {
            let mut builder = AmazonS3Builder::from_env()
                .with_bucket_name(bucket.as_str())
                .with_region(region);

            if let Some(access_key) = access_key {
                builder = builder.with_access_key_id(access_key);
            }

            if let Some(secret_key) = secret_key {
                builder = builder.with_secret_access_key(secret_key);
            }

            if let Some(endpoint) = endpoint {
                builder = builder
                    .with_endpoint(endpoint)
                    .with_allow_http(endpoint.starts_with("http://"));
            }

            Arc::new(builder.build()?)
        }
        StorageBackend::Local { root } => {
            let dir = root.join(bucket.as_str());
            std::fs::create_dir_all(&dir).map_err(|e| object_store::Error::Generic {
                store: "LocalFileSystem",
                source: Box::new(e),
            })?;
            Arc::new(LocalFileSystem::new_with_prefix(dir)?)
        }
        StorageBackend::InMemory => Arc::new(InMemory::new()),
    };

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use object_store::{path::Path as ObjectPath, PutPayload};

    #[tokio::test]
    async fn test_local_backend_uses_bucket_directory() {
        let root = tempfile::tempdir().unwrap();
        let bucket = BucketName::new("uploads".to_string()).unwrap();

        let store = create_store(
            &StorageBackend::Local {
                root: root.path().to_path_buf(),
            },
            &bucket,
        )
        .unwrap();

        store
            .put(
                &ObjectPath::from("docs/thumbs/a.jpg"),
                PutPayload::from_static(b"jpeg"),
            )
            .await
            .unwrap();

        assert!(root.path().join("uploads/docs/thumbs/a.jpg").is_file());
    }

    #[test]
    fn test_backend_names() {
        assert_eq!(StorageBackend::Gcs.name(), "gcs");
        assert_eq!(StorageBackend::InMemory.name(), "memory");
    }
}
