#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use object_store::{memory::InMemory, path::Path as ObjectPath, ObjectStore as _, PutPayload};
use pdf_thumbnail::{
    domain::{
        errors::{StorageError, StorageResult, ToolError},
        models::{ThumbnailSettings, ToolRun},
    },
    ports::{
        storage::ObjectStore,
        tools::{ImageResizer, Rasterizer},
    },
    ApacheObjectStoreAdapter, BucketName, ObjectKey, ScratchSpace, ThumbnailServiceBuilder,
    ThumbnailServiceImpl,
};
use std::{
    path::Path,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};
use tempfile::TempDir;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

pub const BUCKET: &str = "uploads";

fn run(tool: &str) -> ToolRun {
    ToolRun {
        tool: tool.to_string(),
        exit_code: Some(0),
        stderr: String::new(),
        elapsed: Duration::from_millis(1),
    }
}

/// Stands in for Ghostscript by copying the PDF bytes to the JPEG path
#[derive(Default)]
pub struct CopyRasterizer {
    pub calls: AtomicUsize,
    pub delay: Duration,
}

impl CopyRasterizer {
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            delay,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Rasterizer for CopyRasterizer {
    async fn rasterize(
        &self,
        input: &Path,
        output: &Path,
        _settings: &ThumbnailSettings,
    ) -> Result<ToolRun, ToolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        tokio::fs::copy(input, output)
            .await
            .map_err(|e| ToolError::Spawn {
                tool: "copy".to_string(),
                message: e.to_string(),
            })?;
        Ok(run("copy"))
    }
}

/// Always exits non-zero
#[derive(Default)]
pub struct FailingRasterizer {
    pub calls: AtomicUsize,
}

#[async_trait]
impl Rasterizer for FailingRasterizer {
    async fn rasterize(
        &self,
        _input: &Path,
        _output: &Path,
        _settings: &ThumbnailSettings,
    ) -> Result<ToolRun, ToolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ToolError::Failed {
            tool: "gs".to_string(),
            exit_code: Some(1),
            stderr: "Error: /syntaxerror in pdf".to_string(),
        })
    }
}

/// Leaves the image untouched
#[derive(Default)]
pub struct CountingResizer {
    pub calls: AtomicUsize,
}

impl CountingResizer {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageResizer for CountingResizer {
    async fn resize(
        &self,
        _image: &Path,
        _settings: &ThumbnailSettings,
    ) -> Result<ToolRun, ToolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(run("resize"))
    }
}

#[derive(Default)]
pub struct FailingResizer;

#[async_trait]
impl ImageResizer for FailingResizer {
    async fn resize(
        &self,
        _image: &Path,
        _settings: &ThumbnailSettings,
    ) -> Result<ToolRun, ToolError> {
        Err(ToolError::Spawn {
            tool: "mogrify".to_string(),
            message: "No such file or directory".to_string(),
        })
    }
}

/// Delegates to `inner` but rejects every upload
pub struct FailingUploadStore {
    pub inner: Arc<dyn ObjectStore>,
}

#[async_trait]
impl ObjectStore for FailingUploadStore {
    async fn put_object(
        &self,
        key: &ObjectKey,
        data: Vec<u8>,
        content_type: Option<&str>,
    ) -> StorageResult<()> {
        self.inner.put_object(key, data, content_type).await
    }

    async fn get_object(&self, key: &ObjectKey) -> StorageResult<Vec<u8>> {
        self.inner.get_object(key).await
    }

    async fn object_exists(&self, key: &ObjectKey) -> StorageResult<bool> {
        self.inner.object_exists(key).await
    }

    async fn download(&self, key: &ObjectKey, destination: &Path) -> StorageResult<u64> {
        self.inner.download(key, destination).await
    }

    async fn upload(
        &self,
        _source: &Path,
        destination: &ObjectKey,
        _content_type: Option<&str>,
    ) -> StorageResult<()> {
        Err(StorageError::AccessDenied {
            key: destination.clone(),
            operation: "upload".to_string(),
        })
    }
}

/// Uploads through `inner`, then deletes the local file it was given
pub struct MovingUploadStore {
    pub inner: Arc<dyn ObjectStore>,
}

#[async_trait]
impl ObjectStore for MovingUploadStore {
    async fn put_object(
        &self,
        key: &ObjectKey,
        data: Vec<u8>,
        content_type: Option<&str>,
    ) -> StorageResult<()> {
        self.inner.put_object(key, data, content_type).await
    }

    async fn get_object(&self, key: &ObjectKey) -> StorageResult<Vec<u8>> {
        self.inner.get_object(key).await
    }

    async fn object_exists(&self, key: &ObjectKey) -> StorageResult<bool> {
        self.inner.object_exists(key).await
    }

    async fn download(&self, key: &ObjectKey, destination: &Path) -> StorageResult<u64> {
        self.inner.download(key, destination).await
    }

    async fn upload(
        &self,
        source: &Path,
        destination: &ObjectKey,
        content_type: Option<&str>,
    ) -> StorageResult<()> {
        self.inner.upload(source, destination, content_type).await?;
        tokio::fs::remove_file(source).await.unwrap();
        Ok(())
    }
}

/// Counts events logged at ERROR level
#[derive(Clone, Default)]
pub struct ErrorCounter(Arc<AtomicUsize>);

impl ErrorCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// A service over an in-memory bucket with a private scratch root
pub struct Harness {
    pub service: ThumbnailServiceImpl,
    pub store: Arc<InMemory>,
    pub scratch: TempDir,
}

impl Harness {
    pub fn new(rasterizer: Arc<dyn Rasterizer>, resizer: Arc<dyn ImageResizer>) -> Self {
        Self::with_store(rasterizer, resizer, |store| store)
    }

    /// Like [`Harness::new`], with the storage port wrapped by `wrap`
    pub fn with_store(
        rasterizer: Arc<dyn Rasterizer>,
        resizer: Arc<dyn ImageResizer>,
        wrap: impl FnOnce(Arc<dyn ObjectStore>) -> Arc<dyn ObjectStore>,
    ) -> Self {
        let store = Arc::new(InMemory::new());
        let scratch = tempfile::tempdir().unwrap();

        let service = ThumbnailServiceBuilder::new()
            .bucket(BucketName::new(BUCKET.to_string()).unwrap())
            .store(wrap(Arc::new(ApacheObjectStoreAdapter::new(store.clone()))))
            .rasterizer(rasterizer)
            .resizer(resizer)
            .scratch(ScratchSpace::new(scratch.path()))
            .build()
            .unwrap();

        Self {
            service,
            store,
            scratch,
        }
    }

    pub async fn seed(&self, name: &str, data: &'static [u8]) {
        self.store
            .put(&ObjectPath::parse(name).unwrap(), PutPayload::from(Bytes::from_static(data)))
            .await
            .unwrap();
    }

    pub async fn read(&self, name: &str) -> Option<Bytes> {
        match self.store.get(&ObjectPath::parse(name).unwrap()).await {
            Ok(result) => Some(result.bytes().await.unwrap()),
            Err(object_store::Error::NotFound { .. }) => None,
            Err(e) => panic!("unexpected store error: {e}"),
        }
    }

    /// Number of objects in the bucket
    pub async fn object_count(&self) -> usize {
        use futures::TryStreamExt;

        let objects: Vec<_> = self.store.list(None).try_collect().await.unwrap();
        objects.len()
    }
}
