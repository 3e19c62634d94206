use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    domain::{
        errors::{ThumbnailError, ThumbnailResult},
        models::{
            DerivedPaths, GeneratedThumbnail, ObjectName, SkipReason, StorageObjectEvent,
            ThumbnailOutcome, ThumbnailSettings,
        },
        value_objects::{BucketName, InvocationId, ObjectKey},
    },
    ports::{
        services::ThumbnailService,
        storage::ObjectStore,
        tools::{ImageResizer, Rasterizer},
    },
    services::scratch::{remove_scratch, ScratchSpace},
};

const THUMBNAIL_CONTENT_TYPE: &str = "image/jpeg";

/// Implementation of ThumbnailService: download, rasterize, resize, upload, clean up
#[derive(Clone)]
pub struct ThumbnailServiceImpl {
    bucket: BucketName,
    store: Arc<dyn ObjectStore>,
    rasterizer: Arc<dyn Rasterizer>,
    resizer: Arc<dyn ImageResizer>,
    scratch: ScratchSpace,
    settings: ThumbnailSettings,
}

impl ThumbnailServiceImpl {
    /// Create a new ThumbnailServiceImpl instance
    pub fn new(
        bucket: BucketName,
        store: Arc<dyn ObjectStore>,
        rasterizer: Arc<dyn Rasterizer>,
        resizer: Arc<dyn ImageResizer>,
        scratch: ScratchSpace,
        settings: ThumbnailSettings,
    ) -> Self {
        Self {
            bucket,
            store,
            rasterizer,
            resizer,
            scratch,
            settings,
        }
    }

    /// The bucket this generator watches and writes to
    pub fn bucket(&self) -> &BucketName {
        &self.bucket
    }

    pub fn scratch(&self) -> &ScratchSpace {
        &self.scratch
    }

    pub fn settings(&self) -> &ThumbnailSettings {
        &self.settings
    }

    /// Decide whether an event is ours; `Ok(Err(_))` means skip
    fn route(&self, event: &StorageObjectEvent) -> ThumbnailResult<Result<ObjectName, SkipReason>> {
        if !self.bucket.matches(&event.bucket) {
            return Ok(Err(SkipReason::WrongBucket {
                expected: self.bucket.to_string(),
                actual: event.bucket.clone(),
            }));
        }

        let name = ObjectName::parse(&event.name).map_err(ThumbnailError::InvalidObjectName)?;
        if !name.is_pdf() {
            return Ok(Err(SkipReason::NotPdf {
                extension: name.extension().to_string(),
            }));
        }

        Ok(Ok(name))
    }

    async fn generate(
        &self,
        source: ObjectKey,
        name: &ObjectName,
        invocation_id: &InvocationId,
    ) -> ThumbnailResult<GeneratedThumbnail> {
        info!("Generating thumbnail for '{}'...", name.basename());

        let paths = DerivedPaths::derive(name, &self.scratch.dir_for(invocation_id))
            .map_err(ThumbnailError::InvalidObjectName)?;
        self.scratch.prepare(invocation_id).await?;

        let bytes = self
            .store
            .download(&source, &paths.source_local)
            .await
            .map_err(|e| ThumbnailError::Download {
                key: source.clone(),
                source: e,
            })?;
        debug!(bytes, path = ?paths.source_local, "Downloaded source PDF");

        let run = self
            .rasterizer
            .rasterize(&paths.source_local, &paths.output_local, &self.settings)
            .await
            .map_err(ThumbnailError::Rasterize)?;
        debug!(tool = %run.tool, elapsed_ms = run.elapsed.as_millis() as u64, "Rasterized first page");

        let run = self
            .resizer
            .resize(&paths.output_local, &self.settings)
            .await
            .map_err(ThumbnailError::Resize)?;
        debug!(
            tool = %run.tool,
            elapsed_ms = run.elapsed.as_millis() as u64,
            geometry = %self.settings.geometry(),
            "Resized thumbnail"
        );

        self.store
            .upload(
                &paths.output_local,
                &paths.destination,
                Some(THUMBNAIL_CONTENT_TYPE),
            )
            .await
            .map_err(|e| ThumbnailError::Upload {
                key: paths.destination.clone(),
                source: e,
            })?;
        debug!(destination = %paths.destination, "Uploaded thumbnail");

        remove_scratch(&paths).await?;

        Ok(GeneratedThumbnail {
            invocation_id: invocation_id.clone(),
            source,
            thumbnail: paths.destination,
        })
    }
}

#[async_trait]
impl ThumbnailService for ThumbnailServiceImpl {
    async fn handle_event(
        &self,
        event: &StorageObjectEvent,
        invocation_id: &InvocationId,
    ) -> ThumbnailResult<ThumbnailOutcome> {
        let name = match self.route(event)? {
            Ok(name) => name,
            Err(reason) => return Ok(ThumbnailOutcome::Skipped(reason)),
        };

        let source =
            ObjectKey::new(event.name.clone()).map_err(ThumbnailError::InvalidObjectName)?;

        self.generate(source, &name, invocation_id)
            .await
            .map(ThumbnailOutcome::Generated)
    }
}

/// Builder for ThumbnailServiceImpl
pub struct ThumbnailServiceBuilder {
    bucket: Option<BucketName>,
    store: Option<Arc<dyn ObjectStore>>,
    rasterizer: Option<Arc<dyn Rasterizer>>,
    resizer: Option<Arc<dyn ImageResizer>>,
    scratch: ScratchSpace,
    settings: ThumbnailSettings,
}

impl ThumbnailServiceBuilder {
    pub fn new() -> Self {
        Self {
            bucket: None,
            store: None,
            rasterizer: None,
            resizer: None,
            scratch: ScratchSpace::default(),
            settings: ThumbnailSettings::default(),
        }
    }

    pub fn bucket(mut self, bucket: BucketName) -> Self {
        self.bucket = Some(bucket);
        self
    }

    pub fn store(mut self, store: Arc<dyn ObjectStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn rasterizer(mut self, rasterizer: Arc<dyn Rasterizer>) -> Self {
        self.rasterizer = Some(rasterizer);
        self
    }

    pub fn resizer(mut self, resizer: Arc<dyn ImageResizer>) -> Self {
        self.resizer = Some(resizer);
        self
    }

    pub fn scratch(mut self, scratch: ScratchSpace) -> Self {
        self.scratch = scratch;
        self
    }

    pub fn settings(mut self, settings: ThumbnailSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn build(self) -> Result<ThumbnailServiceImpl, &'static str> {
        let bucket = self.bucket.ok_or("Bucket is required")?;
        let store = self.store.ok_or("Store is required")?;
        let rasterizer = self.rasterizer.ok_or("Rasterizer is required")?;
        let resizer = self.resizer.ok_or("Resizer is required")?;

        Ok(ThumbnailServiceImpl::new(
            bucket,
            store,
            rasterizer,
            resizer,
            self.scratch,
            self.settings,
        ))
    }
}

impl Default for ThumbnailServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
