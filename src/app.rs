use std::{path::PathBuf, sync::Arc};

use crate::{
    adapters::outbound::{
        storage::{create_store, ApacheObjectStoreAdapter, StorageBackend},
        tools::{GhostscriptRasterizer, MogrifyResizer},
    },
    domain::{models::ThumbnailSettings, value_objects::BucketName},
    ports::{
        storage::ObjectStore,
        tools::{ImageResizer, Rasterizer},
    },
    services::{ScratchSpace, ThumbnailServiceImpl},
};

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub project_id: Option<String>,
    pub bucket: BucketName,
    pub storage_backend: StorageBackend,
    pub scratch_dir: PathBuf,
    pub ghostscript_path: PathBuf,
    pub mogrify_path: PathBuf,
    pub settings: ThumbnailSettings,
}

impl AppConfig {
    /// Defaults for everything but the watched bucket
    pub fn for_bucket(bucket: BucketName) -> Self {
        Self {
            project_id: None,
            bucket,
            storage_backend: StorageBackend::Gcs,
            scratch_dir: std::env::temp_dir(),
            ghostscript_path: PathBuf::from("gs"),
            mogrify_path: PathBuf::from("mogrify"),
            settings: ThumbnailSettings::default(),
        }
    }
}

/// Application dependencies container
pub struct AppDependencies {
    pub object_store: Arc<dyn ObjectStore>,
    pub rasterizer: Arc<dyn Rasterizer>,
    pub resizer: Arc<dyn ImageResizer>,
}

/// Application services container
pub struct AppServices {
    pub thumbnail_service: ThumbnailServiceImpl,
}

/// Application builder for dependency injection
pub struct AppBuilder {
    config: AppConfig,
    object_store: Option<Arc<dyn ObjectStore>>,
}

impl AppBuilder {
    /// Create a new application builder
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            object_store: None,
        }
    }

    /// Use an already constructed store instead of the configured backend
    pub fn with_object_store(mut self, store: Arc<dyn ObjectStore>) -> Self {
        self.object_store = Some(store);
        self
    }

    /// Configure storage backend
    pub fn with_storage_backend(mut self, backend: StorageBackend) -> Self {
        self.config.storage_backend = backend;
        self
    }

    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.scratch_dir = dir.into();
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Build the application dependencies
    pub fn build_dependencies(&self) -> Result<AppDependencies, AppError> {
        let object_store = match &self.object_store {
            Some(store) => store.clone(),
            None => self.create_storage_adapter()?,
        };

        Ok(AppDependencies {
            object_store,
            rasterizer: Arc::new(GhostscriptRasterizer::new(&self.config.ghostscript_path)),
            resizer: Arc::new(MogrifyResizer::new(&self.config.mogrify_path)),
        })
    }

    /// Build the complete application with services
    pub fn build(self) -> Result<AppServices, AppError> {
        let deps = self.build_dependencies()?;

        let thumbnail_service = ThumbnailServiceImpl::new(
            self.config.bucket,
            deps.object_store,
            deps.rasterizer,
            deps.resizer,
            ScratchSpace::new(self.config.scratch_dir),
            self.config.settings,
        );

        Ok(AppServices { thumbnail_service })
    }

    /// Create the storage client once; every invocation reuses it
    fn create_storage_adapter(&self) -> Result<Arc<dyn ObjectStore>, AppError> {
        let backend = create_store(&self.config.storage_backend, &self.config.bucket).map_err(
            |e| AppError::StorageInit {
                message: format!(
                    "{} backend for bucket '{}': {}",
                    self.config.storage_backend.name(),
                    self.config.bucket,
                    e
                ),
            },
        )?;

        Ok(Arc::new(ApacheObjectStoreAdapter::new(backend)))
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Storage initialization error: {message}")]
    StorageInit { message: String },
}

/// Create an in-memory application for testing and development
pub fn create_in_memory_app(bucket: BucketName) -> Result<AppServices, AppError> {
    AppBuilder::new(AppConfig::for_bucket(bucket))
        .with_storage_backend(StorageBackend::InMemory)
        .build()
}
