//! Command line and environment configuration shared by the binaries.

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::{
    adapters::outbound::storage::StorageBackend,
    app::{AppConfig, AppError},
    domain::{
        models::{ResourceLimits, ThumbnailSettings},
        value_objects::BucketName,
    },
};

/// Storage backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendKind {
    Gcs,
    S3,
    Local,
    Memory,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct FunctionArgs {
    /// Project that owns the bucket; falls back to GOOGLE_CLOUD_PROJECT
    #[arg(long, env = "PROJECT_ID")]
    pub project_id: Option<String>,

    /// Bucket this function watches and writes thumbnails to
    #[arg(long, env = "BUCKET_NAME")]
    pub bucket_name: String,

    /// Storage backend type
    #[arg(long, env = "STORAGE_BACKEND", value_enum, default_value = "gcs")]
    pub storage_backend: BackendKind,

    /// Root directory for the local backend (one subdirectory per bucket)
    #[arg(long, env = "LOCAL_STORAGE_ROOT")]
    pub local_storage_root: Option<PathBuf>,

    /// S3 region
    #[arg(long, env = "S3_REGION", default_value = "us-east-1")]
    pub s3_region: String,

    /// S3 endpoint URL (for S3-compatible services)
    #[arg(long, env = "S3_ENDPOINT")]
    pub s3_endpoint: Option<String>,

    /// S3 access key
    #[arg(long, env = "S3_ACCESS_KEY")]
    pub s3_access_key: Option<String>,

    /// S3 secret key
    #[arg(long, env = "S3_SECRET_KEY")]
    pub s3_secret_key: Option<String>,

    /// Scratch root; each invocation works in its own subdirectory
    #[arg(long, env = "SCRATCH_DIR")]
    pub scratch_dir: Option<PathBuf>,

    /// Ghostscript executable
    #[arg(long, env = "GHOSTSCRIPT_PATH", default_value = "gs")]
    pub ghostscript_path: PathBuf,

    /// ImageMagick mogrify executable
    #[arg(long, env = "MOGRIFY_PATH", default_value = "mogrify")]
    pub mogrify_path: PathBuf,

    #[arg(long, env = "THUMBNAIL_MAX_WIDTH", default_value_t = 340)]
    pub max_width: u32,

    #[arg(long, env = "THUMBNAIL_MAX_HEIGHT", default_value_t = 480)]
    pub max_height: u32,

    /// Rasterization resolution in DPI
    #[arg(long, env = "RASTER_DPI", default_value_t = 72)]
    pub raster_dpi: u32,

    #[arg(long, env = "RESIZE_LIMIT_AREA", default_value = "256MB")]
    pub limit_area: String,

    #[arg(long, env = "RESIZE_LIMIT_MEMORY", default_value = "256MB")]
    pub limit_memory: String,

    #[arg(long, env = "RESIZE_LIMIT_MAP", default_value = "512MB")]
    pub limit_map: String,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value = "text")]
    pub log_format: LogFormat,
}

impl FunctionArgs {
    pub fn to_app_config(&self) -> Result<AppConfig, AppError> {
        let bucket =
            BucketName::new(self.bucket_name.clone()).map_err(|e| AppError::Configuration {
                message: format!("BUCKET_NAME '{}': {}", self.bucket_name, e),
            })?;

        let storage_backend = match self.storage_backend {
            BackendKind::Gcs => StorageBackend::Gcs,
            BackendKind::S3 => StorageBackend::S3 {
                region: self.s3_region.clone(),
                endpoint: self.s3_endpoint.clone(),
                access_key: self.s3_access_key.clone(),
                secret_key: self.s3_secret_key.clone(),
            },
            BackendKind::Local => {
                let root =
                    self.local_storage_root
                        .clone()
                        .ok_or_else(|| AppError::Configuration {
                            message: "LOCAL_STORAGE_ROOT is required for the local backend"
                                .to_string(),
                        })?;
                StorageBackend::Local { root }
            }
            BackendKind::Memory => StorageBackend::InMemory,
        };

        if self.max_width == 0 || self.max_height == 0 || self.raster_dpi == 0 {
            return Err(AppError::Configuration {
                message: "thumbnail dimensions and raster DPI must be positive".to_string(),
            });
        }

        Ok(AppConfig {
            project_id: self
                .project_id
                .clone()
                .or_else(|| std::env::var("GOOGLE_CLOUD_PROJECT").ok()),
            bucket,
            storage_backend,
            scratch_dir: self
                .scratch_dir
                .clone()
                .unwrap_or_else(std::env::temp_dir),
            ghostscript_path: self.ghostscript_path.clone(),
            mogrify_path: self.mogrify_path.clone(),
            settings: ThumbnailSettings {
                max_width: self.max_width,
                max_height: self.max_height,
                resolution_dpi: self.raster_dpi,
                limits: ResourceLimits {
                    area: self.limit_area.clone(),
                    memory: self.limit_memory.clone(),
                    map: self.limit_map.clone(),
                },
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        function: FunctionArgs,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::parse_from(["test", "--bucket-name", "uploads"]);
        let config = cli.function.to_app_config().unwrap();

        assert_eq!(config.bucket.as_str(), "uploads");
        assert!(matches!(config.storage_backend, StorageBackend::Gcs));
        assert_eq!(config.settings, ThumbnailSettings::default());
        assert_eq!(config.ghostscript_path, PathBuf::from("gs"));
    }

    #[test]
    fn test_local_backend_requires_root() {
        let cli = TestCli::parse_from([
            "test",
            "--bucket-name",
            "uploads",
            "--storage-backend",
            "local",
        ]);

        assert!(matches!(
            cli.function.to_app_config(),
            Err(AppError::Configuration { .. })
        ));
    }

    #[test]
    fn test_invalid_bucket_name() {
        let cli = TestCli::parse_from(["test", "--bucket-name", "Not A Bucket"]);
        assert!(cli.function.to_app_config().is_err());
    }

    #[test]
    fn test_custom_geometry() {
        let cli = TestCli::parse_from([
            "test",
            "--bucket-name",
            "uploads",
            "--storage-backend",
            "memory",
            "--max-width",
            "120",
            "--max-height",
            "160",
            "--raster-dpi",
            "96",
        ]);
        let config = cli.function.to_app_config().unwrap();

        assert_eq!(config.settings.geometry(), "120x160");
        assert_eq!(config.settings.resolution_dpi, 96);
        assert!(matches!(config.storage_backend, StorageBackend::InMemory));
    }
}
