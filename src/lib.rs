pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
pub mod telemetry;

// Re-export key types for convenience

// Domain types - events, value objects and outcomes
pub use domain::{
    BucketName,
    DerivedPaths,
    EventEnvelope,
    InvocationId,
    ObjectKey,
    ObjectName,
    SkipReason,
    StorageError,
    StorageObjectEvent,
    ThumbnailError,
    ThumbnailOutcome,
    ThumbnailSettings,
    ToolError,
    ValidationError,
};

// Port types - interfaces for external systems
pub use ports::{ImageResizer, ObjectStore, Rasterizer, ThumbnailService};

// Service implementations - business logic
pub use services::{ScratchSpace, ThumbnailServiceBuilder, ThumbnailServiceImpl};

// Application factory and configuration
pub use app::{AppBuilder, AppConfig, AppError, AppServices, create_in_memory_app};

// Adapter types - infrastructure implementations
pub use adapters::outbound::{
    storage::{ApacheObjectStoreAdapter, StorageBackend},
    tools::{GhostscriptRasterizer, MogrifyResizer},
};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        ApacheObjectStoreAdapter, AppBuilder, AppConfig, BucketName, GhostscriptRasterizer,
        InvocationId, MogrifyResizer, ObjectKey, ObjectStore, StorageObjectEvent,
        ThumbnailOutcome, ThumbnailService, ThumbnailServiceBuilder, ThumbnailServiceImpl,
        create_in_memory_app,
    };
}
