pub mod services;
pub mod storage;
pub mod tools;

// Re-export all port traits for convenience
pub use services::ThumbnailService;
pub use storage::ObjectStore;
pub use tools::{ImageResizer, Rasterizer};
