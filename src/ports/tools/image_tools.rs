use std::path::Path;

use async_trait::async_trait;

use crate::domain::{errors::ToolError, models::ThumbnailSettings, models::ToolRun};

/// Renders the first page of a PDF into a JPEG
#[async_trait]
pub trait Rasterizer: Send + Sync + 'static {
    async fn rasterize(
        &self,
        input: &Path,
        output: &Path,
        settings: &ThumbnailSettings,
    ) -> Result<ToolRun, ToolError>;
}

/// Shrinks an image in place to fit the configured bounding box
#[async_trait]
pub trait ImageResizer: Send + Sync + 'static {
    async fn resize(&self, image: &Path, settings: &ThumbnailSettings)
        -> Result<ToolRun, ToolError>;
}
