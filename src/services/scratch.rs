use std::path::{Path, PathBuf};

use tokio::fs;

use crate::domain::{
    errors::{ThumbnailError, ThumbnailResult},
    models::DerivedPaths,
    value_objects::InvocationId,
};

/// Local working area; every invocation gets its own subdirectory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchSpace {
    root: PathBuf,
}

impl ScratchSpace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/<invocation_id>`
    pub fn dir_for(&self, invocation_id: &InvocationId) -> PathBuf {
        self.root.join(invocation_id.as_str())
    }

    /// Create the invocation directory
    pub async fn prepare(&self, invocation_id: &InvocationId) -> ThumbnailResult<PathBuf> {
        let dir = self.dir_for(invocation_id);
        fs::create_dir_all(&dir)
            .await
            .map_err(|source| ThumbnailError::Scratch {
                path: dir.clone(),
                source,
            })?;
        Ok(dir)
    }
}

impl Default for ScratchSpace {
    fn default() -> Self {
        Self::new(std::env::temp_dir())
    }
}

/// Delete both scratch files concurrently, then the invocation directory
pub async fn remove_scratch(paths: &DerivedPaths) -> ThumbnailResult<()> {
    let (pdf, jpg) = tokio::join!(
        fs::remove_file(&paths.source_local),
        fs::remove_file(&paths.output_local)
    );

    for (path, result) in [(&paths.source_local, pdf), (&paths.output_local, jpg)] {
        result.map_err(|source| ThumbnailError::Cleanup {
            path: path.clone(),
            source,
        })?;
    }

    fs::remove_dir(&paths.scratch_dir)
        .await
        .map_err(|source| ThumbnailError::Cleanup {
            path: paths.scratch_dir.clone(),
            source,
        })
}
