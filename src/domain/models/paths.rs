use std::path::{Path, PathBuf};

use crate::domain::{errors::ValidationError, models::ObjectName, value_objects::ObjectKey};

/// Local and remote locations used by one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedPaths {
    pub scratch_dir: PathBuf,
    /// `<scratch>/<basename>.pdf`
    pub source_local: PathBuf,
    /// `<scratch>/<basename>.jpg`
    pub output_local: PathBuf,
    /// `<directory>thumbs/<basename>.jpg`
    pub destination: ObjectKey,
}

impl DerivedPaths {
    pub fn derive(name: &ObjectName, scratch_dir: &Path) -> Result<Self, ValidationError> {
        Ok(Self {
            scratch_dir: scratch_dir.to_path_buf(),
            source_local: scratch_dir.join(name.file_name_with("pdf")),
            output_local: scratch_dir.join(name.file_name_with("jpg")),
            destination: name.thumbnail_key()?,
        })
    }
}
