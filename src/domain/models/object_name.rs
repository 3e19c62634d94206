use crate::domain::{errors::ValidationError, value_objects::ObjectKey};

/// Prefix, relative to the source object's directory, under which thumbnails are written
pub const THUMBNAIL_PREFIX: &str = "thumbs";

/// An object name split into `<directory>/<basename>.<extension>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectName {
    directory: String,
    basename: String,
    extension: String,
}

impl ObjectName {
    /// Split an object name.
    ///
    /// The directory runs up to and including the last `/` and must be present. The
    /// extension follows the last `.` of the remaining file name. Both the basename and
    /// the extension must be non-empty.
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        let unparseable = || ValidationError::UnparseableObjectName(name.to_string());

        if name.contains(['\n', '\r']) {
            return Err(unparseable());
        }

        let slash = name.rfind('/').ok_or_else(unparseable)?;
        let (directory, file_name) = name.split_at(slash + 1);

        let dot = file_name.rfind('.').ok_or_else(unparseable)?;
        let (basename, extension) = (&file_name[..dot], &file_name[dot + 1..]);

        if basename.is_empty() || extension.is_empty() {
            return Err(unparseable());
        }

        Ok(Self {
            directory: directory.to_string(),
            basename: basename.to_string(),
            extension: extension.to_string(),
        })
    }

    /// Directory part, including the trailing `/`
    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn basename(&self) -> &str {
        &self.basename
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Case-sensitive: `report.PDF` is not a PDF
    pub fn is_pdf(&self) -> bool {
        self.extension == "pdf"
    }

    /// `<basename>.<extension>` for an arbitrary extension
    pub fn file_name_with(&self, extension: &str) -> String {
        format!("{}.{}", self.basename, extension)
    }

    /// Destination key of the thumbnail: `<directory>thumbs/<basename>.jpg`
    pub fn thumbnail_key(&self) -> Result<ObjectKey, ValidationError> {
        ObjectKey::new(format!(
            "{}{}/{}",
            self.directory,
            THUMBNAIL_PREFIX,
            self.file_name_with("jpg")
        ))
    }
}
