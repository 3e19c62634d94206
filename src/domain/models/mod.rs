pub mod event;
pub mod object_name;
pub mod outcome;
pub mod paths;
pub mod settings;

pub use event::{CloudEvent, EventEnvelope, StorageObjectEvent};
pub use object_name::{ObjectName, THUMBNAIL_PREFIX};
pub use outcome::{GeneratedThumbnail, SkipReason, ThumbnailOutcome, ToolRun};
pub use paths::DerivedPaths;
pub use settings::{ResourceLimits, ThumbnailSettings};
