mod scratch;
mod thumbnail_service_impl;

pub use scratch::{remove_scratch, ScratchSpace};
pub use thumbnail_service_impl::{ThumbnailServiceBuilder, ThumbnailServiceImpl};
