mod thumbnail_service;

pub use thumbnail_service::ThumbnailService;
