// Infrastructure error mapping
pub mod error;

// Storage implementations
pub mod apache_object_store_adapter;
pub mod backend;

// Re-export key types
pub use apache_object_store_adapter::ApacheObjectStoreAdapter;
pub use backend::{create_store, StorageBackend};
