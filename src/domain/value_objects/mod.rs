mod bucket_name;
mod invocation_id;
mod object_key;

pub use bucket_name::BucketName;
pub use invocation_id::InvocationId;
pub use object_key::ObjectKey;
