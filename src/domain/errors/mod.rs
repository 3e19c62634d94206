mod storage_errors;
mod thumbnail_errors;
mod tool_errors;
mod validation_errors;

pub use storage_errors::*;
pub use thumbnail_errors::*;
pub use tool_errors::*;
pub use validation_errors::*;
