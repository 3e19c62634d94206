// External image tools
pub mod ghostscript;
pub mod mogrify;
pub mod process;

pub use ghostscript::GhostscriptRasterizer;
pub use mogrify::MogrifyResizer;
pub use process::run_tool;
