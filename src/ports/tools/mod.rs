mod image_tools;

pub use image_tools::{ImageResizer, Rasterizer};
