/// ImageMagick `-limit` ceilings, in ImageMagick size notation (e.g. `256MB`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLimits {
    pub area: String,
    pub memory: String,
    pub map: String,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            area: "256MB".to_string(),
            memory: "256MB".to_string(),
            map: "512MB".to_string(),
        }
    }
}

/// How thumbnails are rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailSettings {
    pub max_width: u32,
    pub max_height: u32,
    pub resolution_dpi: u32,
    pub limits: ResourceLimits,
}

impl ThumbnailSettings {
    /// Bounding box in ImageMagick geometry form; aspect ratio is preserved
    pub fn geometry(&self) -> String {
        format!("{}x{}", self.max_width, self.max_height)
    }
}

impl Default for ThumbnailSettings {
    fn default() -> Self {
        Self {
            max_width: 340,
            max_height: 480,
            resolution_dpi: 72,
            limits: ResourceLimits::default(),
        }
    }
}
