use async_trait::async_trait;
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::{
    adapters::outbound::tools::process::run_tool,
    domain::{errors::ToolError, models::ThumbnailSettings, models::ToolRun},
    ports::tools::ImageResizer,
};

const TOOL_NAME: &str = "mogrify";

/// Bounds an image in place with ImageMagick's `mogrify`, under resource ceilings
#[derive(Debug, Clone)]
pub struct MogrifyResizer {
    executable: PathBuf,
}

impl MogrifyResizer {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Arguments for resizing `file_name`, relative to the working directory
    pub fn args(file_name: &Path, settings: &ThumbnailSettings) -> Vec<OsString> {
        let limits = &settings.limits;
        vec![
            "-format".into(),
            "jpg".into(),
            "-resize".into(),
            settings.geometry().into(),
            "-limit".into(),
            "area".into(),
            limits.area.as_str().into(),
            "-limit".into(),
            "memory".into(),
            limits.memory.as_str().into(),
            "-limit".into(),
            "map".into(),
            limits.map.as_str().into(),
            file_name.into(),
        ]
    }
}

impl Default for MogrifyResizer {
    fn default() -> Self {
        Self::new("mogrify")
    }
}

#[async_trait]
impl ImageResizer for MogrifyResizer {
    async fn resize(
        &self,
        image: &Path,
        settings: &ThumbnailSettings,
    ) -> Result<ToolRun, ToolError> {
        let file_name = image.file_name().ok_or_else(|| ToolError::MissingOutput {
            tool: TOOL_NAME.to_string(),
            path: image.display().to_string(),
        })?;

        // `./` keeps names starting with '-' from being read as options
        let relative = Path::new(".").join(file_name);
        let cwd = image.parent().filter(|p| !p.as_os_str().is_empty());

        run_tool(
            TOOL_NAME,
            &self.executable,
            &Self::args(&relative, settings),
            cwd,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ResourceLimits;

    #[test]
    fn test_bounding_box_args() {
        let args = MogrifyResizer::args(Path::new("./file.jpg"), &ThumbnailSettings::default());

        let args: Vec<String> = args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            vec![
                "-format", "jpg", "-resize", "340x480", "-limit", "area", "256MB", "-limit",
                "memory", "256MB", "-limit", "map", "512MB", "./file.jpg",
            ]
        );
    }

    #[test]
    fn test_custom_limits() {
        let settings = ThumbnailSettings {
            max_width: 100,
            max_height: 100,
            limits: ResourceLimits {
                area: "64MB".to_string(),
                memory: "64MB".to_string(),
                map: "128MB".to_string(),
            },
            ..Default::default()
        };

        let args = MogrifyResizer::args(Path::new("./a.jpg"), &settings);
        assert!(args.contains(&OsString::from("100x100")));
        assert!(args.contains(&OsString::from("128MB")));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_runs_next_to_the_image() {
        use std::os::unix::fs::PermissionsExt;

        let tools = tempfile::tempdir().unwrap();
        let fake = tools.path().join("fake-mogrify");
        // Succeeds only if the last argument names a file in the working directory
        std::fs::write(&fake, "#!/bin/sh\nfor last; do :; done\ntest -f \"$last\"\n").unwrap();
        std::fs::set_permissions(&fake, std::fs::Permissions::from_mode(0o755)).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("-odd.jpg");
        tokio::fs::write(&image, b"jpeg").await.unwrap();

        let run = MogrifyResizer::new(&fake)
            .resize(&image, &ThumbnailSettings::default())
            .await
            .unwrap();
        assert_eq!(run.tool, "mogrify");
    }

    #[tokio::test]
    async fn test_failing_resize() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("file.jpg");
        tokio::fs::write(&image, b"jpeg").await.unwrap();

        let err = MogrifyResizer::new("false")
            .resize(&image, &ThumbnailSettings::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ToolError::Failed { exit_code: Some(1), .. }));
        assert_eq!(err.tool(), "mogrify");
    }
}
