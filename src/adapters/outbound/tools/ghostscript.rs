use async_trait::async_trait;
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::{
    adapters::outbound::tools::process::run_tool,
    domain::{errors::ToolError, models::ThumbnailSettings, models::ToolRun},
    ports::tools::Rasterizer,
};

const TOOL_NAME: &str = "ghostscript";

/// Rasterizes page 1 of a PDF with the Ghostscript `jpeg` device
#[derive(Debug, Clone)]
pub struct GhostscriptRasterizer {
    executable: PathBuf,
}

impl GhostscriptRasterizer {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Command line for a first-page render of `input` into `output`
    pub fn args(input: &Path, output: &Path, settings: &ThumbnailSettings) -> Vec<OsString> {
        let mut output_file = OsString::from("-sOutputFile=");
        output_file.push(output);

        vec![
            "-dBATCH".into(),
            "-dNOPAUSE".into(),
            "-q".into(),
            "-sDEVICE=jpeg".into(),
            "-dTextAlphaBits=4".into(),
            "-dFirstPage=1".into(),
            "-dLastPage=1".into(),
            format!("-r{}", settings.resolution_dpi).into(),
            output_file,
            input.into(),
        ]
    }
}

impl Default for GhostscriptRasterizer {
    fn default() -> Self {
        Self::new("gs")
    }
}

#[async_trait]
impl Rasterizer for GhostscriptRasterizer {
    async fn rasterize(
        &self,
        input: &Path,
        output: &Path,
        settings: &ThumbnailSettings,
    ) -> Result<ToolRun, ToolError> {
        let args = Self::args(input, output, settings);
        let run = run_tool(TOOL_NAME, &self.executable, &args, None).await?;

        // Ghostscript can exit cleanly without rendering anything (e.g. a zero-page PDF)
        match tokio::fs::metadata(output).await {
            Ok(meta) if meta.len() > 0 => Ok(run),
            _ => Err(ToolError::MissingOutput {
                tool: TOOL_NAME.to_string(),
                path: output.display().to_string(),
            }),
        }
    }
}
