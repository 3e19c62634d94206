use std::{
    ffi::OsString,
    path::Path,
    process::Stdio,
    time::Instant,
};

use tokio::process::Command;
use tracing::debug;

use crate::domain::{errors::ToolError, models::ToolRun};

/// Run an external tool to completion and capture its diagnostics.
///
/// A nonzero exit is a failure; the reported message is stderr, or stdout when the tool
/// printed its error there (Ghostscript does in quiet mode).
pub async fn run_tool(
    tool: &str,
    program: &Path,
    args: &[OsString],
    cwd: Option<&Path>,
) -> Result<ToolRun, ToolError> {
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    if let Some(cwd) = cwd {
        command.current_dir(cwd);
    }

    debug!(tool, program = ?program, args = ?args, "Running external tool");
    let started = Instant::now();

    let output = command.output().await.map_err(|e| ToolError::Spawn {
        tool: tool.to_string(),
        message: format!("{} ({})", e, program.display()),
    })?;

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

    if !output.status.success() {
        let message = if stderr.is_empty() {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        } else {
            stderr
        };
        return Err(ToolError::Failed {
            tool: tool.to_string(),
            exit_code: output.status.code(),
            stderr: message,
        });
    }

    Ok(ToolRun {
        tool: tool.to_string(),
        exit_code: output.status.code(),
        stderr,
        elapsed: started.elapsed(),
    })
}
