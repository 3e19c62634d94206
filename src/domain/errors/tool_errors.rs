use thiserror::Error as ThisError;

/// Failure of an external image tool invocation
#[derive(ThisError, Debug, Clone)]
pub enum ToolError {
    #[error("failed to start {tool}: {message}")]
    Spawn { tool: String, message: String },

    #[error("{tool} exited with {}: {stderr}", describe_exit(.exit_code))]
    Failed {
        tool: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("{tool} reported success but produced no output at {path}")]
    MissingOutput { tool: String, path: String },
}

impl ToolError {
    /// Name of the tool that failed
    pub fn tool(&self) -> &str {
        match self {
            ToolError::Spawn { tool, .. }
            | ToolError::Failed { tool, .. }
            | ToolError::MissingOutput { tool, .. } => tool,
        }
    }
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}
