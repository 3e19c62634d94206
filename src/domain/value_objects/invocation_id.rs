use crate::domain::errors::ValidationError;

const MAX_INVOCATION_ID_LEN: usize = 128;

/// Identifies one handler invocation; names its scratch subdirectory
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvocationId(String);

impl InvocationId {
    /// Create a new InvocationId, accepting only file-name safe characters
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyInvocationId);
        }

        if value.len() > MAX_INVOCATION_ID_LEN {
            return Err(ValidationError::InvocationIdTooLong {
                actual: value.len(),
                max: MAX_INVOCATION_ID_LEN,
            });
        }

        for c in value.chars() {
            if !c.is_ascii_alphanumeric() && c != '-' && c != '_' {
                return Err(ValidationError::InvalidInvocationIdCharacter(c));
            }
        }

        Ok(Self(value))
    }

    /// Generate a fresh random invocation ID
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Use the platform-supplied event id when it is usable as a directory name
    pub fn from_event_id(event_id: Option<&str>) -> Self {
        event_id
            .and_then(|id| Self::new(id.to_string()).ok())
            .unwrap_or_else(Self::generate)
    }

    /// Get the invocation ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InvocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for InvocationId {
    fn default() -> Self {
        Self::generate()
    }
}
