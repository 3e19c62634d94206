/// Validation errors for domain value objects
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    // ObjectKey validation errors
    EmptyObjectKey,
    ObjectKeyTooLong {
        actual: usize,
        max: usize,
    },
    InvalidObjectKeyCharacter(char),
    ObjectKeyStartsWithSlash,

    // BucketName validation errors
    BucketNameTooShort {
        actual: usize,
        min: usize,
    },
    BucketNameTooLong {
        actual: usize,
        max: usize,
    },
    BucketNameInvalidStart,
    BucketNameInvalidEnd,
    BucketNameInvalidCharacter(char),
    BucketNameLooksLikeIpAddress,

    // InvocationId validation errors
    EmptyInvocationId,
    InvocationIdTooLong {
        actual: usize,
        max: usize,
    },
    InvalidInvocationIdCharacter(char),

    // Object name splitting
    UnparseableObjectName(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ObjectKey errors
            ValidationError::EmptyObjectKey => write!(f, "Object key cannot be empty"),
            ValidationError::ObjectKeyTooLong { actual, max } => {
                write!(f, "Object key too long: {} bytes (max: {})", actual, max)
            }
            ValidationError::InvalidObjectKeyCharacter(c) => {
                write!(f, "Invalid character in object key: {:?}", c)
            }
            ValidationError::ObjectKeyStartsWithSlash => {
                write!(f, "Object key cannot start with '/'")
            }

            // BucketName errors
            ValidationError::BucketNameTooShort { actual, min } => {
                write!(
                    f,
                    "Bucket name too short: {} characters (min: {})",
                    actual, min
                )
            }
            ValidationError::BucketNameTooLong { actual, max } => {
                write!(
                    f,
                    "Bucket name too long: {} characters (max: {})",
                    actual, max
                )
            }
            ValidationError::BucketNameInvalidStart => {
                write!(f, "Bucket name must start with lowercase letter or number")
            }
            ValidationError::BucketNameInvalidEnd => {
                write!(f, "Bucket name must end with lowercase letter or number")
            }
            ValidationError::BucketNameInvalidCharacter(c) => {
                write!(
                    f,
                    "Invalid character in bucket name: '{}'. Only lowercase letters, numbers, '-', '_' and '.' allowed",
                    c
                )
            }
            ValidationError::BucketNameLooksLikeIpAddress => {
                write!(f, "Bucket name cannot be formatted as an IP address")
            }

            // InvocationId errors
            ValidationError::EmptyInvocationId => write!(f, "Invocation ID cannot be empty"),
            ValidationError::InvocationIdTooLong { actual, max } => {
                write!(
                    f,
                    "Invocation ID too long: {} characters (max: {})",
                    actual, max
                )
            }
            ValidationError::InvalidInvocationIdCharacter(c) => {
                write!(f, "Invalid character in invocation ID: '{}'", c)
            }

            ValidationError::UnparseableObjectName(name) => {
                write!(
                    f,
                    "Object name '{}' does not match '<directory>/<basename>.<extension>'",
                    name
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
