use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Target file is not valid UTF-8: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Could not find the section to replace: {name}")]
    SectionNotFound { name: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Content,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status used by the binary for this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl PatchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PatchError::IoError(_) => ErrorCategory::Io,
            PatchError::EncodingError(_) | PatchError::SectionNotFound { .. } => {
                ErrorCategory::Content
            }
            PatchError::SerializationError(_) => ErrorCategory::Output,
            PatchError::ConfigValidationError { .. }
            | PatchError::InvalidConfigValueError { .. }
            | PatchError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PatchError::IoError(_) => ErrorSeverity::Critical,
            PatchError::SerializationError(_) => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PatchError::IoError(_) => {
                "Check that the target file exists and that you have read/write permission"
            }
            PatchError::EncodingError(_) => "Save the target file as UTF-8 and run again",
            PatchError::SectionNotFound { .. } => {
                "The file was probably already updated or has drifted; inspect it manually"
            }
            PatchError::SerializationError(_) => "Run again without --report-json",
            PatchError::ConfigValidationError { .. }
            | PatchError::InvalidConfigValueError { .. }
            | PatchError::MissingConfigError { .. } => {
                "Fix the patch configuration file and run again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PatchError::SectionNotFound { name } => {
                format!("Expected text for '{}' is not present in the target file", name)
            }
            PatchError::IoError(e) => format!("Could not access the target file: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatchError>;
