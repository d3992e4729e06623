use crate::domain::model::Operation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Integer overflow: {lhs} {operation} {rhs} does not fit in i32")]
    Overflow {
        operation: Operation,
        lhs: i32,
        rhs: i32,
    },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned HTTP {status} for {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Arithmetic,
    Network,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status for the `calc` binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::Overflow { .. } => ErrorCategory::Arithmetic,
            CalcError::ApiError(_) | CalcError::HttpStatusError { .. } => ErrorCategory::Network,
            CalcError::IoError(_) | CalcError::SerializationError(_) => ErrorCategory::Io,
            CalcError::MissingConfigError { .. }
            | CalcError::InvalidConfigValueError { .. }
            | CalcError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // transient, worth retrying
            CalcError::ApiError(_) => ErrorSeverity::Medium,
            CalcError::HttpStatusError { status, .. } if *status >= 500 || *status == 429 => {
                ErrorSeverity::Medium
            }
            CalcError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::Overflow {
                operation,
                lhs,
                rhs,
            } => format!(
                "The result of {} {} {} is outside the 32-bit integer range",
                lhs, operation, rhs
            ),
            CalcError::ApiError(e) => format!("Could not reach the GitHub API: {}", e),
            CalcError::HttpStatusError { status, .. } => match status {
                401 | 403 => "GitHub rejected the request (authentication or rate limit)".to_string(),
                404 => "Repository not found on GitHub".to_string(),
                _ => format!("GitHub API answered with HTTP {}", status),
            },
            CalcError::IoError(e) => format!("File system error: {}", e),
            CalcError::SerializationError(e) => format!("Unexpected API response: {}", e),
            CalcError::MissingConfigError { field } => {
                format!("Required setting '{}' is not configured", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CalcError::Overflow { .. } => {
                "Use smaller operands, or pass --overflow wrapping / --overflow saturating"
                    .to_string()
            }
            CalcError::ApiError(_) => "Check your network connection and try again".to_string(),
            CalcError::HttpStatusError { status, .. } => match status {
                401 | 403 => "Set GITHUB_TOKEN to a valid token".to_string(),
                404 => "Check that the repository is spelled as owner/repo".to_string(),
                _ => "Retry later".to_string(),
            },
            CalcError::IoError(_) => "Check that the file exists and is readable".to_string(),
            CalcError::SerializationError(_) => {
                "Verify that api_base points at a GitHub-compatible API".to_string()
            }
            CalcError::MissingConfigError { field } if field == "team.repository" => {
                "Set GITHUB_REPOSITORY=owner/repo or pass --repository".to_string()
            }
            CalcError::MissingConfigError { .. }
            | CalcError::InvalidConfigValueError { .. }
            | CalcError::ConfigValidationError { .. } => {
                "Review the configuration file and command-line flags".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
