use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Request to {endpoint} timed out after {seconds}s")]
    TimeoutError { endpoint: String, seconds: u64 },

    #[error("Unexpected HTTP {status} from {endpoint}")]
    StatusError { status: u16, endpoint: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

impl ShowcaseError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) | Self::TimeoutError { .. } | Self::StatusError { .. } => {
                ErrorCategory::Network
            }
            Self::SerializationError(_) => ErrorCategory::Data,
            Self::UrlError(_)
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Endpoint failures are absorbed by the candidate fallback chain.
            Self::ApiError(_) | Self::TimeoutError { .. } | Self::StatusError { .. } => {
                ErrorSeverity::Medium
            }
            Self::SerializationError(_) => ErrorSeverity::High,
            Self::UrlError(_)
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => {
                "Could not reach the CMS. Sections fall back to built-in content.".to_string()
            }
            ErrorCategory::Data => "The CMS returned data in an unexpected shape.".to_string(),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("Could not write output: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ApiError(_) | Self::TimeoutError { .. } => {
                "Check network connectivity and the CMS base URL"
            }
            Self::StatusError { .. } => "Verify the REST route exists on the CMS",
            Self::SerializationError(_) => "Inspect the raw response with the probe binary",
            Self::UrlError(_)
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => "Fix the flagged configuration value and rerun",
            Self::IoError(_) => "Check permissions on the output directory",
        }
    }
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_errors_are_medium_severity() {
        let err = ShowcaseError::StatusError {
            status: 503,
            endpoint: "https://example.com/wp-json/wp/v2/posts".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.category(), ErrorCategory::Network);
    }

    #[test]
    fn config_errors_carry_field_context() {
        let err = ShowcaseError::InvalidConfigValueError {
            field: "site.timeout_seconds".to_string(),
            value: "90".to_string(),
            reason: "must be between 8 and 15".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("site.timeout_seconds"));
        assert!(message.contains("90"));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
