use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{endpoint} returned status {status}")]
    UnexpectedStatus { endpoint: String, status: u16 },

    #[error("Empty response from {endpoint}")]
    EmptyResponse { endpoint: String },

    #[error("Unexpected response from {endpoint}: {message}")]
    UnexpectedResponse { endpoint: String, message: String },

    #[error("Webhook rejected the submission with status {status}: {body}")]
    SubmissionRejected { status: u16, body: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    RemoteService,
    Storage,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SolverError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SolverError::HttpError(_) => ErrorCategory::Network,
            SolverError::IoError(_) => ErrorCategory::Storage,
            SolverError::SerializationError(_) => ErrorCategory::Serialization,
            SolverError::ConfigError { .. }
            | SolverError::MissingConfigError { .. }
            | SolverError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SolverError::UnexpectedStatus { .. }
            | SolverError::EmptyResponse { .. }
            | SolverError::UnexpectedResponse { .. }
            | SolverError::SubmissionRejected { .. } => ErrorCategory::RemoteService,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration
            | ErrorCategory::RemoteService
            | ErrorCategory::Serialization => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for a failed run.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SolverError::HttpError(_) => {
                "Check network connectivity and that the remote service is reachable"
            }
            SolverError::IoError(_) => "Check that the output directory is writable",
            SolverError::SerializationError(_) => {
                "The remote service returned malformed JSON; inspect its response"
            }
            SolverError::ConfigError { .. } => "Check the syntax of the configuration file",
            SolverError::MissingConfigError { .. } => {
                "Set the value in application.toml, on the command line, or via its environment variable"
            }
            SolverError::InvalidConfigValueError { .. } => {
                "Correct the configuration value and try again"
            }
            SolverError::UnexpectedStatus { .. } => {
                "Verify the registration details and the generate webhook endpoint"
            }
            SolverError::EmptyResponse { .. } | SolverError::UnexpectedResponse { .. } => {
                "The generate webhook endpoint did not return a webhook object; contact the service owner"
            }
            SolverError::SubmissionRejected { .. } => {
                "The access token may have expired; run the flow again to obtain a fresh one"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SolverError::HttpError(e) => format!("Could not reach the remote service: {}", e),
            SolverError::IoError(e) => format!("Could not write the query files: {}", e),
            SolverError::MissingConfigError { field } => {
                format!("Required setting '{}' is not configured", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_failures_are_high_severity() {
        let err = SolverError::UnexpectedStatus {
            endpoint: "http://example.com/generate".to_string(),
            status: 500,
        };
        assert_eq!(err.category(), ErrorCategory::RemoteService);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.to_string(), "http://example.com/generate returned status 500");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_every_failure_exits_non_zero() {
        let errors = [
            SolverError::ConfigError {
                message: "bad".to_string(),
            },
            SolverError::EmptyResponse {
                endpoint: "http://example.com".to_string(),
            },
            SolverError::SubmissionRejected {
                status: 401,
                body: String::new(),
            },
            SolverError::from(std::io::Error::other("disk full")),
        ];
        for err in errors {
            assert!(err.exit_code() > 0, "{:?}", err);
        }
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = SolverError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
        assert!(err.user_friendly_message().contains("denied"));
    }

    #[test]
    fn test_missing_config_message_names_field() {
        let err = SolverError::MissingConfigError {
            field: "app.email".to_string(),
        };
        assert_eq!(
            err.user_friendly_message(),
            "Required setting 'app.email' is not configured"
        );
    }
}
