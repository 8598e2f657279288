use super::types::ReportError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub exit_code: i32,
}

impl ReportError {
    /// Classify this error into a stable type name and the process exit code
    /// the binary reports for it.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            ReportError::Config(_) | ReportError::Yaml(_) => ErrorClassification {
                error_type: "ConfigError",
                exit_code: 2,
            },
            ReportError::Network(_) => ErrorClassification {
                error_type: "NetworkError",
                exit_code: 3,
            },
            ReportError::Authentication(_) => ErrorClassification {
                error_type: "AuthenticationError",
                exit_code: 4,
            },
            ReportError::Deserialization(_) => ErrorClassification {
                error_type: "DeserializationError",
                exit_code: 5,
            },
            ReportError::Io(_) => ErrorClassification {
                error_type: "IoError",
                exit_code: 1,
            },
            ReportError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                exit_code: 1,
            },
            ReportError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                exit_code: 1,
            },
        }
    }
}
