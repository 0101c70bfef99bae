//! Common error types used across all Shutter services

use thiserror::Error;

/// Common service error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Permission denied: {action}")]
    PermissionDenied { action: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Unsupported by database engine {engine}: {operation}")]
    UnsupportedEngine { engine: String, operation: String },

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_label(err: &ServiceError) -> &'static str {
        match err {
            ServiceError::Database(_) => "database",
            ServiceError::PermissionDenied { .. } => "forbidden",
            ServiceError::Configuration { .. } => "configuration",
            ServiceError::UnsupportedEngine { .. } => "unsupported",
            ServiceError::Internal(_) => "internal",
        }
    }

    #[test]
    fn test_error_messages() {
        let err = ServiceError::UnsupportedEngine {
            engine: "mysql".to_string(),
            operation: "day truncation".to_string(),
        };
        assert_eq!(status_label(&err), "unsupported");
        assert_eq!(
            err.to_string(),
            "Unsupported by database engine mysql: day truncation"
        );

        let err = ServiceError::PermissionDenied {
            action: "view timeline".to_string(),
        };
        assert_eq!(status_label(&err), "forbidden");
        assert_eq!(err.to_string(), "Permission denied: view timeline");

        let err: ServiceError = anyhow::anyhow!("boom").into();
        assert_eq!(status_label(&err), "internal");
    }
}
