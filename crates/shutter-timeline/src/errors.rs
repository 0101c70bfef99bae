//! Error types for the timeline service

use shutter_core::ServiceError;
use shutter_database::DriverError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("Unauthorized: no user to resolve the timeline for")]
    Unauthorized,

    #[error(transparent)]
    UnsupportedEngine(#[from] DriverError),

    #[error("Timeline query failed: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl From<TimelineError> for ServiceError {
    fn from(err: TimelineError) -> Self {
        match err {
            TimelineError::Unauthorized => ServiceError::PermissionDenied {
                action: "view timeline".to_string(),
            },
            TimelineError::UnsupportedEngine(e) => e.into(),
            TimelineError::Database(e) => ServiceError::Database(e.to_string()),
        }
    }
}
