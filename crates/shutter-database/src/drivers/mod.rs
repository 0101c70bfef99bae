//! SQL dialect abstraction.
//!
//! A connection is mapped to a [`DatabaseDriverType`]; each driver type may
//! have a [`SqlDialect`] registered in a [`DriverRegistry`] that renders the
//! engine-specific fragments query builders need. Call sites only ever go
//! through the registry, so supporting another engine means registering one
//! more dialect.
//!
//! ```ignore
//! let year = extract_date_component(
//!     catalog.driver(),
//!     DateComponent::Year,
//!     "media.date_shot",
//! )?;
//! // CAST(strftime('%Y', media.date_shot) AS INTEGER) on SQLite
//! ```

mod postgres;
mod registry;
mod sqlite;

use sea_orm::{ConnectionTrait, DatabaseBackend};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use postgres::PostgresDialect;
pub use registry::{default_registry, DriverRegistry};
pub use sqlite::SqliteDialect;

/// Database engine a connection talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseDriverType {
    Sqlite,
    Postgres,
    MySql,
}

impl DatabaseDriverType {
    /// Canonical engine name
    pub fn name(&self) -> &'static str {
        match self {
            DatabaseDriverType::Sqlite => "sqlite",
            DatabaseDriverType::Postgres => "postgres",
            DatabaseDriverType::MySql => "mysql",
        }
    }

    /// Engine of a live connection, read from its declared dialect.
    /// Executes nothing.
    pub fn of<C: ConnectionTrait>(conn: &C) -> Self {
        conn.get_database_backend().into()
    }

    /// Whether `conn` talks to this engine
    pub fn matches<C: ConnectionTrait>(&self, conn: &C) -> bool {
        Self::of(conn) == *self
    }
}

impl From<DatabaseBackend> for DatabaseDriverType {
    fn from(backend: DatabaseBackend) -> Self {
        match backend {
            DatabaseBackend::Sqlite => DatabaseDriverType::Sqlite,
            DatabaseBackend::Postgres => DatabaseDriverType::Postgres,
            DatabaseBackend::MySql => DatabaseDriverType::MySql,
        }
    }
}

impl From<DatabaseDriverType> for DatabaseBackend {
    fn from(driver: DatabaseDriverType) -> Self {
        match driver {
            DatabaseDriverType::Sqlite => DatabaseBackend::Sqlite,
            DatabaseDriverType::Postgres => DatabaseBackend::Postgres,
            DatabaseDriverType::MySql => DatabaseBackend::MySql,
        }
    }
}

impl std::fmt::Display for DatabaseDriverType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A component of a date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DateComponent {
    Year,
    Month,
    Day,
}

impl std::fmt::Display for DateComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateComponent::Year => write!(f, "YEAR"),
            DateComponent::Month => write!(f, "MONTH"),
            DateComponent::Day => write!(f, "DAY"),
        }
    }
}

/// Stable identifier of a fragment a dialect can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlOperation {
    DateExtract(DateComponent),
    TruncateDay,
    TimeOfDay,
}

impl std::fmt::Display for SqlOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqlOperation::DateExtract(component) => write!(f, "date extract ({})", component),
            SqlOperation::TruncateDay => write!(f, "day truncation"),
            SqlOperation::TimeOfDay => write!(f, "time of day"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    #[error("Unsupported engine operation: {operation} is not available for {engine}")]
    UnsupportedEngineOperation {
        engine: DatabaseDriverType,
        operation: SqlOperation,
    },
}

impl DriverError {
    pub fn unsupported(engine: DatabaseDriverType, operation: SqlOperation) -> Self {
        DriverError::UnsupportedEngineOperation { engine, operation }
    }
}

impl From<DriverError> for shutter_core::ServiceError {
    fn from(err: DriverError) -> Self {
        match err {
            DriverError::UnsupportedEngineOperation { engine, operation } => {
                shutter_core::ServiceError::UnsupportedEngine {
                    engine: engine.to_string(),
                    operation: operation.to_string(),
                }
            }
        }
    }
}

/// Engine-specific SQL fragment rendering.
///
/// `attribute` is a column reference such as `media.date_shot`; it is
/// substituted textually and must never carry user input. Every method
/// defaults to [`DriverError::UnsupportedEngineOperation`], so a dialect only
/// implements what its engine can express.
pub trait SqlDialect: Send + Sync + std::fmt::Debug {
    fn driver(&self) -> DatabaseDriverType;

    /// Integer-typed year, month or day of a timestamp
    fn date_extract(&self, component: DateComponent, _attribute: &str) -> Result<String, DriverError> {
        Err(DriverError::unsupported(
            self.driver(),
            SqlOperation::DateExtract(component),
        ))
    }

    /// Timestamp truncated to its calendar day, as a sortable value
    fn truncate_day(&self, _attribute: &str) -> Result<String, DriverError> {
        Err(DriverError::unsupported(self.driver(), SqlOperation::TruncateDay))
    }

    /// Time-of-day portion of a timestamp, as a sortable value
    fn time_of_day(&self, _attribute: &str) -> Result<String, DriverError> {
        Err(DriverError::unsupported(self.driver(), SqlOperation::TimeOfDay))
    }
}

/// Render the fragment extracting `component` from `attribute` for `driver`,
/// using the process-wide registry.
pub fn extract_date_component(
    driver: DatabaseDriverType,
    component: DateComponent,
    attribute: &str,
) -> Result<String, DriverError> {
    default_registry().extract_date_component(driver, component, attribute)
}
