//! Database connection, SQL dialect and query utilities

pub use sea_orm;
mod connection;
pub mod drivers;
pub mod queries;

pub use connection::{connect, establish_connection, CatalogDb, DbConnection};
pub use drivers::{
    extract_date_component, DatabaseDriverType, DateComponent, DriverError, DriverRegistry,
    SqlDialect, SqlOperation,
};
pub use queries::PaginationStage;

// Export test utilities for use by other crates in their tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
