use super::{DatabaseDriverType, DateComponent, DriverError, SqlDialect};

/// SQLite: everything goes through `strftime`
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteDialect;

impl SqlDialect for SqliteDialect {
    fn driver(&self) -> DatabaseDriverType {
        DatabaseDriverType::Sqlite
    }

    fn date_extract(&self, component: DateComponent, attribute: &str) -> Result<String, DriverError> {
        let format = match component {
            DateComponent::Year => "%Y",
            DateComponent::Month => "%m",
            DateComponent::Day => "%d",
        };
        Ok(format!("CAST(strftime('{}', {}) AS INTEGER)", format, attribute))
    }

    fn truncate_day(&self, attribute: &str) -> Result<String, DriverError> {
        // YYYY-MM-DD
        Ok(format!("strftime('%Y-%m-%d', {})", attribute))
    }

    fn time_of_day(&self, attribute: &str) -> Result<String, DriverError> {
        Ok(format!("TIME({})", attribute))
    }
}
