use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

use super::{
    DatabaseDriverType, DateComponent, DriverError, PostgresDialect, SqlDialect, SqlOperation,
    SqliteDialect,
};

static DEFAULT_REGISTRY: Lazy<Arc<DriverRegistry>> =
    Lazy::new(|| Arc::new(DriverRegistry::default()));

/// Process-wide registry with the built-in dialects
pub fn default_registry() -> Arc<DriverRegistry> {
    Arc::clone(&DEFAULT_REGISTRY)
}

/// Lookup table from engine to dialect
#[derive(Debug, Clone)]
pub struct DriverRegistry {
    dialects: HashMap<DatabaseDriverType, Arc<dyn SqlDialect>>,
}

impl Default for DriverRegistry {
    /// SQLite and PostgreSQL. MySQL has no dialect.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(SqliteDialect));
        registry.register(Arc::new(PostgresDialect));
        registry
    }
}

impl DriverRegistry {
    pub fn empty() -> Self {
        Self {
            dialects: HashMap::new(),
        }
    }

    /// Register `dialect` for its engine, replacing any previous entry.
    pub fn register(&mut self, dialect: Arc<dyn SqlDialect>) -> &mut Self {
        self.dialects.insert(dialect.driver(), dialect);
        self
    }

    pub fn supports(&self, driver: DatabaseDriverType) -> bool {
        self.dialects.contains_key(&driver)
    }

    fn dialect(
        &self,
        driver: DatabaseDriverType,
        operation: SqlOperation,
    ) -> Result<&dyn SqlDialect, DriverError> {
        self.dialects
            .get(&driver)
            .map(|dialect| dialect.as_ref())
            .ok_or_else(|| DriverError::unsupported(driver, operation))
    }

    pub fn extract_date_component(
        &self,
        driver: DatabaseDriverType,
        component: DateComponent,
        attribute: &str,
    ) -> Result<String, DriverError> {
        self.dialect(driver, SqlOperation::DateExtract(component))?
            .date_extract(component, attribute)
    }

    pub fn truncate_day(
        &self,
        driver: DatabaseDriverType,
        attribute: &str,
    ) -> Result<String, DriverError> {
        self.dialect(driver, SqlOperation::TruncateDay)?
            .truncate_day(attribute)
    }

    pub fn time_of_day(
        &self,
        driver: DatabaseDriverType,
        attribute: &str,
    ) -> Result<String, DriverError> {
        self.dialect(driver, SqlOperation::TimeOfDay)?
            .time_of_day(attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Knows only the year, to exercise per-operation gaps
    #[derive(Debug)]
    struct YearOnlyMySql;

    impl SqlDialect for YearOnlyMySql {
        fn driver(&self) -> DatabaseDriverType {
            DatabaseDriverType::MySql
        }

        fn date_extract(
            &self,
            component: DateComponent,
            attribute: &str,
        ) -> Result<String, DriverError> {
            match component {
                DateComponent::Year => Ok(format!("YEAR({})", attribute)),
                other => Err(DriverError::unsupported(
                    self.driver(),
                    SqlOperation::DateExtract(other),
                )),
            }
        }
    }

    #[test]
    fn test_default_registry_engines() {
        let registry = DriverRegistry::default();
        assert!(registry.supports(DatabaseDriverType::Sqlite));
        assert!(registry.supports(DatabaseDriverType::Postgres));
        assert!(!registry.supports(DatabaseDriverType::MySql));
    }

    #[test]
    fn test_empty_registry_rejects_everything() {
        let registry = DriverRegistry::empty();
        let err = registry
            .truncate_day(DatabaseDriverType::Sqlite, "media.date_shot")
            .unwrap_err();
        assert_eq!(
            err,
            DriverError::unsupported(DatabaseDriverType::Sqlite, SqlOperation::TruncateDay)
        );
    }

    #[test]
    fn test_register_new_engine_without_touching_callers() {
        let mut registry = DriverRegistry::default();
        registry.register(Arc::new(YearOnlyMySql));

        assert_eq!(
            registry
                .extract_date_component(DatabaseDriverType::MySql, DateComponent::Year, "d")
                .unwrap(),
            "YEAR(d)"
        );
        assert_eq!(
            registry
                .extract_date_component(DatabaseDriverType::MySql, DateComponent::Month, "d")
                .unwrap_err(),
            DriverError::unsupported(
                DatabaseDriverType::MySql,
                SqlOperation::DateExtract(DateComponent::Month)
            )
        );
        // Trait defaults cover operations the dialect never implemented
        assert_eq!(
            registry
                .time_of_day(DatabaseDriverType::MySql, "d")
                .unwrap_err(),
            DriverError::unsupported(DatabaseDriverType::MySql, SqlOperation::TimeOfDay)
        );
    }

    #[test]
    fn test_sqlite_ordering_fragments() {
        let registry = default_registry();
        assert_eq!(
            registry
                .truncate_day(DatabaseDriverType::Sqlite, "media.date_shot")
                .unwrap(),
            "strftime('%Y-%m-%d', media.date_shot)"
        );
        assert_eq!(
            registry
                .time_of_day(DatabaseDriverType::Sqlite, "media.date_shot")
                .unwrap(),
            "TIME(media.date_shot)"
        );
    }
}
