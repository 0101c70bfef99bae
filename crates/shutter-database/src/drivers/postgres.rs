use super::{DatabaseDriverType, DateComponent, DriverError, SqlDialect};

/// PostgreSQL: `to_char` templates, evaluated in the session time zone
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresDialect;

impl SqlDialect for PostgresDialect {
    fn driver(&self) -> DatabaseDriverType {
        DatabaseDriverType::Postgres
    }

    fn date_extract(&self, component: DateComponent, attribute: &str) -> Result<String, DriverError> {
        let template = match component {
            DateComponent::Year => "YYYY",
            DateComponent::Month => "MM",
            DateComponent::Day => "DD",
        };
        Ok(format!("CAST(to_char({}, '{}') AS INTEGER)", attribute, template))
    }

    fn truncate_day(&self, attribute: &str) -> Result<String, DriverError> {
        Ok(format!("to_char({}, 'YYYY-MM-DD')", attribute))
    }

    fn time_of_day(&self, attribute: &str) -> Result<String, DriverError> {
        Ok(format!("CAST({} AS TIME)", attribute))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_fragments() {
        let dialect = PostgresDialect;
        assert_eq!(
            dialect.date_extract(DateComponent::Year, "media.date_shot").unwrap(),
            "CAST(to_char(media.date_shot, 'YYYY') AS INTEGER)"
        );
        assert_eq!(
            dialect.date_extract(DateComponent::Day, "media.date_shot").unwrap(),
            "CAST(to_char(media.date_shot, 'DD') AS INTEGER)"
        );
        assert_eq!(
            dialect.truncate_day("media.date_shot").unwrap(),
            "to_char(media.date_shot, 'YYYY-MM-DD')"
        );
        assert_eq!(
            dialect.time_of_day("media.date_shot").unwrap(),
            "CAST(media.date_shot AS TIME)"
        );
    }
}
