//! Database migrations for the Shutter catalog

pub use sea_orm_migration::prelude::*;

mod migration;
pub use migration::Migrator;

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, Statement};

    #[tokio::test]
    async fn test_migrations_create_catalog_tables() -> anyhow::Result<()> {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1);
        let db = Database::connect(opt).await?;

        Migrator::up(&db, None).await?;

        for table in ["users", "albums", "user_albums", "media", "user_media_data"] {
            let row = db
                .query_one(Statement::from_sql_and_values(
                    DatabaseBackend::Sqlite,
                    "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?",
                    [table.into()],
                ))
                .await?;
            assert!(row.is_some(), "table {} missing", table);
        }

        Migrator::down(&db, None).await?;

        let row = db
            .query_one(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'media'",
            ))
            .await?;
        assert!(row.is_none());

        Ok(())
    }
}
