//! Database connection management

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use shutter_core::{DatabaseConfig, ServiceError, ServiceResult};
use shutter_migrations::{Migrator, MigratorTrait};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::drivers::DatabaseDriverType;

pub type DbConnection = DatabaseConnection;

/// A pooled catalog connection together with the engine it talks to.
///
/// The engine is read from the connection's declared dialect once, when the
/// connection is opened, and never changes afterwards.
#[derive(Debug)]
pub struct CatalogDb {
    conn: DatabaseConnection,
    driver: DatabaseDriverType,
}

impl CatalogDb {
    pub fn new(conn: DatabaseConnection) -> Self {
        let driver = DatabaseDriverType::of(&conn);
        Self { conn, driver }
    }

    pub fn driver(&self) -> DatabaseDriverType {
        self.driver
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    pub fn into_inner(self) -> DatabaseConnection {
        self.conn
    }
}

impl From<DatabaseConnection> for CatalogDb {
    fn from(conn: DatabaseConnection) -> Self {
        Self::new(conn)
    }
}

fn connect_options(config: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections);
    if let Some(secs) = config.connect_timeout_secs {
        opt.connect_timeout(Duration::from_secs(secs));
    }
    if let Some(secs) = config.acquire_timeout_secs {
        opt.acquire_timeout(Duration::from_secs(secs));
    }
    opt
}

/// Open a connection pool without touching the schema.
pub async fn connect(config: &DatabaseConfig) -> ServiceResult<Arc<CatalogDb>> {
    let db = Database::connect(connect_options(config))
        .await
        .map_err(|e| ServiceError::Database(e.to_string()))?;

    let catalog = CatalogDb::new(db);
    info!("Connected to {} catalog database", catalog.driver());
    Ok(Arc::new(catalog))
}

/// Open a connection pool and bring the schema up to date.
pub async fn establish_connection(config: &DatabaseConfig) -> ServiceResult<Arc<CatalogDb>> {
    let catalog = connect(config).await?;

    // Run migrations
    Migrator::up(catalog.connection(), None)
        .await
        .map_err(|e| ServiceError::Database(e.to_string()))?;

    Ok(catalog)
}
