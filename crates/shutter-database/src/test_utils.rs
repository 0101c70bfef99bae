//! Test utilities for catalog database tests
//!
//! `TestDatabase::sqlite()` gives every test its own migrated in-memory
//! database. `TestDatabase::postgres()` starts a dedicated PostgreSQL
//! container and needs a running Docker daemon.

use crate::{CatalogDb, DbConnection};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ConnectOptions, Database};
use shutter_entities::{albums, media, types::MediaType, user_albums, user_media_data, users};
use shutter_migrations::{Migrator, MigratorTrait};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync, GenericImage, ImageExt};

static ALBUM_SEQ: AtomicUsize = AtomicUsize::new(0);

/// Migrated test database plus seeding helpers
pub struct TestDatabase {
    pub db: Arc<CatalogDb>,
    /// Keeps the PostgreSQL container alive for the lifetime of the test
    #[allow(dead_code)]
    container: Option<ContainerAsync<GenericImage>>,
}

impl TestDatabase {
    /// Fresh in-memory SQLite database with the catalog schema
    pub async fn sqlite() -> anyhow::Result<Self> {
        // One pooled connection: every in-memory connection is its own database
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1);

        let db = Database::connect(opt).await?;
        Migrator::up(&db, None)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;

        Ok(Self {
            db: Arc::new(CatalogDb::new(db)),
            container: None,
        })
    }

    /// Dedicated PostgreSQL container with the catalog schema
    pub async fn postgres() -> anyhow::Result<Self> {
        let db_name = "shutter_test";
        let username = "test_user";
        let password = "test_password";

        let container = GenericImage::new("postgres", "16-alpine")
            .with_env_var("POSTGRES_DB", db_name)
            .with_env_var("POSTGRES_USER", username)
            .with_env_var("POSTGRES_PASSWORD", password)
            .with_env_var("POSTGRES_HOST_AUTH_METHOD", "trust")
            .start()
            .await?;

        let port = container.get_host_port_ipv4(5432).await?;
        let database_url = format!(
            "postgresql://{}:{}@localhost:{}/{}",
            username, password, port, db_name
        );

        // Wait for the database to be ready
        tokio::time::sleep(tokio::time::Duration::from_secs(3)).await;

        let db = Self::connect_with_retry(&database_url, 10).await?;
        Migrator::up(&db, None)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;

        Ok(Self {
            db: Arc::new(CatalogDb::new(db)),
            container: Some(container),
        })
    }

    async fn connect_with_retry(url: &str, retries: u32) -> anyhow::Result<DbConnection> {
        let mut remaining = retries;
        loop {
            match Database::connect(url).await {
                Ok(db) => return Ok(db),
                Err(e) if remaining > 0 => {
                    remaining -= 1;
                    tracing::debug!("Test database not ready ({}), retrying", e);
                    tokio::time::sleep(tokio::time::Duration::from_secs(1)).await;
                }
                Err(e) => {
                    return Err(anyhow::anyhow!(
                        "Failed to connect to database after {} retries: {}",
                        retries,
                        e
                    ))
                }
            }
        }
    }

    pub fn connection(&self) -> &DbConnection {
        self.db.connection()
    }

    pub async fn create_user(&self, username: &str) -> anyhow::Result<users::Model> {
        let user = users::ActiveModel {
            username: Set(username.to_string()),
            admin: Set(false),
            ..Default::default()
        }
        .insert(self.connection())
        .await?;
        Ok(user)
    }

    /// Create an album visible to every user in `members`
    pub async fn create_album(&self, title: &str, members: &[i32]) -> anyhow::Result<albums::Model> {
        let seq = ALBUM_SEQ.fetch_add(1, Ordering::Relaxed);
        let album = albums::ActiveModel {
            title: Set(title.to_string()),
            parent_album_id: Set(None),
            path: Set(format!("/photos/{}-{}", title.to_lowercase(), seq)),
            ..Default::default()
        }
        .insert(self.connection())
        .await?;

        for user_id in members {
            self.grant_album(*user_id, album.id).await?;
        }
        Ok(album)
    }

    pub async fn grant_album(&self, user_id: i32, album_id: i32) -> anyhow::Result<()> {
        user_albums::ActiveModel {
            album_id: Set(album_id),
            user_id: Set(user_id),
        }
        .insert(self.connection())
        .await?;
        Ok(())
    }

    pub async fn create_media(
        &self,
        album_id: i32,
        title: &str,
        date_shot: DateTime<Utc>,
    ) -> anyhow::Result<media::Model> {
        let item = media::ActiveModel {
            title: Set(title.to_string()),
            path: Set(format!("/photos/{}/{}.jpg", album_id, title)),
            media_type: Set(MediaType::Photo),
            album_id: Set(album_id),
            date_shot: Set(date_shot),
            ..Default::default()
        }
        .insert(self.connection())
        .await?;
        Ok(item)
    }

    pub async fn set_favorite(
        &self,
        user_id: i32,
        media_id: i32,
        favorite: bool,
    ) -> anyhow::Result<()> {
        user_media_data::ActiveModel {
            user_id: Set(user_id),
            media_id: Set(media_id),
            favorite: Set(favorite),
        }
        .insert(self.connection())
        .await?;
        Ok(())
    }
}
