use anyhow::Context;
use clap::Args;
use sea_orm::EntityTrait;
use shutter_core::{parse_utc_datetime, DatabaseConfig, PaginationParams, UtcDateTime};
use shutter_database::CatalogDb;
use shutter_entities::users;
use shutter_timeline::TimelineService;
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Args)]
pub struct TimelineCommand {
    /// Database connection URL
    #[arg(long, env = "SHUTTER_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Id of the user whose timeline to print
    #[arg(long)]
    pub user_id: i32,

    /// Maximum number of items to print
    #[arg(long)]
    pub limit: Option<u64>,

    /// Number of items to skip
    #[arg(long)]
    pub offset: Option<u64>,

    /// Only media the user marked as favorite
    #[arg(long)]
    pub only_favorites: bool,

    /// Only media shot strictly before this instant (RFC 3339)
    #[arg(long, value_parser = parse_from_date)]
    pub from_date: Option<UtcDateTime>,
}

fn parse_from_date(value: &str) -> Result<UtcDateTime, String> {
    parse_utc_datetime(value).map_err(|e| format!("invalid timestamp '{}': {}", value, e))
}

async fn print_timeline(db: Arc<CatalogDb>, cmd: &TimelineCommand) -> anyhow::Result<usize> {
    let user = users::Entity::find_by_id(cmd.user_id)
        .one(db.connection())
        .await
        .context("Failed to look up user")?;
    if user.is_none() {
        warn!("User {} does not exist", cmd.user_id);
    }

    let pagination = PaginationParams::new(cmd.limit, cmd.offset);
    let service = TimelineService::new(db);
    let media = service
        .my_timeline(
            user.as_ref(),
            &pagination,
            Some(cmd.only_favorites),
            cmd.from_date,
        )
        .await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for item in &media {
        serde_json::to_writer(&mut out, item)?;
        writeln!(out)?;
    }
    Ok(media.len())
}

impl TimelineCommand {
    pub fn execute(self) -> anyhow::Result<()> {
        let mut config = DatabaseConfig::from_env()?;
        if let Some(url) = self.database_url.clone() {
            config.url = url;
        }

        debug!("Initializing database connection...");
        let rt = tokio::runtime::Runtime::new()?;
        let db = rt.block_on(shutter_database::establish_connection(&config))?;

        let count = rt.block_on(print_timeline(db, &self))?;
        info!("Printed {} timeline items for user {}", count, self.user_id);
        Ok(())
    }
}
