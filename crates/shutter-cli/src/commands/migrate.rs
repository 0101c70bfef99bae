use clap::Args;
use shutter_core::DatabaseConfig;
use tracing::{debug, info};

#[derive(Args)]
pub struct MigrateCommand {
    /// Database connection URL
    #[arg(long, env = "SHUTTER_DATABASE_URL")]
    pub database_url: Option<String>,
}

impl MigrateCommand {
    pub fn execute(self) -> anyhow::Result<()> {
        let mut config = DatabaseConfig::from_env()?;
        if let Some(url) = self.database_url {
            config.url = url;
        }

        debug!("Initializing database connection...");
        let rt = tokio::runtime::Runtime::new()?;
        let db = rt.block_on(shutter_database::establish_connection(&config))?;

        info!("Catalog schema is up to date on {}", db.driver());
        Ok(())
    }
}
