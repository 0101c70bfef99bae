//! Shutter CLI - catalog maintenance and timeline inspection

mod commands;

use clap::{Parser, Subcommand};
use commands::{MigrateCommand, TimelineCommand};
use shutter_core::telemetry::init_tracing;
use shutter_core::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "SHUTTER_LOG_LEVEL", global = true)]
    log_level: String,

    /// Log format: compact, full
    #[arg(
        long,
        default_value = "compact",
        env = "SHUTTER_LOG_FORMAT",
        global = true
    )]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending catalog migrations
    Migrate(MigrateCommand),
    /// Print a user's timeline as JSON lines
    Timeline(TimelineCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Unknown formats fall back to compact
    let format = cli.log_format.parse().unwrap_or(LogFormat::Compact);
    init_tracing(&LogConfig {
        level: cli.log_level.clone(),
        format,
    })?;

    match cli.command {
        Commands::Migrate(cmd) => cmd.execute(),
        Commands::Timeline(cmd) => cmd.execute(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_timeline_arguments() {
        let cli = Cli::try_parse_from([
            "shutter",
            "--log-level",
            "debug",
            "timeline",
            "--database-url",
            "sqlite::memory:",
            "--user-id",
            "7",
            "--limit",
            "20",
            "--only-favorites",
            "--from-date",
            "2023-05-01T12:00:00Z",
        ])
        .unwrap();

        assert_eq!(cli.log_level, "debug");
        match cli.command {
            Commands::Timeline(cmd) => {
                assert_eq!(cmd.user_id, 7);
                assert_eq!(cmd.limit, Some(20));
                assert_eq!(cmd.offset, None);
                assert!(cmd.only_favorites);
                assert_eq!(cmd.database_url.as_deref(), Some("sqlite::memory:"));
                assert_eq!(
                    cmd.from_date.map(|d| d.to_rfc3339()),
                    Some("2023-05-01T12:00:00+00:00".to_string())
                );
            }
            _ => panic!("Expected timeline command"),
        }
    }

    #[test]
    fn test_parse_rejects_malformed_from_date() {
        let result = Cli::try_parse_from([
            "shutter",
            "timeline",
            "--user-id",
            "1",
            "--from-date",
            "yesterday",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_timeline_requires_user_id() {
        assert!(Cli::try_parse_from(["shutter", "timeline"]).is_err());
    }
}
