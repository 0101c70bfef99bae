//! Tracing subscriber set-up shared by the Shutter binaries

use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Layer};

use crate::config::{LogConfig, LogFormat};
use crate::error::{ServiceError, ServiceResult};

const SHUTTER_CRATES: &[&str] = &[
    "shutter_cli",
    "shutter_core",
    "shutter_database",
    "shutter_entities",
    "shutter_migrations",
    "shutter_timeline",
];

/// Build the default filter: Shutter crates at `level`, noisy dependencies at warn.
pub fn default_filter(level: &str) -> String {
    let mut directives: Vec<String> = SHUTTER_CRATES
        .iter()
        .map(|krate| format!("{}={}", krate, level))
        .collect();
    directives.extend(["sqlx=warn", "sea_orm=warn"].iter().map(|d| d.to_string()));
    directives.join(",")
}

/// Install the global tracing subscriber.
///
/// If `RUST_LOG` is set it is used as-is; otherwise [`default_filter`] applies.
pub fn init_tracing(config: &LogConfig) -> ServiceResult<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::try_from_default_env().map_err(|e| ServiceError::Configuration {
            message: format!("Invalid RUST_LOG environment variable: {}", e),
        })?
    } else {
        EnvFilter::try_new(default_filter(&config.level)).map_err(|e| {
            ServiceError::Configuration {
                message: format!("Invalid log level {}: {}", config.level, e),
            }
        })?
    };

    let fmt_layer = match config.format {
        LogFormat::Full => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .boxed(),
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .boxed(),
    };

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| ServiceError::Internal(anyhow::anyhow!(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_covers_all_crates() {
        let filter = default_filter("debug");
        for krate in SHUTTER_CRATES {
            assert!(filter.contains(&format!("{}=debug", krate)));
        }
        assert!(filter.contains("sea_orm=warn"));
        assert!(EnvFilter::try_new(&filter).is_ok());
    }
}
