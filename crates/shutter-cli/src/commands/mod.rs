pub mod migrate;
pub mod timeline;

pub use migrate::MigrateCommand;
pub use timeline::TimelineCommand;
