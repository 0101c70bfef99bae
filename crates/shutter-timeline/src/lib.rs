//! User timeline for the Shutter catalog
//!
//! Resolves the chronologically ordered, paginated feed of media a user can
//! see:
//! - access control through album membership, always applied
//! - optional favorites-only filtering
//! - an exclusive `from_date` cursor for fetching older pages
//! - ordering by day (newest first), album title, then time of day (latest first)

pub mod errors;
pub mod query;
pub mod service;

pub use errors::TimelineError;
pub use query::TimelineQuery;
pub use service::{my_timeline, TimelineService};
