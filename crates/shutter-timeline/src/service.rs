//! Timeline resolution against a catalog connection

use shutter_core::UtcDateTime;
use shutter_database::drivers::default_registry;
use shutter_database::{CatalogDb, DriverRegistry, PaginationStage};
use shutter_entities::{media, users};
use std::sync::Arc;
use tracing::{debug, error};

use crate::errors::TimelineError;
use crate::query::TimelineQuery;

/// Service resolving user timelines
#[derive(Clone)]
pub struct TimelineService {
    db: Arc<CatalogDb>,
    registry: Arc<DriverRegistry>,
}

impl TimelineService {
    pub fn new(db: Arc<CatalogDb>) -> Self {
        Self::with_registry(db, default_registry())
    }

    pub fn with_registry(db: Arc<CatalogDb>, registry: Arc<DriverRegistry>) -> Self {
        Self { db, registry }
    }

    /// Media visible to `user`, newest day first.
    ///
    /// `user` is the authenticated caller; `None` is rejected before any SQL
    /// is built. `only_favorites` keeps only media the user marked favorite,
    /// `from_date` keeps only media shot strictly before it. The ordered
    /// query goes through `pagination` and is executed exactly once.
    pub async fn my_timeline<P: PaginationStage>(
        &self,
        user: Option<&users::Model>,
        pagination: &P,
        only_favorites: Option<bool>,
        from_date: Option<UtcDateTime>,
    ) -> Result<Vec<media::Model>, TimelineError> {
        resolve(
            &self.db,
            &self.registry,
            user,
            pagination,
            only_favorites,
            from_date,
        )
        .await
    }
}

/// [`TimelineService::my_timeline`] with the built-in dialects
pub async fn my_timeline<P: PaginationStage>(
    db: &CatalogDb,
    user: Option<&users::Model>,
    pagination: &P,
    only_favorites: Option<bool>,
    from_date: Option<UtcDateTime>,
) -> Result<Vec<media::Model>, TimelineError> {
    resolve(
        db,
        &default_registry(),
        user,
        pagination,
        only_favorites,
        from_date,
    )
    .await
}

async fn resolve<P: PaginationStage>(
    db: &CatalogDb,
    registry: &DriverRegistry,
    user: Option<&users::Model>,
    pagination: &P,
    only_favorites: Option<bool>,
    from_date: Option<UtcDateTime>,
) -> Result<Vec<media::Model>, TimelineError> {
    let user = user.ok_or(TimelineError::Unauthorized)?;
    let driver = db.driver();
    let only_favorites = only_favorites.unwrap_or(false);

    debug!(
        "Resolving timeline for user {} on {} (only_favorites: {}, from_date: {:?})",
        user.id, driver, only_favorites, from_date
    );

    let query = TimelineQuery::for_user(user.id)
        .only_favorites(only_favorites)
        .from_date(from_date)
        .build(registry, driver)
        .map_err(|e| {
            error!("Cannot build timeline query for user {}: {}", user.id, e);
            e
        })?;

    let media = pagination
        .paginate(query)
        .all(db.connection())
        .await
        .map_err(|e| {
            error!("Timeline query failed for user {}: {}", user.id, e);
            TimelineError::Database(e)
        })?;

    debug!("Resolved {} timeline items for user {}", media.len(), user.id);
    Ok(media)
}
