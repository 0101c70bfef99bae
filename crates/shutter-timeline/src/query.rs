//! Timeline query construction

use sea_orm::sea_query::{Expr, Query, SelectStatement};
use sea_orm::{ColumnTrait, EntityTrait, Order, QueryFilter, QueryOrder, Select};
use shutter_core::UtcDateTime;
use shutter_database::{DatabaseDriverType, DriverError, DriverRegistry};
use shutter_entities::{albums, media, user_albums, user_media_data};

/// Column the timeline is ordered and paged by, as referenced in dialect fragments
const DATE_SHOT: &str = "media.date_shot";

/// Filters of a single timeline request.
///
/// [`TimelineQuery::build`] always restricts to the user's albums first;
/// `only_favorites` and `from_date` only narrow that set further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineQuery {
    user_id: i32,
    only_favorites: bool,
    from_date: Option<UtcDateTime>,
}

impl TimelineQuery {
    pub fn for_user(user_id: i32) -> Self {
        Self {
            user_id,
            only_favorites: false,
            from_date: None,
        }
    }

    pub fn only_favorites(mut self, only_favorites: bool) -> Self {
        self.only_favorites = only_favorites;
        self
    }

    /// Only media shot strictly before `from_date`
    pub fn from_date(mut self, from_date: Option<UtcDateTime>) -> Self {
        self.from_date = from_date;
        self
    }

    pub fn user_id(&self) -> i32 {
        self.user_id
    }

    /// Filtered and ordered select, ready for a pagination stage.
    ///
    /// Fails without building anything when `driver` lacks one of the
    /// fragments the ordering needs.
    pub fn build(
        &self,
        registry: &DriverRegistry,
        driver: DatabaseDriverType,
    ) -> Result<Select<media::Entity>, DriverError> {
        let day = registry.truncate_day(driver, DATE_SHOT)?;
        let time_of_day = registry.time_of_day(driver, DATE_SHOT)?;

        let mut query = media::Entity::find()
            .inner_join(albums::Entity)
            .filter(albums::Column::Id.in_subquery(visible_albums(self.user_id)))
            .order_by(Expr::cust(day), Order::Desc)
            .order_by(albums::Column::Title, Order::Asc)
            .order_by(Expr::cust(time_of_day), Order::Desc);

        // Exact timestamp comparison, independent of the day grouping above
        if let Some(from_date) = self.from_date {
            query = query.filter(media::Column::DateShot.lt(from_date));
        }

        if self.only_favorites {
            query = query.filter(media::Column::Id.in_subquery(favorite_media(self.user_id)));
        }

        Ok(query)
    }
}

/// `SELECT album_id FROM user_albums WHERE user_id = ?`
fn visible_albums(user_id: i32) -> SelectStatement {
    Query::select()
        .column(user_albums::Column::AlbumId)
        .from(user_albums::Entity)
        .and_where(user_albums::Column::UserId.eq(user_id))
        .to_owned()
}

/// `SELECT media_id FROM user_media_data WHERE user_id = ? AND favorite`
fn favorite_media(user_id: i32) -> SelectStatement {
    Query::select()
        .column(user_media_data::Column::MediaId)
        .from(user_media_data::Entity)
        .and_where(user_media_data::Column::UserId.eq(user_id))
        .and_where(user_media_data::Column::Favorite.eq(true))
        .to_owned()
}
