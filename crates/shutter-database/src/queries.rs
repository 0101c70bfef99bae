//! Common database query utilities

use sea_orm::{EntityTrait, QuerySelect, Select};
use shutter_core::PaginationParams;

/// Final stage applied to an ordered query: limit/offset, cursor size, ...
///
/// Runs after ordering and filtering are settled and must not reorder rows.
pub trait PaginationStage {
    fn paginate<E: EntityTrait>(&self, query: Select<E>) -> Select<E>;
}

/// SQLite only accepts OFFSET after a LIMIT
const UNBOUNDED_LIMIT: u64 = i64::MAX as u64;

impl PaginationStage for PaginationParams {
    fn paginate<E: EntityTrait>(&self, mut query: Select<E>) -> Select<E> {
        match (self.limit, self.offset) {
            (Some(limit), _) => query = query.limit(limit),
            (None, Some(_)) => query = query.limit(UNBOUNDED_LIMIT),
            (None, None) => {}
        }
        if let Some(offset) = self.offset {
            query = query.offset(offset);
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, QueryTrait};
    use shutter_entities::media;

    #[test]
    fn test_limit_and_offset_applied() {
        let sql = PaginationParams::new(Some(20), Some(40))
            .paginate(media::Entity::find())
            .build(DatabaseBackend::Sqlite)
            .to_string();

        assert!(sql.ends_with("LIMIT 20 OFFSET 40"), "{}", sql);
    }

    #[test]
    fn test_offset_without_limit_gets_unbounded_limit() {
        let sql = PaginationParams::new(None, Some(2))
            .paginate(media::Entity::find())
            .build(DatabaseBackend::Sqlite)
            .to_string();

        assert!(
            sql.ends_with(&format!("LIMIT {} OFFSET 2", i64::MAX)),
            "{}",
            sql
        );
    }

    #[test]
    fn test_unbounded_params_leave_query_untouched() {
        let plain = media::Entity::find()
            .build(DatabaseBackend::Sqlite)
            .to_string();
        let paged = PaginationParams::default()
            .paginate(media::Entity::find())
            .build(DatabaseBackend::Sqlite)
            .to_string();

        assert_eq!(plain, paged);
    }
}
