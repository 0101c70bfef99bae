use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_media_album_id")
                    .table(Alias::new("media"))
                    .col(Alias::new("album_id"))
                    .to_owned(),
            )
            .await?;

        // Timeline cursor filter
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_media_date_shot")
                    .table(Alias::new("media"))
                    .col(Alias::new("date_shot"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_user_albums_user_id")
                    .table(Alias::new("user_albums"))
                    .col(Alias::new("user_id"))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table) in [
            ("idx_user_albums_user_id", "user_albums"),
            ("idx_media_date_shot", "media"),
            ("idx_media_album_id", "media"),
        ] {
            manager
                .drop_index(
                    Index::drop()
                        .name(name)
                        .table(Alias::new(table))
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}
