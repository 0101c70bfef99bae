use sea_orm_migration::prelude::*;

/// Catalog schema: users, albums, album membership, media and per-user media data
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Username).string().not_null().unique_key())
                    .col(
                        ColumnDef::new(Users::Admin)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Albums::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Albums::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Albums::Title).string().not_null())
                    .col(ColumnDef::new(Albums::ParentAlbumId).integer().null())
                    .col(ColumnDef::new(Albums::Path).string().not_null().unique_key())
                    .col(
                        ColumnDef::new(Albums::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Albums::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_albums_parent_album_id")
                            .from(Albums::Table, Albums::ParentAlbumId)
                            .to(Albums::Table, Albums::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserAlbums::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserAlbums::AlbumId).integer().not_null())
                    .col(ColumnDef::new(UserAlbums::UserId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(UserAlbums::AlbumId)
                            .col(UserAlbums::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_albums_album_id")
                            .from(UserAlbums::Table, UserAlbums::AlbumId)
                            .to(Albums::Table, Albums::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_albums_user_id")
                            .from(UserAlbums::Table, UserAlbums::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Media::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Media::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Media::Title).string().not_null())
                    .col(ColumnDef::new(Media::Path).string().not_null())
                    .col(
                        ColumnDef::new(Media::MediaType)
                            .text()
                            .not_null()
                            .default("photo"),
                    )
                    .col(ColumnDef::new(Media::AlbumId).integer().not_null())
                    .col(
                        ColumnDef::new(Media::DateShot)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Media::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Media::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_media_album_id")
                            .from(Media::Table, Media::AlbumId)
                            .to(Albums::Table, Albums::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserMediaData::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserMediaData::UserId).integer().not_null())
                    .col(ColumnDef::new(UserMediaData::MediaId).integer().not_null())
                    .col(
                        ColumnDef::new(UserMediaData::Favorite)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserMediaData::UserId)
                            .col(UserMediaData::MediaId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_media_data_user_id")
                            .from(UserMediaData::Table, UserMediaData::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_media_data_media_id")
                            .from(UserMediaData::Table, UserMediaData::MediaId)
                            .to(Media::Table, Media::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserMediaData::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Media::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserAlbums::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Albums::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Admin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Albums {
    Table,
    Id,
    Title,
    ParentAlbumId,
    Path,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum UserAlbums {
    Table,
    AlbumId,
    UserId,
}

#[derive(DeriveIden)]
enum Media {
    Table,
    Id,
    Title,
    Path,
    MediaType,
    AlbumId,
    DateShot,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum UserMediaData {
    Table,
    UserId,
    MediaId,
    Favorite,
}
