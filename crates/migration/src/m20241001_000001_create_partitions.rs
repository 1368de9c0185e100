//! Create `partitions` table.
//!
//! One row per sheet-music entry. Asset columns hold paths relative to the
//! public storage, never absolute URLs.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Partitions::Table)
                    .if_not_exists()
                    .col(big_integer(Partitions::Id).auto_increment().primary_key())
                    .col(string(Partitions::Titre).not_null())
                    .col(string(Partitions::Categorie).not_null())
                    .col(string(Partitions::PdfUrl).not_null())
                    .col(string(Partitions::AudioUrl).not_null())
                    .col(integer(Partitions::Version).not_null().default(1))
                    .col(boolean(Partitions::IsFavorite).not_null().default(false))
                    .col(
                        timestamp_with_time_zone(Partitions::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Partitions::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Partitions::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Partitions {
    Table,
    Id,
    Titre,
    Categorie,
    PdfUrl,
    AudioUrl,
    Version,
    IsFavorite,
    CreatedAt,
    UpdatedAt,
}
