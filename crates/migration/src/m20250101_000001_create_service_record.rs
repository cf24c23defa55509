//! Create `service_record` table.
//! One row per car-wash transaction; `id` and `created_at` are owned by the database layer.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceRecord::Id))
                    .col(string_len(ServiceRecord::Plate, 16).not_null())
                    .col(string_len(ServiceRecord::Model, 128).not_null())
                    .col(string_len(ServiceRecord::ClientType, 32).not_null())
                    .col(string_len(ServiceRecord::Service, 64).not_null())
                    .col(decimal_len(ServiceRecord::Price, 10, 2).not_null())
                    .col(boolean(ServiceRecord::Paid).not_null().default(false))
                    .col(boolean(ServiceRecord::Active).not_null().default(true))
                    .col(
                        timestamp_with_time_zone(ServiceRecord::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceRecord::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceRecord {
    Table,
    Id,
    Plate,
    Model,
    ClientType,
    Service,
    Price,
    Paid,
    Active,
    CreatedAt,
}
