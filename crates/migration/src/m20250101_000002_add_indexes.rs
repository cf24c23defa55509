use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Listing is always newest-first
        manager
            .create_index(
                Index::create()
                    .name("idx_service_record_created_at")
                    .table(ServiceRecord::Table)
                    .col(ServiceRecord::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_service_record_plate")
                    .table(ServiceRecord::Table)
                    .col(ServiceRecord::Plate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_service_record_plate").table(ServiceRecord::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_record_created_at").table(ServiceRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ServiceRecord {
    Table,
    Plate,
    CreatedAt,
}
