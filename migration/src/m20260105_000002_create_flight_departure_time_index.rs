use sea_orm_migration::prelude::*;

use super::m20260105_000001_create_flight_table::Flight;

const INDEX_NAME: &str = "idx_flight_departure_time";

/// Date and date-range searches filter on `departure_time`.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(Flight::Table)
                    .col(Flight::DepartureTime)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(INDEX_NAME).table(Flight::Table).to_owned())
            .await
    }
}
