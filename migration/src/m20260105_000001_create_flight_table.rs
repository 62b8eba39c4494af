use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flight::Table)
                    .if_not_exists()
                    .col(pk_auto(Flight::Id))
                    .col(string_len(Flight::FlightNumber, 10))
                    .col(string_len(Flight::Airline, 50))
                    .col(string_len(Flight::DepartureAirport, 3))
                    .col(string_len(Flight::ArrivalAirport, 3))
                    .col(timestamp_with_time_zone(Flight::DepartureTime))
                    .col(timestamp_with_time_zone(Flight::ArrivalTime))
                    .col(string_len(Flight::Status, 16))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Flight::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Flight {
    Table,
    Id,
    FlightNumber,
    Airline,
    DepartureAirport,
    ArrivalAirport,
    DepartureTime,
    ArrivalTime,
    Status,
}
