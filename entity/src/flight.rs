use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flight")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(10))")]
    pub flight_number: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub airline: String,
    #[sea_orm(column_type = "String(StringLen::N(3))")]
    pub departure_airport: String,
    #[sea_orm(column_type = "String(StringLen::N(3))")]
    pub arrival_airport: String,
    pub departure_time: DateTimeUtc,
    pub arrival_time: DateTimeUtc,
    pub status: FlightStatus,
}

/// Operational status of a flight, stored by its symbolic name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum FlightStatus {
    #[sea_orm(string_value = "Scheduled")]
    Scheduled,
    #[sea_orm(string_value = "Delayed")]
    Delayed,
    #[sea_orm(string_value = "Cancelled")]
    Cancelled,
    #[sea_orm(string_value = "InAir")]
    InAir,
    #[sea_orm(string_value = "Landed")]
    Landed,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
