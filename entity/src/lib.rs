//! SeaORM entities for the flightboard database.

pub mod flight;
pub mod prelude;
