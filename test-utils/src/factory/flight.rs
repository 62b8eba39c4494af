//! Flight factory for creating test flight entities.
//!
//! This module provides factory methods for creating flight entities with sensible defaults,
//! reducing boilerplate in tests. The factory supports customization through a builder pattern.

use crate::factory::helpers::{next_id, now_seconds};
use chrono::{DateTime, Duration, Utc};
use entity::flight::FlightStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flights with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::flight::FlightFactory;
///
/// let flight = FlightFactory::new(&db)
///     .airline("Air New Zealand")
///     .departure_airport("CHC")
///     .arrival_airport("MEL")
///     .build()
///     .await?;
/// ```
pub struct FlightFactory<'a> {
    db: &'a DatabaseConnection,
    flight_number: String,
    airline: String,
    departure_airport: String,
    arrival_airport: String,
    departure_time: DateTime<Utc>,
    arrival_time: DateTime<Utc>,
    status: FlightStatus,
}

impl<'a> FlightFactory<'a> {
    /// Creates a new FlightFactory with default values.
    ///
    /// Defaults:
    /// - flight_number: `"TF{id}"` where id is auto-incremented
    /// - airline: `"Qantas"`
    /// - departure_airport: `"MEL"`, arrival_airport: `"SYD"`
    /// - departure_time: now (whole seconds), arrival_time: 2 hours later
    /// - status: `Scheduled`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `FlightFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let departure_time = now_seconds();
        Self {
            db,
            flight_number: format!("TF{}", id % 100_000_000),
            airline: "Qantas".to_string(),
            departure_airport: "MEL".to_string(),
            arrival_airport: "SYD".to_string(),
            departure_time,
            arrival_time: departure_time + Duration::hours(2),
            status: FlightStatus::Scheduled,
        }
    }

    pub fn flight_number(mut self, flight_number: impl Into<String>) -> Self {
        self.flight_number = flight_number.into();
        self
    }

    pub fn airline(mut self, airline: impl Into<String>) -> Self {
        self.airline = airline.into();
        self
    }

    pub fn departure_airport(mut self, departure_airport: impl Into<String>) -> Self {
        self.departure_airport = departure_airport.into();
        self
    }

    pub fn arrival_airport(mut self, arrival_airport: impl Into<String>) -> Self {
        self.arrival_airport = arrival_airport.into();
        self
    }

    /// Sets the departure time and moves the arrival time to keep a 2 hour flight.
    ///
    /// Call `arrival_time` afterwards to override the arrival explicitly.
    pub fn departure_time(mut self, departure_time: DateTime<Utc>) -> Self {
        self.departure_time = departure_time;
        self.arrival_time = departure_time + Duration::hours(2);
        self
    }

    pub fn arrival_time(mut self, arrival_time: DateTime<Utc>) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    pub fn status(mut self, status: FlightStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the flight entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::flight::Model)` - Created flight entity with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::flight::Model, DbErr> {
        entity::flight::ActiveModel {
            id: ActiveValue::NotSet,
            flight_number: ActiveValue::Set(self.flight_number),
            airline: ActiveValue::Set(self.airline),
            departure_airport: ActiveValue::Set(self.departure_airport),
            arrival_airport: ActiveValue::Set(self.arrival_airport),
            departure_time: ActiveValue::Set(self.departure_time),
            arrival_time: ActiveValue::Set(self.arrival_time),
            status: ActiveValue::Set(self.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a flight with default values.
///
/// Shorthand for `FlightFactory::new(db).build().await`.
///
/// # Returns
/// - `Ok(entity::flight::Model)` - Created flight entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_flight(db: &DatabaseConnection) -> Result<entity::flight::Model, DbErr> {
    FlightFactory::new(db).build().await
}
