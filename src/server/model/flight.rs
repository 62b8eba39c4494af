//! Domain & parameter models for flight operations
//!
//! Defines the flight domain model, the parameter models consumed by the service layer and
//! the conversions between them, the database entity and the API DTOs.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::{
        api::PaginatedResponse,
        flight::{CreateFlightDto, FlightDto, FlightStatus, SearchFlightsQuery, UpdateFlightDto},
    },
    server::model::validation::{
        optional_string, required, required_string, Validate, ValidationErrors,
    },
};

pub const FLIGHT_NUMBER_MAX_LENGTH: usize = 10;
pub const AIRLINE_MAX_LENGTH: usize = 50;
pub const AIRPORT_CODE_MAX_LENGTH: usize = 3;

pub const DEFAULT_PAGE_NUMBER: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;
/// Highest page number whose row offset still fits a SQLite integer at the largest page size.
pub const MAX_PAGE_NUMBER: u64 = i64::MAX as u64 / MAX_PAGE_SIZE;

/// The flight domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub id: i32,
    pub flight_number: String,
    pub airline: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub status: FlightStatus,
}

impl Flight {
    /// Converts an entity model to the flight domain model at the repository boundary.
    pub fn from_entity(entity: entity::flight::Model) -> Self {
        Self {
            id: entity.id,
            flight_number: entity.flight_number,
            airline: entity.airline,
            departure_airport: entity.departure_airport,
            arrival_airport: entity.arrival_airport,
            departure_time: entity.departure_time,
            arrival_time: entity.arrival_time,
            status: entity.status.into(),
        }
    }

    pub fn into_dto(self) -> FlightDto {
        FlightDto {
            id: self.id,
            flight_number: self.flight_number,
            airline: self.airline,
            departure_airport: self.departure_airport,
            arrival_airport: self.arrival_airport,
            departure_time: self.departure_time,
            arrival_time: self.arrival_time,
            status: self.status,
        }
    }
}

impl From<entity::flight::FlightStatus> for FlightStatus {
    fn from(status: entity::flight::FlightStatus) -> Self {
        match status {
            entity::flight::FlightStatus::Scheduled => Self::Scheduled,
            entity::flight::FlightStatus::Delayed => Self::Delayed,
            entity::flight::FlightStatus::Cancelled => Self::Cancelled,
            entity::flight::FlightStatus::InAir => Self::InAir,
            entity::flight::FlightStatus::Landed => Self::Landed,
        }
    }
}

impl From<FlightStatus> for entity::flight::FlightStatus {
    fn from(status: FlightStatus) -> Self {
        match status {
            FlightStatus::Scheduled => Self::Scheduled,
            FlightStatus::Delayed => Self::Delayed,
            FlightStatus::Cancelled => Self::Cancelled,
            FlightStatus::InAir => Self::InAir,
            FlightStatus::Landed => Self::Landed,
        }
    }
}

/// Parameters for creating a new flight; every field has passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateFlightParams {
    pub flight_number: String,
    pub airline: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub status: FlightStatus,
}

impl Validate for CreateFlightDto {
    type Validated = CreateFlightParams;

    fn validate(self) -> Result<CreateFlightParams, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let flight_number = required_string(
            &mut errors,
            "flightNumber",
            "FlightNumber",
            self.flight_number,
            FLIGHT_NUMBER_MAX_LENGTH,
        );
        let airline = required_string(
            &mut errors,
            "airline",
            "Airline",
            self.airline,
            AIRLINE_MAX_LENGTH,
        );
        let departure_airport = required_string(
            &mut errors,
            "departureAirport",
            "DepartureAirport",
            self.departure_airport,
            AIRPORT_CODE_MAX_LENGTH,
        );
        let arrival_airport = required_string(
            &mut errors,
            "arrivalAirport",
            "ArrivalAirport",
            self.arrival_airport,
            AIRPORT_CODE_MAX_LENGTH,
        );
        let departure_time = required(
            &mut errors,
            "departureTime",
            "DepartureTime",
            self.departure_time,
        );
        let arrival_time = required(&mut errors, "arrivalTime", "ArrivalTime", self.arrival_time);
        let status = required(&mut errors, "status", "Status", self.status);

        match (
            flight_number,
            airline,
            departure_airport,
            arrival_airport,
            departure_time,
            arrival_time,
            status,
        ) {
            (
                Some(flight_number),
                Some(airline),
                Some(departure_airport),
                Some(arrival_airport),
                Some(departure_time),
                Some(arrival_time),
                Some(status),
            ) if errors.is_empty() => Ok(CreateFlightParams {
                flight_number,
                airline,
                departure_airport,
                arrival_airport,
                departure_time,
                arrival_time,
                status,
            }),
            _ => Err(errors),
        }
    }
}

/// Parameters for a partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateFlightParams {
    pub flight_number: Option<String>,
    pub airline: Option<String>,
    pub departure_airport: Option<String>,
    pub arrival_airport: Option<String>,
    pub departure_time: Option<DateTime<Utc>>,
    pub arrival_time: Option<DateTime<Utc>>,
    pub status: Option<FlightStatus>,
}

impl UpdateFlightParams {
    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl Validate for UpdateFlightDto {
    type Validated = UpdateFlightParams;

    fn validate(self) -> Result<UpdateFlightParams, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let params = UpdateFlightParams {
            flight_number: optional_string(
                &mut errors,
                "flightNumber",
                "FlightNumber",
                self.flight_number,
                FLIGHT_NUMBER_MAX_LENGTH,
            ),
            airline: optional_string(
                &mut errors,
                "airline",
                "Airline",
                self.airline,
                AIRLINE_MAX_LENGTH,
            ),
            departure_airport: optional_string(
                &mut errors,
                "departureAirport",
                "DepartureAirport",
                self.departure_airport,
                AIRPORT_CODE_MAX_LENGTH,
            ),
            arrival_airport: optional_string(
                &mut errors,
                "arrivalAirport",
                "ArrivalAirport",
                self.arrival_airport,
                AIRPORT_CODE_MAX_LENGTH,
            ),
            departure_time: self.departure_time,
            arrival_time: self.arrival_time,
            status: self.status,
        };

        if errors.is_empty() {
            Ok(params)
        } else {
            Err(errors)
        }
    }
}

/// Search criteria; every `None` criterion is left out of the query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightSearchParams {
    pub airline: Option<String>,
    pub departure_airport: Option<String>,
    pub arrival_airport: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl FlightSearchParams {
    /// Converts query parameters, dropping empty text criteria.
    pub fn from_query(query: SearchFlightsQuery) -> Self {
        Self {
            airline: non_empty(query.airline),
            departure_airport: non_empty(query.departure_airport),
            arrival_airport: non_empty(query.arrival_airport),
            date: query.date,
            start_date: query.start_date,
            end_date: query.end_date,
        }
    }

    /// Inclusive range of departure dates to keep, if any date filter applies.
    ///
    /// A complete `start_date`/`end_date` pair wins over `date`. A lone start or end date
    /// applies no date filter.
    pub fn departure_date_window(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start_date, self.end_date, self.date) {
            (Some(start), Some(end), _) => Some((start, end)),
            (_, _, Some(date)) => Some((date, date)),
            _ => None,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

/// Page position after clamping the requested values into their allowed ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page_number: u64,
    pub page_size: u64,
}

impl PageRequest {
    /// Clamps raw query values: page numbers below 1 become 1, page sizes below 1 fall back to
    /// the default of 10 and sizes above 100 are capped at 100.
    ///
    /// Page numbers beyond [`MAX_PAGE_NUMBER`] are lowered to it; such pages are empty anyway.
    pub fn clamped(page_number: i64, page_size: i64) -> Self {
        let page_number = u64::try_from(page_number)
            .ok()
            .filter(|page| *page >= 1)
            .map_or(DEFAULT_PAGE_NUMBER, |page| page.min(MAX_PAGE_NUMBER));

        let page_size = match u64::try_from(page_size) {
            Ok(size) if size >= 1 => size.min(MAX_PAGE_SIZE),
            _ => DEFAULT_PAGE_SIZE,
        };

        Self {
            page_number,
            page_size,
        }
    }

    /// Zero-based page index as used by the SeaORM paginator.
    pub fn page_index(&self) -> u64 {
        self.page_number - 1
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of flights together with the unfiltered total.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedFlights {
    pub flights: Vec<Flight>,
    pub total_count: u64,
    pub page: PageRequest,
}

impl PaginatedFlights {
    pub fn into_dto(self) -> PaginatedResponse<FlightDto> {
        PaginatedResponse::new(
            self.flights.into_iter().map(Flight::into_dto).collect(),
            self.total_count,
            self.page.page_number,
            self.page.page_size,
        )
    }
}
