use chrono::{NaiveDate, NaiveTime};
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, LikeExpr},
    ColumnTrait, Condition, DatabaseConnection,
};

use crate::server::{
    data::flight::FlightRepository,
    error::AppError,
    model::flight::{
        CreateFlightParams, Flight, FlightSearchParams, PageRequest, PaginatedFlights,
        UpdateFlightParams,
    },
};

pub struct FlightService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of flights ordered by ID.
    ///
    /// Out-of-range page values are clamped (see [`PageRequest::clamped`]) and the clamped values
    /// are the ones reported back alongside the page.
    pub async fn get_paginated(
        &self,
        page_number: i64,
        page_size: i64,
    ) -> Result<PaginatedFlights, AppError> {
        let page = PageRequest::clamped(page_number, page_size);

        let (flights, total_count) = FlightRepository::new(self.db).get_paginated(page).await?;

        Ok(PaginatedFlights {
            flights,
            total_count,
            page,
        })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Flight>, AppError> {
        Ok(FlightRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn create(&self, params: CreateFlightParams) -> Result<Flight, AppError> {
        Ok(FlightRepository::new(self.db).create(params).await?)
    }

    /// Applies a partial update, returning `None` when the flight does not exist.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateFlightParams,
    ) -> Result<Option<Flight>, AppError> {
        Ok(FlightRepository::new(self.db).update(id, params).await?)
    }

    /// Deletes a flight, returning `false` when it does not exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(FlightRepository::new(self.db).delete(id).await?)
    }

    /// Gets every flight matching all supplied search criteria, ordered by ID.
    pub async fn search(&self, params: &FlightSearchParams) -> Result<Vec<Flight>, AppError> {
        let condition = search_condition(params);

        Ok(FlightRepository::new(self.db)
            .find_matching(condition)
            .await?)
    }
}

/// AND-combines one predicate per supplied search criterion.
pub fn search_condition(params: &FlightSearchParams) -> Condition {
    let mut predicates: Vec<Condition> = Vec::new();

    if let Some(airline) = &params.airline {
        predicates.push(contains_ignore_case(entity::flight::Column::Airline, airline));
    }
    if let Some(departure_airport) = &params.departure_airport {
        predicates.push(contains_ignore_case(
            entity::flight::Column::DepartureAirport,
            departure_airport,
        ));
    }
    if let Some(arrival_airport) = &params.arrival_airport {
        predicates.push(contains_ignore_case(
            entity::flight::Column::ArrivalAirport,
            arrival_airport,
        ));
    }
    if let Some((first_day, last_day)) = params.departure_date_window() {
        predicates.push(departs_within(first_day, last_day));
    }

    predicates.into_iter().fold(Condition::all(), Condition::add)
}

/// `LOWER(column) LIKE '%needle%'` with LIKE wildcards in the needle matched literally.
///
/// SQLite's `LOWER` folds ASCII letters only, so the needle is folded the same way.
fn contains_ignore_case(column: entity::flight::Column, needle: &str) -> Condition {
    let pattern = format!("%{}%", escape_like(&needle.to_ascii_lowercase()));

    Condition::all().add(
        Expr::expr(Func::lower(Expr::col((entity::prelude::Flight, column))))
            .like(LikeExpr::new(pattern).escape('\\')),
    )
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Departures from `first_day` 00:00 UTC up to, but excluding, the day after `last_day`.
fn departs_within(first_day: NaiveDate, last_day: NaiveDate) -> Condition {
    let mut condition = Condition::all().add(
        entity::flight::Column::DepartureTime.gte(first_day.and_time(NaiveTime::MIN).and_utc()),
    );

    if let Some(day_after) = last_day.succ_opt() {
        condition = condition.add(
            entity::flight::Column::DepartureTime.lt(day_after.and_time(NaiveTime::MIN).and_utc()),
        );
    }

    condition
}
