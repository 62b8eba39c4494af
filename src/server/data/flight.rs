use sea_orm::{
    ActiveModelTrait, ActiveValue, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::flight::{CreateFlightParams, Flight, PageRequest, UpdateFlightParams};

/// Repository providing database operations for flight records.
pub struct FlightRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new flight and returns it with its database-assigned ID.
    ///
    /// # Arguments
    /// - `params` - Validated flight fields
    ///
    /// # Returns
    /// - `Ok(Flight)` - The stored flight
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateFlightParams) -> Result<Flight, DbErr> {
        let entity = entity::flight::ActiveModel {
            flight_number: ActiveValue::Set(params.flight_number),
            airline: ActiveValue::Set(params.airline),
            departure_airport: ActiveValue::Set(params.departure_airport),
            arrival_airport: ActiveValue::Set(params.arrival_airport),
            departure_time: ActiveValue::Set(params.departure_time),
            arrival_time: ActiveValue::Set(params.arrival_time),
            status: ActiveValue::Set(params.status.into()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Flight::from_entity(entity))
    }

    /// Gets a flight by its ID, `None` if no such flight exists.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Flight>, DbErr> {
        let entity = entity::prelude::Flight::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Flight::from_entity))
    }

    /// Gets one page of flights ordered by ID.
    ///
    /// # Arguments
    /// - `page` - Clamped page position
    ///
    /// # Returns
    /// - `Ok((flights, total))` - Flights on the requested page and the total number of flights
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(&self, page: PageRequest) -> Result<(Vec<Flight>, u64), DbErr> {
        let paginator = entity::prelude::Flight::find()
            .order_by_asc(entity::flight::Column::Id)
            .paginate(self.db, page.page_size);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.page_index()).await?;
        let flights = entities.into_iter().map(Flight::from_entity).collect();

        Ok((flights, total))
    }

    /// Gets every flight matching `condition`, ordered by ID.
    pub async fn find_matching(&self, condition: Condition) -> Result<Vec<Flight>, DbErr> {
        let entities = entity::prelude::Flight::find()
            .filter(condition)
            .order_by_asc(entity::flight::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Flight::from_entity).collect())
    }

    /// Applies the supplied fields of `params` to an existing flight.
    ///
    /// Fields left as `None` keep their stored value. When no field is supplied the flight is
    /// returned as stored without issuing an update.
    ///
    /// # Returns
    /// - `Ok(Some(Flight))` - The flight after the update
    /// - `Ok(None)` - No flight exists with the specified ID; nothing was written
    /// - `Err(DbErr)` - Database error during fetch or update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateFlightParams,
    ) -> Result<Option<Flight>, DbErr> {
        let Some(flight) = entity::prelude::Flight::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        if params.is_empty() {
            return Ok(Some(Flight::from_entity(flight)));
        }

        let mut active_model: entity::flight::ActiveModel = flight.into();
        if let Some(flight_number) = params.flight_number {
            active_model.flight_number = ActiveValue::Set(flight_number);
        }
        if let Some(airline) = params.airline {
            active_model.airline = ActiveValue::Set(airline);
        }
        if let Some(departure_airport) = params.departure_airport {
            active_model.departure_airport = ActiveValue::Set(departure_airport);
        }
        if let Some(arrival_airport) = params.arrival_airport {
            active_model.arrival_airport = ActiveValue::Set(arrival_airport);
        }
        if let Some(departure_time) = params.departure_time {
            active_model.departure_time = ActiveValue::Set(departure_time);
        }
        if let Some(arrival_time) = params.arrival_time {
            active_model.arrival_time = ActiveValue::Set(arrival_time);
        }
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status.into());
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(Flight::from_entity(entity)))
    }

    /// Deletes a flight.
    ///
    /// # Returns
    /// - `Ok(true)` - The flight existed and was deleted
    /// - `Ok(false)` - No flight exists with the specified ID
    /// - `Err(DbErr)` - Database error during fetch or delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        if entity::prelude::Flight::find_by_id(id)
            .one(self.db)
            .await?
            .is_none()
        {
            return Ok(false);
        }

        entity::prelude::Flight::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(true)
    }
}
