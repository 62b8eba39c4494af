use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, PaginatedResponse, ValidationErrorResponse},
        flight::{CreateFlightDto, FlightDto, PaginationQuery, SearchFlightsQuery, UpdateFlightDto},
    },
    server::{
        error::AppError,
        extract::{AppPath, AppQuery, ValidatedJson},
        model::flight::{FlightSearchParams, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE},
        service::flight::FlightService,
        state::AppState,
    },
};

/// Tag for grouping flight endpoints in OpenAPI documentation
pub static FLIGHT_TAG: &str = "flight";

pub const FLIGHT_NOT_FOUND: &str = "Flight not found";
pub const FLIGHT_CREATED: &str = "Flight created successfully";
pub const FLIGHT_UPDATED: &str = "Flight updated successfully";
pub const FLIGHT_DELETED: &str = "Flight deleted successfully";

/// Get a page of flights.
///
/// Returns flights ordered by ID. Page numbers below 1 are treated as 1, page sizes below 1
/// fall back to 10 and page sizes above 100 are capped at 100; the envelope reports the
/// values actually used.
///
/// # Returns
/// - `200 OK` - Paginated envelope of flights
/// - `400 Bad Request` - Unparsable query string
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/flights",
    tag = FLIGHT_TAG,
    params(PaginationQuery),
    responses(
        (status = 200, description = "Successfully retrieved flights", body = PaginatedResponse<FlightDto>),
        (status = 400, description = "Invalid query string", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ApiResponse<FlightDto>)
    ),
)]
pub async fn get_flights(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page_number = query.page_number.unwrap_or(DEFAULT_PAGE_NUMBER as i64);
    let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE as i64);

    tracing::info!(page_number, page_size, "Listing flights");

    let flights = FlightService::new(&state.db)
        .get_paginated(page_number, page_size)
        .await?;

    Ok((StatusCode::OK, Json(flights.into_dto())))
}

/// Get a flight by ID.
///
/// # Returns
/// - `200 OK` - Envelope holding the flight
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No flight with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/flights/{id}",
    tag = FLIGHT_TAG,
    params(
        ("id" = i32, Path, description = "Flight ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved flight", body = ApiResponse<FlightDto>),
        (status = 400, description = "Invalid flight ID", body = ValidationErrorResponse),
        (status = 404, description = "Flight not found", body = ApiResponse<FlightDto>),
        (status = 500, description = "Internal server error", body = ApiResponse<FlightDto>)
    ),
)]
pub async fn get_flight_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let Some(flight) = FlightService::new(&state.db).get_by_id(id).await? else {
        tracing::warn!(id, "Flight not found");
        return Err(AppError::NotFound(FLIGHT_NOT_FOUND.to_string()));
    };

    Ok((StatusCode::OK, Json(ApiResponse::ok(flight.into_dto()))))
}

/// Create a new flight.
///
/// Every field is required. Text fields must be non-blank and within their maximum length;
/// all failing fields are reported together.
///
/// # Returns
/// - `201 Created` - Envelope holding the stored flight, with a `Location` header
/// - `400 Bad Request` - Malformed body or failed field validation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/flights",
    tag = FLIGHT_TAG,
    request_body = CreateFlightDto,
    responses(
        (status = 201, description = "Successfully created flight", body = ApiResponse<FlightDto>),
        (status = 400, description = "Invalid flight data", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ApiResponse<FlightDto>)
    ),
)]
pub async fn create_flight(
    State(state): State<AppState>,
    ValidatedJson(params): ValidatedJson<CreateFlightDto>,
) -> Result<impl IntoResponse, AppError> {
    let flight = FlightService::new(&state.db).create(params).await?;

    tracing::info!(id = flight.id, flight_number = %flight.flight_number, "Created flight");

    let location = format!("/api/flights/{}", flight.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::ok_with_message(
            flight.into_dto(),
            FLIGHT_CREATED,
        )),
    ))
}

/// Update a flight.
///
/// Only fields present in the body are changed; omitted or `null` fields keep their value.
///
/// # Returns
/// - `200 OK` - Envelope with `data: null` and a confirmation message
/// - `400 Bad Request` - Malformed body, invalid ID or failed field validation
/// - `404 Not Found` - No flight with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/flights/{id}",
    tag = FLIGHT_TAG,
    params(
        ("id" = i32, Path, description = "Flight ID")
    ),
    request_body = UpdateFlightDto,
    responses(
        (status = 200, description = "Successfully updated flight", body = ApiResponse<FlightDto>),
        (status = 400, description = "Invalid flight data", body = ValidationErrorResponse),
        (status = 404, description = "Flight not found", body = ApiResponse<FlightDto>),
        (status = 500, description = "Internal server error", body = ApiResponse<FlightDto>)
    ),
)]
pub async fn update_flight(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    ValidatedJson(params): ValidatedJson<UpdateFlightDto>,
) -> Result<impl IntoResponse, AppError> {
    if FlightService::new(&state.db)
        .update(id, params)
        .await?
        .is_none()
    {
        tracing::warn!(id, "Flight not found for update");
        return Err(AppError::NotFound(FLIGHT_NOT_FOUND.to_string()));
    }

    tracing::info!(id, "Updated flight");

    Ok((
        StatusCode::OK,
        Json(ApiResponse::<FlightDto>::message(FLIGHT_UPDATED)),
    ))
}

/// Delete a flight.
///
/// # Returns
/// - `200 OK` - Envelope with `data: null` and a confirmation message
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No flight with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/flights/{id}",
    tag = FLIGHT_TAG,
    params(
        ("id" = i32, Path, description = "Flight ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted flight", body = ApiResponse<FlightDto>),
        (status = 400, description = "Invalid flight ID", body = ValidationErrorResponse),
        (status = 404, description = "Flight not found", body = ApiResponse<FlightDto>),
        (status = 500, description = "Internal server error", body = ApiResponse<FlightDto>)
    ),
)]
pub async fn delete_flight(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !FlightService::new(&state.db).delete(id).await? {
        tracing::warn!(id, "Flight not found for delete");
        return Err(AppError::NotFound(FLIGHT_NOT_FOUND.to_string()));
    }

    tracing::info!(id, "Deleted flight");

    Ok((
        StatusCode::OK,
        Json(ApiResponse::<FlightDto>::message(FLIGHT_DELETED)),
    ))
}

/// Search flights.
///
/// Text criteria match case-insensitive substrings. When both `startDate` and `endDate` are
/// given, departures within that inclusive range are kept and `date` is ignored; otherwise
/// `date` keeps departures on that day. Results are ordered by ID and not paginated.
///
/// # Returns
/// - `200 OK` - Envelope holding the matching flights
/// - `400 Bad Request` - Unparsable date or query string
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/flights/search",
    tag = FLIGHT_TAG,
    params(SearchFlightsQuery),
    responses(
        (status = 200, description = "Successfully searched flights", body = ApiResponse<Vec<FlightDto>>),
        (status = 400, description = "Invalid search criteria", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ApiResponse<FlightDto>)
    ),
)]
pub async fn search_flights(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<SearchFlightsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let params = FlightSearchParams::from_query(query);

    tracing::info!(?params, "Searching flights");

    let flights = FlightService::new(&state.db).search(&params).await?;
    let flights: Vec<FlightDto> = flights.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(flights))))
}
