use axum::{response::IntoResponse, routing::get, Json, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    model::{
        api::ValidationErrorResponse,
        flight::{CreateFlightDto, FlightDto, FlightStatus, UpdateFlightDto},
    },
    server::{
        controller::flight::{
            self, create_flight, delete_flight, get_flight_by_id, get_flights, search_flights,
            update_flight,
        },
        middleware::{fallback::not_found, panic::handle_panic},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Flight Information API"),
    paths(
        flight::get_flights,
        flight::get_flight_by_id,
        flight::create_flight,
        flight::update_flight,
        flight::delete_flight,
        flight::search_flights,
    ),
    components(schemas(
        FlightDto,
        FlightStatus,
        CreateFlightDto,
        UpdateFlightDto,
        ValidationErrorResponse
    )),
    tags((name = "flight", description = "Flight record management"))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/flights", get(get_flights).post(create_flight))
        .route("/api/flights/search", get(search_flights))
        .route(
            "/api/flights/{id}",
            get(get_flight_by_id)
                .put(update_flight)
                .delete(delete_flight),
        )
        .route("/api/openapi.json", get(openapi))
        .fallback(not_found)
}

/// Wraps a router with panic recovery and request tracing.
pub fn with_boundary_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

/// Builds the complete application with state and layers applied.
pub fn app(state: AppState) -> Router {
    with_boundary_layers(router().with_state(state))
}

async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
