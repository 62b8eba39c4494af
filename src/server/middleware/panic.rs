use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::server::error::InternalServerError;

const UNKNOWN_PANIC_MESSAGE: &str = "Unknown panic";

/// Panic handler for `CatchPanicLayer`.
///
/// Logs the panic payload and renders it as the 500 failure envelope.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else {
        UNKNOWN_PANIC_MESSAGE.to_string()
    };

    InternalServerError(format!("Request handler panicked: {}", message)).into_response()
}
