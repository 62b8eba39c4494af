use crate::server::error::AppError;

pub const RESOURCE_NOT_FOUND: &str = "Resource not found";

/// Router fallback for requests that match no route.
pub async fn not_found() -> AppError {
    AppError::NotFound(RESOURCE_NOT_FOUND.to_string())
}
