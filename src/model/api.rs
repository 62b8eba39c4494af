use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Message returned alongside a validation error map.
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed";

/// Uniform envelope wrapped around every non-paginated response body.
///
/// `data` serializes as `null` when absent, e.g. for not-found, update and delete responses.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }

    /// Successful response carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub page_number: u64,
    pub page_size: u64,
    pub total_count: u64,
    pub total_pages: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
    pub message: Option<String>,
}

impl<T> PaginatedResponse<T> {
    /// Builds a page envelope, deriving the page count and navigation flags.
    ///
    /// `total_pages` is `ceil(total_count / page_size)`, so an empty table yields zero pages
    /// and both navigation flags are `false`.
    pub fn new(data: Vec<T>, total_count: u64, page_number: u64, page_size: u64) -> Self {
        let total_pages = if page_size > 0 {
            total_count.div_ceil(page_size)
        } else {
            0
        };

        Self {
            success: true,
            data,
            page_number,
            page_size,
            total_count,
            total_pages,
            has_previous_page: page_number > 1,
            has_next_page: page_number < total_pages,
            message: None,
        }
    }
}

/// Body returned with 400 Bad Request when request binding or field validation fails.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorResponse {
    pub success: bool,
    pub message: String,
    /// Field name -> every message collected for that field
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrorResponse {
    pub fn new(errors: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            success: false,
            message: VALIDATION_FAILED_MESSAGE.to_string(),
            errors,
        }
    }
}
