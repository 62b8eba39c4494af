//! Request extractors reporting binding failures as validation errors.
//!
//! Axum's own `Json`, `Query` and `Path` extractors reject malformed input with plain-text
//! responses. These wrappers convert every rejection into [`AppError::Validation`] so that
//! clients always receive the validation envelope.

use axum::{
    extract::{FromRequest, FromRequestParts, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::server::{error::AppError, model::validation::Validate};

/// JSON body deserialized into `T` and validated into `T::Validated`.
pub struct ValidatedJson<T: Validate>(pub T::Validated);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state).await?;

        Ok(Self(body.validate()?))
    }
}

/// Query string extractor rejecting with the validation envelope under `query`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Path extractor rejecting with the validation envelope under `id`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
