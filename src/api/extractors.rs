//! Request extractors that reject with [`AppError`].
//!
//! axum's own rejections answer in plain text with varying status codes;
//! these wrappers turn every malformed body or path into a
//! [`AppError::Validation`] so clients always get the JSON error body.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

use crate::error::AppError;

/// JSON body that is deserialized and then checked with [`Validate`].
///
/// # Example
///
/// ```rust,ignore
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateClientRequest>) { ... }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::bad_request(
                    "Invalid request body",
                    json!({ "reason": rejection.body_text() }),
                )
            })?;

        data.validate()?;

        Ok(Self(data))
    }
}

/// Path parameters; a non-numeric id becomes a 400 instead of axum's default.
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::bad_request("Invalid id", json!({ "reason": rejection.body_text() }))
            })?;

        Ok(Self(value))
    }
}
