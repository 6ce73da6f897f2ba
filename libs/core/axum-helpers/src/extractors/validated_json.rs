//! JSON extractor that runs `validator` checks before the handler.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body extractor with validation.
///
/// Malformed JSON is rejected with the extractor's own status (400/415/422);
/// a body that parses but fails `Validate` is rejected with 400 and per-field
/// details.
///
/// ```ignore
/// async fn add_to_cart(ValidatedJson(input): ValidatedJson<ListItemRequest>) -> ... {}
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}
