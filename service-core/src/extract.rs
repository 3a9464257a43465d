//! Request extractors shared by the HTTP services.

use crate::error::AppError;
use axum::{
    Json, async_trait,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body extractor that deserializes and then validates the payload.
///
/// A body that is readable but does not become a valid `T` (missing JSON
/// content type, invalid JSON, wrong shape, failed field rules) is a 422.
/// A body that cannot be read at all keeps axum's status, so an oversized
/// payload is still a 413.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                let text = rejection.body_text();
                tracing::debug!(error = %text, "Rejected request body");
                match rejection {
                    JsonRejection::JsonDataError(_)
                    | JsonRejection::JsonSyntaxError(_)
                    | JsonRejection::MissingJsonContentType(_) => AppError::InvalidBody(text),
                    other => AppError::BodyRejected(other.status(), text),
                }
            })?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
