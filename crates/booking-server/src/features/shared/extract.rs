//! Request extractors shared by the slices

use axum::extract::{rejection::PathRejection, FromRequestParts, Path};

use crate::error::AppError;

/// Path parameter whose rejection is a JSON 404
///
/// `/venues/abc` names no venue, so a malformed id answers the same way as
/// an id that does not exist.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct IdPath<T>(pub T);

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Rejected path parameter: {}", rejection.body_text());
        AppError::NotFound("The requested resource does not exist".to_string())
    }
}
