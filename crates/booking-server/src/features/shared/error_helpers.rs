//! Error response helpers shared by the feature slices
//!
//! Each slice's `*ApiError` delegates here so the four failure shapes look
//! the same everywhere: validation, not found, failed write, failed read.

use axum::{http::StatusCode, response::Response};
use serde::Serialize;
use serde_json::json;

use super::validation::FormErrors;
use crate::api::response::ErrorResponse;
use crate::store::StoreError;

/// 400 echoing the submitted form with every rejected field
pub fn validation_failed<F: Serialize>(errors: &FormErrors, form: &F) -> Response {
    let details = json!({
        "errors": errors,
        "form": form,
    });
    ErrorResponse::with_details(
        "VALIDATION_ERROR",
        format!("{} field(s) failed validation", errors.len()),
        details,
    )
    .into_response_with(StatusCode::BAD_REQUEST)
}

/// 404 for a missing venue, artist or show
pub fn not_found(entity: &str, id: i32) -> Response {
    ErrorResponse::new("NOT_FOUND", format!("{entity} {id} was not found"))
        .into_response_with(StatusCode::NOT_FOUND)
}

/// 500 for a write the store rolled back; `flash` is shown to the user and
/// the store error is only logged
pub fn write_failed(flash: String, error: &StoreError) -> Response {
    tracing::error!(error = %error, "Write rolled back");
    ErrorResponse::with_details("WRITE_FAILED", flash.clone(), json!({ "flash": flash }))
        .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
}

/// 500 for a failed read
pub fn read_failed(context: &str, error: &StoreError) -> Response {
    tracing::error!(error = %error, "Store read failed during {}", context);
    ErrorResponse::new("INTERNAL_ERROR", "A database error occurred")
        .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let mut errors = FormErrors::new();
        errors.add("name", "This field is required");
        assert_eq!(
            validation_failed(&errors, &json!({"name": ""})).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(not_found("Venue", 9).status(), StatusCode::NOT_FOUND);

        let error = StoreError::Database(sqlx::Error::PoolClosed);
        assert_eq!(
            write_failed("An error occurred.".to_string(), &error).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(read_failed("venue listing", &error).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
