//! API response types
//!
//! Every page payload is wrapped in [`ApiResponse`]; failures use
//! [`ErrorResponse`]. Writes answer with a flash notice and the page the
//! client should go to next, mirrored in the `Location` header.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

/// Standard success response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new success response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
            meta: None,
        }
    }

    /// Create a success response with metadata
    pub fn success_with_meta(data: T, meta: serde_json::Value) -> Self {
        Self {
            success: true,
            data,
            meta: Some(meta),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Success response for a write: `meta.flash`, `meta.redirect_to` and a
/// matching `Location` header
pub fn flash_redirect<T: Serialize>(
    status: StatusCode,
    data: T,
    flash: impl Into<String>,
    redirect_to: impl Into<String>,
) -> Response {
    let redirect_to = redirect_to.into();
    let meta = json!({
        "flash": flash.into(),
        "redirect_to": redirect_to,
    });
    (
        status,
        [(header::LOCATION, redirect_to)],
        Json(ApiResponse::success_with_meta(data, meta)),
    )
        .into_response()
}

/// Standard error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details: None,
            },
        }
    }

    /// Create an error response with details
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            success: false,
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details: Some(details),
            },
        }
    }

    /// Pair with a status code
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_omits_meta() {
        let json = serde_json::to_value(ApiResponse::success(vec![1, 2])).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], json!([1, 2]));
        assert!(json.get("meta").is_none());
    }

    #[test]
    fn test_flash_redirect_sets_location() {
        let response = flash_redirect(StatusCode::CREATED, json!({"id": 1}), "Listed!", "/venues");
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::LOCATION], "/venues");
    }

    #[test]
    fn test_error_details_serialization() {
        let error = ErrorResponse::with_details("VALIDATION_ERROR", "bad", json!({"errors": []}));
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert!(json["error"]["details"]["errors"].is_array());

        let plain = serde_json::to_value(ErrorResponse::new("NOT_FOUND", "gone")).unwrap();
        assert!(plain["error"].get("details").is_none());
    }
}
