//! Shared validation utilities
//!
//! Field validators return a typed [`FieldValidationError`]; forms collect
//! them per field into [`FormErrors`] so every offending field is reported
//! in one response.
//!
//! # Examples
//!
//! ```rust,ignore
//! use booking_server::features::shared::validation::{validate_required, FormErrors};
//!
//! let mut errors = FormErrors::new();
//! let name = errors.check("name", validate_required("", 120));
//! assert!(name.is_none());
//! assert!(errors.contains("name"));
//! ```

use booking_common::types::{Genre, UsState};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Accepted `start_time` layouts besides RFC 3339, read as UTC
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Errors that can occur while validating a single field
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldValidationError {
    #[error("This field is required")]
    Required,

    #[error("Must be at most {max_length} characters")]
    TooLong { max_length: usize },

    #[error("Invalid URL: must start with http:// or https://")]
    InvalidUrl,

    #[error("Phone may only contain digits, spaces and - + ( ) .")]
    InvalidPhone,

    #[error("'{0}' is not a US state code")]
    InvalidState(String),

    #[error("Select at least one genre")]
    NoGenres,

    #[error("'{0}' is not a listed genre")]
    InvalidGenre(String),

    #[error("'{0}' is not a valid date and time")]
    InvalidDateTime(String),

    #[error("Must be a positive id")]
    InvalidId,
}

/// One rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every rejected field of a submitted form, in form order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Record the error of `result` under `field`, returning the value on success
    pub fn check<T>(
        &mut self,
        field: &'static str,
        result: Result<T, FieldValidationError>,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.add(field, e.to_string());
                None
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Field names in the order they were rejected
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|e| e.field).collect()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

/// Validate a required text field
///
/// Surrounding whitespace is trimmed; the trimmed value must be non-empty
/// and at most `max_length` characters.
pub fn validate_required(value: &str, max_length: usize) -> Result<String, FieldValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldValidationError::Required);
    }
    if value.chars().count() > max_length {
        return Err(FieldValidationError::TooLong { max_length });
    }
    Ok(value.to_string())
}

/// Validate optional free text; blank becomes `None`
pub fn validate_optional_text(
    value: &str,
    max_length: usize,
) -> Result<Option<String>, FieldValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if value.chars().count() > max_length {
        return Err(FieldValidationError::TooLong { max_length });
    }
    Ok(Some(value.to_string()))
}

/// Check if a URL is valid (starts with http:// or https://)
#[inline]
pub fn is_valid_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Validate an optional link; blank becomes `None`
pub fn validate_optional_url(
    value: &str,
    max_length: usize,
) -> Result<Option<String>, FieldValidationError> {
    let Some(url) = validate_optional_text(value, max_length)? else {
        return Ok(None);
    };
    if !is_valid_url(&url) {
        return Err(FieldValidationError::InvalidUrl);
    }
    Ok(Some(url))
}

/// Validate a required phone number
pub fn validate_phone(value: &str, max_length: usize) -> Result<String, FieldValidationError> {
    let phone = validate_required(value, max_length)?;
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, '-' | '+' | '(' | ')' | '.' | ' ');
    if !phone.chars().all(allowed) || !phone.chars().any(|c| c.is_ascii_digit()) {
        return Err(FieldValidationError::InvalidPhone);
    }
    Ok(phone)
}

/// Validate a required US state code
pub fn validate_state(value: &str) -> Result<UsState, FieldValidationError> {
    let code = value.trim();
    if code.is_empty() {
        return Err(FieldValidationError::Required);
    }
    code.parse()
        .map_err(|_| FieldValidationError::InvalidState(code.to_string()))
}

/// Validate the selected genres
///
/// At least one is required, each must be a listed label, and repeats are
/// dropped keeping the first occurrence.
pub fn validate_genres(values: &[String]) -> Result<Vec<Genre>, FieldValidationError> {
    let mut genres: Vec<Genre> = Vec::with_capacity(values.len());
    for value in values.iter().map(|v| v.trim()).filter(|v| !v.is_empty()) {
        let genre: Genre = value
            .parse()
            .map_err(|_| FieldValidationError::InvalidGenre(value.to_string()))?;
        if !genres.contains(&genre) {
            genres.push(genre);
        }
    }
    if genres.is_empty() {
        return Err(FieldValidationError::NoGenres);
    }
    Ok(genres)
}

/// Validate a required positive record id
pub fn validate_id(value: Option<i32>) -> Result<i32, FieldValidationError> {
    match value {
        None => Err(FieldValidationError::Required),
        Some(id) if id > 0 => Ok(id),
        Some(_) => Err(FieldValidationError::InvalidId),
    }
}

/// Parse a required start time
///
/// RFC 3339 timestamps keep their offset; the bare layouts in
/// [`DATETIME_FORMATS`] are taken as UTC.
pub fn parse_start_time(value: &str) -> Result<DateTime<Utc>, FieldValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldValidationError::Required);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| FieldValidationError::InvalidDateTime(value.to_string()))
}
