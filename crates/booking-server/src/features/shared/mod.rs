//! Shared utilities and types for feature modules
//!
//! # Contents
//!
//! - **validation**: field validators and the [`FormErrors`] collector
//! - **forms**: create/edit form page payload
//! - **error_helpers**: error responses shared by every slice
//! - **extract**: path extractor with a JSON rejection
//! - **test_helpers**: test fixtures and request helpers (test-only)

pub mod error_helpers;
pub mod extract;
pub mod forms;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;

// Re-export commonly used types
pub use extract::IdPath;
pub use forms::{FormChoices, FormPage};
pub use validation::{FieldError, FieldValidationError, FormErrors};
