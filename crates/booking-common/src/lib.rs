//! Booking Directory Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared vocabulary, logging setup, and error handling for the booking
//! directory workspace.
//!
//! # Overview
//!
//! - **Error Handling**: [`BookingError`] and the [`Result`] alias
//! - **Logging**: [`logging::LogConfig`] and [`logging::init_logging`]
//! - **Types**: the fixed genre and US state vocabularies used by forms,
//!   plus the comma-delimited genre column codec
//!
//! # Example
//!
//! ```
//! use booking_common::types::{join_genres, split_genres, Genre};
//!
//! let stored = join_genres([Genre::Jazz, Genre::Reggae]);
//! assert_eq!(stored, "Jazz,Reggae");
//! assert_eq!(split_genres(&stored), vec!["Jazz", "Reggae"]);
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{BookingError, Result};
