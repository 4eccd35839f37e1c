//! Shared domain vocabulary
//!
//! The booking forms only accept values from fixed enumerations: musical
//! genres and US state codes. Genres are persisted as a single
//! comma-delimited column, so the codec for that column lives here too.

pub mod genre;
pub mod state;

pub use genre::{join_genres, split_genres, Genre, GENRE_DELIMITER};
pub use state::{is_state_code, UsState, US_STATE_CODES};
