//! Entity store
//!
//! [`BookingStore`] is the only way handlers reach persisted venues, artists
//! and shows. The server runs against [`PgStore`]; route tests swap in the
//! in-memory store.
//!
//! Every write is atomic: it either commits completely or leaves the store
//! unchanged and returns a [`StoreError`]. Deleting a venue or an artist also
//! removes every show that references it.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::models::{Artist, ArtistDraft, ShowDraft, ShowListing, Venue, VenueDraft};

pub mod postgres;

#[cfg(test)]
pub mod memory;

pub use postgres::PgStore;

/// Errors surfaced by store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQL query, connection or commit failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A show referenced a venue or artist that does not exist
    #[error("{entity} {id} does not exist")]
    MissingReference { entity: &'static str, id: i32 },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Store handle shared through axum state
pub type SharedStore = Arc<dyn BookingStore>;

#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Round-trip to the backing database
    async fn ping(&self) -> StoreResult<()>;

    async fn get_venue(&self, id: i32) -> StoreResult<Option<Venue>>;
    /// All venues ordered by id
    async fn list_venues(&self) -> StoreResult<Vec<Venue>>;
    /// Newest venues first
    async fn recent_venues(&self, limit: i64) -> StoreResult<Vec<Venue>>;
    /// Venues whose name contains `term`, ignoring case
    async fn search_venues(&self, term: &str) -> StoreResult<Vec<Venue>>;
    async fn create_venue(&self, draft: &VenueDraft) -> StoreResult<i32>;
    /// Returns false if no venue has `id`
    async fn update_venue(&self, id: i32, draft: &VenueDraft) -> StoreResult<bool>;
    /// Returns false if no venue has `id`
    async fn delete_venue(&self, id: i32) -> StoreResult<bool>;

    async fn get_artist(&self, id: i32) -> StoreResult<Option<Artist>>;
    async fn list_artists(&self) -> StoreResult<Vec<Artist>>;
    async fn recent_artists(&self, limit: i64) -> StoreResult<Vec<Artist>>;
    async fn search_artists(&self, term: &str) -> StoreResult<Vec<Artist>>;
    async fn create_artist(&self, draft: &ArtistDraft) -> StoreResult<i32>;
    async fn update_artist(&self, id: i32, draft: &ArtistDraft) -> StoreResult<bool>;
    async fn delete_artist(&self, id: i32) -> StoreResult<bool>;

    async fn create_show(&self, draft: &ShowDraft) -> StoreResult<i32>;
    /// All shows ordered by start time
    async fn list_shows(&self) -> StoreResult<Vec<ShowListing>>;
    async fn shows_for_venue(&self, venue_id: i32) -> StoreResult<Vec<ShowListing>>;
    async fn shows_for_artist(&self, artist_id: i32) -> StoreResult<Vec<ShowListing>>;
}

/// `ILIKE` pattern matching `term` as a literal substring
///
/// `%`, `_` and the escape character itself are escaped with `\`.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern_plain() {
        assert_eq!(contains_pattern("band"), "%band%");
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("100%"), "%100\\%%");
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
        assert_eq!(contains_pattern("c:\\"), "%c:\\\\%");
    }
}
