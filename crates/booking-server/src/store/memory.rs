//! In-memory store for route tests
//!
//! Mirrors [`PgStore`](super::PgStore) semantics: ids are assigned in
//! increasing order, listings come back in the same order, and deletes
//! cascade to shows. [`MemoryStore::fail_writes`] makes every write fail
//! the way a dropped connection would, leaving the data untouched.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use super::{BookingStore, SharedStore, StoreError, StoreResult};
use crate::models::{Artist, ArtistDraft, Show, ShowDraft, ShowListing, Venue, VenueDraft};
use crate::views::matches_search_term;

#[derive(Debug, Default)]
struct Tables {
    venues: Vec<Venue>,
    artists: Vec<Artist>,
    shows: Vec<Show>,
    next_venue_id: i32,
    next_artist_id: i32,
    next_show_id: i32,
}

impl Tables {
    fn listing(&self, show: &Show) -> Option<ShowListing> {
        let venue = self.venues.iter().find(|v| v.id == show.venue_id)?;
        let artist = self.artists.iter().find(|a| a.id == show.artist_id)?;
        Some(ShowListing {
            id: show.id,
            start_time: show.start_time,
            venue_id: venue.id,
            venue_name: venue.name.clone(),
            venue_image_link: venue.image_link.clone(),
            artist_id: artist.id,
            artist_name: artist.name.clone(),
            artist_image_link: artist.image_link.clone(),
        })
    }

    fn listings<F: Fn(&Show) -> bool>(&self, keep: F) -> Vec<ShowListing> {
        let mut shows: Vec<ShowListing> = self
            .shows
            .iter()
            .filter(|show| keep(show))
            .filter_map(|show| self.listing(show))
            .collect();
        shows.sort_by(|a, b| a.start_time.cmp(&b.start_time).then(a.id.cmp(&b.id)));
        shows
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(self) -> (Arc<Self>, SharedStore) {
        let store = Arc::new(self);
        let shared: SharedStore = store.clone();
        (store, shared)
    }

    /// Make every subsequent write fail without changing anything
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn venue_count(&self) -> usize {
        self.tables().venues.len()
    }

    pub fn artist_count(&self) -> usize {
        self.tables().artists.len()
    }

    pub fn show_count(&self) -> usize {
        self.tables().shows.len()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }

    fn writable(&self) -> StoreResult<MutexGuard<'_, Tables>> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        Ok(self.tables())
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn get_venue(&self, id: i32) -> StoreResult<Option<Venue>> {
        Ok(self.tables().venues.iter().find(|v| v.id == id).cloned())
    }

    async fn list_venues(&self) -> StoreResult<Vec<Venue>> {
        Ok(self.tables().venues.clone())
    }

    async fn recent_venues(&self, limit: i64) -> StoreResult<Vec<Venue>> {
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self.tables().venues.iter().rev().take(limit).cloned().collect())
    }

    async fn search_venues(&self, term: &str) -> StoreResult<Vec<Venue>> {
        Ok(self
            .tables()
            .venues
            .iter()
            .filter(|v| matches_search_term(&v.name, term))
            .cloned()
            .collect())
    }

    async fn create_venue(&self, draft: &VenueDraft) -> StoreResult<i32> {
        let mut tables = self.writable()?;
        tables.next_venue_id += 1;
        let id = tables.next_venue_id;
        tables.venues.push(draft.to_record(id));
        Ok(id)
    }

    async fn update_venue(&self, id: i32, draft: &VenueDraft) -> StoreResult<bool> {
        let mut tables = self.writable()?;
        match tables.venues.iter_mut().find(|v| v.id == id) {
            Some(venue) => {
                *venue = draft.to_record(id);
                Ok(true)
            },
            None => Ok(false),
        }
    }

    async fn delete_venue(&self, id: i32) -> StoreResult<bool> {
        let mut tables = self.writable()?;
        let before = tables.venues.len();
        tables.venues.retain(|v| v.id != id);
        if tables.venues.len() == before {
            return Ok(false);
        }
        tables.shows.retain(|s| s.venue_id != id);
        Ok(true)
    }

    async fn get_artist(&self, id: i32) -> StoreResult<Option<Artist>> {
        Ok(self.tables().artists.iter().find(|a| a.id == id).cloned())
    }

    async fn list_artists(&self) -> StoreResult<Vec<Artist>> {
        Ok(self.tables().artists.clone())
    }

    async fn recent_artists(&self, limit: i64) -> StoreResult<Vec<Artist>> {
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self.tables().artists.iter().rev().take(limit).cloned().collect())
    }

    async fn search_artists(&self, term: &str) -> StoreResult<Vec<Artist>> {
        Ok(self
            .tables()
            .artists
            .iter()
            .filter(|a| matches_search_term(&a.name, term))
            .cloned()
            .collect())
    }

    async fn create_artist(&self, draft: &ArtistDraft) -> StoreResult<i32> {
        let mut tables = self.writable()?;
        tables.next_artist_id += 1;
        let id = tables.next_artist_id;
        tables.artists.push(draft.to_record(id));
        Ok(id)
    }

    async fn update_artist(&self, id: i32, draft: &ArtistDraft) -> StoreResult<bool> {
        let mut tables = self.writable()?;
        match tables.artists.iter_mut().find(|a| a.id == id) {
            Some(artist) => {
                *artist = draft.to_record(id);
                Ok(true)
            },
            None => Ok(false),
        }
    }

    async fn delete_artist(&self, id: i32) -> StoreResult<bool> {
        let mut tables = self.writable()?;
        let before = tables.artists.len();
        tables.artists.retain(|a| a.id != id);
        if tables.artists.len() == before {
            return Ok(false);
        }
        tables.shows.retain(|s| s.artist_id != id);
        Ok(true)
    }

    async fn create_show(&self, draft: &ShowDraft) -> StoreResult<i32> {
        let mut tables = self.writable()?;
        if !tables.venues.iter().any(|v| v.id == draft.venue_id) {
            return Err(StoreError::MissingReference {
                entity: "Venue",
                id: draft.venue_id,
            });
        }
        if !tables.artists.iter().any(|a| a.id == draft.artist_id) {
            return Err(StoreError::MissingReference {
                entity: "Artist",
                id: draft.artist_id,
            });
        }
        tables.next_show_id += 1;
        let id = tables.next_show_id;
        tables.shows.push(draft.to_record(id));
        Ok(id)
    }

    async fn list_shows(&self) -> StoreResult<Vec<ShowListing>> {
        Ok(self.tables().listings(|_| true))
    }

    async fn shows_for_venue(&self, venue_id: i32) -> StoreResult<Vec<ShowListing>> {
        Ok(self.tables().listings(|s| s.venue_id == venue_id))
    }

    async fn shows_for_artist(&self, artist_id: i32) -> StoreResult<Vec<ShowListing>> {
        Ok(self.tables().listings(|s| s.artist_id == artist_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booking_common::types::Genre;
    use chrono::{Duration, Utc};

    fn venue_draft(name: &str) -> VenueDraft {
        VenueDraft {
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: "123-123-1234".to_string(),
            image_link: None,
            website_link: None,
            facebook_link: None,
            genres: vec![Genre::Jazz],
            seeking_talent: false,
            seeking_description: None,
        }
    }

    fn artist_draft(name: &str) -> ArtistDraft {
        ArtistDraft {
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "326-123-5000".to_string(),
            genres: vec![Genre::RockNRoll],
            image_link: None,
            website_link: None,
            facebook_link: None,
        }
    }

    async fn book(store: &MemoryStore, venue_id: i32, artist_id: i32, days: i64) -> i32 {
        let draft = ShowDraft {
            venue_id,
            artist_id,
            start_time: Utc::now() + Duration::days(days),
        };
        store.create_show(&draft).await.unwrap()
    }

    #[tokio::test]
    async fn test_delete_venue_cascades() {
        let store = MemoryStore::new();
        let hop = store.create_venue(&venue_draft("The Musical Hop")).await.unwrap();
        let park = store.create_venue(&venue_draft("Park Square")).await.unwrap();
        let petals = store.create_artist(&artist_draft("Guns N Petals")).await.unwrap();
        for days in [-3, 1, 5] {
            book(&store, hop, petals, days).await;
        }
        book(&store, park, petals, 2).await;

        assert!(store.delete_venue(hop).await.unwrap());
        assert!(store.shows_for_venue(hop).await.unwrap().is_empty());
        assert_eq!(store.show_count(), 1);
        assert!(!store.delete_venue(hop).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_artist_cascades() {
        let store = MemoryStore::new();
        let hop = store.create_venue(&venue_draft("The Musical Hop")).await.unwrap();
        let petals = store.create_artist(&artist_draft("Guns N Petals")).await.unwrap();
        let sax = store.create_artist(&artist_draft("The Wild Sax Band")).await.unwrap();
        book(&store, hop, petals, 1).await;
        book(&store, hop, petals, 2).await;
        book(&store, hop, sax, 3).await;

        assert!(store.delete_artist(petals).await.unwrap());
        assert_eq!(store.show_count(), 1);
        assert_eq!(store.shows_for_venue(hop).await.unwrap()[0].artist_id, sax);
    }

    #[tokio::test]
    async fn test_failed_write_changes_nothing() {
        let store = MemoryStore::new();
        store.create_venue(&venue_draft("The Musical Hop")).await.unwrap();
        store.fail_writes(true);

        let result = store.create_venue(&venue_draft("Park Square")).await;
        assert!(matches!(result, Err(StoreError::Database(_))));
        assert!(store.delete_venue(1).await.is_err());
        assert_eq!(store.venue_count(), 1);
    }

    #[tokio::test]
    async fn test_show_requires_existing_parents() {
        let store = MemoryStore::new();
        let hop = store.create_venue(&venue_draft("The Musical Hop")).await.unwrap();
        let draft = ShowDraft {
            venue_id: hop,
            artist_id: 42,
            start_time: Utc::now(),
        };

        let result = store.create_show(&draft).await;
        assert!(matches!(
            result,
            Err(StoreError::MissingReference { entity: "Artist", id: 42 })
        ));
        assert_eq!(store.show_count(), 0);
    }

    #[tokio::test]
    async fn test_recent_is_newest_first() {
        let store = MemoryStore::new();
        for name in ["One", "Two", "Three"] {
            store.create_artist(&artist_draft(name)).await.unwrap();
        }
        let recent = store.recent_artists(2).await.unwrap();
        let names: Vec<&str> = recent.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Three", "Two"]);
    }
}
