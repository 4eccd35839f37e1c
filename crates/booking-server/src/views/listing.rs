//! Home page, listings and search results

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Artist, ShowListing, Venue};

/// Compact venue or artist entry used on the home page and in search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityCard {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub image_link: Option<String>,
    pub genres: Vec<String>,
}

impl From<Venue> for EntityCard {
    fn from(venue: Venue) -> Self {
        let genres = venue.genre_list();
        Self {
            id: venue.id,
            name: venue.name,
            city: venue.city,
            state: venue.state,
            image_link: venue.image_link,
            genres,
        }
    }
}

impl From<Artist> for EntityCard {
    fn from(artist: Artist) -> Self {
        let genres = artist.genre_list();
        Self {
            id: artist.id,
            name: artist.name,
            city: artist.city,
            state: artist.state,
            image_link: artist.image_link,
            genres,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult<T> {
    pub count: usize,
    pub data: Vec<T>,
    pub search_term: String,
}

/// Case-insensitive substring match on a name
///
/// An empty term matches every name.
pub fn matches_search_term(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

pub fn assemble_search_result<T, I>(matches: I, search_term: &str) -> SearchResult<EntityCard>
where
    I: IntoIterator<Item = T>,
    T: Into<EntityCard>,
{
    let data: Vec<EntityCard> = matches.into_iter().map(Into::into).collect();
    SearchResult {
        count: data.len(),
        data,
        search_term: search_term.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeSummary {
    pub artists: Vec<EntityCard>,
    pub artists_count: usize,
    pub venues: Vec<EntityCard>,
    pub venues_count: usize,
}

/// Home page from the most recently listed artists and venues, newest first
pub fn assemble_home(recent_artists: Vec<Artist>, recent_venues: Vec<Venue>) -> HomeSummary {
    let artists: Vec<EntityCard> = recent_artists.into_iter().map(EntityCard::from).collect();
    let venues: Vec<EntityCard> = recent_venues.into_iter().map(EntityCard::from).collect();
    HomeSummary {
        artists_count: artists.len(),
        venues_count: venues.len(),
        artists,
        venues,
    }
}

/// Row of the show listing page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowEntry {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

impl From<ShowListing> for ShowEntry {
    fn from(show: ShowListing) -> Self {
        Self {
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link,
            start_time: show.start_time,
        }
    }
}

pub fn assemble_show_listing(shows: Vec<ShowListing>) -> Vec<ShowEntry> {
    shows.into_iter().map(ShowEntry::from).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistName {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistListing {
    pub count: usize,
    pub artists: Vec<ArtistName>,
}

pub fn assemble_artist_listing(artists: Vec<Artist>) -> ArtistListing {
    let artists: Vec<ArtistName> = artists
        .into_iter()
        .map(|artist| ArtistName {
            id: artist.id,
            name: artist.name,
        })
        .collect();
    ArtistListing {
        count: artists.len(),
        artists,
    }
}
