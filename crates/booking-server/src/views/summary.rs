//! Venue and artist detail pages
//!
//! Each detail view carries the entity's scalar fields, its genres as a list,
//! and its shows split into past and upcoming with counts. Show entries name
//! the counterpart: a venue page lists artists, an artist page lists venues.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::partition::{partition, Partition};
use crate::models::{Artist, ShowListing, Venue};

/// A show as listed on a venue page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueShow {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

impl From<ShowListing> for VenueShow {
    fn from(show: ShowListing) -> Self {
        Self {
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link,
            start_time: show.start_time,
        }
    }
}

/// A show as listed on an artist page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistShow {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

impl From<ShowListing> for ArtistShow {
    fn from(show: ShowListing) -> Self {
        Self {
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            venue_image_link: show.venue_image_link,
            start_time: show.start_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub past_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows: Vec<VenueShow>,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistSummary {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows: Vec<ArtistShow>,
    pub upcoming_shows_count: usize,
}

fn split_as<T: From<ShowListing>>(
    shows: Vec<ShowListing>,
    reference_time: DateTime<Utc>,
) -> Partition<T> {
    let Partition { past, upcoming } = partition(shows, reference_time);
    Partition {
        past: past.into_iter().map(T::from).collect(),
        upcoming: upcoming.into_iter().map(T::from).collect(),
    }
}

/// Build the venue detail view from the venue and its shows
pub fn assemble_venue_summary(
    venue: Venue,
    shows: Vec<ShowListing>,
    reference_time: DateTime<Utc>,
) -> VenueSummary {
    let genres = venue.genre_list();
    let split: Partition<VenueShow> = split_as(shows, reference_time);

    VenueSummary {
        id: venue.id,
        name: venue.name,
        genres,
        address: venue.address,
        city: venue.city,
        state: venue.state,
        phone: venue.phone,
        website: venue.website_link,
        facebook_link: venue.facebook_link,
        image_link: venue.image_link,
        seeking_talent: venue.seeking_talent.unwrap_or(false),
        seeking_description: venue.seeking_description,
        past_shows_count: split.past_count(),
        upcoming_shows_count: split.upcoming_count(),
        past_shows: split.past,
        upcoming_shows: split.upcoming,
    }
}

/// Build the artist detail view from the artist and its shows
pub fn assemble_artist_summary(
    artist: Artist,
    shows: Vec<ShowListing>,
    reference_time: DateTime<Utc>,
) -> ArtistSummary {
    let genres = artist.genre_list();
    let split: Partition<ArtistShow> = split_as(shows, reference_time);

    ArtistSummary {
        id: artist.id,
        name: artist.name,
        genres,
        city: artist.city,
        state: artist.state,
        phone: artist.phone,
        website: artist.website_link,
        facebook_link: artist.facebook_link,
        image_link: artist.image_link,
        past_shows_count: split.past_count(),
        upcoming_shows_count: split.upcoming_count(),
        past_shows: split.past,
        upcoming_shows: split.upcoming,
    }
}
