//! Database models
//!
//! Row types map one-to-one onto the `venues`, `artists` and `shows` tables.
//! Draft types are the validated, immutable input to a create or update;
//! they are produced by the form validators and consumed by the store.

use booking_common::types::{join_genres, split_genres, Genre};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Venue row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    /// Comma-delimited genre labels
    pub genres: Option<String>,
    pub seeking_talent: Option<bool>,
    pub seeking_description: Option<String>,
}

impl Venue {
    /// Genre labels split out of the stored column
    pub fn genre_list(&self) -> Vec<String> {
        self.genres.as_deref().map(split_genres).unwrap_or_default()
    }
}

/// Artist row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    /// Comma-delimited genre labels
    pub genres: Option<String>,
    pub website_link: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
}

impl Artist {
    /// Genre labels split out of the stored column
    pub fn genre_list(&self) -> Vec<String> {
        self.genres.as_deref().map(split_genres).unwrap_or_default()
    }
}

/// Show row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Show {
    pub id: i32,
    pub start_time: DateTime<Utc>,
    pub venue_id: i32,
    pub artist_id: i32,
}

/// Show joined with the display fields of its venue and artist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ShowListing {
    pub id: i32,
    pub start_time: DateTime<Utc>,
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
}

/// Validated venue fields ready to insert or apply
#[derive(Debug, Clone, PartialEq)]
pub struct VenueDraft {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<Genre>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueDraft {
    /// Value written to the `genres` column
    pub fn genres_column(&self) -> String {
        join_genres(&self.genres)
    }

    /// The row this draft produces under `id`
    pub fn to_record(&self, id: i32) -> Venue {
        Venue {
            id,
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            address: Some(self.address.clone()),
            phone: Some(self.phone.clone()),
            image_link: self.image_link.clone(),
            website_link: self.website_link.clone(),
            facebook_link: self.facebook_link.clone(),
            genres: Some(self.genres_column()),
            seeking_talent: Some(self.seeking_talent),
            seeking_description: self.seeking_description.clone(),
        }
    }
}

/// Validated artist fields ready to insert or apply
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistDraft {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<Genre>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
}

impl ArtistDraft {
    /// Value written to the `genres` column
    pub fn genres_column(&self) -> String {
        join_genres(&self.genres)
    }

    /// The row this draft produces under `id`
    pub fn to_record(&self, id: i32) -> Artist {
        Artist {
            id,
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            phone: Some(self.phone.clone()),
            genres: Some(self.genres_column()),
            website_link: self.website_link.clone(),
            image_link: self.image_link.clone(),
            facebook_link: self.facebook_link.clone(),
        }
    }
}

/// Validated show booking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowDraft {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<Utc>,
}

impl ShowDraft {
    pub fn to_record(&self, id: i32) -> Show {
        Show {
            id,
            start_time: self.start_time,
            venue_id: self.venue_id,
            artist_id: self.artist_id,
        }
    }
}
