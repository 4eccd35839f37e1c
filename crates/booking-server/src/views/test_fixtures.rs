//! Records shared by the view tests

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Artist, ShowListing, Venue};

pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 20, 0, 0).unwrap()
}

pub fn venue(id: i32, name: &str, city: &str, state: &str) -> Venue {
    Venue {
        id,
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: Some("1015 Folsom Street".to_string()),
        phone: Some("123-123-1234".to_string()),
        image_link: Some(format!("https://img.example/venue-{id}.png")),
        website_link: Some("https://www.themusicalhop.com".to_string()),
        facebook_link: None,
        genres: Some("Jazz,Reggae".to_string()),
        seeking_talent: Some(true),
        seeking_description: Some("We are on the lookout for a local artist".to_string()),
    }
}

pub fn artist(id: i32, name: &str) -> Artist {
    Artist {
        id,
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: Some("326-123-5000".to_string()),
        genres: Some("Rock n Roll".to_string()),
        website_link: None,
        image_link: Some(format!("https://img.example/{id}.png")),
        facebook_link: None,
    }
}

pub fn listing(id: i32, start_time: DateTime<Utc>, venue: &Venue, artist: &Artist) -> ShowListing {
    ShowListing {
        id,
        start_time,
        venue_id: venue.id,
        venue_name: venue.name.clone(),
        venue_image_link: venue.image_link.clone(),
        artist_id: artist.id,
        artist_name: artist.name.clone(),
        artist_image_link: artist.image_link.clone(),
    }
}
