//! Venue create/edit form

use serde::{Deserialize, Serialize};

use crate::features::shared::validation::{
    validate_genres, validate_optional_text, validate_optional_url, validate_phone,
    validate_required, validate_state, FormErrors,
};
use crate::models::{Venue, VenueDraft};

const TEXT_MAX: usize = 120;
const IMAGE_LINK_MAX: usize = 500;
const WEBSITE_LINK_MAX: usize = 250;
const SEEKING_DESCRIPTION_MAX: usize = 500;

/// Venue form as submitted; missing fields deserialize as blank
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl VenueForm {
    /// Edit form pre-populated from a stored venue
    pub fn from_venue(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone().unwrap_or_default(),
            phone: venue.phone.clone().unwrap_or_default(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            genres: venue.genre_list(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            website_link: venue.website_link.clone().unwrap_or_default(),
            seeking_talent: venue.seeking_talent.unwrap_or(false),
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }

    /// Validate every field, reporting all failures together
    pub fn validate(&self) -> Result<VenueDraft, FormErrors> {
        let mut errors = FormErrors::new();

        let name = errors.check("name", validate_required(&self.name, TEXT_MAX));
        let city = errors.check("city", validate_required(&self.city, TEXT_MAX));
        let state = errors.check("state", validate_state(&self.state));
        let address = errors.check("address", validate_required(&self.address, TEXT_MAX));
        let phone = errors.check("phone", validate_phone(&self.phone, TEXT_MAX));
        let image_link =
            errors.check("image_link", validate_optional_url(&self.image_link, IMAGE_LINK_MAX));
        let genres = errors.check("genres", validate_genres(&self.genres));
        let facebook_link =
            errors.check("facebook_link", validate_optional_url(&self.facebook_link, TEXT_MAX));
        let website_link = errors.check(
            "website_link",
            validate_optional_url(&self.website_link, WEBSITE_LINK_MAX),
        );
        let seeking_description = errors.check(
            "seeking_description",
            validate_optional_text(&self.seeking_description, SEEKING_DESCRIPTION_MAX),
        );

        let (
            Some(name),
            Some(city),
            Some(state),
            Some(address),
            Some(phone),
            Some(image_link),
            Some(genres),
            Some(facebook_link),
            Some(website_link),
            Some(seeking_description),
        ) = (
            name,
            city,
            state,
            address,
            phone,
            image_link,
            genres,
            facebook_link,
            website_link,
            seeking_description,
        )
        else {
            return Err(errors);
        };

        Ok(VenueDraft {
            name,
            city,
            state: state.to_string(),
            address,
            phone,
            image_link,
            website_link,
            facebook_link,
            genres,
            seeking_talent: self.seeking_talent,
            seeking_description,
        })
    }
}
