//! Artist create/edit form

use serde::{Deserialize, Serialize};

use crate::features::shared::validation::{
    validate_genres, validate_optional_url, validate_phone, validate_required, validate_state,
    FormErrors,
};
use crate::models::{Artist, ArtistDraft};

const TEXT_MAX: usize = 120;
const IMAGE_LINK_MAX: usize = 500;

/// Artist form as submitted; missing fields deserialize as blank
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub website_link: String,
}

impl ArtistForm {
    /// Edit form pre-populated from a stored artist
    pub fn from_artist(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone().unwrap_or_default(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            genres: artist.genre_list(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            website_link: artist.website_link.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<ArtistDraft, FormErrors> {
        let mut errors = FormErrors::new();

        let name = errors.check("name", validate_required(&self.name, TEXT_MAX));
        let city = errors.check("city", validate_required(&self.city, TEXT_MAX));
        let state = errors.check("state", validate_state(&self.state));
        let phone = errors.check("phone", validate_phone(&self.phone, TEXT_MAX));
        let image_link =
            errors.check("image_link", validate_optional_url(&self.image_link, IMAGE_LINK_MAX));
        let genres = errors.check("genres", validate_genres(&self.genres));
        let facebook_link =
            errors.check("facebook_link", validate_optional_url(&self.facebook_link, TEXT_MAX));
        let website_link =
            errors.check("website_link", validate_optional_url(&self.website_link, TEXT_MAX));

        let (
            Some(name),
            Some(city),
            Some(state),
            Some(phone),
            Some(image_link),
            Some(genres),
            Some(facebook_link),
            Some(website_link),
        ) = (name, city, state, phone, image_link, genres, facebook_link, website_link)
        else {
            return Err(errors);
        };

        Ok(ArtistDraft {
            name,
            city,
            state: state.to_string(),
            phone,
            genres,
            image_link,
            website_link,
            facebook_link,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booking_common::types::Genre;

    fn valid_form() -> ArtistForm {
        ArtistForm {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "326-123-5000".to_string(),
            image_link: "https://images.example/petals.jpg".to_string(),
            genres: vec!["Rock n Roll".to_string()],
            facebook_link: "https://www.facebook.com/GunsNPetals".to_string(),
            website_link: "https://www.gunsnpetalsband.com".to_string(),
        }
    }

    #[test]
    fn test_valid_form_produces_draft() {
        let draft = valid_form().validate().unwrap();
        assert_eq!(draft.genres, vec![Genre::RockNRoll]);
        assert_eq!(draft.genres_column(), "Rock n Roll");
        assert_eq!(draft.website_link.as_deref(), Some("https://www.gunsnpetalsband.com"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let form: ArtistForm = serde_json::from_value(serde_json::json!({
            "name": "Matt Quevedo",
            "city": "New York",
            "state": "NY",
            "phone": "300-400-5000",
            "genres": ["Jazz"],
            "address": "ignored"
        }))
        .unwrap();

        let draft = form.validate().unwrap();
        assert_eq!(draft.image_link, None);
    }

    #[test]
    fn test_reports_every_invalid_field() {
        let form = ArtistForm {
            state: "ZZ".to_string(),
            phone: "call me".to_string(),
            image_link: "ftp://images.example/x.png".to_string(),
            ..ArtistForm::default()
        };

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.fields(), vec!["name", "city", "state", "phone", "image_link", "genres"]);
    }

    #[test]
    fn test_from_artist_round_trips() {
        let mut form = valid_form();
        form.genres = vec!["Jazz".to_string(), "Musical Theatre".to_string()];
        form.facebook_link.clear();
        let artist = form.validate().unwrap().to_record(4);

        assert_eq!(ArtistForm::from_artist(&artist), form);
    }
}
