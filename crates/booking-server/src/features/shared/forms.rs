//! Payload of the create and edit form pages

use booking_common::types::{Genre, US_STATE_CODES};
use serde::Serialize;

/// Values selectable in the state and genre fields
#[derive(Debug, Clone, Serialize)]
pub struct FormChoices {
    pub states: Vec<&'static str>,
    pub genres: Vec<&'static str>,
}

impl FormChoices {
    pub fn all() -> Self {
        Self {
            states: US_STATE_CODES.to_vec(),
            genres: Genre::ALL.iter().map(|g| g.as_str()).collect(),
        }
    }
}

/// A form to render, blank or pre-populated, with its choices
#[derive(Debug, Clone, Serialize)]
pub struct FormPage<F> {
    pub form: F,
    pub choices: FormChoices,
}

impl<F: Serialize> FormPage<F> {
    pub fn new(form: F) -> Self {
        Self {
            form,
            choices: FormChoices::all(),
        }
    }
}
