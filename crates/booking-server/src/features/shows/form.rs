//! Show booking form

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::features::shared::validation::{parse_start_time, validate_id, FormErrors};
use crate::models::ShowDraft;

/// Layout used when pre-filling `start_time`
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowForm {
    pub artist_id: Option<i32>,
    pub venue_id: Option<i32>,
    pub start_time: String,
}

impl ShowForm {
    /// Empty booking form with `start_time` pre-filled to `now`
    pub fn blank(now: DateTime<Utc>) -> Self {
        Self {
            artist_id: None,
            venue_id: None,
            start_time: now.format(START_TIME_FORMAT).to_string(),
        }
    }

    pub fn validate(&self) -> Result<ShowDraft, FormErrors> {
        let mut errors = FormErrors::new();

        let artist_id = errors.check("artist_id", validate_id(self.artist_id));
        let venue_id = errors.check("venue_id", validate_id(self.venue_id));
        let start_time = errors.check("start_time", parse_start_time(&self.start_time));

        let (Some(artist_id), Some(venue_id), Some(start_time)) = (artist_id, venue_id, start_time)
        else {
            return Err(errors);
        };

        Ok(ShowDraft {
            artist_id,
            venue_id,
            start_time,
        })
    }
}
