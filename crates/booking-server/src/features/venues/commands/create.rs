//! Create venue command
//!
//! The command carries the submitted form. Validation turns it into a
//! [`VenueDraft`](crate::models::VenueDraft); only a valid draft reaches the
//! store.

use serde::{Deserialize, Serialize};

use crate::features::shared::validation::FormErrors;
use crate::features::venues::form::VenueForm;
use crate::models::VenueDraft;
use crate::store::{SharedStore, StoreError};

/// Command to list a new venue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVenueCommand {
    pub form: VenueForm,
}

/// Response from creating a venue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVenueResponse {
    pub id: i32,
    pub name: String,
}

/// Errors that can occur when creating a venue
#[derive(Debug, thiserror::Error)]
pub enum CreateVenueError {
    #[error("Venue form is invalid: {errors}")]
    Validation { errors: FormErrors, form: VenueForm },

    #[error("Venue {name} could not be listed: {source}")]
    WriteFailed {
        name: String,
        #[source]
        source: StoreError,
    },
}

impl CreateVenueCommand {
    /// Validates the submitted form
    ///
    /// # Errors
    ///
    /// Returns every rejected field together with the form as submitted.
    pub fn validate(&self) -> Result<VenueDraft, CreateVenueError> {
        self.form.validate().map_err(|errors| CreateVenueError::Validation {
            errors,
            form: self.form.clone(),
        })
    }
}

/// Handler function for creating venues
#[tracing::instrument(skip(store, command), fields(name = %command.form.name))]
pub async fn handle(
    store: SharedStore,
    command: CreateVenueCommand,
) -> Result<CreateVenueResponse, CreateVenueError> {
    let draft = command.validate()?;

    let id = store
        .create_venue(&draft)
        .await
        .map_err(|source| CreateVenueError::WriteFailed {
            name: draft.name.clone(),
            source,
        })?;

    tracing::info!(venue_id = id, "Venue created successfully");

    Ok(CreateVenueResponse {
        id,
        name: draft.name,
    })
}
