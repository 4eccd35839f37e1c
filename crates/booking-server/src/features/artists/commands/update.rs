use serde::{Deserialize, Serialize};

use crate::features::artists::form::ArtistForm;
use crate::features::shared::validation::FormErrors;
use crate::models::ArtistDraft;
use crate::store::{SharedStore, StoreError};

/// Command to apply an edit form to an existing artist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateArtistCommand {
    pub id: i32,
    pub form: ArtistForm,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateArtistResponse {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateArtistError {
    #[error("Artist form is invalid: {errors}")]
    Validation { errors: FormErrors, form: ArtistForm },

    #[error("Artist {0} not found")]
    NotFound(i32),

    #[error("Artist {name} could not be updated: {source}")]
    WriteFailed {
        name: String,
        #[source]
        source: StoreError,
    },
}

impl UpdateArtistCommand {
    pub fn validate(&self) -> Result<ArtistDraft, UpdateArtistError> {
        self.form.validate().map_err(|errors| UpdateArtistError::Validation {
            errors,
            form: self.form.clone(),
        })
    }
}

#[tracing::instrument(skip(store, command), fields(artist_id = command.id))]
pub async fn handle(
    store: SharedStore,
    command: UpdateArtistCommand,
) -> Result<UpdateArtistResponse, UpdateArtistError> {
    let draft = command.validate()?;

    let updated = store
        .update_artist(command.id, &draft)
        .await
        .map_err(|source| UpdateArtistError::WriteFailed {
            name: draft.name.clone(),
            source,
        })?;

    if !updated {
        return Err(UpdateArtistError::NotFound(command.id));
    }

    tracing::info!("Artist updated successfully");

    Ok(UpdateArtistResponse {
        id: command.id,
        name: draft.name,
    })
}
