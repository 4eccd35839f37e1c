//! Create show command
//!
//! A booking names an existing artist and venue. A reference the store
//! cannot resolve is reported against the form field that carried it, the
//! same way any other invalid field is.

use serde::{Deserialize, Serialize};

use crate::features::shared::validation::FormErrors;
use crate::features::shows::form::ShowForm;
use crate::models::ShowDraft;
use crate::store::{SharedStore, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShowCommand {
    pub form: ShowForm,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShowResponse {
    pub id: i32,
    pub artist_id: i32,
    pub venue_id: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateShowError {
    #[error("Show form is invalid: {errors}")]
    Validation { errors: FormErrors, form: ShowForm },

    #[error("Show could not be listed: {0}")]
    WriteFailed(#[source] StoreError),
}

impl CreateShowCommand {
    pub fn validate(&self) -> Result<ShowDraft, CreateShowError> {
        self.form.validate().map_err(|errors| self.invalid(errors))
    }

    fn invalid(&self, errors: FormErrors) -> CreateShowError {
        CreateShowError::Validation {
            errors,
            form: self.form.clone(),
        }
    }
}

#[tracing::instrument(skip(store, command))]
pub async fn handle(
    store: SharedStore,
    command: CreateShowCommand,
) -> Result<CreateShowResponse, CreateShowError> {
    let draft = command.validate()?;

    let id = match store.create_show(&draft).await {
        Ok(id) => id,
        Err(StoreError::MissingReference { entity, id }) => {
            let field = if entity == "Venue" { "venue_id" } else { "artist_id" };
            let mut errors = FormErrors::new();
            errors.add(field, format!("{entity} {id} does not exist"));
            return Err(command.invalid(errors));
        },
        Err(source) => return Err(CreateShowError::WriteFailed(source)),
    };

    tracing::info!(
        show_id = id,
        venue_id = draft.venue_id,
        artist_id = draft.artist_id,
        "Show created successfully"
    );

    Ok(CreateShowResponse {
        id,
        artist_id: draft.artist_id,
        venue_id: draft.venue_id,
    })
}
