use serde::{Deserialize, Serialize};

use crate::features::shared::validation::FormErrors;
use crate::features::venues::form::VenueForm;
use crate::models::VenueDraft;
use crate::store::{SharedStore, StoreError};

/// Command to apply an edit form to an existing venue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVenueCommand {
    pub id: i32,
    pub form: VenueForm,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVenueResponse {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateVenueError {
    #[error("Venue form is invalid: {errors}")]
    Validation { errors: FormErrors, form: VenueForm },

    #[error("Venue {0} not found")]
    NotFound(i32),

    #[error("Venue {name} could not be updated: {source}")]
    WriteFailed {
        name: String,
        #[source]
        source: StoreError,
    },
}

impl UpdateVenueCommand {
    pub fn validate(&self) -> Result<VenueDraft, UpdateVenueError> {
        self.form.validate().map_err(|errors| UpdateVenueError::Validation {
            errors,
            form: self.form.clone(),
        })
    }
}

#[tracing::instrument(skip(store, command), fields(venue_id = command.id))]
pub async fn handle(
    store: SharedStore,
    command: UpdateVenueCommand,
) -> Result<UpdateVenueResponse, UpdateVenueError> {
    let draft = command.validate()?;

    let updated = store
        .update_venue(command.id, &draft)
        .await
        .map_err(|source| UpdateVenueError::WriteFailed {
            name: draft.name.clone(),
            source,
        })?;

    if !updated {
        return Err(UpdateVenueError::NotFound(command.id));
    }

    tracing::info!("Venue updated successfully");

    Ok(UpdateVenueResponse {
        id: command.id,
        name: draft.name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::TestVenue;
    use crate::store::memory::MemoryStore;

    #[tokio::test]
    async fn test_handle_updates_columns() {
        let (_memory, store) = MemoryStore::new().shared();
        let id = TestVenue::new("The Musical Hop").insert(&*store).await;

        let mut form = VenueForm::from_venue(&store.get_venue(id).await.unwrap().unwrap());
        form.name = "The Musical Hop & Grill".to_string();
        form.genres = vec!["Folk".to_string()];
        form.seeking_talent = false;

        let response = handle(store.clone(), UpdateVenueCommand { id, form }).await.unwrap();
        assert_eq!(response.name, "The Musical Hop & Grill");

        let venue = store.get_venue(id).await.unwrap().unwrap();
        assert_eq!(venue.name, "The Musical Hop & Grill");
        assert_eq!(venue.genre_list(), vec!["Folk"]);
        assert_eq!(venue.seeking_talent, Some(false));
    }

    #[tokio::test]
    async fn test_missing_venue_is_not_found() {
        let (_memory, store) = MemoryStore::new().shared();
        let form = VenueForm {
            name: "Ghost".to_string(),
            city: "Boston".to_string(),
            state: "MA".to_string(),
            address: "1 Main St".to_string(),
            phone: "555-0100".to_string(),
            genres: vec!["Blues".to_string()],
            ..VenueForm::default()
        };

        let err = handle(store, UpdateVenueCommand { id: 99, form }).await.unwrap_err();
        assert!(matches!(err, UpdateVenueError::NotFound(99)));
    }

    #[tokio::test]
    async fn test_invalid_edit_leaves_record() {
        let (_memory, store) = MemoryStore::new().shared();
        let id = TestVenue::new("The Musical Hop").insert(&*store).await;
        let mut form = VenueForm::from_venue(&store.get_venue(id).await.unwrap().unwrap());
        form.name.clear();
        form.state = "XX".to_string();

        let err = handle(store.clone(), UpdateVenueCommand { id, form }).await.unwrap_err();

        assert!(matches!(err, UpdateVenueError::Validation { ref errors, .. } if errors.len() == 2));
        assert_eq!(store.get_venue(id).await.unwrap().unwrap().name, "The Musical Hop");
    }
}
