//! Create artist command

use serde::{Deserialize, Serialize};

use crate::features::artists::form::ArtistForm;
use crate::features::shared::validation::FormErrors;
use crate::models::ArtistDraft;
use crate::store::{SharedStore, StoreError};

/// Command to list a new artist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateArtistCommand {
    pub form: ArtistForm,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateArtistResponse {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateArtistError {
    #[error("Artist form is invalid: {errors}")]
    Validation { errors: FormErrors, form: ArtistForm },

    #[error("Artist {name} could not be listed: {source}")]
    WriteFailed {
        name: String,
        #[source]
        source: StoreError,
    },
}

impl CreateArtistCommand {
    pub fn validate(&self) -> Result<ArtistDraft, CreateArtistError> {
        self.form.validate().map_err(|errors| CreateArtistError::Validation {
            errors,
            form: self.form.clone(),
        })
    }
}

#[tracing::instrument(skip(store, command), fields(name = %command.form.name))]
pub async fn handle(
    store: SharedStore,
    command: CreateArtistCommand,
) -> Result<CreateArtistResponse, CreateArtistError> {
    let draft = command.validate()?;

    let id = store
        .create_artist(&draft)
        .await
        .map_err(|source| CreateArtistError::WriteFailed {
            name: draft.name.clone(),
            source,
        })?;

    tracing::info!(artist_id = id, "Artist created successfully");

    Ok(CreateArtistResponse {
        id,
        name: draft.name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    fn command(name: &str) -> CreateArtistCommand {
        CreateArtistCommand {
            form: ArtistForm {
                name: name.to_string(),
                city: "New York".to_string(),
                state: "NY".to_string(),
                phone: "300-400-5000".to_string(),
                genres: vec!["Jazz".to_string()],
                ..ArtistForm::default()
            },
        }
    }

    #[tokio::test]
    async fn test_handle_creates_artist() {
        let (memory, store) = MemoryStore::new().shared();

        let response = handle(store.clone(), command("Matt Quevedo")).await.unwrap();

        let artist = store.get_artist(response.id).await.unwrap().unwrap();
        assert_eq!(artist.name, "Matt Quevedo");
        assert_eq!(artist.genres.as_deref(), Some("Jazz"));
        assert_eq!(memory.artist_count(), 1);
    }

    #[tokio::test]
    async fn test_invalid_form_writes_nothing() {
        let (memory, store) = MemoryStore::new().shared();
        let mut cmd = command("Matt Quevedo");
        cmd.form.genres.clear();

        let err = handle(store, cmd).await.unwrap_err();

        assert!(matches!(err, CreateArtistError::Validation { ref errors, .. } if errors.contains("genres")));
        assert_eq!(memory.artist_count(), 0);
    }

    #[tokio::test]
    async fn test_store_failure_is_write_failed() {
        let (memory, store) = MemoryStore::new().shared();
        memory.fail_writes(true);

        let err = handle(store, command("Matt Quevedo")).await.unwrap_err();
        assert!(matches!(err, CreateArtistError::WriteFailed { .. }));
    }
}
