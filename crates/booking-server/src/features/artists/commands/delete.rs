use serde::{Deserialize, Serialize};

use crate::store::{SharedStore, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteArtistCommand {
    pub id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteArtistResponse {
    pub id: i32,
    pub deleted: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteArtistError {
    #[error("Artist {0} not found")]
    NotFound(i32),
    #[error("Artist {id} could not be deleted: {source}")]
    WriteFailed {
        id: i32,
        #[source]
        source: StoreError,
    },
}

/// Delete an artist and every show they are booked for
#[tracing::instrument(skip(store))]
pub async fn handle(
    store: SharedStore,
    command: DeleteArtistCommand,
) -> Result<DeleteArtistResponse, DeleteArtistError> {
    let deleted = store
        .delete_artist(command.id)
        .await
        .map_err(|source| DeleteArtistError::WriteFailed {
            id: command.id,
            source,
        })?;

    if !deleted {
        return Err(DeleteArtistError::NotFound(command.id));
    }

    Ok(DeleteArtistResponse {
        id: command.id,
        deleted: true,
    })
}
