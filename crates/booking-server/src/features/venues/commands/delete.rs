use serde::{Deserialize, Serialize};

use crate::store::{SharedStore, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteVenueCommand {
    pub id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteVenueResponse {
    pub id: i32,
    pub deleted: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteVenueError {
    #[error("Venue {0} not found")]
    NotFound(i32),
    #[error("Venue {id} could not be deleted: {source}")]
    WriteFailed {
        id: i32,
        #[source]
        source: StoreError,
    },
}

/// Delete a venue and every show booked there
#[tracing::instrument(skip(store))]
pub async fn handle(
    store: SharedStore,
    command: DeleteVenueCommand,
) -> Result<DeleteVenueResponse, DeleteVenueError> {
    let deleted = store
        .delete_venue(command.id)
        .await
        .map_err(|source| DeleteVenueError::WriteFailed {
            id: command.id,
            source,
        })?;

    if !deleted {
        return Err(DeleteVenueError::NotFound(command.id));
    }

    Ok(DeleteVenueResponse {
        id: command.id,
        deleted: true,
    })
}
