//! Artist detail query

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{SharedStore, StoreError};
use crate::views::{assemble_artist_summary, ArtistSummary};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetArtistQuery {
    pub id: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum GetArtistError {
    #[error("Artist {0} not found")]
    NotFound(i32),
    #[error("Database error: {0}")]
    Store(#[from] StoreError),
}

/// Artist detail with their shows split around `reference_time`
#[tracing::instrument(skip(store))]
pub async fn handle(
    store: SharedStore,
    query: GetArtistQuery,
    reference_time: DateTime<Utc>,
) -> Result<ArtistSummary, GetArtistError> {
    let artist = store
        .get_artist(query.id)
        .await?
        .ok_or(GetArtistError::NotFound(query.id))?;
    let shows = store.shows_for_artist(artist.id).await?;

    Ok(assemble_artist_summary(artist, shows, reference_time))
}
