use serde::{Deserialize, Serialize};

use crate::store::{SharedStore, StoreError};
use crate::views::{assemble_search_result, EntityCard, SearchResult};

/// Case-insensitive search on artist names
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchArtistsQuery {
    pub search_term: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SearchArtistsError {
    #[error("Database error: {0}")]
    Store(#[from] StoreError),
}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: SharedStore,
    query: SearchArtistsQuery,
) -> Result<SearchResult<EntityCard>, SearchArtistsError> {
    let term = query.search_term.trim();
    let artists = store.search_artists(term).await?;
    Ok(assemble_search_result(artists, term))
}
