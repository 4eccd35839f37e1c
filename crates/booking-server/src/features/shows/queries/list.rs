use serde::{Deserialize, Serialize};

use crate::store::{SharedStore, StoreError};
use crate::views::{assemble_show_listing, ShowEntry};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListShowsQuery;

#[derive(Debug, thiserror::Error)]
pub enum ListShowsError {
    #[error("Database error: {0}")]
    Store(#[from] StoreError),
}

/// Every show, earliest first, with venue and artist names
#[tracing::instrument(skip(store))]
pub async fn handle(
    store: SharedStore,
    _query: ListShowsQuery,
) -> Result<Vec<ShowEntry>, ListShowsError> {
    let shows = store.list_shows().await?;
    Ok(assemble_show_listing(shows))
}
