use serde::{Deserialize, Serialize};

use crate::store::{SharedStore, StoreError};
use crate::views::{assemble_home, HomeSummary};

/// Number of artists and of venues shown on the home page
pub const RECENT_LIMIT: i64 = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentListingsQuery;

#[derive(Debug, thiserror::Error)]
pub enum RecentListingsError {
    #[error("Database error: {0}")]
    Store(#[from] StoreError),
}

/// The most recently listed artists and venues, newest first
#[tracing::instrument(skip(store))]
pub async fn handle(
    store: SharedStore,
    _query: RecentListingsQuery,
) -> Result<HomeSummary, RecentListingsError> {
    let artists = store.recent_artists(RECENT_LIMIT).await?;
    let venues = store.recent_venues(RECENT_LIMIT).await?;
    Ok(assemble_home(artists, venues))
}
