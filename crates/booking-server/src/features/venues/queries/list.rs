//! Venue directory query

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{SharedStore, StoreError};
use crate::views::{group_venues_by_area, VenueDirectory};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListVenuesQuery;

#[derive(Debug, thiserror::Error)]
pub enum ListVenuesError {
    #[error("Database error: {0}")]
    Store(#[from] StoreError),
}

/// Every venue grouped by `(city, state)` with upcoming show counts
#[tracing::instrument(skip(store))]
pub async fn handle(
    store: SharedStore,
    _query: ListVenuesQuery,
    reference_time: DateTime<Utc>,
) -> Result<VenueDirectory, ListVenuesError> {
    let venues = store.list_venues().await?;
    let shows = store.list_shows().await?;

    Ok(group_venues_by_area(venues, &shows, reference_time))
}
