//! Venue detail query

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{SharedStore, StoreError};
use crate::views::{assemble_venue_summary, VenueSummary};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetVenueQuery {
    pub id: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum GetVenueError {
    #[error("Venue {0} not found")]
    NotFound(i32),
    #[error("Database error: {0}")]
    Store(#[from] StoreError),
}

/// Venue detail with its shows split around `reference_time`
#[tracing::instrument(skip(store))]
pub async fn handle(
    store: SharedStore,
    query: GetVenueQuery,
    reference_time: DateTime<Utc>,
) -> Result<VenueSummary, GetVenueError> {
    let venue = store
        .get_venue(query.id)
        .await?
        .ok_or(GetVenueError::NotFound(query.id))?;
    let shows = store.shows_for_venue(venue.id).await?;

    Ok(assemble_venue_summary(venue, shows, reference_time))
}
