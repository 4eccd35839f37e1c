use serde::{Deserialize, Serialize};

use crate::store::{SharedStore, StoreError};
use crate::views::{assemble_artist_listing, ArtistListing};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListArtistsQuery;

#[derive(Debug, thiserror::Error)]
pub enum ListArtistsError {
    #[error("Database error: {0}")]
    Store(#[from] StoreError),
}

/// Every artist by id, names only
#[tracing::instrument(skip(store))]
pub async fn handle(
    store: SharedStore,
    _query: ListArtistsQuery,
) -> Result<ArtistListing, ListArtistsError> {
    let artists = store.list_artists().await?;
    Ok(assemble_artist_listing(artists))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::TestArtist;
    use crate::store::memory::MemoryStore;

    #[tokio::test]
    async fn test_handle_lists_in_id_order() {
        let (_memory, store) = MemoryStore::new().shared();
        for name in ["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"] {
            TestArtist::new(name).insert(&*store).await;
        }

        let listing = handle(store, ListArtistsQuery).await.unwrap();

        assert_eq!(listing.count, 3);
        let names: Vec<&str> = listing.artists.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"]);
    }
}
