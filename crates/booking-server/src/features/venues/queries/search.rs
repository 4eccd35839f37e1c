use serde::{Deserialize, Serialize};

use crate::store::{SharedStore, StoreError};
use crate::views::{assemble_search_result, EntityCard, SearchResult};

/// Case-insensitive search on venue names
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchVenuesQuery {
    pub search_term: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SearchVenuesError {
    #[error("Database error: {0}")]
    Store(#[from] StoreError),
}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: SharedStore,
    query: SearchVenuesQuery,
) -> Result<SearchResult<EntityCard>, SearchVenuesError> {
    let term = query.search_term.trim();
    let venues = store.search_venues(term).await?;
    Ok(assemble_search_result(venues, term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::TestVenue;
    use crate::store::memory::MemoryStore;

    #[tokio::test]
    async fn test_handle_matches_substring() {
        let (_memory, store) = MemoryStore::new().shared();
        for name in ["The Musical Hop", "The Dueling Pianos Bar", "Park Square Live Music & Coffee"] {
            TestVenue::new(name).insert(&*store).await;
        }

        let query = SearchVenuesQuery {
            search_term: "Music".to_string(),
        };
        let result = handle(store.clone(), query).await.unwrap();
        assert_eq!(result.count, 2);

        let query = SearchVenuesQuery {
            search_term: " hop ".to_string(),
        };
        let result = handle(store, query).await.unwrap();
        assert_eq!(result.count, 1);
        assert_eq!(result.data[0].name, "The Musical Hop");
        assert_eq!(result.search_term, "hop");
    }
}
