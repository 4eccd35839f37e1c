use serde::{Deserialize, Serialize};

use crate::features::shared::FormPage;
use crate::features::venues::form::VenueForm;
use crate::store::{SharedStore, StoreError};

/// Edit form for an existing venue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetVenueFormQuery {
    pub id: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum GetVenueFormError {
    #[error("Venue {0} not found")]
    NotFound(i32),
    #[error("Database error: {0}")]
    Store(#[from] StoreError),
}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: SharedStore,
    query: GetVenueFormQuery,
) -> Result<FormPage<VenueForm>, GetVenueFormError> {
    let venue = store
        .get_venue(query.id)
        .await?
        .ok_or(GetVenueFormError::NotFound(query.id))?;

    Ok(FormPage::new(VenueForm::from_venue(&venue)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::TestVenue;
    use crate::store::memory::MemoryStore;

    #[tokio::test]
    async fn test_handle_prepopulates() {
        let (_memory, store) = MemoryStore::new().shared();
        let id = TestVenue::new("The Musical Hop").insert(&*store).await;

        let page = handle(store, GetVenueFormQuery { id }).await.unwrap();

        assert_eq!(page.form.name, "The Musical Hop");
        assert_eq!(page.form.genres, vec!["Jazz", "Reggae"]);
        assert!(page.form.seeking_talent);
        assert_eq!(page.choices.states.len(), 51);
    }

    #[tokio::test]
    async fn test_handle_not_found() {
        let (_memory, store) = MemoryStore::new().shared();
        let err = handle(store, GetVenueFormQuery { id: 3 }).await.unwrap_err();
        assert!(matches!(err, GetVenueFormError::NotFound(3)));
    }
}
