use serde::{Deserialize, Serialize};

use crate::features::artists::form::ArtistForm;
use crate::features::shared::FormPage;
use crate::store::{SharedStore, StoreError};

/// Edit form for an existing artist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetArtistFormQuery {
    pub id: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum GetArtistFormError {
    #[error("Artist {0} not found")]
    NotFound(i32),
    #[error("Database error: {0}")]
    Store(#[from] StoreError),
}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: SharedStore,
    query: GetArtistFormQuery,
) -> Result<FormPage<ArtistForm>, GetArtistFormError> {
    let artist = store
        .get_artist(query.id)
        .await?
        .ok_or(GetArtistFormError::NotFound(query.id))?;

    Ok(FormPage::new(ArtistForm::from_artist(&artist)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::TestArtist;
    use crate::store::memory::MemoryStore;

    #[tokio::test]
    async fn test_handle_prepopulates() {
        let (_memory, store) = MemoryStore::new().shared();
        let id = TestArtist::new("Guns N Petals").insert(&*store).await;

        let page = handle(store, GetArtistFormQuery { id }).await.unwrap();

        assert_eq!(page.form.name, "Guns N Petals");
        assert_eq!(page.form.phone, "326-123-5000");
        assert_eq!(page.form.genres, vec!["Rock n Roll"]);
        assert_eq!(page.form.website_link, "");
    }

    #[tokio::test]
    async fn test_handle_not_found() {
        let (_memory, store) = MemoryStore::new().shared();
        let err = handle(store, GetArtistFormQuery { id: 1 }).await.unwrap_err();
        assert!(matches!(err, GetArtistFormError::NotFound(1)));
    }
}
