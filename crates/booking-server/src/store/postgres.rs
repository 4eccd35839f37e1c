//! PostgreSQL store
//!
//! Queries are built at runtime with `query_as` so the crate compiles
//! without a live database. Each write opens its own transaction.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use super::{contains_pattern, BookingStore, StoreError, StoreResult};
use crate::models::{Artist, ArtistDraft, ShowDraft, ShowListing, Venue, VenueDraft};

const VENUE_FKEY: &str = "shows_venue_id_fkey";
const ARTIST_FKEY: &str = "shows_artist_id_fkey";

macro_rules! venue_sql {
    ($tail:literal) => {
        concat!(
            "SELECT id, name, city, state, address, phone, image_link, website_link, \
             facebook_link, genres, seeking_talent, seeking_description FROM venues ",
            $tail
        )
    };
}

macro_rules! artist_sql {
    ($tail:literal) => {
        concat!(
            "SELECT id, name, city, state, phone, genres, website_link, image_link, \
             facebook_link FROM artists ",
            $tail
        )
    };
}

macro_rules! show_listing_sql {
    ($tail:literal) => {
        concat!(
            "SELECT s.id, s.start_time, s.venue_id, v.name AS venue_name, \
             v.image_link AS venue_image_link, s.artist_id, a.name AS artist_name, \
             a.image_link AS artist_image_link \
             FROM shows s \
             JOIN venues v ON v.id = s.venue_id \
             JOIN artists a ON a.id = s.artist_id ",
            $tail
        )
    };
}

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn begin(&self) -> StoreResult<Transaction<'static, Postgres>> {
        Ok(self.pool.begin().await?)
    }
}

/// Translate a failed show insert into [`StoreError::MissingReference`] when
/// one of the foreign keys was violated
fn map_show_insert_error(error: sqlx::Error, draft: &ShowDraft) -> StoreError {
    if let sqlx::Error::Database(ref db_err) = error {
        if db_err.is_foreign_key_violation() {
            match db_err.constraint() {
                Some(VENUE_FKEY) => {
                    return StoreError::MissingReference {
                        entity: "Venue",
                        id: draft.venue_id,
                    }
                },
                Some(ARTIST_FKEY) => {
                    return StoreError::MissingReference {
                        entity: "Artist",
                        id: draft.artist_id,
                    }
                },
                _ => {},
            }
        }
    }
    StoreError::Database(error)
}

#[async_trait]
impl BookingStore for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Venues
    // ------------------------------------------------------------------------

    async fn get_venue(&self, id: i32) -> StoreResult<Option<Venue>> {
        let venue = sqlx::query_as::<_, Venue>(venue_sql!("WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(venue)
    }

    async fn list_venues(&self) -> StoreResult<Vec<Venue>> {
        let venues = sqlx::query_as::<_, Venue>(venue_sql!("ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        Ok(venues)
    }

    async fn recent_venues(&self, limit: i64) -> StoreResult<Vec<Venue>> {
        let venues = sqlx::query_as::<_, Venue>(venue_sql!("ORDER BY id DESC LIMIT $1"))
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(venues)
    }

    async fn search_venues(&self, term: &str) -> StoreResult<Vec<Venue>> {
        let venues =
            sqlx::query_as::<_, Venue>(venue_sql!("WHERE name ILIKE $1 ESCAPE '\\' ORDER BY id"))
                .bind(contains_pattern(term))
                .fetch_all(&self.pool)
                .await?;
        Ok(venues)
    }

    #[tracing::instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create_venue(&self, draft: &VenueDraft) -> StoreResult<i32> {
        let mut tx = self.begin().await?;

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO venues (name, city, state, address, phone, image_link, website_link,
                                facebook_link, genres, seeking_talent, seeking_description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.city)
        .bind(&draft.state)
        .bind(&draft.address)
        .bind(&draft.phone)
        .bind(&draft.image_link)
        .bind(&draft.website_link)
        .bind(&draft.facebook_link)
        .bind(draft.genres_column())
        .bind(draft.seeking_talent)
        .bind(&draft.seeking_description)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(id)
    }

    #[tracing::instrument(skip(self, draft), fields(name = %draft.name))]
    async fn update_venue(&self, id: i32, draft: &VenueDraft) -> StoreResult<bool> {
        let mut tx = self.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE venues
            SET name = $2, city = $3, state = $4, address = $5, phone = $6, image_link = $7,
                website_link = $8, facebook_link = $9, genres = $10, seeking_talent = $11,
                seeking_description = $12
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.city)
        .bind(&draft.state)
        .bind(&draft.address)
        .bind(&draft.phone)
        .bind(&draft.image_link)
        .bind(&draft.website_link)
        .bind(&draft.facebook_link)
        .bind(draft.genres_column())
        .bind(draft.seeking_talent)
        .bind(&draft.seeking_description)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_venue(&self, id: i32) -> StoreResult<bool> {
        let mut tx = self.begin().await?;

        let shows = sqlx::query("DELETE FROM shows WHERE venue_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let venues = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(shows_removed = shows.rows_affected(), "Venue delete committed");
        Ok(venues.rows_affected() > 0)
    }

    // ------------------------------------------------------------------------
    // Artists
    // ------------------------------------------------------------------------

    async fn get_artist(&self, id: i32) -> StoreResult<Option<Artist>> {
        let artist = sqlx::query_as::<_, Artist>(artist_sql!("WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(artist)
    }

    async fn list_artists(&self) -> StoreResult<Vec<Artist>> {
        let artists = sqlx::query_as::<_, Artist>(artist_sql!("ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        Ok(artists)
    }

    async fn recent_artists(&self, limit: i64) -> StoreResult<Vec<Artist>> {
        let artists = sqlx::query_as::<_, Artist>(artist_sql!("ORDER BY id DESC LIMIT $1"))
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(artists)
    }

    async fn search_artists(&self, term: &str) -> StoreResult<Vec<Artist>> {
        let artists =
            sqlx::query_as::<_, Artist>(artist_sql!("WHERE name ILIKE $1 ESCAPE '\\' ORDER BY id"))
                .bind(contains_pattern(term))
                .fetch_all(&self.pool)
                .await?;
        Ok(artists)
    }

    #[tracing::instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create_artist(&self, draft: &ArtistDraft) -> StoreResult<i32> {
        let mut tx = self.begin().await?;

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO artists (name, city, state, phone, genres, website_link, image_link,
                                 facebook_link)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.city)
        .bind(&draft.state)
        .bind(&draft.phone)
        .bind(draft.genres_column())
        .bind(&draft.website_link)
        .bind(&draft.image_link)
        .bind(&draft.facebook_link)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(id)
    }

    #[tracing::instrument(skip(self, draft), fields(name = %draft.name))]
    async fn update_artist(&self, id: i32, draft: &ArtistDraft) -> StoreResult<bool> {
        let mut tx = self.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE artists
            SET name = $2, city = $3, state = $4, phone = $5, genres = $6, website_link = $7,
                image_link = $8, facebook_link = $9
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.city)
        .bind(&draft.state)
        .bind(&draft.phone)
        .bind(draft.genres_column())
        .bind(&draft.website_link)
        .bind(&draft.image_link)
        .bind(&draft.facebook_link)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_artist(&self, id: i32) -> StoreResult<bool> {
        let mut tx = self.begin().await?;

        let shows = sqlx::query("DELETE FROM shows WHERE artist_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let artists = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(shows_removed = shows.rows_affected(), "Artist delete committed");
        Ok(artists.rows_affected() > 0)
    }

    // ------------------------------------------------------------------------
    // Shows
    // ------------------------------------------------------------------------

    #[tracing::instrument(skip(self))]
    async fn create_show(&self, draft: &ShowDraft) -> StoreResult<i32> {
        let mut tx = self.begin().await?;

        let id: i32 = sqlx::query_scalar(
            "INSERT INTO shows (start_time, venue_id, artist_id) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(draft.start_time)
        .bind(draft.venue_id)
        .bind(draft.artist_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_show_insert_error(e, draft))?;

        tx.commit().await?;
        Ok(id)
    }

    async fn list_shows(&self) -> StoreResult<Vec<ShowListing>> {
        let shows = sqlx::query_as::<_, ShowListing>(show_listing_sql!("ORDER BY s.start_time, s.id"))
            .fetch_all(&self.pool)
            .await?;
        Ok(shows)
    }

    async fn shows_for_venue(&self, venue_id: i32) -> StoreResult<Vec<ShowListing>> {
        let shows = sqlx::query_as::<_, ShowListing>(show_listing_sql!(
            "WHERE s.venue_id = $1 ORDER BY s.start_time, s.id"
        ))
        .bind(venue_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(shows)
    }

    async fn shows_for_artist(&self, artist_id: i32) -> StoreResult<Vec<ShowListing>> {
        let shows = sqlx::query_as::<_, ShowListing>(show_listing_sql!(
            "WHERE s.artist_id = $1 ORDER BY s.start_time, s.id"
        ))
        .bind(artist_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(shows)
    }
}
