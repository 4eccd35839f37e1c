//! Artist routes
//!
//! # Route Structure
//!
//! - `GET /artists` - Every artist by id
//! - `POST /artists/search` - Search artists by name
//! - `GET|POST /artists/create` - Blank form / list a new artist
//! - `GET /artists/:id` - Artist detail with past and upcoming shows
//! - `DELETE /artists/:id` - Delete an artist and their shows
//! - `GET|POST /artists/:id/edit` - Pre-populated form / apply an edit

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use super::{
    commands::{
        CreateArtistCommand, CreateArtistError, DeleteArtistCommand, DeleteArtistError,
        UpdateArtistCommand, UpdateArtistError,
    },
    form::ArtistForm,
    queries::{
        GetArtistError, GetArtistFormError, GetArtistFormQuery, GetArtistQuery, ListArtistsError,
        ListArtistsQuery, SearchArtistsError, SearchArtistsQuery,
    },
};
use crate::api::response::{flash_redirect, ApiResponse};
use crate::features::shared::{error_helpers, FormPage, IdPath};
use crate::store::SharedStore;

/// Creates the artists router, to be nested under `/artists`
pub fn artists_routes() -> Router<SharedStore> {
    Router::new()
        .route("/", get(list_artists))
        .route("/search", post(search_artists))
        .route("/create", get(create_artist_form).post(create_artist))
        .route("/:id", get(get_artist).delete(delete_artist))
        .route("/:id/edit", get(edit_artist_form).post(update_artist))
}

// ============================================================================
// Command Handlers
// ============================================================================

#[tracing::instrument(skip(store, form), fields(name = %form.name))]
async fn create_artist(
    State(store): State<SharedStore>,
    Json(form): Json<ArtistForm>,
) -> Result<Response, ArtistApiError> {
    let response = super::commands::create::handle(store, CreateArtistCommand { form }).await?;

    let flash = format!("Artist {} was successfully listed!", response.name);
    Ok(flash_redirect(StatusCode::CREATED, response, flash, "/"))
}

#[tracing::instrument(skip(store, form), fields(artist_id = id))]
async fn update_artist(
    State(store): State<SharedStore>,
    IdPath(id): IdPath<i32>,
    Json(form): Json<ArtistForm>,
) -> Result<Response, ArtistApiError> {
    let response =
        super::commands::update::handle(store, UpdateArtistCommand { id, form }).await?;

    let flash = format!("Artist {} was successfully updated!", response.name);
    let redirect_to = format!("/artists/{}", response.id);
    Ok(flash_redirect(StatusCode::OK, response, flash, redirect_to))
}

#[tracing::instrument(skip(store), fields(artist_id = id))]
async fn delete_artist(
    State(store): State<SharedStore>,
    IdPath(id): IdPath<i32>,
) -> Result<Response, ArtistApiError> {
    let response = super::commands::delete::handle(store, DeleteArtistCommand { id }).await?;

    tracing::info!("Artist deleted via API");

    let flash = format!("Artist {} was successfully deleted.", response.id);
    Ok(flash_redirect(StatusCode::OK, response, flash, "/"))
}

// ============================================================================
// Query Handlers
// ============================================================================

async fn list_artists(State(store): State<SharedStore>) -> Result<Response, ArtistApiError> {
    let listing = super::queries::list::handle(store, ListArtistsQuery).await?;
    Ok(ApiResponse::success(listing).into_response())
}

#[tracing::instrument(skip(store))]
async fn search_artists(
    State(store): State<SharedStore>,
    Json(query): Json<SearchArtistsQuery>,
) -> Result<Response, ArtistApiError> {
    let result = super::queries::search::handle(store, query).await?;
    Ok(ApiResponse::success(result).into_response())
}

async fn get_artist(
    State(store): State<SharedStore>,
    IdPath(id): IdPath<i32>,
) -> Result<Response, ArtistApiError> {
    let summary = super::queries::get::handle(store, GetArtistQuery { id }, Utc::now()).await?;
    Ok(ApiResponse::success(summary).into_response())
}

async fn create_artist_form() -> Response {
    ApiResponse::success(FormPage::new(ArtistForm::default())).into_response()
}

async fn edit_artist_form(
    State(store): State<SharedStore>,
    IdPath(id): IdPath<i32>,
) -> Result<Response, ArtistApiError> {
    let page = super::queries::edit_form::handle(store, GetArtistFormQuery { id }).await?;
    Ok(ApiResponse::success(page).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum ArtistApiError {
    Create(CreateArtistError),
    Update(UpdateArtistError),
    Delete(DeleteArtistError),
    Get(GetArtistError),
    Form(GetArtistFormError),
    List(ListArtistsError),
    Search(SearchArtistsError),
}

impl From<CreateArtistError> for ArtistApiError {
    fn from(err: CreateArtistError) -> Self {
        Self::Create(err)
    }
}

impl From<UpdateArtistError> for ArtistApiError {
    fn from(err: UpdateArtistError) -> Self {
        Self::Update(err)
    }
}

impl From<DeleteArtistError> for ArtistApiError {
    fn from(err: DeleteArtistError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetArtistError> for ArtistApiError {
    fn from(err: GetArtistError) -> Self {
        Self::Get(err)
    }
}

impl From<GetArtistFormError> for ArtistApiError {
    fn from(err: GetArtistFormError) -> Self {
        Self::Form(err)
    }
}

impl From<ListArtistsError> for ArtistApiError {
    fn from(err: ListArtistsError) -> Self {
        Self::List(err)
    }
}

impl From<SearchArtistsError> for ArtistApiError {
    fn from(err: SearchArtistsError) -> Self {
        Self::Search(err)
    }
}

impl IntoResponse for ArtistApiError {
    fn into_response(self) -> Response {
        match self {
            ArtistApiError::Create(CreateArtistError::Validation { errors, form })
            | ArtistApiError::Update(UpdateArtistError::Validation { errors, form }) => {
                error_helpers::validation_failed(&errors, &form)
            },
            ArtistApiError::Update(UpdateArtistError::NotFound(id))
            | ArtistApiError::Delete(DeleteArtistError::NotFound(id))
            | ArtistApiError::Get(GetArtistError::NotFound(id))
            | ArtistApiError::Form(GetArtistFormError::NotFound(id)) => {
                error_helpers::not_found("Artist", id)
            },
            ArtistApiError::Create(CreateArtistError::WriteFailed { name, source }) => {
                error_helpers::write_failed(
                    format!("An error occurred. Artist {name} could not be listed."),
                    &source,
                )
            },
            ArtistApiError::Update(UpdateArtistError::WriteFailed { name, source }) => {
                error_helpers::write_failed(
                    format!("An error occurred. Artist {name} could not be updated."),
                    &source,
                )
            },
            ArtistApiError::Delete(DeleteArtistError::WriteFailed { id, source }) => {
                error_helpers::write_failed(
                    format!("An error occurred. Artist {id} could not be deleted."),
                    &source,
                )
            },
            ArtistApiError::Get(GetArtistError::Store(e)) => {
                error_helpers::read_failed("artist detail", &e)
            },
            ArtistApiError::Form(GetArtistFormError::Store(e)) => {
                error_helpers::read_failed("artist edit form", &e)
            },
            ArtistApiError::List(ListArtistsError::Store(e)) => {
                error_helpers::read_failed("artist listing", &e)
            },
            ArtistApiError::Search(SearchArtistsError::Store(e)) => {
                error_helpers::read_failed("artist search", &e)
            },
        }
    }
}
