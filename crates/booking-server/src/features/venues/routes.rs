//! Venue routes
//!
//! # Route Structure
//!
//! - `GET /venues` - Venues grouped by area
//! - `POST /venues/search` - Search venues by name
//! - `GET /venues/create` - Blank venue form
//! - `POST /venues/create` - List a new venue
//! - `GET /venues/:id` - Venue detail with past and upcoming shows
//! - `DELETE /venues/:id` - Delete a venue and its shows
//! - `GET /venues/:id/edit` - Pre-populated edit form
//! - `POST /venues/:id/edit` - Apply an edit

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
        CreateVenueCommand, CreateVenueError, DeleteVenueCommand, DeleteVenueError,
        UpdateVenueCommand, UpdateVenueError,
    },
    form::VenueForm,
    queries::{
        GetVenueError, GetVenueFormError, GetVenueFormQuery, GetVenueQuery, ListVenuesError,
        ListVenuesQuery, SearchVenuesError, SearchVenuesQuery,
    },
};
use crate::api::response::{flash_redirect, ApiResponse};
use crate::features::shared::{error_helpers, FormPage, IdPath};
use crate::store::SharedStore;

// ============================================================================
// Router Configuration
// ============================================================================

/// Creates the venues router, to be nested under `/venues`
pub fn venues_routes() -> Router<SharedStore> {
    Router::new()
        .route("/", get(list_venues))
        .route("/search", post(search_venues))
        .route("/create", get(create_venue_form).post(create_venue))
        .route("/:id", get(get_venue).delete(delete_venue))
        .route("/:id/edit", get(edit_venue_form).post(update_venue))
}

// ============================================================================
// Command Handlers (Write Operations)
// ============================================================================

/// `POST /venues/create`
///
/// - `201 Created` - flash and redirect to `/venues`
/// - `400 Bad Request` - rejected fields and the submitted form
/// - `500 Internal Server Error` - write rolled back
#[tracing::instrument(skip(store, form), fields(name = %form.name))]
async fn create_venue(
    State(store): State<SharedStore>,
    Json(form): Json<VenueForm>,
) -> Result<Response, VenueApiError> {
    let response = super::commands::create::handle(store, CreateVenueCommand { form }).await?;

    let flash = format!("Venue {} was successfully listed!", response.name);
    Ok(flash_redirect(StatusCode::CREATED, response, flash, "/venues"))
}

/// `POST /venues/:id/edit`
#[tracing::instrument(skip(store, form), fields(venue_id = id))]
async fn update_venue(
    State(store): State<SharedStore>,
    IdPath(id): IdPath<i32>,
    Json(form): Json<VenueForm>,
) -> Result<Response, VenueApiError> {
    let response = super::commands::update::handle(store, UpdateVenueCommand { id, form }).await?;

    let flash = format!("Venue {} was successfully updated!", response.name);
    let redirect_to = format!("/venues/{}", response.id);
    Ok(flash_redirect(StatusCode::OK, response, flash, redirect_to))
}

/// `DELETE /venues/:id`
#[tracing::instrument(skip(store), fields(venue_id = id))]
async fn delete_venue(
    State(store): State<SharedStore>,
    IdPath(id): IdPath<i32>,
) -> Result<Response, VenueApiError> {
    let response = super::commands::delete::handle(store, DeleteVenueCommand { id }).await?;

    tracing::info!("Venue deleted via API");

    let flash = format!("Venue {} was successfully deleted.", response.id);
    Ok(flash_redirect(StatusCode::OK, response, flash, "/"))
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

/// `GET /venues`
async fn list_venues(State(store): State<SharedStore>) -> Result<Response, VenueApiError> {
    let directory = super::queries::list::handle(store, ListVenuesQuery, Utc::now()).await?;
    Ok(ApiResponse::success(directory).into_response())
}

/// `POST /venues/search`
#[tracing::instrument(skip(store))]
async fn search_venues(
    State(store): State<SharedStore>,
    Json(query): Json<SearchVenuesQuery>,
) -> Result<Response, VenueApiError> {
    let result = super::queries::search::handle(store, query).await?;

    tracing::debug!(count = result.count, "Venue search completed");

    Ok(ApiResponse::success(result).into_response())
}

/// `GET /venues/:id`
async fn get_venue(
    State(store): State<SharedStore>,
    IdPath(id): IdPath<i32>,
) -> Result<Response, VenueApiError> {
    let summary = super::queries::get::handle(store, GetVenueQuery { id }, Utc::now()).await?;
    Ok(ApiResponse::success(summary).into_response())
}

/// `GET /venues/create`
async fn create_venue_form() -> Response {
    ApiResponse::success(FormPage::new(VenueForm::default())).into_response()
}

/// `GET /venues/:id/edit`
async fn edit_venue_form(
    State(store): State<SharedStore>,
    IdPath(id): IdPath<i32>,
) -> Result<Response, VenueApiError> {
    let page = super::queries::edit_form::handle(store, GetVenueFormQuery { id }).await?;
    Ok(ApiResponse::success(page).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Unified error type for venue endpoints
#[derive(Debug)]
enum VenueApiError {
    Create(CreateVenueError),
    Update(UpdateVenueError),
    Delete(DeleteVenueError),
    Get(GetVenueError),
    Form(GetVenueFormError),
    List(ListVenuesError),
    Search(SearchVenuesError),
}

impl From<CreateVenueError> for VenueApiError {
    fn from(err: CreateVenueError) -> Self {
        Self::Create(err)
    }
}

impl From<UpdateVenueError> for VenueApiError {
    fn from(err: UpdateVenueError) -> Self {
        Self::Update(err)
    }
}

impl From<DeleteVenueError> for VenueApiError {
    fn from(err: DeleteVenueError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetVenueError> for VenueApiError {
    fn from(err: GetVenueError) -> Self {
        Self::Get(err)
    }
}

impl From<GetVenueFormError> for VenueApiError {
    fn from(err: GetVenueFormError) -> Self {
        Self::Form(err)
    }
}

impl From<ListVenuesError> for VenueApiError {
    fn from(err: ListVenuesError) -> Self {
        Self::List(err)
    }
}

impl From<SearchVenuesError> for VenueApiError {
    fn from(err: SearchVenuesError) -> Self {
        Self::Search(err)
    }
}

impl IntoResponse for VenueApiError {
    fn into_response(self) -> Response {
        match self {
            // Create errors
            VenueApiError::Create(CreateVenueError::Validation { errors, form }) => {
                error_helpers::validation_failed(&errors, &form)
            },
            VenueApiError::Create(CreateVenueError::WriteFailed { name, source }) => {
                error_helpers::write_failed(
                    format!("An error occurred. Venue {name} could not be listed."),
                    &source,
                )
            },

            // Update errors
            VenueApiError::Update(UpdateVenueError::Validation { errors, form }) => {
                error_helpers::validation_failed(&errors, &form)
            },
            VenueApiError::Update(UpdateVenueError::NotFound(id))
            | VenueApiError::Delete(DeleteVenueError::NotFound(id))
            | VenueApiError::Get(GetVenueError::NotFound(id))
            | VenueApiError::Form(GetVenueFormError::NotFound(id)) => {
                error_helpers::not_found("Venue", id)
            },
            VenueApiError::Update(UpdateVenueError::WriteFailed { name, source }) => {
                error_helpers::write_failed(
                    format!("An error occurred. Venue {name} could not be updated."),
                    &source,
                )
            },

            // Delete errors
            VenueApiError::Delete(DeleteVenueError::WriteFailed { id, source }) => {
                error_helpers::write_failed(
                    format!("An error occurred. Venue {id} could not be deleted."),
                    &source,
                )
            },

            // Read errors
            VenueApiError::Get(GetVenueError::Store(e)) => {
                error_helpers::read_failed("venue detail", &e)
            },
            VenueApiError::Form(GetVenueFormError::Store(e)) => {
                error_helpers::read_failed("venue edit form", &e)
            },
            VenueApiError::List(ListVenuesError::Store(e)) => {
                error_helpers::read_failed("venue listing", &e)
            },
            VenueApiError::Search(SearchVenuesError::Store(e)) => {
                error_helpers::read_failed("venue search", &e)
            },
        }
    }
}
