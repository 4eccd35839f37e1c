//! Show routes
//!
//! - `GET /shows` - Every show with its venue and artist
//! - `GET /shows/create` - Booking form, start time pre-filled
//! - `POST /shows/create` - Book an artist at a venue

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;

use super::{
    commands::{CreateShowCommand, CreateShowError},
    form::ShowForm,
    queries::{ListShowsError, ListShowsQuery},
};
use crate::api::response::{flash_redirect, ApiResponse};
use crate::features::shared::{error_helpers, FormPage};
use crate::store::SharedStore;

pub fn shows_routes() -> Router<SharedStore> {
    Router::new()
        .route("/", get(list_shows))
        .route("/create", get(create_show_form).post(create_show))
}

#[tracing::instrument(skip(store, form))]
async fn create_show(
    State(store): State<SharedStore>,
    Json(form): Json<ShowForm>,
) -> Result<Response, ShowApiError> {
    let response = super::commands::create::handle(store, CreateShowCommand { form }).await?;
    Ok(flash_redirect(
        StatusCode::CREATED,
        response,
        "Show was successfully listed!",
        "/",
    ))
}

async fn list_shows(State(store): State<SharedStore>) -> Result<Response, ShowApiError> {
    let shows = super::queries::list::handle(store, ListShowsQuery).await?;
    Ok(ApiResponse::success(shows).into_response())
}

async fn create_show_form() -> Response {
    ApiResponse::success(FormPage::new(ShowForm::blank(Utc::now()))).into_response()
}

#[derive(Debug)]
enum ShowApiError {
    Create(CreateShowError),
    List(ListShowsError),
}

impl From<CreateShowError> for ShowApiError {
    fn from(err: CreateShowError) -> Self {
        Self::Create(err)
    }
}

impl From<ListShowsError> for ShowApiError {
    fn from(err: ListShowsError) -> Self {
        Self::List(err)
    }
}

impl IntoResponse for ShowApiError {
    fn into_response(self) -> Response {
        match self {
            ShowApiError::Create(CreateShowError::Validation { errors, form }) => {
                error_helpers::validation_failed(&errors, &form)
            },
            ShowApiError::Create(CreateShowError::WriteFailed(source)) => {
                error_helpers::write_failed(
                    "An error occurred. Show could not be listed.".to_string(),
                    &source,
                )
            },
            ShowApiError::List(ListShowsError::Store(e)) => {
                error_helpers::read_failed("show listing", &e)
            },
        }
    }
}
