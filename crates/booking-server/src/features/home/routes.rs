//! Home page route
//!
//! - `GET /` - Newest artists and venues

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use super::queries::{RecentListingsError, RecentListingsQuery};
use crate::api::response::ApiResponse;
use crate::features::shared::error_helpers;
use crate::store::SharedStore;

pub fn home_routes() -> Router<SharedStore> {
    Router::new().route("/", get(home))
}

async fn home(State(store): State<SharedStore>) -> Result<Response, HomeApiError> {
    let summary = super::queries::recent::handle(store, RecentListingsQuery).await?;
    Ok(ApiResponse::success(summary).into_response())
}

#[derive(Debug)]
struct HomeApiError(RecentListingsError);

impl From<RecentListingsError> for HomeApiError {
    fn from(err: RecentListingsError) -> Self {
        Self(err)
    }
}

impl IntoResponse for HomeApiError {
    fn into_response(self) -> Response {
        let HomeApiError(RecentListingsError::Store(e)) = self;
        error_helpers::read_failed("home page", &e)
    }
}
