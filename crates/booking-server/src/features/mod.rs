//! Feature modules implementing the booking API
//!
//! Each feature is a vertical slice with its own commands, queries, form
//! and routes.
//!
//! # Features
//!
//! - **home**: newest artists and venues
//! - **venues**: venue directory, search, detail, create, edit, delete
//! - **artists**: artist listing, search, detail, create, edit, delete
//! - **shows**: show listing and booking
//!
//! # Architecture
//!
//! - `commands/` - Write operations (create, update, delete)
//! - `queries/` - Read operations (get, list, search, edit form)
//! - `form.rs` - Submitted payload and its validation
//! - `routes.rs` - HTTP route definitions
//!
//! Handlers are plain async functions taking the shared store and a
//! command or query value.

pub mod artists;
pub mod home;
pub mod shared;
pub mod shows;
pub mod venues;

use axum::Router;

use crate::store::SharedStore;

/// Creates the router with every feature mounted
///
/// - `/` - Home page
/// - `/venues` - Venues
/// - `/artists` - Artists
/// - `/shows` - Shows
pub fn router(store: SharedStore) -> Router<()> {
    Router::new()
        .merge(home::home_routes())
        .nest("/venues", venues::venues_routes())
        .nest("/artists", artists::artists_routes())
        .nest("/shows", shows::shows_routes())
        .with_state(store)
}
