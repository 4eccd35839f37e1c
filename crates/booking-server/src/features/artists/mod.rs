//! Artists feature: listing, search, detail, create, edit and delete

pub mod commands;
pub mod form;
pub mod queries;
pub mod routes;

pub use form::ArtistForm;
pub use routes::artists_routes;
