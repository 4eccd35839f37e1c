//! Shows feature: listing and booking

pub mod commands;
pub mod form;
pub mod queries;
pub mod routes;

pub use form::ShowForm;
pub use routes::shows_routes;
