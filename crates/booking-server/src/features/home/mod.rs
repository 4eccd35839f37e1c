//! Home page feature

pub mod queries;
pub mod routes;

pub use routes::home_routes;
