//! Booking Directory Server Library
//!
//! HTTP service for a booking directory: venues, artists, and the shows
//! that book an artist at a venue.
//!
//! # Overview
//!
//! - **API Endpoints**: listing, search, detail and form routes per entity
//! - **Store**: [`store::BookingStore`] over PostgreSQL with SQLx
//! - **Views**: past/upcoming partitioning and page view models
//! - **Configuration**: environment-based configuration management
//! - **Middleware**: CORS, request tracing and panic recovery
//!
//! # Architecture
//!
//! Each entity is a vertical slice under [`features`]:
//!
//! - **Commands** (write operations): create, update, delete. A command
//!   validates its submitted form into a draft before touching the store;
//!   an invalid form writes nothing.
//! - **Queries** (read operations): listing, detail, search, edit form.
//!   Queries that split shows into past and upcoming take the reference
//!   time as an argument.
//!
//! Route handlers map command and query errors to HTTP responses. Writes
//! answer with a flash message and a redirect target.
//!
//! # Example
//!
//! ```no_run
//! use booking_server::{api, config::Config, db, store::PgStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let pool = db::create_pool(&db::DbConfig::from(&config.database)).await?;
//!     let app = api::create_router(Arc::new(PgStore::new(pool)), &config);
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod features;
pub mod middleware;
pub mod models;
pub mod shutdown;
pub mod store;
pub mod views;

// Re-export commonly used types
pub use error::AppError;
