//! Test helpers and fixtures for route tests
//!
//! Routes run against a fresh [`MemoryStore`] through the full application
//! router, middleware included.
//!
//! # Examples
//!
//! ```rust,ignore
//! let (store, app) = test_app();
//! let hop = TestVenue::new("The Musical Hop").insert(&*store).await;
//! let (status, body) = send(&app, get(&format!("/venues/{hop}"))).await;
//! ```

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use booking_common::types::Genre;
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use crate::api;
use crate::config::Config;
use crate::models::{ArtistDraft, ShowDraft, VenueDraft};
use crate::store::{memory::MemoryStore, BookingStore};

/// Application router over an empty in-memory store
pub fn test_app() -> (Arc<MemoryStore>, Router) {
    let (store, shared) = MemoryStore::new().shared();
    (store, api::create_router(shared, &Config::default()))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Run one request and decode the JSON body (`Null` when empty)
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Builder for venues inserted straight into a store
#[derive(Debug, Clone)]
pub struct TestVenue {
    draft: VenueDraft,
}

impl TestVenue {
    pub fn new(name: &str) -> Self {
        Self {
            draft: VenueDraft {
                name: name.to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                address: "1015 Folsom Street".to_string(),
                phone: "123-123-1234".to_string(),
                image_link: Some("https://img.example/venue.png".to_string()),
                website_link: Some("https://www.themusicalhop.com".to_string()),
                facebook_link: None,
                genres: vec![Genre::Jazz, Genre::Reggae],
                seeking_talent: true,
                seeking_description: Some("Looking for local artists".to_string()),
            },
        }
    }

    pub fn in_area(mut self, city: &str, state: &str) -> Self {
        self.draft.city = city.to_string();
        self.draft.state = state.to_string();
        self
    }

    pub async fn insert(self, store: &dyn BookingStore) -> i32 {
        store.create_venue(&self.draft).await.unwrap()
    }
}

/// Builder for artists inserted straight into a store
#[derive(Debug, Clone)]
pub struct TestArtist {
    draft: ArtistDraft,
}

impl TestArtist {
    pub fn new(name: &str) -> Self {
        Self {
            draft: ArtistDraft {
                name: name.to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                phone: "326-123-5000".to_string(),
                genres: vec![Genre::RockNRoll],
                image_link: Some("https://img.example/artist.png".to_string()),
                website_link: None,
                facebook_link: None,
            },
        }
    }

    pub async fn insert(self, store: &dyn BookingStore) -> i32 {
        store.create_artist(&self.draft).await.unwrap()
    }
}

/// Book `artist_id` at `venue_id`, `days` from now (negative is past)
pub async fn book(store: &dyn BookingStore, venue_id: i32, artist_id: i32, days: i64) -> i32 {
    let draft = ShowDraft {
        venue_id,
        artist_id,
        start_time: days_from_now(days),
    };
    store.create_show(&draft).await.unwrap()
}

pub fn days_from_now(days: i64) -> DateTime<Utc> {
    Utc::now() + Duration::days(days)
}
