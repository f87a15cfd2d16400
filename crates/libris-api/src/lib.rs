//! # libris-api
//!
//! HTTP API layer for Libris built on Axum.
//!
//! Provides all REST endpoints, the bearer-token extractor, DTOs, CORS
//! and trace layers, and the mapping from domain errors to HTTP status
//! codes.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
