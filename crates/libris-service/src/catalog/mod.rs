//! Catalog browsing operations.

pub mod service;

pub use service::CatalogService;
