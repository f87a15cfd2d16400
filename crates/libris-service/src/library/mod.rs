//! Library entitlement operations.

pub mod service;

pub use service::LibraryService;
