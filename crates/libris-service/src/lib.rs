//! # libris-service
//!
//! Business logic service layer for Libris. Each service orchestrates
//! repositories and auth primitives to implement application-level use
//! cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references, and every operation takes
//! the acting user as an explicit argument rather than pulling identity
//! from ambient request state.

pub mod account;
pub mod catalog;
pub mod library;
pub mod subscription;

pub use account::AccountService;
pub use catalog::CatalogService;
pub use library::LibraryService;
pub use subscription::SubscriptionService;
