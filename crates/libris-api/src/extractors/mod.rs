//! Custom Axum extractors.

pub mod auth;
pub mod pagination;

pub use auth::CurrentUser;
pub use pagination::PaginationParams;
