//! HTTP request handlers, grouped by domain.

pub mod auth;
pub mod book;
pub mod health;
pub mod library;
pub mod meta;
pub mod subscription;
