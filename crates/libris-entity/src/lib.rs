//! # libris-entity
//!
//! Domain entity models for Libris. Every struct in this crate represents
//! a database table row or a domain value object. All entities derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize`, and database entities
//! additionally derive `sqlx::FromRow`.

pub mod book;
pub mod library;
pub mod plan;
pub mod user;
