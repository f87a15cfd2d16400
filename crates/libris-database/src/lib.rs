//! # libris-database
//!
//! PostgreSQL connection management, embedded migrations, catalog seeding,
//! and concrete repository implementations for all Libris entities.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod seed;

pub use connection::DatabasePool;
