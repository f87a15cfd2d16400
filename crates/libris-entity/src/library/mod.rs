//! Library ownership entities.

pub mod model;

pub use model::{LibraryEntry, OwnedBook};
