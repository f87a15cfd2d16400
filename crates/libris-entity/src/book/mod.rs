//! Book catalog entity.

pub mod model;

pub use model::Book;
