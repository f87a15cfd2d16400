//! Repository implementations for all Libris entities.

pub mod book;
pub mod library;
pub mod plan;
pub mod user;

pub use book::BookRepository;
pub use library::LibraryRepository;
pub use plan::PlanRepository;
pub use user::UserRepository;
