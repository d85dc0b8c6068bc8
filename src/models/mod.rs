//! Data models for the Local Library catalog

pub mod book;
pub mod book_instance;
pub mod genre;

// Re-export commonly used types
pub use book::Book;
pub use book_instance::{BookInstance, BookInstanceDetail};
pub use genre::Genre;
