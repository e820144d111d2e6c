//! Core types for the Inkshelf catalog

mod book;
mod upload;

pub use book::{Book, BookDraft, BookPatch, BookStatus};
pub use upload::Upload;
