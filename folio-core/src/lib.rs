//! folio-core - Catalog search core for folio
//!
//! Owns the search session state machine and the Open Library client.
//! Framework-free: no UI types, compiles on both native and wasm32.

pub mod openlibrary;
pub mod search;

pub use openlibrary::{search_books, Book, OpenLibraryError};
pub use search::{SearchCommand, SearchEvent, SearchState};
