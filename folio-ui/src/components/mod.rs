//! Shared UI components

pub mod book_card;
pub mod search_page;

pub use book_card::BookCard;
pub use search_page::SearchPageView;
