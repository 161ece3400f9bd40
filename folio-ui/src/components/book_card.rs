//! Book card component - pure view of one catalog record

use dioxus::prelude::*;
use folio_core::Book;

/// Individual book result card: title, author credit, first publish year.
#[component]
pub fn BookCard(book: Book) -> Element {
    let authors = if book.author_names.is_empty() {
        "Unknown Author".to_string()
    } else {
        book.author_names.join(", ")
    };
    let year = book
        .first_publish_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "Year not available".to_string());

    rsx! {
        div { class: "bg-white rounded-2xl shadow-sm border border-gray-200 hover:shadow-lg hover:border-gray-300 transition-all duration-300 p-4",
            h3 { class: "text-base font-semibold text-gray-900 mb-2", "{book.title}" }
            div { class: "flex items-center gap-2 mb-2",
                p { class: "text-xs text-gray-700", "{authors}" }
            }
            div { class: "flex items-center gap-2",
                p { class: "text-xs text-gray-600", "{year}" }
            }
        }
    }
}
