//! Search page view component

use crate::components::book_card::BookCard;
use dioxus::prelude::*;
use folio_core::SearchState;

/// Full search page: heading, query input with clear affordance, status
/// messaging, and the result grid.
///
/// Pure view component - accepts `ReadOnlySignal<SearchState>` and reads at
/// leaf level; emits only raw input text and the clear signal.
#[component]
pub fn SearchPageView(
    state: ReadOnlySignal<SearchState>,
    on_query_input: EventHandler<String>,
    on_clear: EventHandler<()>,
) -> Element {
    let st = state.read();
    let query = st.query.clone();
    let displayed = st.displayed.clone();
    let loading = st.is_loading;
    drop(st);

    let count = displayed.len();

    rsx! {
        div { class: "min-h-screen bg-gray-50 pb-20",
            h1 { class: "text-4xl font-bold text-center pt-10", "Book Explorer" }
            p { class: "text-gray-600 text-center mt-2", "Search books instantly" }

            // Search bar
            div { class: "flex justify-center mt-12 px-4",
                div { class: "relative w-full max-w-2xl",
                    input {
                        r#type: "text",
                        class: "w-full px-5 py-3 pl-11 text-base rounded-xl border border-gray-300 focus:ring-2 focus:ring-black focus:border-black outline-none transition",
                        placeholder: "Search books...",
                        value: "{query}",
                        oninput: move |e| on_query_input.call(e.value()),
                    }
                    span { class: "absolute left-4 top-3 text-gray-400 text-lg", "\u{1F50D}" }
                    if !query.is_empty() {
                        button {
                            class: "absolute right-4 top-3 text-gray-400 hover:text-black text-lg",
                            onclick: move |_| on_clear.call(()),
                            "\u{2715}"
                        }
                    }
                }
            }

            // Result count
            if !query.is_empty() {
                p { class: "text-center mt-4 text-gray-500", "Showing {count} results for '{query}'" }
            }

            if loading {
                div { class: "text-center py-8",
                    p { class: "text-gray-400", "Loading..." }
                }
            } else if !query.is_empty() && displayed.is_empty() {
                div { class: "text-center py-8",
                    p { class: "text-gray-400", "No books found. Try another title." }
                }
            } else {
                // Result grid
                div { class: "flex justify-center px-4 mt-16",
                    div { class: "w-full max-w-7xl",
                        div { class: "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-8",
                            for book in displayed.iter() {
                                BookCard { key: "{book.key}", book: book.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}
