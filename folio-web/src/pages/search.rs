//! Search page: owns the session state and executes fetch commands.

use dioxus::prelude::*;
use folio_core::{search_books, SearchCommand, SearchEvent, SearchState};
use folio_ui::SearchPageView;
use tracing::{info, warn};

/// Apply an event to the session and execute whatever command falls out.
///
/// Fetches resolve back into the state machine as `FetchResolved`, tagged
/// with the query they were issued for so a superseded fetch is discarded
/// by the staleness check rather than clobbering newer input. Failures are
/// logged and resolve as an empty result set; they never reach the view.
fn dispatch(mut state: Signal<SearchState>, event: SearchEvent) {
    let command = state.write().apply(event);
    if let SearchCommand::Fetch(query) = command {
        spawn(async move {
            info!("Fetching books for '{}'", query);
            let results = match search_books(&query).await {
                Ok(results) => results,
                Err(e) => {
                    warn!("Book search failed: {}", e);
                    Vec::new()
                }
            };
            let _ = state
                .write()
                .apply(SearchEvent::FetchResolved { query, results });
        });
    }
}

#[component]
pub fn SearchPage() -> Element {
    let state = use_signal(SearchState::default);

    rsx! {
        SearchPageView {
            state,
            on_query_input: move |text| dispatch(state, SearchEvent::QueryChanged(text)),
            on_clear: move |_| dispatch(state, SearchEvent::Cleared),
        }
    }
}
