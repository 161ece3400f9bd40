//! Search session state machine.
//!
//! One `SearchState` per page session, driven by `SearchEvent`s and
//! answering with `SearchCommand`s. The machine never performs I/O: the
//! shell executes `Fetch` commands and feeds the outcome back in as a
//! `FetchResolved` event carrying the query text the fetch was issued for.
//! That text is the staleness token: a resolution for a query that no
//! longer matches the current input is discarded without touching state.

use tracing::debug;

use crate::openlibrary::Book;

/// State for one search session.
///
/// `displayed` is always the case-insensitive title-substring subset of
/// `fetched` for the current query, or equal to it right after a fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    /// What the user typed. Source of truth for the session.
    pub query: String,
    /// Results from the most recent applied fetch; empty until one succeeds.
    pub fetched: Vec<Book>,
    /// What the presenter renders.
    pub displayed: Vec<Book>,
    /// True strictly while a fetch is in flight.
    pub is_loading: bool,
}

/// Events that drive a search session.
#[derive(Clone, Debug)]
pub enum SearchEvent {
    /// User edited the search input
    QueryChanged(String),
    /// User pressed the clear affordance
    Cleared,
    /// A catalog fetch finished (from an async operation). `query` is the
    /// text the fetch was issued for; a failed fetch is delivered with
    /// empty `results`.
    FetchResolved { query: String, results: Vec<Book> },
}

/// What the shell must do after applying an event.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub enum SearchCommand {
    None,
    /// Issue a catalog fetch for the given query text.
    Fetch(String),
}

impl SearchState {
    /// Apply an event and return the command the shell must execute.
    /// This is the core state machine transition function.
    pub fn apply(&mut self, event: SearchEvent) -> SearchCommand {
        match event {
            SearchEvent::QueryChanged(text) => self.on_query_changed(text),
            SearchEvent::Cleared => self.on_query_changed(String::new()),
            SearchEvent::FetchResolved { query, results } => {
                self.on_fetch_resolved(query, results);
                SearchCommand::None
            }
        }
    }

    fn on_query_changed(&mut self, text: String) -> SearchCommand {
        self.query = text;

        if self.query.trim().is_empty() {
            // Back to idle. An in-flight fetch now resolves against a query
            // it no longer matches and gets discarded.
            self.fetched.clear();
            self.displayed.clear();
            self.is_loading = false;
            return SearchCommand::None;
        }

        if self.fetched.is_empty() {
            // No results yet this session: one remote round-trip.
            self.is_loading = true;
            return SearchCommand::Fetch(self.query.clone());
        }

        // Results already fetched: narrow locally, no network.
        self.refilter();
        SearchCommand::None
    }

    fn on_fetch_resolved(&mut self, query: String, results: Vec<Book>) {
        if query != self.query {
            debug!(
                "Discarding stale fetch for '{}' (query is now '{}')",
                query, self.query
            );
            return;
        }
        self.displayed = results.clone();
        self.fetched = results;
        self.is_loading = false;
    }

    fn refilter(&mut self) {
        let needle = self.query.to_lowercase();
        self.displayed = self
            .fetched
            .iter()
            .filter(|book| book.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
    }
}
