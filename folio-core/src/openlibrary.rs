//! Open Library search client.

use std::sync::OnceLock;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Open Library full-text search endpoint.
const SEARCH_URL: &str = "https://openlibrary.org/search.json";

/// Shared HTTP client for all Open Library requests.
fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .user_agent("folio/0.1 (https://github.com/folio-fm/folio)")
            .build()
            .expect("Failed to create HTTP client")
    })
}

/// A single catalog entry from the Open Library search index.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    /// Stable work key, e.g. "/works/OL893415W". Unique per record.
    pub key: String,
    pub title: String,
    /// Empty when the index carries no author credit.
    pub author_names: Vec<String>,
    pub first_publish_year: Option<i32>,
}

#[derive(Debug, Error)]
pub enum OpenLibraryError {
    #[error("Open Library request failed: {0}")]
    Transport(String),
    #[error("Open Library returned a malformed response: {0}")]
    Malformed(String),
}

/// Full-text search against the Open Library catalog.
///
/// Returns records in the order the service ranked them. A response body
/// without a `docs` field is an empty result list, not an error.
pub async fn search_books(query: &str) -> Result<Vec<Book>, OpenLibraryError> {
    let mut url = reqwest::Url::parse(SEARCH_URL)
        .map_err(|e| OpenLibraryError::Transport(format!("Failed to parse base URL: {}", e)))?;
    url.query_pairs_mut().append_pair("q", query);
    debug!("Open Library request: {}", url);

    let response = http_client()
        .get(url.as_str())
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| OpenLibraryError::Transport(format!("HTTP request failed: {}", e)))?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        warn!("Open Library error response ({}): {}", status, error_text);
        return Err(OpenLibraryError::Transport(format!(
            "Open Library returned status {}: {}",
            status, error_text
        )));
    }

    let json: Value = response
        .json()
        .await
        .map_err(|e| OpenLibraryError::Malformed(format!("Failed to parse JSON: {}", e)))?;

    let books = parse_search_response(&json);
    info!("Open Library search returned {} result(s)", books.len());
    Ok(books)
}

/// Extract book records from a search response body.
///
/// Docs missing a key or title are skipped. A missing or non-array `docs`
/// field yields an empty list.
pub fn parse_search_response(json: &Value) -> Vec<Book> {
    let mut books = Vec::new();
    if let Some(docs) = json.get("docs").and_then(|d| d.as_array()) {
        for doc in docs {
            if let (Some(key), Some(title)) = (
                doc.get("key").and_then(|v| v.as_str()),
                doc.get("title").and_then(|v| v.as_str()),
            ) {
                let author_names = doc
                    .get("author_name")
                    .and_then(|a| a.as_array())
                    .map(|names| {
                        names
                            .iter()
                            .filter_map(|n| n.as_str())
                            .map(|s| s.to_string())
                            .collect()
                    })
                    .unwrap_or_default();
                let first_publish_year = doc
                    .get("first_publish_year")
                    .and_then(|v| v.as_i64())
                    .map(|y| y as i32);
                books.push(Book {
                    key: key.to_string(),
                    title: title.to_string(),
                    author_names,
                    first_publish_year,
                });
            }
        }
    }
    books
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_docs() {
        let json = json!({
            "numFound": 2,
            "docs": [
                {
                    "key": "/works/OL893415W",
                    "title": "Dune",
                    "author_name": ["Frank Herbert"],
                    "first_publish_year": 1965
                },
                {
                    "key": "/works/OL893416W",
                    "title": "Dune Messiah",
                    "author_name": ["Frank Herbert", "Someone Else"],
                    "first_publish_year": 1969
                }
            ]
        });

        let books = parse_search_response(&json);
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].key, "/works/OL893415W");
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[0].author_names, vec!["Frank Herbert"]);
        assert_eq!(books[0].first_publish_year, Some(1965));
        assert_eq!(books[1].author_names.len(), 2);
    }

    #[test]
    fn test_parse_preserves_service_order() {
        let json = json!({
            "docs": [
                { "key": "/works/b", "title": "B" },
                { "key": "/works/a", "title": "A" },
                { "key": "/works/c", "title": "C" }
            ]
        });

        let titles: Vec<String> = parse_search_response(&json)
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_parse_missing_optional_fields() {
        let json = json!({
            "docs": [
                { "key": "/works/OL1W", "title": "Anonymous Work" }
            ]
        });

        let books = parse_search_response(&json);
        assert_eq!(books.len(), 1);
        assert!(books[0].author_names.is_empty());
        assert_eq!(books[0].first_publish_year, None);
    }

    #[test]
    fn test_parse_skips_docs_missing_required_fields() {
        let json = json!({
            "docs": [
                { "title": "No Key" },
                { "key": "/works/OL2W" },
                { "key": "/works/OL3W", "title": "Complete" }
            ]
        });

        let books = parse_search_response(&json);
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Complete");
    }

    #[test]
    fn test_parse_missing_docs_field_is_empty() {
        assert!(parse_search_response(&json!({ "numFound": 0 })).is_empty());
        assert!(parse_search_response(&json!({ "docs": null })).is_empty());
        assert!(parse_search_response(&json!({})).is_empty());
    }
}
