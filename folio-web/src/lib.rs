//! folio-web - Web shell for folio
//!
//! Owns the search session and wires the pure views to the Open Library
//! client.

pub mod pages;

use dioxus::prelude::*;
use pages::SearchPage;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        SearchPage {}
    }
}
