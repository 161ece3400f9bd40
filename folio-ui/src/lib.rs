//! folio-ui - Pure view components for folio
//!
//! Stateless Dioxus components driven entirely by props. Session state and
//! network access live in the shell crate.

pub mod components;

pub use components::*;
