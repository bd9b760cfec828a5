//! Terminal Pokédex built on `pokeapi-core`.
//!
//! # Overview
//! Validates search input, tracks the search state, renders the result card
//! and the detail view, and executes requests with ureq.

pub mod app;
pub mod commands;
pub mod logger;
pub mod search;
pub mod transport;
pub mod view;

pub use app::{not_found_message, Pokedex, SearchRejected, SearchState};
pub use search::{validate, ValidationError};
pub use transport::UreqTransport;
