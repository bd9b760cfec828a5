//! Synchronous PokeAPI client core.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). `PokeApi` composes the two
//! around a caller-supplied `Transport`, issuing exactly one request per
//! lookup.
//!
//! # Design
//! - `PokeApiClient` is stateless; it holds only `base_url`.
//! - Upstream payloads are returned as `serde_json::Value`, unchanged.
//! - Errors are classified per operation: `NotFound` for single-resource
//!   lookups, `Fetch` for the list, `Network` for transport failures.
//! - No caching, retries or rate limiting.

pub mod client;
pub mod error;
pub mod http;
pub mod random;
pub mod service;
pub mod types;

pub use client::{PokeApiClient, DEFAULT_BASE_URL};
pub use error::{ApiError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use random::{pokemon_id_from_unit, random_pokemon_id, random_pokemon_id_with, MAX_POKEMON_ID};
pub use service::PokeApi;
pub use types::{Identifier, ListParams, Resource, DEFAULT_LIST_LIMIT, DEFAULT_LIST_OFFSET};
