//! Error types for the PokeAPI client.
//!
//! # Design
//! Failures are classified per operation. Single-resource lookups map every
//! non-2xx status to `NotFound`, carrying the identifier exactly as the
//! caller passed it. The list lookup maps non-2xx to `Fetch` with a fixed
//! message. Transport failures surface through `Network` with the
//! underlying message untouched.

use crate::types::Resource;

/// Errors returned by `PokeApiClient::parse_*` and `PokeApi` calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A single-resource lookup returned a non-2xx status.
    #[error("{resource} not found: {identifier}")]
    NotFound {
        resource: Resource,
        identifier: String,
    },

    /// The list lookup returned a non-2xx status.
    #[error("Failed to fetch Pokemon list")]
    Fetch { status: u16 },

    /// No HTTP status was obtained.
    #[error(transparent)]
    Network(#[from] TransportError),

    /// A 2xx response body was not valid JSON.
    #[error("deserialization failed: {0}")]
    Deserialization(#[from] serde_json::Error),
}

/// A failure raised by a `Transport` before any HTTP status was obtained.
///
/// Displays exactly as the wrapped error does.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct TransportError(Box<dyn std::error::Error + Send + Sync + 'static>);

impl TransportError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self(source.into())
    }

    /// The wrapped error.
    pub fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        &*self.0
    }

    pub fn into_inner(self) -> Box<dyn std::error::Error + Send + Sync + 'static> {
        self.0
    }
}
