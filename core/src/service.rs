//! Composed lookups: build a request, execute it once, parse the outcome.
//!
//! # Design
//! `PokeApi` pairs a `PokeApiClient` with a caller-supplied `Transport`.
//! Every call issues exactly one request; nothing is cached, retried or
//! memoized. Failures are logged and handed back to the caller.

use serde_json::Value;

use crate::client::PokeApiClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{Identifier, ListParams, Resource};

/// A `PokeApiClient` bound to a `Transport`.
#[derive(Debug, Clone)]
pub struct PokeApi<T> {
    client: PokeApiClient,
    transport: T,
}

impl<T: Transport> PokeApi<T> {
    pub fn new(client: PokeApiClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch a Pokémon by name (case-insensitive) or id.
    pub fn get_pokemon(&self, name_or_id: impl Into<Identifier>) -> Result<Value, ApiError> {
        self.get_resource(Resource::Pokemon, name_or_id.into())
    }

    pub fn get_pokemon_species(&self, name_or_id: impl Into<Identifier>) -> Result<Value, ApiError> {
        self.get_resource(Resource::PokemonSpecies, name_or_id.into())
    }

    pub fn get_pokemon_type(&self, name_or_id: impl Into<Identifier>) -> Result<Value, ApiError> {
        self.get_resource(Resource::PokemonType, name_or_id.into())
    }

    /// Fetch one page of the Pokémon list.
    pub fn get_pokemon_list(&self, limit: u32, offset: u32) -> Result<Value, ApiError> {
        let request = self.client.build_get_pokemon_list(ListParams { limit, offset });
        let result = self
            .send(&request)
            .and_then(|response| self.client.parse_get_pokemon_list(response));
        if let Err(err) = &result {
            tracing::error!(url = %request.url, %err, "error fetching Pokemon list");
        }
        result
    }

    /// `get_pokemon_list` with `limit = 20`, `offset = 0`.
    pub fn get_pokemon_list_default(&self) -> Result<Value, ApiError> {
        let ListParams { limit, offset } = ListParams::default();
        self.get_pokemon_list(limit, offset)
    }

    fn get_resource(&self, resource: Resource, id: Identifier) -> Result<Value, ApiError> {
        let request = self.client.build_resource(resource, &id);
        let result = self
            .send(&request)
            .and_then(|response| self.client.parse_resource(resource, &id, response));
        if let Err(err) = &result {
            tracing::error!(url = %request.url, %err, "error fetching {resource}");
        }
        result
    }

    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.execute(request)?;
        tracing::debug!(status = response.status, url = %request.url, "received response");
        Ok(response)
    }
}
