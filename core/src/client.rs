//! Stateless HTTP request builder and response parser for PokeAPI.
//!
//! # Design
//! `PokeApiClient` holds only a `base_url` and carries no mutable state
//! between calls. Each lookup is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Successful bodies are returned as `serde_json::Value`, unchanged.

use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Identifier, ListParams, Resource};

/// Public PokeAPI v2 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Synchronous, stateless client for PokeAPI.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. `PokeApi` pairs it with a `Transport`.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    base_url: String,
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PokeApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/{resource}/{lowercased, percent-encoded identifier}`.
    pub fn build_resource(&self, resource: Resource, id: &Identifier) -> HttpRequest {
        HttpRequest::get(format!(
            "{}/{}/{}",
            self.base_url,
            resource.path(),
            id.path_segment()
        ))
    }

    pub fn build_get_pokemon(&self, id: &Identifier) -> HttpRequest {
        self.build_resource(Resource::Pokemon, id)
    }

    pub fn build_get_pokemon_species(&self, id: &Identifier) -> HttpRequest {
        self.build_resource(Resource::PokemonSpecies, id)
    }

    pub fn build_get_pokemon_type(&self, id: &Identifier) -> HttpRequest {
        self.build_resource(Resource::PokemonType, id)
    }

    pub fn build_get_pokemon_list(&self, params: ListParams) -> HttpRequest {
        HttpRequest::get(format!(
            "{}/pokemon?limit={}&offset={}",
            self.base_url, params.limit, params.offset
        ))
    }

    /// Any non-2xx status becomes `NotFound` carrying `id` as given.
    pub fn parse_resource(
        &self,
        resource: Resource,
        id: &Identifier,
        response: HttpResponse,
    ) -> Result<Value, ApiError> {
        if !response.is_success() {
            return Err(ApiError::NotFound {
                resource,
                identifier: id.to_string(),
            });
        }
        parse_body(&response)
    }

    pub fn parse_get_pokemon(&self, id: &Identifier, response: HttpResponse) -> Result<Value, ApiError> {
        self.parse_resource(Resource::Pokemon, id, response)
    }

    pub fn parse_get_pokemon_species(
        &self,
        id: &Identifier,
        response: HttpResponse,
    ) -> Result<Value, ApiError> {
        self.parse_resource(Resource::PokemonSpecies, id, response)
    }

    pub fn parse_get_pokemon_type(&self, id: &Identifier, response: HttpResponse) -> Result<Value, ApiError> {
        self.parse_resource(Resource::PokemonType, id, response)
    }

    /// Any non-2xx status becomes `Fetch`.
    pub fn parse_get_pokemon_list(&self, response: HttpResponse) -> Result<Value, ApiError> {
        if !response.is_success() {
            return Err(ApiError::Fetch {
                status: response.status,
            });
        }
        parse_body(&response)
    }
}

fn parse_body(response: &HttpResponse) -> Result<Value, ApiError> {
    Ok(serde_json::from_str(&response.body)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::http::HttpMethod;

    fn client() -> PokeApiClient {
        PokeApiClient::new("http://localhost:3000")
    }

    #[test]
    fn default_client_targets_public_api() {
        let req = PokeApiClient::default().build_get_pokemon(&"pikachu".into());
        assert_eq!(req.url, "https://pokeapi.co/api/v2/pokemon/pikachu");
    }

    #[test]
    fn build_get_pokemon_produces_correct_request() {
        let req = client().build_get_pokemon(&"pikachu".into());
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/pokemon/pikachu");
    }

    #[test]
    fn build_get_pokemon_lowercases_names() {
        let upper = client().build_get_pokemon(&"PIKACHU".into());
        let lower = client().build_get_pokemon(&"pikachu".into());
        assert_eq!(upper, lower);
    }

    #[test]
    fn build_get_pokemon_accepts_numeric_ids() {
        let req = client().build_get_pokemon(&Identifier::Id(25));
        assert_eq!(req.url, "http://localhost:3000/pokemon/25");
    }

    #[test]
    fn build_get_pokemon_does_not_trim() {
        let req = client().build_get_pokemon(&" Pikachu".into());
        assert_eq!(req.url, "http://localhost:3000/pokemon/%20pikachu");
    }

    #[test]
    fn build_get_pokemon_escapes_names() {
        let req = client().build_get_pokemon(&"Mr Mime".into());
        assert_eq!(req.url, "http://localhost:3000/pokemon/mr%20mime");
        let err = client()
            .parse_get_pokemon(&"Mr Mime".into(), HttpResponse::new(404, "Not Found"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Pokemon not found: Mr Mime");
    }

    #[test]
    fn build_species_and_type_use_their_paths() {
        let req = client().build_get_pokemon_species(&"Bulbasaur".into());
        assert_eq!(req.url, "http://localhost:3000/pokemon-species/bulbasaur");
        let req = client().build_get_pokemon_type(&"FIRE".into());
        assert_eq!(req.url, "http://localhost:3000/type/fire");
    }

    #[test]
    fn build_get_pokemon_list_uses_defaults() {
        let req = client().build_get_pokemon_list(ListParams::default());
        assert_eq!(req.url, "http://localhost:3000/pokemon?limit=20&offset=0");
    }

    #[test]
    fn build_get_pokemon_list_passes_params_through() {
        let req = client().build_get_pokemon_list(ListParams { limit: 50, offset: 100 });
        assert_eq!(req.url, "http://localhost:3000/pokemon?limit=50&offset=100");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = PokeApiClient::new("http://localhost:3000/");
        let req = client.build_get_pokemon_list(ListParams::default());
        assert_eq!(req.url, "http://localhost:3000/pokemon?limit=20&offset=0");
    }

    #[test]
    fn parse_get_pokemon_returns_body_unchanged() {
        let body = r#"{"id":25,"name":"pikachu","types":[{"type":{"name":"electric"}}],"extra":{"kept":true}}"#;
        let value = client()
            .parse_get_pokemon(&"pikachu".into(), HttpResponse::new(200, body))
            .unwrap();
        assert_eq!(
            value,
            json!({
                "id": 25,
                "name": "pikachu",
                "types": [{"type": {"name": "electric"}}],
                "extra": {"kept": true}
            })
        );
    }

    #[test]
    fn parse_get_pokemon_not_found_keeps_original_identifier() {
        let err = client()
            .parse_get_pokemon(&"PIKACHUU".into(), HttpResponse::new(404, "Not Found"))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound { resource: Resource::Pokemon, .. }));
        assert_eq!(err.to_string(), "Pokemon not found: PIKACHUU");
    }

    #[test]
    fn parse_get_pokemon_treats_any_failure_status_as_not_found() {
        let err = client()
            .parse_get_pokemon(&"x".into(), HttpResponse::new(500, "boom"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Pokemon not found: x");
    }

    #[test]
    fn parse_species_and_type_not_found_messages() {
        let err = client()
            .parse_get_pokemon_species(&"x".into(), HttpResponse::new(404, ""))
            .unwrap_err();
        assert_eq!(err.to_string(), "Pokemon species not found: x");
        let err = client()
            .parse_get_pokemon_type(&"x".into(), HttpResponse::new(404, ""))
            .unwrap_err();
        assert_eq!(err.to_string(), "Pokemon type not found: x");
    }

    #[test]
    fn parse_get_pokemon_list_failure_is_generic() {
        let err = client()
            .parse_get_pokemon_list(HttpResponse::new(503, "unavailable"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Fetch { status: 503 }));
        assert_eq!(err.to_string(), "Failed to fetch Pokemon list");
    }

    #[test]
    fn parse_get_pokemon_list_success() {
        let body = r#"{"count":1010,"results":[{"name":"bulbasaur","url":"https://pokeapi.co/api/v2/pokemon/1/"}]}"#;
        let value = client()
            .parse_get_pokemon_list(HttpResponse::new(200, body))
            .unwrap();
        assert_eq!(value["count"], 1010);
        assert_eq!(value["results"][0]["name"], "bulbasaur");
    }

    #[test]
    fn parse_bad_json() {
        let err = client()
            .parse_get_pokemon(&"pikachu".into(), HttpResponse::new(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
