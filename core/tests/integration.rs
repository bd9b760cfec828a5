//! End-to-end lookups against the mock PokeAPI.
//!
//! # Design
//! Starts the mock server on a random port, then drives every `PokeApi`
//! operation over real HTTP through a ureq-backed `Transport`.

use pokeapi_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, PokeApi, PokeApiClient, Transport, TransportError};

/// Executes requests with ureq, returning 4xx/5xx as data.
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut response = match req.method {
            HttpMethod::Get => self.agent.get(&req.url).call(),
        }
        .map_err(TransportError::new)?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(TransportError::new)?;
        Ok(HttpResponse { status, body })
    }
}

/// Start the mock server on a random port and return its base URL.
fn start_mock() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_pokeapi::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn lookups_against_mock_server() {
    let base = start_mock();
    let api = PokeApi::new(PokeApiClient::new(&base), UreqTransport::new());

    // By name, case-folded.
    let pikachu = api.get_pokemon("PIKACHU").unwrap();
    assert_eq!(pikachu["id"], 25);
    assert_eq!(pikachu["types"][0]["type"]["name"], "electric");

    // By id.
    let bulbasaur = api.get_pokemon(1u32).unwrap();
    assert_eq!(bulbasaur["name"], "bulbasaur");

    // Not found keeps the caller's spelling.
    let err = api.get_pokemon("MissingNo").unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));
    assert_eq!(err.to_string(), "Pokemon not found: MissingNo");

    // Names needing escapes still reach the server and come back 404.
    for name in ["Mr Mime", " pikachu"] {
        let err = api.get_pokemon(name).unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }), "{name:?}: {err:?}");
        assert_eq!(err.to_string(), format!("Pokemon not found: {name}"));
    }

    // Default list page.
    let page = api.get_pokemon_list_default().unwrap();
    assert_eq!(page["count"], 4);
    assert_eq!(page["results"][0]["name"], "bulbasaur");
    assert_eq!(page["results"][0]["url"], format!("{base}/pokemon/1/"));

    // Custom page.
    let page = api.get_pokemon_list(2, 2).unwrap();
    let names: Vec<&str> = page["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["charmander", "pikachu"]);

    // Species and type.
    let species = api.get_pokemon_species("Ivysaur").unwrap();
    assert_eq!(species["evolves_from_species"]["name"], "bulbasaur");
    let err = api.get_pokemon_species("nothing").unwrap_err();
    assert_eq!(err.to_string(), "Pokemon species not found: nothing");

    let fire = api.get_pokemon_type("Fire").unwrap();
    assert_eq!(fire["id"], 10);
    let err = api.get_pokemon_type(999u32).unwrap_err();
    assert_eq!(err.to_string(), "Pokemon type not found: 999");
}

#[test]
fn list_failure_is_generic() {
    let base = start_mock();
    // No routes live under /nowhere, so the list request gets a 404.
    let api = PokeApi::new(PokeApiClient::new(&format!("{base}/nowhere")), UreqTransport::new());
    let err = api.get_pokemon_list_default().unwrap_err();
    assert!(matches!(err, ApiError::Fetch { status: 404 }));
    assert_eq!(err.to_string(), "Failed to fetch Pokemon list");
}

#[test]
fn connection_refused_surfaces_transport_message() {
    // Bind then drop so nothing is listening on the port.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let api = PokeApi::new(PokeApiClient::new(&format!("http://{addr}")), UreqTransport::new());

    let err = api.get_pokemon("pikachu").unwrap_err();
    let ApiError::Network(transport) = &err else {
        panic!("expected a network error, got {err:?}");
    };
    assert_eq!(err.to_string(), transport.inner().to_string());
}
