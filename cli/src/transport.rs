//! Blocking `Transport` backed by ureq.

use pokeapi_core::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

/// Executes requests with a shared ureq agent.
///
/// Status codes are never turned into errors here; `PokeApiClient` decides
/// what a 4xx/5xx means for each lookup.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut response = match request.method {
            HttpMethod::Get => self.agent.get(&request.url).call(),
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
