//! The seam between the I/O-free client and the network.
//!
//! # Design
//! `Transport` is the shared HTTP helper every operation delegates to. The
//! client never calls it on its own; callers either execute requests
//! themselves or pass a transport to `MatchmakingClient::send`.
//!
//! Implementations must return non-2xx responses as data so the client can
//! interpret status codes. Only failures that produce no response at all
//! (DNS, connect, timeout, unreadable body) become `ApiError::Transport`.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[cfg(feature = "ureq")]
pub use self::blocking::UreqTransport;

#[cfg(feature = "ureq")]
mod blocking {
    use ureq::{Agent, RequestBuilder};

    use super::Transport;
    use crate::config::ClientConfig;
    use crate::error::ApiError;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};

    /// Blocking transport over a pooled `ureq::Agent`.
    #[derive(Debug, Clone)]
    pub struct UreqTransport {
        agent: Agent,
    }

    impl UreqTransport {
        pub fn new() -> Self {
            Self::from_config(&ClientConfig::default())
        }

        pub fn from_config(config: &ClientConfig) -> Self {
            let agent = Agent::config_builder()
                .http_status_as_error(false)
                .timeout_global(Some(config.timeout()))
                .build()
                .new_agent();
            Self { agent }
        }
    }

    impl Default for UreqTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    fn decorate<B>(mut builder: RequestBuilder<B>, request: &HttpRequest) -> RequestBuilder<B> {
        for (key, value) in &request.query {
            builder = builder.query(key, value);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder
    }

    impl Transport for UreqTransport {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            log::trace!("{} {} ({})", request.method, request.path, request.action);
            let url = request.path.as_str();
            let body = request.body.as_deref();

            let result = match (request.method, body) {
                (HttpMethod::Get, _) => decorate(self.agent.get(url), request).call(),
                (HttpMethod::Delete, _) => decorate(self.agent.delete(url), request).call(),
                (HttpMethod::Post, Some(body)) => {
                    decorate(self.agent.post(url), request).send(body.as_bytes())
                }
                (HttpMethod::Post, None) => decorate(self.agent.post(url), request).send_empty(),
                (HttpMethod::Put, Some(body)) => {
                    decorate(self.agent.put(url), request).send(body.as_bytes())
                }
                (HttpMethod::Put, None) => decorate(self.agent.put(url), request).send_empty(),
            };
            let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|v| (name.as_str().to_string(), v.to_string()))
                })
                .collect();
            let body = response
                .body_mut()
                .read_to_string()
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            log::trace!("{} {} -> {status}", request.method, request.path);

            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        }
    }
}
