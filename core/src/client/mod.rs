//! Stateless HTTP request builder and response parser for the matchmaking API.
//!
//! # Design
//! `MatchmakingClient` holds only a `base_url` and carries no mutable state
//! between calls. Each remote operation is split into a `build_*` method that
//! validates its input and produces an `HttpRequest`, and a `parse_*` method
//! that consumes an `HttpResponse` and unwraps the response envelope. The
//! operations are grouped by matchmaking mode in the submodules; this module
//! holds the pieces they share.

mod anybody;
mod custom_auto;
mod matchmaking;
mod passcode;
mod room;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, ACCESS_TOKEN_HEADER, SERVICE_NAME};
use crate::transport::Transport;
use crate::types::{GatheringRequest, ItemEnvelope, ItemsEnvelope};

/// Body sent by POST endpoints that take no body fields.
const EMPTY_BODY: &str = "{}";

/// Synchronous, stateless client for the matchmaking API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. Use [`MatchmakingClient::send`] with a
/// [`Transport`] to run both halves in one call.
#[derive(Debug, Clone)]
pub struct MatchmakingClient {
    base_url: String,
}

impl MatchmakingClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute `request` on `transport` and hand the response to `parse`.
    ///
    /// ```ignore
    /// let req = client.build_get_matchmaking(&MatchmakingNameRequest::new("ranked"))?;
    /// let matchmaking = client.send(&transport, req, MatchmakingClient::parse_get_matchmaking)?;
    /// ```
    pub fn send<T, R>(
        &self,
        transport: &T,
        request: HttpRequest,
        parse: fn(&Self, HttpResponse) -> Result<R, ApiError>,
    ) -> Result<R, ApiError>
    where
        T: Transport + ?Sized,
    {
        let response = transport.execute(&request)?;
        parse(self, response)
    }

    fn request(&self, method: HttpMethod, action: &'static str, path: &str) -> HttpRequest {
        log::debug!("building {SERVICE_NAME}.{action}: {method} {path}");
        HttpRequest {
            method,
            service: SERVICE_NAME,
            action,
            path: format!("{}{path}", self.base_url),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// `{mode}/{gatheringId}{suffix}` under a matchmaking, on behalf of a player.
    fn gathering_request(
        &self,
        method: HttpMethod,
        action: &'static str,
        mode: &str,
        input: &GatheringRequest,
        suffix: &str,
    ) -> Result<HttpRequest, ApiError> {
        let name = require(&input.matchmaking_name, "matchmakingName")?;
        let gathering_id = require(&input.gathering_id, "gatheringId")?;
        let access_token = require(&input.access_token, "accessToken")?;
        let req = self.request(
            method,
            action,
            &format!("/matchmaking/{name}/{mode}/{gathering_id}{suffix}"),
        );
        Ok(with_access_token(req, access_token))
    }
}

/// Fail with `MissingParameter` when a required field is empty.
fn require<'a>(value: &'a str, name: &'static str) -> Result<&'a str, ApiError> {
    if value.is_empty() {
        return Err(ApiError::MissingParameter(name));
    }
    Ok(value)
}

fn with_access_token(mut request: HttpRequest, access_token: &str) -> HttpRequest {
    request
        .headers
        .push((ACCESS_TOKEN_HEADER.to_string(), access_token.to_string()));
    request
}

fn with_json_body(mut request: HttpRequest, body: String) -> HttpRequest {
    request
        .headers
        .push(("content-type".to_string(), "application/json".to_string()));
    request.body = Some(body);
    request
}

fn to_json<T: Serialize>(input: &T) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))
}

/// Append paging parameters, skipping an empty token and a zero limit.
fn with_page(mut request: HttpRequest, page_token: Option<&str>, limit: Option<u32>) -> HttpRequest {
    if let Some(token) = page_token.filter(|t| !t.is_empty()) {
        request.query.push(("pageToken".to_string(), token.to_string()));
    }
    if let Some(limit) = limit.filter(|l| *l > 0) {
        request.query.push(("limit".to_string(), limit.to_string()));
    }
    request
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    log::debug!("request failed with HTTP {}", response.status);
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

fn parse_item<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    parse_json::<ItemEnvelope<T>>(response).map(|envelope| envelope.item)
}

fn parse_items<T: DeserializeOwned>(response: HttpResponse) -> Result<Vec<T>, ApiError> {
    parse_json::<ItemsEnvelope<T>>(response).map(|envelope| envelope.items)
}

fn parse_empty(response: HttpResponse) -> Result<(), ApiError> {
    check_status(&response)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub const BASE_URL: &str = "http://localhost:3000";

    pub fn client() -> MatchmakingClient {
        MatchmakingClient::new(BASE_URL)
    }

    pub fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    pub fn body_json(request: &HttpRequest) -> serde_json::Value {
        serde_json::from_str(request.body.as_deref().unwrap()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let client = MatchmakingClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn from_config_uses_endpoint_override() {
        let config = ClientConfig {
            endpoint: Some("http://127.0.0.1:9999/".to_string()),
            ..Default::default()
        };
        assert_eq!(MatchmakingClient::from_config(&config).base_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn paging_skips_empty_token_and_zero_limit() {
        let req = client().request(HttpMethod::Get, "DescribeMatchmaking", "/matchmaking");
        let req = with_page(req, Some(""), Some(0));
        assert!(req.query.is_empty());
    }

    #[test]
    fn check_status_maps_errors() {
        assert!(check_status(&response(200, "")).is_ok());
        assert!(matches!(check_status(&response(404, "")), Err(ApiError::NotFound)));
        let err = check_status(&response(409, "full")).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 409, ref body } if body == "full"));
    }

    struct Canned(u16, &'static str);

    impl Transport for Canned {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            assert_eq!(request.action, "GetMatchmakingStatus");
            Ok(response(self.0, self.1))
        }
    }

    #[test]
    fn send_runs_transport_then_parser() {
        let c = client();
        let req = c
            .build_get_matchmaking_status(&crate::types::MatchmakingNameRequest::new("ranked"))
            .unwrap();
        let status = c
            .send(&Canned(200, r#"{"status":"ACTIVE"}"#), req, MatchmakingClient::parse_get_matchmaking_status)
            .unwrap();
        assert_eq!(status, "ACTIVE");
    }
}
