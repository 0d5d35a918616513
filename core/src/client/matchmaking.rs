//! Operations on matchmaking definitions.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    CreateMatchmakingRequest, Matchmaking, MatchmakingNameRequest, Page, PageRequest,
    StatusEnvelope, UpdateMatchmakingRequest,
};

use super::{
    parse_empty, parse_item, parse_items, parse_json, require, to_json,
    with_json_body, with_page, MatchmakingClient,
};

impl MatchmakingClient {
    pub fn build_describe_matchmaking(&self, page: &PageRequest) -> HttpRequest {
        let req = self.request(HttpMethod::Get, "DescribeMatchmaking", "/matchmaking");
        with_page(req, page.page_token.as_deref(), page.limit)
    }

    pub fn build_describe_service_class(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "DescribeServiceClass", "/matchmaking/serviceClass")
    }

    pub fn build_create_matchmaking(
        &self,
        input: &CreateMatchmakingRequest,
    ) -> Result<HttpRequest, ApiError> {
        let req = self.request(HttpMethod::Post, "CreateMatchmaking", "/matchmaking");
        Ok(with_json_body(req, to_json(input)?))
    }

    pub fn build_get_matchmaking(
        &self,
        input: &MatchmakingNameRequest,
    ) -> Result<HttpRequest, ApiError> {
        let name = require(&input.matchmaking_name, "matchmakingName")?;
        Ok(self.request(HttpMethod::Get, "GetMatchmaking", &format!("/matchmaking/{name}")))
    }

    pub fn build_get_matchmaking_status(
        &self,
        input: &MatchmakingNameRequest,
    ) -> Result<HttpRequest, ApiError> {
        let name = require(&input.matchmaking_name, "matchmakingName")?;
        Ok(self.request(
            HttpMethod::Get,
            "GetMatchmakingStatus",
            &format!("/matchmaking/{name}/status"),
        ))
    }

    pub fn build_update_matchmaking(
        &self,
        input: &UpdateMatchmakingRequest,
    ) -> Result<HttpRequest, ApiError> {
        let name = require(&input.matchmaking_name, "matchmakingName")?;
        let req = self.request(HttpMethod::Put, "UpdateMatchmaking", &format!("/matchmaking/{name}"));
        Ok(with_json_body(req, to_json(input)?))
    }

    pub fn build_delete_matchmaking(
        &self,
        input: &MatchmakingNameRequest,
    ) -> Result<HttpRequest, ApiError> {
        let name = require(&input.matchmaking_name, "matchmakingName")?;
        Ok(self.request(HttpMethod::Delete, "DeleteMatchmaking", &format!("/matchmaking/{name}")))
    }

    pub fn parse_describe_matchmaking(
        &self,
        response: HttpResponse,
    ) -> Result<Page<Matchmaking>, ApiError> {
        parse_json(response)
    }

    pub fn parse_describe_service_class(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<String>, ApiError> {
        parse_items(response)
    }

    pub fn parse_create_matchmaking(&self, response: HttpResponse) -> Result<Matchmaking, ApiError> {
        parse_item(response)
    }

    pub fn parse_get_matchmaking(&self, response: HttpResponse) -> Result<Matchmaking, ApiError> {
        parse_item(response)
    }

    pub fn parse_get_matchmaking_status(&self, response: HttpResponse) -> Result<String, ApiError> {
        parse_json::<StatusEnvelope>(response).map(|envelope| envelope.status)
    }

    pub fn parse_update_matchmaking(&self, response: HttpResponse) -> Result<Matchmaking, ApiError> {
        parse_item(response)
    }

    pub fn parse_delete_matchmaking(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_empty(response)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    const RANKED: &str = r#"{"matchmakingId":"grn:mm:ranked","ownerId":"owner-1","name":"ranked","description":"ranked 1v1","type":"custom_auto","maxPlayer":2,"serviceClass":"high","callback":"https://example.com/cb","createAt":1000,"updateAt":2000}"#;

    #[test]
    fn build_describe_matchmaking_without_paging() {
        let req = client().build_describe_matchmaking(&PageRequest::default());
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/matchmaking");
        assert_eq!(req.action, "DescribeMatchmaking");
        assert!(req.query.is_empty());
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_describe_matchmaking_with_paging() {
        let page = PageRequest {
            page_token: Some("next".to_string()),
            limit: Some(20),
        };
        let req = client().build_describe_matchmaking(&page);
        assert_eq!(
            req.query,
            vec![
                ("pageToken".to_string(), "next".to_string()),
                ("limit".to_string(), "20".to_string()),
            ]
        );
    }

    #[test]
    fn build_describe_service_class_produces_correct_request() {
        let req = client().build_describe_service_class();
        assert_eq!(req.path, "http://localhost:3000/matchmaking/serviceClass");
        assert_eq!(req.action, "DescribeServiceClass");
    }

    #[test]
    fn build_create_matchmaking_forwards_only_set_fields() {
        let input = CreateMatchmakingRequest {
            name: Some("casual".to_string()),
            service_class: Some("low".to_string()),
            kind: Some("anybody".to_string()),
            max_player: Some(4),
            ..Default::default()
        };
        let req = client().build_create_matchmaking(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/matchmaking");
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(
            body_json(&req),
            serde_json::json!({"name":"casual","serviceClass":"low","type":"anybody","maxPlayer":4})
        );
    }

    #[test]
    fn build_get_matchmaking_requires_name() {
        let err = client()
            .build_get_matchmaking(&MatchmakingNameRequest::default())
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingParameter("matchmakingName")));
    }

    #[test]
    fn build_get_matchmaking_status_produces_correct_request() {
        let req = client()
            .build_get_matchmaking_status(&MatchmakingNameRequest::new("ranked"))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/matchmaking/ranked/status");
    }

    #[test]
    fn build_update_matchmaking_keeps_name_out_of_body() {
        let input = UpdateMatchmakingRequest {
            matchmaking_name: "ranked".to_string(),
            description: Some("new text".to_string()),
            ..Default::default()
        };
        let req = client().build_update_matchmaking(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/matchmaking/ranked");
        assert_eq!(body_json(&req), serde_json::json!({"description":"new text"}));
    }

    #[test]
    fn build_update_matchmaking_requires_name() {
        let err = client()
            .build_update_matchmaking(&UpdateMatchmakingRequest::default())
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingParameter("matchmakingName")));
    }

    #[test]
    fn build_delete_matchmaking_produces_correct_request() {
        let req = client()
            .build_delete_matchmaking(&MatchmakingNameRequest::new("ranked"))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/matchmaking/ranked");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_get_matchmaking_unwraps_item() {
        let body = format!(r#"{{"item":{RANKED}}}"#);
        let mm = client().parse_get_matchmaking(response(200, &body)).unwrap();
        assert_eq!(mm.name, "ranked");
        assert_eq!(mm.kind, "custom_auto");
        assert_eq!(mm.max_player, 2);
        assert_eq!(mm.callback.as_deref(), Some("https://example.com/cb"));
    }

    #[test]
    fn parse_get_matchmaking_not_found() {
        let err = client().parse_get_matchmaking(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_describe_matchmaking_keeps_page_token() {
        let body = format!(r#"{{"items":[{RANKED}],"nextPageToken":"p2"}}"#);
        let page = client().parse_describe_matchmaking(response(200, &body)).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.next_page_token.as_deref(), Some("p2"));
    }

    #[test]
    fn parse_describe_service_class_unwraps_items() {
        let classes = client()
            .parse_describe_service_class(response(200, r#"{"items":["low","medium","high"]}"#))
            .unwrap();
        assert_eq!(classes, vec!["low", "medium", "high"]);
    }

    #[test]
    fn parse_get_matchmaking_status_unwraps_status() {
        let status = client()
            .parse_get_matchmaking_status(response(200, r#"{"status":"ACTIVE"}"#))
            .unwrap();
        assert_eq!(status, "ACTIVE");
    }

    #[test]
    fn parse_create_matchmaking_bad_json() {
        let err = client()
            .parse_create_matchmaking(response(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_delete_matchmaking_surfaces_server_error() {
        let err = client()
            .parse_delete_matchmaking(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }
}
