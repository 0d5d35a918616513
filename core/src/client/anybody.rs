//! Anybody matchmaking: join any waiting gathering, or open a new one.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Gathering, GatheringRequest, PlayerRequest};

use super::{
    parse_empty, parse_item, parse_items, require, with_access_token, with_json_body,
    MatchmakingClient, EMPTY_BODY,
};

const MODE: &str = "anybody";

impl MatchmakingClient {
    pub fn build_anybody_do_matchmaking(
        &self,
        input: &PlayerRequest,
    ) -> Result<HttpRequest, ApiError> {
        let name = require(&input.matchmaking_name, "matchmakingName")?;
        let access_token = require(&input.access_token, "accessToken")?;
        let req = self.request(HttpMethod::Post, "DoMatchmaking", &format!("/matchmaking/{name}/{MODE}"));
        Ok(with_json_body(with_access_token(req, access_token), EMPTY_BODY.to_string()))
    }

    pub fn build_anybody_describe_joined_user(
        &self,
        input: &GatheringRequest,
    ) -> Result<HttpRequest, ApiError> {
        self.gathering_request(HttpMethod::Get, "DescribeJoinedUser", MODE, input, "/player")
    }

    pub fn build_anybody_leave_gathering(
        &self,
        input: &GatheringRequest,
    ) -> Result<HttpRequest, ApiError> {
        self.gathering_request(HttpMethod::Delete, "LeaveGathering", MODE, input, "/player")
    }

    /// The returned `join_player` tells whether this call opened the gathering.
    pub fn parse_anybody_do_matchmaking(&self, response: HttpResponse) -> Result<Gathering, ApiError> {
        parse_item(response)
    }

    pub fn parse_anybody_describe_joined_user(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<String>, ApiError> {
        parse_items(response)
    }

    pub fn parse_anybody_leave_gathering(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_empty(response)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::http::ACCESS_TOKEN_HEADER;

    #[test]
    fn build_do_matchmaking_attaches_token() {
        let req = client()
            .build_anybody_do_matchmaking(&PlayerRequest::new("casual", "tok-1"))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/matchmaking/casual/anybody");
        assert_eq!(req.action, "DoMatchmaking");
        assert_eq!(req.header(ACCESS_TOKEN_HEADER), Some("tok-1"));
        assert_eq!(body_json(&req), serde_json::json!({}));
    }

    #[test]
    fn build_do_matchmaking_requires_token() {
        let err = client()
            .build_anybody_do_matchmaking(&PlayerRequest::new("casual", ""))
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingParameter("accessToken")));
    }

    #[test]
    fn build_do_matchmaking_checks_name_first() {
        let err = client()
            .build_anybody_do_matchmaking(&PlayerRequest::default())
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingParameter("matchmakingName")));
    }

    #[test]
    fn build_describe_joined_user_produces_correct_request() {
        let req = client()
            .build_anybody_describe_joined_user(&GatheringRequest::new("casual", "g-1", "tok-1"))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/matchmaking/casual/anybody/g-1/player");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_leave_gathering_requires_gathering_id() {
        let err = client()
            .build_anybody_leave_gathering(&GatheringRequest::new("casual", "", "tok-1"))
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingParameter("gatheringId")));
    }

    #[test]
    fn build_leave_gathering_produces_correct_request() {
        let req = client()
            .build_anybody_leave_gathering(&GatheringRequest::new("casual", "g-1", "tok-1"))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.action, "LeaveGathering");
        assert_eq!(req.header(ACCESS_TOKEN_HEADER), Some("tok-1"));
    }

    #[test]
    fn parse_do_matchmaking_unwraps_item() {
        let gathering = client()
            .parse_anybody_do_matchmaking(response(
                200,
                r#"{"item":{"gatheringId":"g-1","joinPlayer":1,"updateAt":5}}"#,
            ))
            .unwrap();
        assert_eq!(gathering.gathering_id, "g-1");
        assert_eq!(gathering.join_player, 1);
    }

    #[test]
    fn parse_describe_joined_user_unwraps_items() {
        let users = client()
            .parse_anybody_describe_joined_user(response(200, r#"{"items":["u1","u2"]}"#))
            .unwrap();
        assert_eq!(users, vec!["u1", "u2"]);
    }

    #[test]
    fn parse_leave_gathering_not_found() {
        let err = client()
            .parse_anybody_leave_gathering(response(404, ""))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }
}
