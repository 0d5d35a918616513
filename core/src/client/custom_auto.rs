//! Custom-auto matchmaking: search gatherings by attribute ranges.
//!
//! A search may not finish in one call. While the result reports
//! `done == false`, call again with its `search_context`.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CustomAutoDoMatchmakingRequest, CustomAutoResult, GatheringRequest};

use super::{
    parse_empty, parse_items, parse_json, require, to_json, with_access_token, with_json_body,
    MatchmakingClient,
};

const MODE: &str = "customauto";

impl MatchmakingClient {
    pub fn build_custom_auto_do_matchmaking(
        &self,
        input: &CustomAutoDoMatchmakingRequest,
    ) -> Result<HttpRequest, ApiError> {
        let name = require(&input.matchmaking_name, "matchmakingName")?;
        let access_token = require(&input.access_token, "accessToken")?;
        let req = self.request(HttpMethod::Post, "DoMatchmaking", &format!("/matchmaking/{name}/{MODE}"));
        Ok(with_json_body(with_access_token(req, access_token), to_json(input)?))
    }

    pub fn build_custom_auto_describe_joined_user(
        &self,
        input: &GatheringRequest,
    ) -> Result<HttpRequest, ApiError> {
        self.gathering_request(HttpMethod::Get, "DescribeJoinedUser", MODE, input, "/player")
    }

    pub fn build_custom_auto_leave_gathering(
        &self,
        input: &GatheringRequest,
    ) -> Result<HttpRequest, ApiError> {
        self.gathering_request(HttpMethod::Delete, "LeaveGathering", MODE, input, "/player")
    }

    pub fn parse_custom_auto_do_matchmaking(
        &self,
        response: HttpResponse,
    ) -> Result<CustomAutoResult, ApiError> {
        parse_json(response)
    }

    pub fn parse_custom_auto_describe_joined_user(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<String>, ApiError> {
        parse_items(response)
    }

    pub fn parse_custom_auto_leave_gathering(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_empty(response)
    }
}
