//! Room matchmaking: players list open gatherings and pick one to join.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Gathering, GatheringRequest, Page, RoomCreateGatheringRequest, RoomDescribeGatheringRequest};

use super::{
    parse_empty, parse_item, parse_items, parse_json, require, to_json, with_access_token,
    with_json_body, with_page, MatchmakingClient, EMPTY_BODY,
};

const MODE: &str = "room";

impl MatchmakingClient {
    pub fn build_room_create_gathering(
        &self,
        input: &RoomCreateGatheringRequest,
    ) -> Result<HttpRequest, ApiError> {
        let name = require(&input.matchmaking_name, "matchmakingName")?;
        let access_token = require(&input.access_token, "accessToken")?;
        let req = self.request(HttpMethod::Post, "CreateGathering", &format!("/matchmaking/{name}/{MODE}"));
        Ok(with_json_body(with_access_token(req, access_token), to_json(input)?))
    }

    pub fn build_room_join_gathering(&self, input: &GatheringRequest) -> Result<HttpRequest, ApiError> {
        let req = self.gathering_request(HttpMethod::Post, "JoinGathering", MODE, input, "")?;
        Ok(with_json_body(req, EMPTY_BODY.to_string()))
    }

    /// Lists open gatherings. The listing path ends with a slash.
    pub fn build_room_describe_gathering(
        &self,
        input: &RoomDescribeGatheringRequest,
    ) -> Result<HttpRequest, ApiError> {
        let name = require(&input.matchmaking_name, "matchmakingName")?;
        let access_token = require(&input.access_token, "accessToken")?;
        let req = self.request(HttpMethod::Get, "DescribeGathering", &format!("/matchmaking/{name}/{MODE}/"));
        let req = with_page(req, input.page_token.as_deref(), input.limit);
        Ok(with_access_token(req, access_token))
    }

    pub fn build_room_describe_joined_user(
        &self,
        input: &GatheringRequest,
    ) -> Result<HttpRequest, ApiError> {
        self.gathering_request(HttpMethod::Get, "DescribeJoinedUser", MODE, input, "/player")
    }

    pub fn build_room_leave_gathering(&self, input: &GatheringRequest) -> Result<HttpRequest, ApiError> {
        self.gathering_request(HttpMethod::Delete, "LeaveGathering", MODE, input, "/player")
    }

    pub fn build_room_breakup_gathering(&self, input: &GatheringRequest) -> Result<HttpRequest, ApiError> {
        self.gathering_request(HttpMethod::Delete, "BreakupGathering", MODE, input, "")
    }

    pub fn build_room_early_complete_gathering(
        &self,
        input: &GatheringRequest,
    ) -> Result<HttpRequest, ApiError> {
        let req = self.gathering_request(
            HttpMethod::Post,
            "EarlyCompleteGathering",
            MODE,
            input,
            "/complete",
        )?;
        Ok(with_json_body(req, EMPTY_BODY.to_string()))
    }

    pub fn parse_room_create_gathering(&self, response: HttpResponse) -> Result<Gathering, ApiError> {
        parse_item(response)
    }

    pub fn parse_room_join_gathering(&self, response: HttpResponse) -> Result<Gathering, ApiError> {
        parse_item(response)
    }

    pub fn parse_room_describe_gathering(
        &self,
        response: HttpResponse,
    ) -> Result<Page<Gathering>, ApiError> {
        parse_json(response)
    }

    pub fn parse_room_describe_joined_user(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<String>, ApiError> {
        parse_items(response)
    }

    pub fn parse_room_leave_gathering(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_empty(response)
    }

    pub fn parse_room_breakup_gathering(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_empty(response)
    }

    pub fn parse_room_early_complete_gathering(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_empty(response)
    }
}
