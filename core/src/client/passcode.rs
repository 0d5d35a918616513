//! Passcode matchmaking: a player opens a gathering and shares its 8-digit
//! passcode; others join with it.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Gathering, GatheringRequest, PasscodeJoinGatheringRequest, PlayerRequest};

use super::{
    parse_empty, parse_item, parse_items, require, with_access_token, with_json_body,
    MatchmakingClient, EMPTY_BODY,
};

const MODE: &str = "passcode";

impl MatchmakingClient {
    pub fn build_passcode_create_gathering(
        &self,
        input: &PlayerRequest,
    ) -> Result<HttpRequest, ApiError> {
        let name = require(&input.matchmaking_name, "matchmakingName")?;
        let access_token = require(&input.access_token, "accessToken")?;
        let req = self.request(HttpMethod::Post, "CreateGathering", &format!("/matchmaking/{name}/{MODE}"));
        Ok(with_json_body(with_access_token(req, access_token), EMPTY_BODY.to_string()))
    }

    pub fn build_passcode_join_gathering(
        &self,
        input: &PasscodeJoinGatheringRequest,
    ) -> Result<HttpRequest, ApiError> {
        let name = require(&input.matchmaking_name, "matchmakingName")?;
        let passcode = require(&input.passcode, "passcode")?;
        let access_token = require(&input.access_token, "accessToken")?;
        let req = self.request(
            HttpMethod::Post,
            "JoinGathering",
            &format!("/matchmaking/{name}/{MODE}/join/{passcode}"),
        );
        Ok(with_json_body(with_access_token(req, access_token), EMPTY_BODY.to_string()))
    }

    pub fn build_passcode_describe_joined_user(
        &self,
        input: &GatheringRequest,
    ) -> Result<HttpRequest, ApiError> {
        self.gathering_request(HttpMethod::Get, "DescribeJoinedUser", MODE, input, "/player")
    }

    pub fn build_passcode_leave_gathering(
        &self,
        input: &GatheringRequest,
    ) -> Result<HttpRequest, ApiError> {
        self.gathering_request(HttpMethod::Delete, "LeaveGathering", MODE, input, "/player")
    }

    pub fn build_passcode_breakup_gathering(
        &self,
        input: &GatheringRequest,
    ) -> Result<HttpRequest, ApiError> {
        self.gathering_request(HttpMethod::Delete, "BreakupGathering", MODE, input, "")
    }

    pub fn build_passcode_early_complete_gathering(
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

    pub fn parse_passcode_create_gathering(&self, response: HttpResponse) -> Result<Gathering, ApiError> {
        parse_item(response)
    }

    pub fn parse_passcode_join_gathering(&self, response: HttpResponse) -> Result<Gathering, ApiError> {
        parse_item(response)
    }

    pub fn parse_passcode_describe_joined_user(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<String>, ApiError> {
        parse_items(response)
    }

    pub fn parse_passcode_leave_gathering(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_empty(response)
    }

    pub fn parse_passcode_breakup_gathering(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_empty(response)
    }

    pub fn parse_passcode_early_complete_gathering(
        &self,
        response: HttpResponse,
    ) -> Result<(), ApiError> {
        parse_empty(response)
    }
}
