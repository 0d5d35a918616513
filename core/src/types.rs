//! Request inputs and response DTOs for the matchmaking API.
//!
//! # Design
//! Request structs are deserializable from a loose JSON map with camelCase
//! keys, and every field defaults when absent. Required fields are therefore
//! checked when the request is built, which reports them as
//! `ApiError::MissingParameter` instead of a serde error. Fields that travel
//! in the path or in a header are skipped when the struct is serialized as a
//! request body.
//!
//! Response DTOs mirror the server schema but are defined independently of
//! the mock-server crate; integration tests catch drift.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Paging parameters for list endpoints. Empty tokens and a zero limit are
/// not sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PageRequest {
    pub page_token: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateMatchmakingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_class: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_player: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,
}

/// Addresses a matchmaking definition by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchmakingNameRequest {
    pub matchmaking_name: String,
}

impl MatchmakingNameRequest {
    pub fn new(matchmaking_name: impl Into<String>) -> Self {
        Self {
            matchmaking_name: matchmaking_name.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateMatchmakingRequest {
    #[serde(skip_serializing)]
    pub matchmaking_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,
}

/// A player acting on a matchmaking definition: anybody matchmaking and
/// passcode gathering creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerRequest {
    pub matchmaking_name: String,
    #[serde(skip_serializing)]
    pub access_token: String,
}

impl PlayerRequest {
    pub fn new(matchmaking_name: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            matchmaking_name: matchmaking_name.into(),
            access_token: access_token.into(),
        }
    }
}

/// A player acting on one gathering: join, leave, list players, break up,
/// complete early.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GatheringRequest {
    pub matchmaking_name: String,
    pub gathering_id: String,
    #[serde(skip_serializing)]
    pub access_token: String,
}

impl GatheringRequest {
    pub fn new(
        matchmaking_name: impl Into<String>,
        gathering_id: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            matchmaking_name: matchmaking_name.into(),
            gathering_id: gathering_id.into(),
            access_token: access_token.into(),
        }
    }
}

/// Custom-auto matchmaking. `attribute*` describe the gathering created when
/// nothing matches; `search_attribute*_min/max` bound the search. Pass back
/// the `search_context` of an unfinished result to resume the search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomAutoDoMatchmakingRequest {
    #[serde(skip_serializing)]
    pub matchmaking_name: String,
    #[serde(skip_serializing)]
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute1: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute2: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute3: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute4: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute5: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_attribute1_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_attribute2_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_attribute3_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_attribute4_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_attribute5_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_attribute1_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_attribute2_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_attribute3_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_attribute4_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_attribute5_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_context: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PasscodeJoinGatheringRequest {
    pub matchmaking_name: String,
    pub passcode: String,
    #[serde(skip_serializing)]
    pub access_token: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomCreateGatheringRequest {
    #[serde(skip_serializing)]
    pub matchmaking_name: String,
    #[serde(skip_serializing)]
    pub access_token: String,
    /// Free-form metadata shown in gathering listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomDescribeGatheringRequest {
    pub matchmaking_name: String,
    #[serde(skip_serializing)]
    pub access_token: String,
    pub page_token: Option<String>,
    pub limit: Option<u32>,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// A matchmaking definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Matchmaking {
    pub matchmaking_id: String,
    pub owner_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub max_player: u32,
    pub service_class: String,
    #[serde(default)]
    pub callback: Option<String>,
    pub create_at: i64,
    pub update_at: i64,
}

/// A gathering as seen by a player. `passcode` is only set in passcode mode
/// and `meta` only in room mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Gathering {
    pub gathering_id: String,
    pub join_player: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
    pub update_at: i64,
}

/// Outcome of one custom-auto matchmaking call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomAutoResult {
    pub done: bool,
    #[serde(default)]
    pub item: Option<Gathering>,
    #[serde(default)]
    pub search_context: Option<String>,
}

/// One page of a list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct ItemEnvelope<T> {
    pub item: T,
}

#[derive(Deserialize)]
pub(crate) struct ItemsEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Deserialize)]
pub(crate) struct StatusEnvelope {
    pub status: String,
}
