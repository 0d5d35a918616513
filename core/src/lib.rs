//! Synchronous API client core for the hosted matchmaking service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). A `Transport` executes the
//! round-trip; `UreqTransport` is provided behind the default `ureq` feature.
//!
//! # Design
//! - `MatchmakingClient` is stateless; it holds only `base_url`.
//! - Each remote operation is split into `build_*` (validates input and
//!   produces a request) and `parse_*` (unwraps the response envelope).
//! - Required parameters are checked locally; every server-side failure is
//!   surfaced unchanged as an `ApiError`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::MatchmakingClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use http::{HttpMethod, HttpRequest, HttpResponse, ACCESS_TOKEN_HEADER, SERVICE_NAME};
pub use transport::Transport;
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use types::{
    CreateMatchmakingRequest, CustomAutoDoMatchmakingRequest, CustomAutoResult, Gathering,
    GatheringRequest, Matchmaking, MatchmakingNameRequest, Page, PageRequest,
    PasscodeJoinGatheringRequest, PlayerRequest, RoomCreateGatheringRequest,
    RoomDescribeGatheringRequest, UpdateMatchmakingRequest,
};
