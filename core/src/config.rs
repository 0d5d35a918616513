//! Client configuration.
//!
//! Every field is optional; accessors fill in defaults so a config can be
//! deserialized from a partial JSON document or assembled from the
//! environment.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

const DEFAULT_REGION: &str = "ap-northeast-1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const ENDPOINT_NAME: &str = "matchmaking";

const ENV_REGION: &str = "GS2_REGION";
const ENV_ENDPOINT: &str = "GS2_MATCHMAKING_ENDPOINT";
const ENV_TIMEOUT: &str = "GS2_TIMEOUT_SECS";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Region of the hosted service, e.g. `ap-northeast-1`.
    pub region: Option<String>,
    /// Overrides the base URL derived from the region.
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Read the configuration from `GS2_REGION`, `GS2_MATCHMAKING_ENDPOINT`
    /// and `GS2_TIMEOUT_SECS`. Unset or empty variables fall back to defaults.
    pub fn from_env() -> Result<Self, ApiError> {
        let timeout_secs = match env_value(ENV_TIMEOUT) {
            Some(raw) => Some(raw.parse().map_err(|_| ApiError::InvalidParameter {
                name: ENV_TIMEOUT,
                reason: format!("not a number of seconds: {raw}"),
            })?),
            None => None,
        };
        Ok(Self {
            region: env_value(ENV_REGION),
            endpoint: env_value(ENV_ENDPOINT),
            timeout_secs,
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, ApiError> {
        serde_json::from_str(raw).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or(DEFAULT_REGION)
    }

    pub fn base_url(&self) -> String {
        match self.endpoint.as_deref() {
            Some(endpoint) => endpoint.to_string(),
            None => format!("https://{ENDPOINT_NAME}.{}.gs2io.com", self.region()),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
