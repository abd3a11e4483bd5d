//! READY event payload
//!
//! The only dispatch body this catalog types out; every other event's data
//! stays opaque until a consumer decodes it.

use serde::{Deserialize, Serialize};

use crate::Snowflake;

/// READY event payload
///
/// Sent after a successful Identify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadyData {
    /// Gateway protocol version
    pub v: u8,

    pub user: ReadyUser,

    /// Guilds the user is in, initially unavailable
    pub guilds: Vec<UnavailableGuild>,

    /// Session ID for resuming
    pub session_id: String,

    /// Gateway URL for resuming
    pub resume_gateway_url: String,

    /// `[shard_id, num_shards]` if sharding was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard: Option<[u32; 2]>,

    pub application: PartialApplication,
}

/// Current user included in READY
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadyUser {
    pub id: Snowflake,
    pub username: String,
    pub discriminator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bot: bool,
}

/// Unavailable guild in READY
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnavailableGuild {
    pub id: Snowflake,
    pub unavailable: bool,
}

impl UnavailableGuild {
    #[must_use]
    pub fn new(id: Snowflake) -> Self {
        Self {
            id,
            unavailable: true,
        }
    }
}

/// Application id and flags included in READY
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialApplication {
    pub id: Snowflake,
    pub flags: u64,
}
