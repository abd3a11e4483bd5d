//! Client payload definitions
//!
//! Bodies of the opcodes a client sends. Values are not validated here; the
//! gateway closes the connection on bad input.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::direction::gateway_data;
use crate::presence::PresenceUpdateData;
use crate::{Intents, Snowflake};

/// Payload for op 1 (Heartbeat)
///
/// Carries the last sequence number received, `null` if none yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Heartbeat(pub Option<u64>);

gateway_data!(Heartbeat => Heartbeat: Sendable, Receivable);

/// Payload for op 2 (Identify)
///
/// Sent by the client to start a new session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identify {
    /// Authentication token
    pub token: String,

    pub properties: IdentifyProperties,

    /// Whether this connection supports compression of packets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compress: Option<bool>,

    /// Member count above which the gateway stops sending offline members
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_threshold: Option<u8>,

    /// `[shard_id, num_shards]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard: Option<[u32; 2]>,

    /// Initial presence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence: Option<PresenceUpdateData>,

    pub intents: Intents,
}

gateway_data!(Identify => Identify: Sendable);

impl Identify {
    /// Values the gateway accepts for `large_threshold`
    pub const LARGE_THRESHOLD_RANGE: RangeInclusive<u8> = 50..=250;

    /// Create an Identify payload with default connection properties
    #[must_use]
    pub fn new(token: impl Into<String>, intents: Intents) -> Self {
        Self {
            token: token.into(),
            properties: IdentifyProperties::default(),
            compress: None,
            large_threshold: None,
            shard: None,
            presence: None,
            intents,
        }
    }

    /// Set connection properties
    #[must_use]
    pub fn with_properties(mut self, properties: IdentifyProperties) -> Self {
        self.properties = properties;
        self
    }

    /// Set compression support
    #[must_use]
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = Some(compress);
        self
    }

    /// Set large guild threshold
    #[must_use]
    pub fn with_large_threshold(mut self, threshold: u8) -> Self {
        self.large_threshold = Some(threshold);
        self
    }

    /// Set shard as `(shard_id, num_shards)`
    #[must_use]
    pub fn with_shard(mut self, shard_id: u32, num_shards: u32) -> Self {
        self.shard = Some([shard_id, num_shards]);
        self
    }

    /// Set initial presence
    #[must_use]
    pub fn with_presence(mut self, presence: PresenceUpdateData) -> Self {
        self.presence = Some(presence);
        self
    }
}

/// Client connection properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifyProperties {
    /// Operating system
    pub os: String,

    /// Library name
    pub browser: String,

    /// Library name
    pub device: String,
}

impl IdentifyProperties {
    #[must_use]
    pub fn new(os: impl Into<String>, browser: impl Into<String>, device: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            browser: browser.into(),
            device: device.into(),
        }
    }
}

impl Default for IdentifyProperties {
    fn default() -> Self {
        Self::new(std::env::consts::OS, env!("CARGO_PKG_NAME"), env!("CARGO_PKG_NAME"))
    }
}

/// Payload for op 6 (Resume)
///
/// Sent by the client to replay missed events after a disconnect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    /// Authentication token
    pub token: String,

    /// Session ID to resume
    pub session_id: String,

    /// Last received sequence number
    pub seq: u64,
}

gateway_data!(Resume => Resume: Sendable);

/// Payload for op 8 (Request Guild Members)
///
/// Either `query` or `user_ids` is set, not both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestGuildMembers {
    pub guild_id: Snowflake,

    /// Username prefix to match, empty string for all members
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Maximum number of members to send, 0 for no limit
    pub limit: u32,

    /// Whether to include presences of matched members
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presences: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<Snowflake>>,

    /// Echoed back in the matching GUILD_MEMBERS_CHUNK
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}

gateway_data!(RequestGuildMembers => RequestGuildMembers: Sendable);

impl RequestGuildMembers {
    /// Request members whose username starts with `query`
    #[must_use]
    pub fn by_query(guild_id: Snowflake, query: impl Into<String>, limit: u32) -> Self {
        Self {
            guild_id,
            query: Some(query.into()),
            limit,
            presences: None,
            user_ids: None,
            nonce: None,
        }
    }

    /// Request specific members
    #[must_use]
    pub fn by_user_ids(guild_id: Snowflake, user_ids: Vec<Snowflake>) -> Self {
        Self {
            guild_id,
            query: None,
            limit: 0,
            presences: None,
            user_ids: Some(user_ids),
            nonce: None,
        }
    }

    /// Set nonce
    #[must_use]
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Include presences
    #[must_use]
    pub fn with_presences(mut self, presences: bool) -> Self {
        self.presences = Some(presences);
        self
    }
}

/// Payload for op 4 (Voice State Update)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceStateUpdate {
    pub guild_id: Snowflake,

    /// Channel to join, `null` to disconnect
    pub channel_id: Option<Snowflake>,

    pub self_mute: bool,

    pub self_deaf: bool,
}

gateway_data!(VoiceStateUpdate => VoiceStateUpdate: Sendable);

impl VoiceStateUpdate {
    /// Join `channel_id`, unmuted and undeafened
    #[must_use]
    pub fn join(guild_id: Snowflake, channel_id: Snowflake) -> Self {
        Self {
            guild_id,
            channel_id: Some(channel_id),
            self_mute: false,
            self_deaf: false,
        }
    }

    /// Leave voice in the guild
    #[must_use]
    pub fn leave(guild_id: Snowflake) -> Self {
        Self {
            guild_id,
            channel_id: None,
            self_mute: false,
            self_deaf: false,
        }
    }
}

/// Payload for op 31 (Request Soundboard Sounds)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSoundboardSounds {
    pub guild_ids: Vec<Snowflake>,
}

gateway_data!(RequestSoundboardSounds => RequestSoundboardSounds: Sendable);

gateway_data!(PresenceUpdateData => PresenceUpdate: Sendable);
