//! Presence payload definitions
//!
//! Used both as the body of op 3 (Presence Update) and as the optional
//! initial presence inside Identify.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Activity type shown in a presence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ActivityType {
    /// "Playing {name}"
    Playing = 0,
    /// "Streaming {details}"; only Twitch and YouTube urls work
    Streaming = 1,
    /// "Listening to {name}"
    Listening = 2,
    /// "Watching {name}"
    Watching = 3,
    /// "{emoji} {state}"
    Custom = 4,
    /// "Competing in {name}"
    Competing = 5,
}

impl ActivityType {
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Playing),
            1 => Some(Self::Streaming),
            2 => Some(Self::Listening),
            3 => Some(Self::Watching),
            4 => Some(Self::Custom),
            5 => Some(Self::Competing),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl Serialize for ActivityType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for ActivityType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::from_u8(value).ok_or_else(|| serde::de::Error::custom(format!("unknown activity type: {value}")))
    }
}

/// Online status of a presence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    #[default]
    Online,
    /// Do Not Disturb
    Dnd,
    /// AFK
    Idle,
    /// Shown as offline
    Invisible,
    Offline,
}

impl PresenceStatus {
    /// Get the wire representation of the status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Dnd => "dnd",
            Self::Idle => "idle",
            Self::Invisible => "invisible",
            Self::Offline => "offline",
        }
    }
}

impl fmt::Display for PresenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity a bot may set on its presence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityUpdateData {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: ActivityType,

    /// Stream URL, only read when `kind` is Streaming
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Status text for Custom activities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl ActivityUpdateData {
    #[must_use]
    pub fn new(kind: ActivityType, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            url: None,
            state: None,
        }
    }

    /// Set stream URL
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set custom status text
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }
}

/// Payload for op 3 (Presence Update)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceUpdateData {
    /// Unix time in milliseconds the client went idle, `null` if not idle
    pub since: Option<u64>,

    pub activities: Vec<ActivityUpdateData>,

    pub status: PresenceStatus,

    /// Whether the client is AFK
    pub afk: bool,
}

impl PresenceUpdateData {
    /// Create a non-idle presence with the given status
    #[must_use]
    pub fn new(status: PresenceStatus) -> Self {
        Self {
            since: None,
            activities: Vec::new(),
            status,
            afk: false,
        }
    }

    /// Create an idle presence starting at `since`
    ///
    /// Times before the Unix epoch are clamped to zero.
    #[must_use]
    pub fn idle_since(since: DateTime<Utc>) -> Self {
        Self {
            since: Some(u64::try_from(since.timestamp_millis()).unwrap_or(0)),
            activities: Vec::new(),
            status: PresenceStatus::Idle,
            afk: true,
        }
    }

    /// Add an activity
    #[must_use]
    pub fn with_activity(mut self, activity: ActivityUpdateData) -> Self {
        self.activities.push(activity);
        self
    }
}

impl Default for PresenceUpdateData {
    fn default() -> Self {
        Self::new(PresenceStatus::Online)
    }
}
