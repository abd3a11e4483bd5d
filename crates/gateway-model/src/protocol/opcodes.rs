//! Gateway operation codes
//!
//! Opcode values are fixed by the Discord Gateway protocol and must never be
//! renumbered. Slot 5 is unused, as is everything between 12 and 30.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Gateway operation codes
///
/// Tags the `op` field of every gateway envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum OpCode {
    /// An event was dispatched (receive)
    Dispatch = 0,
    /// Keep the connection alive (send/receive)
    Heartbeat = 1,
    /// Start a new session during the initial handshake (send)
    Identify = 2,
    /// Update the client's presence (send)
    PresenceUpdate = 3,
    /// Join, leave or move between voice channels (send)
    VoiceStateUpdate = 4,
    /// Resume a previous session that was disconnected (send)
    Resume = 6,
    /// Client should reconnect and resume (receive)
    Reconnect = 7,
    /// Request information about offline guild members (send)
    RequestGuildMembers = 8,
    /// The session has been invalidated (receive)
    InvalidSession = 9,
    /// Sent immediately after connecting (receive)
    Hello = 10,
    /// Acknowledges a received heartbeat (receive)
    HeartbeatAck = 11,
    /// Request soundboard sounds for a set of guilds (send)
    RequestSoundboardSounds = 31,
}

impl OpCode {
    /// Every defined opcode, in ascending order
    pub const ALL: [Self; 12] = [
        Self::Dispatch,
        Self::Heartbeat,
        Self::Identify,
        Self::PresenceUpdate,
        Self::VoiceStateUpdate,
        Self::Resume,
        Self::Reconnect,
        Self::RequestGuildMembers,
        Self::InvalidSession,
        Self::Hello,
        Self::HeartbeatAck,
        Self::RequestSoundboardSounds,
    ];

    /// Create an `OpCode` from a raw integer value
    ///
    /// Returns `None` for unused slots so callers can treat them as unknown.
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Dispatch),
            1 => Some(Self::Heartbeat),
            2 => Some(Self::Identify),
            3 => Some(Self::PresenceUpdate),
            4 => Some(Self::VoiceStateUpdate),
            6 => Some(Self::Resume),
            7 => Some(Self::Reconnect),
            8 => Some(Self::RequestGuildMembers),
            9 => Some(Self::InvalidSession),
            10 => Some(Self::Hello),
            11 => Some(Self::HeartbeatAck),
            31 => Some(Self::RequestSoundboardSounds),
            _ => None,
        }
    }

    /// Get the raw integer value
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Check if a client may send this opcode
    #[must_use]
    pub const fn is_sendable(self) -> bool {
        matches!(
            self,
            Self::Heartbeat
                | Self::Identify
                | Self::PresenceUpdate
                | Self::VoiceStateUpdate
                | Self::Resume
                | Self::RequestGuildMembers
                | Self::RequestSoundboardSounds
        )
    }

    /// Check if a client may receive this opcode
    #[must_use]
    pub const fn is_receivable(self) -> bool {
        matches!(
            self,
            Self::Dispatch
                | Self::Heartbeat
                | Self::Reconnect
                | Self::InvalidSession
                | Self::Hello
                | Self::HeartbeatAck
        )
    }

    /// Get the name of this op code
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dispatch => "Dispatch",
            Self::Heartbeat => "Heartbeat",
            Self::Identify => "Identify",
            Self::PresenceUpdate => "PresenceUpdate",
            Self::VoiceStateUpdate => "VoiceStateUpdate",
            Self::Resume => "Resume",
            Self::Reconnect => "Reconnect",
            Self::RequestGuildMembers => "RequestGuildMembers",
            Self::InvalidSession => "InvalidSession",
            Self::Hello => "Hello",
            Self::HeartbeatAck => "HeartbeatAck",
            Self::RequestSoundboardSounds => "RequestSoundboardSounds",
        }
    }
}

impl Serialize for OpCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for OpCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::from_u8(value).ok_or_else(|| serde::de::Error::custom(format!("unknown opcode: {value}")))
    }
}

impl std::fmt::Display for OpCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.as_u8())
    }
}

impl From<OpCode> for u8 {
    fn from(op: OpCode) -> Self {
        op.as_u8()
    }
}
