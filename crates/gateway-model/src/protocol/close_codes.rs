//! Gateway close codes
//!
//! Close codes are assigned as an offset from [`CloseCode::BASE`]. Offset 6
//! (4006) is reserved and stays unassigned.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const CLOSE_CODE_BASE: u16 = 4000;

/// Gateway WebSocket close codes
///
/// Sent by the gateway when it terminates a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum CloseCode {
    /// Unknown error occurred
    UnknownError = CLOSE_CODE_BASE,
    /// Invalid opcode or payload sent
    UnknownOpcode = CLOSE_CODE_BASE + 1,
    /// Invalid payload encoding
    DecodeError = CLOSE_CODE_BASE + 2,
    /// Sent a payload before Identify
    NotAuthenticated = CLOSE_CODE_BASE + 3,
    /// Invalid token in Identify
    AuthenticationFailed = CLOSE_CODE_BASE + 4,
    /// Sent Identify more than once
    AlreadyAuthenticated = CLOSE_CODE_BASE + 5,
    /// Invalid sequence number for Resume
    InvalidSequence = CLOSE_CODE_BASE + 7,
    /// Payloads sent too quickly
    RateLimited = CLOSE_CODE_BASE + 8,
    /// Session timed out
    SessionTimedOut = CLOSE_CODE_BASE + 9,
    /// Invalid shard in Identify
    InvalidShard = CLOSE_CODE_BASE + 10,
    /// Session would handle too many guilds
    ShardingRequired = CLOSE_CODE_BASE + 11,
    /// Invalid or outdated gateway version
    InvalidApiVersion = CLOSE_CODE_BASE + 12,
    /// Invalid intents bitmask
    InvalidIntents = CLOSE_CODE_BASE + 13,
    /// Intent not enabled or not approved for the application
    DisallowedIntents = CLOSE_CODE_BASE + 14,
}

impl CloseCode {
    /// First gateway close code
    pub const BASE: u16 = CLOSE_CODE_BASE;

    /// Offset that is reserved by the protocol and has no name
    pub const RESERVED_OFFSET: u16 = 6;

    /// Every defined close code, in ascending order
    pub const ALL: [Self; 14] = [
        Self::UnknownError,
        Self::UnknownOpcode,
        Self::DecodeError,
        Self::NotAuthenticated,
        Self::AuthenticationFailed,
        Self::AlreadyAuthenticated,
        Self::InvalidSequence,
        Self::RateLimited,
        Self::SessionTimedOut,
        Self::InvalidShard,
        Self::ShardingRequired,
        Self::InvalidApiVersion,
        Self::InvalidIntents,
        Self::DisallowedIntents,
    ];

    /// Create a `CloseCode` from a raw u16 value
    #[must_use]
    pub fn from_u16(value: u16) -> Option<Self> {
        value.checked_sub(Self::BASE).and_then(Self::from_offset)
    }

    /// Create a `CloseCode` from its offset above [`CloseCode::BASE`]
    #[must_use]
    pub fn from_offset(offset: u16) -> Option<Self> {
        match offset {
            0 => Some(Self::UnknownError),
            1 => Some(Self::UnknownOpcode),
            2 => Some(Self::DecodeError),
            3 => Some(Self::NotAuthenticated),
            4 => Some(Self::AuthenticationFailed),
            5 => Some(Self::AlreadyAuthenticated),
            7 => Some(Self::InvalidSequence),
            8 => Some(Self::RateLimited),
            9 => Some(Self::SessionTimedOut),
            10 => Some(Self::InvalidShard),
            11 => Some(Self::ShardingRequired),
            12 => Some(Self::InvalidApiVersion),
            13 => Some(Self::InvalidIntents),
            14 => Some(Self::DisallowedIntents),
            _ => None,
        }
    }

    /// Get the raw u16 value
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Get the offset above [`CloseCode::BASE`]
    #[must_use]
    pub const fn offset(self) -> u16 {
        self.as_u16() - Self::BASE
    }

    /// Check if the client may reconnect after this close code
    #[must_use]
    pub const fn should_reconnect(self) -> bool {
        !matches!(
            self,
            Self::AuthenticationFailed
                | Self::InvalidShard
                | Self::ShardingRequired
                | Self::InvalidApiVersion
                | Self::InvalidIntents
                | Self::DisallowedIntents
        )
    }

    /// Get the description for this close code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::UnknownError => "Unknown error",
            Self::UnknownOpcode => "Unknown opcode",
            Self::DecodeError => "Decode error",
            Self::NotAuthenticated => "Not authenticated",
            Self::AuthenticationFailed => "Authentication failed",
            Self::AlreadyAuthenticated => "Already authenticated",
            Self::InvalidSequence => "Invalid sequence number",
            Self::RateLimited => "Rate limited",
            Self::SessionTimedOut => "Session timed out",
            Self::InvalidShard => "Invalid shard",
            Self::ShardingRequired => "Sharding required",
            Self::InvalidApiVersion => "Invalid API version",
            Self::InvalidIntents => "Invalid intents",
            Self::DisallowedIntents => "Disallowed intents",
        }
    }

    /// Get the name of this close code
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UnknownError => "UnknownError",
            Self::UnknownOpcode => "UnknownOpcode",
            Self::DecodeError => "DecodeError",
            Self::NotAuthenticated => "NotAuthenticated",
            Self::AuthenticationFailed => "AuthenticationFailed",
            Self::AlreadyAuthenticated => "AlreadyAuthenticated",
            Self::InvalidSequence => "InvalidSequence",
            Self::RateLimited => "RateLimited",
            Self::SessionTimedOut => "SessionTimedOut",
            Self::InvalidShard => "InvalidShard",
            Self::ShardingRequired => "ShardingRequired",
            Self::InvalidApiVersion => "InvalidApiVersion",
            Self::InvalidIntents => "InvalidIntents",
            Self::DisallowedIntents => "DisallowedIntents",
        }
    }
}

impl Serialize for CloseCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u16(self.as_u16())
    }
}

impl<'de> Deserialize<'de> for CloseCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u16::deserialize(deserializer)?;
        Self::from_u16(value).ok_or_else(|| serde::de::Error::custom(format!("unknown close code: {value}")))
    }
}

impl std::fmt::Display for CloseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.name(), self.as_u16(), self.description())
    }
}

impl From<CloseCode> for u16 {
    fn from(code: CloseCode) -> Self {
        code.as_u16()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_code_values() {
        assert_eq!(CloseCode::UnknownError.as_u16(), 4000);
        assert_eq!(CloseCode::AlreadyAuthenticated.as_u16(), 4005);
        assert_eq!(CloseCode::InvalidSequence.as_u16(), 4007);
        assert_eq!(CloseCode::InvalidApiVersion.as_u16(), 4012);
        assert_eq!(CloseCode::DisallowedIntents.as_u16(), 4014);
    }

    #[test]
    fn test_close_code_is_base_plus_offset() {
        for code in CloseCode::ALL {
            assert_eq!(code.as_u16(), CloseCode::BASE + code.offset());
            assert_eq!(CloseCode::from_offset(code.offset()), Some(code));
            assert_eq!(CloseCode::from_u16(code.as_u16()), Some(code));
        }
    }

    #[test]
    fn test_reserved_offset_has_no_name() {
        assert_eq!(CloseCode::from_offset(CloseCode::RESERVED_OFFSET), None);
        assert_eq!(CloseCode::from_u16(4006), None);
        assert!(CloseCode::ALL.iter().all(|c| c.offset() != CloseCode::RESERVED_OFFSET));
    }

    #[test]
    fn test_close_code_from_u16_out_of_range() {
        assert_eq!(CloseCode::from_u16(1000), None);
        assert_eq!(CloseCode::from_u16(3999), None);
        assert_eq!(CloseCode::from_u16(4015), None);
    }

    #[test]
    fn test_should_reconnect() {
        assert!(CloseCode::UnknownError.should_reconnect());
        assert!(CloseCode::NotAuthenticated.should_reconnect());
        assert!(CloseCode::InvalidSequence.should_reconnect());
        assert!(CloseCode::RateLimited.should_reconnect());
        assert!(CloseCode::SessionTimedOut.should_reconnect());

        assert!(!CloseCode::AuthenticationFailed.should_reconnect());
        assert!(!CloseCode::InvalidShard.should_reconnect());
        assert!(!CloseCode::ShardingRequired.should_reconnect());
        assert!(!CloseCode::InvalidApiVersion.should_reconnect());
        assert!(!CloseCode::InvalidIntents.should_reconnect());
        assert!(!CloseCode::DisallowedIntents.should_reconnect());
    }

    #[test]
    fn test_close_code_serialization() {
        assert_eq!(serde_json::to_string(&CloseCode::InvalidIntents).unwrap(), "4013");
        let code: CloseCode = serde_json::from_str("4004").unwrap();
        assert_eq!(code, CloseCode::AuthenticationFailed);
        assert!(serde_json::from_str::<CloseCode>("4006").is_err());
    }

    #[test]
    fn test_close_code_display() {
        let display = format!("{}", CloseCode::AuthenticationFailed);
        assert!(display.contains("4004"));
        assert!(display.contains("Authentication"));
    }
}
