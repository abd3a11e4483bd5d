//! Gateway intent bitflags
//!
//! Each intent subscribes a session to one category of dispatch events. Bits
//! 17, 18, 19, 22 and 23 are reserved by the protocol and carry no name.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Gateway intents sent in Identify
    ///
    /// Serialized as a plain integer bitmask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Intents: u64 {
        const GUILDS                        = 1 << 0;
        /// Privileged
        const GUILD_MEMBERS                 = 1 << 1;
        /// Bans and audit log entries; formerly `GUILD_BANS`
        const GUILD_MODERATION              = 1 << 2;
        /// Emojis, stickers and soundboard sounds; formerly `GUILD_EMOJIS_AND_STICKERS`
        const GUILD_EXPRESSIONS             = 1 << 3;
        const GUILD_INTEGRATIONS            = 1 << 4;
        const GUILD_WEBHOOKS                = 1 << 5;
        const GUILD_INVITES                 = 1 << 6;
        const GUILD_VOICE_STATES            = 1 << 7;
        /// Privileged
        const GUILD_PRESENCES               = 1 << 8;
        const GUILD_MESSAGES                = 1 << 9;
        const GUILD_MESSAGE_REACTIONS       = 1 << 10;
        const GUILD_MESSAGE_TYPING          = 1 << 11;
        const DIRECT_MESSAGES               = 1 << 12;
        const DIRECT_MESSAGE_REACTIONS      = 1 << 13;
        const DIRECT_MESSAGE_TYPING         = 1 << 14;
        /// Privileged
        const MESSAGE_CONTENT               = 1 << 15;
        const GUILD_SCHEDULED_EVENTS        = 1 << 16;
        const AUTO_MODERATION_CONFIGURATION = 1 << 20;
        const AUTO_MODERATION_EXECUTION     = 1 << 21;
        const GUILD_MESSAGE_POLLS           = 1 << 24;
        const DIRECT_MESSAGE_POLLS          = 1 << 25;
    }
}

impl Intents {
    /// Deprecated name for [`Intents::GUILD_MODERATION`]
    #[deprecated(note = "renamed to GUILD_MODERATION")]
    pub const GUILD_BANS: Self = Self::GUILD_MODERATION;

    /// Deprecated name for [`Intents::GUILD_EXPRESSIONS`]
    #[deprecated(note = "renamed to GUILD_EXPRESSIONS")]
    pub const GUILD_EMOJIS_AND_STICKERS: Self = Self::GUILD_EXPRESSIONS;

    /// Intents that must be enabled for the application before use
    pub const PRIVILEGED: Self = Self::GUILD_MEMBERS
        .union(Self::GUILD_PRESENCES)
        .union(Self::MESSAGE_CONTENT);

    /// Bit positions the protocol reserves; never assigned a name
    pub const RESERVED_BITS: u64 = (1 << 17) | (1 << 18) | (1 << 19) | (1 << 22) | (1 << 23);

    /// Every named intent except the privileged ones
    #[must_use]
    pub const fn non_privileged() -> Self {
        Self::all().difference(Self::PRIVILEGED)
    }

    /// Check if any privileged intent is requested
    #[inline]
    pub fn is_privileged(&self) -> bool {
        self.intersects(Self::PRIVILEGED)
    }

    /// Combine intents from several sources
    pub fn combine<I>(intents: I) -> Self
    where
        I: IntoIterator<Item = Intents>,
    {
        intents.into_iter().fold(Intents::empty(), |acc, i| acc | i)
    }

    /// Names of the set intents, current names only
    pub fn names(&self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }

    /// Bits that do not correspond to any named intent
    #[inline]
    pub fn unknown_bits(&self) -> u64 {
        self.bits() & !Self::all().bits()
    }
}

impl Default for Intents {
    fn default() -> Self {
        Self::non_privileged()
    }
}

impl fmt::Display for Intents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl Serialize for Intents {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.bits())
    }
}

// Unknown bits are retained so newer intents survive a round trip
impl<'de> Deserialize<'de> for Intents {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Intents::from_bits_retain)
    }
}
