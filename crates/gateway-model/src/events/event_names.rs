//! Dispatch event names
//!
//! One variant per event the gateway dispatches, carried in the `t` field of
//! op 0 payloads. Wire names must never change; new events are added as new
//! variants.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Dispatch event names
///
/// These are the event names sent in the `t` field of dispatch messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchEventName {
    // Connection
    /// Contains the initial state information
    Ready,
    /// Response to Resume
    Resumed,

    // Application commands
    /// Application command permission was updated
    ApplicationCommandPermissionsUpdate,

    // Auto moderation
    /// Auto Moderation rule was created
    AutoModerationRuleCreate,
    /// Auto Moderation rule was updated
    AutoModerationRuleUpdate,
    /// Auto Moderation rule was deleted
    AutoModerationRuleDelete,
    /// Auto Moderation rule was triggered and an action was executed
    AutoModerationActionExecution,

    // Channels and threads
    /// New guild channel created
    ChannelCreate,
    /// Channel was updated
    ChannelUpdate,
    /// Channel was deleted
    ChannelDelete,
    /// Message was pinned or unpinned
    ChannelPinsUpdate,
    /// Thread created, also sent when being added to a private thread
    ThreadCreate,
    /// Thread was updated
    ThreadUpdate,
    /// Thread was deleted
    ThreadDelete,
    /// Sent when gaining access to a channel, contains all active threads in that channel
    ThreadListSync,
    /// Thread member for the current user was updated
    ThreadMemberUpdate,
    /// Some user(s) were added to or removed from a thread
    ThreadMembersUpdate,

    // Entitlements
    /// Entitlement was created
    EntitlementCreate,
    /// Entitlement was updated or renewed
    EntitlementUpdate,
    /// Entitlement was deleted
    EntitlementDelete,

    // Guilds
    /// Lazy-load for unavailable guild, guild became available, or user joined a new guild
    GuildCreate,
    /// Guild was updated
    GuildUpdate,
    /// Guild became unavailable, or user left/was removed from a guild
    GuildDelete,
    /// Guild audit log entry was created
    GuildAuditLogEntryCreate,
    /// User was banned from a guild
    GuildBanAdd,
    /// User was unbanned from a guild
    GuildBanRemove,
    /// Guild emojis were updated
    GuildEmojisUpdate,
    /// Guild stickers were updated
    GuildStickersUpdate,
    /// Guild integration was updated
    GuildIntegrationsUpdate,
    /// New user joined a guild
    GuildMemberAdd,
    /// User was removed from a guild
    GuildMemberRemove,
    /// Guild member was updated
    GuildMemberUpdate,
    /// Response to Request Guild Members
    GuildMembersChunk,
    /// Guild role was created
    GuildRoleCreate,
    /// Guild role was updated
    GuildRoleUpdate,
    /// Guild role was deleted
    GuildRoleDelete,
    /// Guild scheduled event was created
    GuildScheduledEventCreate,
    /// Guild scheduled event was updated
    GuildScheduledEventUpdate,
    /// Guild scheduled event was deleted
    GuildScheduledEventDelete,
    /// User subscribed to a guild scheduled event
    GuildScheduledEventUserAdd,
    /// User unsubscribed from a guild scheduled event
    GuildScheduledEventUserRemove,

    // Soundboard
    /// Guild soundboard sound was created
    GuildSoundboardSoundCreate,
    /// Guild soundboard sound was updated
    GuildSoundboardSoundUpdate,
    /// Guild soundboard sound was deleted
    GuildSoundboardSoundDelete,
    /// Guild soundboard sounds were updated
    GuildSoundboardSoundsUpdate,
    /// Response to Request Soundboard Sounds
    SoundboardSounds,

    // Integrations and interactions
    /// Guild integration was created
    IntegrationCreate,
    /// Guild integration was updated
    IntegrationUpdate,
    /// Guild integration was deleted
    IntegrationDelete,
    /// User used an interaction, such as an application command
    InteractionCreate,

    // Invites
    /// Invite to a channel was created
    InviteCreate,
    /// Invite to a channel was deleted
    InviteDelete,

    // Messages
    /// Message was created
    MessageCreate,
    /// Message was edited
    MessageUpdate,
    /// Message was deleted
    MessageDelete,
    /// Multiple messages were deleted at once
    MessageDeleteBulk,
    /// User reacted to a message
    MessageReactionAdd,
    /// User removed a reaction from a message
    MessageReactionRemove,
    /// All reactions were explicitly removed from a message
    MessageReactionRemoveAll,
    /// All reactions for a given emoji were explicitly removed from a message
    MessageReactionRemoveEmoji,
    /// User voted on a poll
    MessagePollVoteAdd,
    /// User removed a vote on a poll
    MessagePollVoteRemove,

    // Presence and users
    /// User was updated
    PresenceUpdate,
    /// User started typing in a channel
    TypingStart,
    /// Properties about the current user changed
    UserUpdate,

    // Stage instances
    /// Stage instance was created
    StageInstanceCreate,
    /// Stage instance was updated
    StageInstanceUpdate,
    /// Stage instance was deleted or closed
    StageInstanceDelete,

    // Subscriptions
    /// Premium App Subscription was created
    SubscriptionCreate,
    /// Premium App Subscription was updated
    SubscriptionUpdate,
    /// Premium App Subscription was deleted
    SubscriptionDelete,

    // Voice and webhooks
    /// Someone sent an effect in a voice channel the current user is connected to
    VoiceChannelEffectSend,
    /// Someone joined, left, or moved a voice channel
    VoiceStateUpdate,
    /// Guild's voice server was updated
    VoiceServerUpdate,
    /// Guild channel webhook was created, updated, or deleted
    WebhooksUpdate,
}

impl DispatchEventName {
    /// Every known event name
    pub const ALL: [Self; 75] = [
        Self::Ready,
        Self::Resumed,
        Self::ApplicationCommandPermissionsUpdate,
        Self::AutoModerationRuleCreate,
        Self::AutoModerationRuleUpdate,
        Self::AutoModerationRuleDelete,
        Self::AutoModerationActionExecution,
        Self::ChannelCreate,
        Self::ChannelUpdate,
        Self::ChannelDelete,
        Self::ChannelPinsUpdate,
        Self::ThreadCreate,
        Self::ThreadUpdate,
        Self::ThreadDelete,
        Self::ThreadListSync,
        Self::ThreadMemberUpdate,
        Self::ThreadMembersUpdate,
        Self::EntitlementCreate,
        Self::EntitlementUpdate,
        Self::EntitlementDelete,
        Self::GuildCreate,
        Self::GuildUpdate,
        Self::GuildDelete,
        Self::GuildAuditLogEntryCreate,
        Self::GuildBanAdd,
        Self::GuildBanRemove,
        Self::GuildEmojisUpdate,
        Self::GuildStickersUpdate,
        Self::GuildIntegrationsUpdate,
        Self::GuildMemberAdd,
        Self::GuildMemberRemove,
        Self::GuildMemberUpdate,
        Self::GuildMembersChunk,
        Self::GuildRoleCreate,
        Self::GuildRoleUpdate,
        Self::GuildRoleDelete,
        Self::GuildScheduledEventCreate,
        Self::GuildScheduledEventUpdate,
        Self::GuildScheduledEventDelete,
        Self::GuildScheduledEventUserAdd,
        Self::GuildScheduledEventUserRemove,
        Self::GuildSoundboardSoundCreate,
        Self::GuildSoundboardSoundUpdate,
        Self::GuildSoundboardSoundDelete,
        Self::GuildSoundboardSoundsUpdate,
        Self::SoundboardSounds,
        Self::IntegrationCreate,
        Self::IntegrationUpdate,
        Self::IntegrationDelete,
        Self::InteractionCreate,
        Self::InviteCreate,
        Self::InviteDelete,
        Self::MessageCreate,
        Self::MessageUpdate,
        Self::MessageDelete,
        Self::MessageDeleteBulk,
        Self::MessageReactionAdd,
        Self::MessageReactionRemove,
        Self::MessageReactionRemoveAll,
        Self::MessageReactionRemoveEmoji,
        Self::MessagePollVoteAdd,
        Self::MessagePollVoteRemove,
        Self::PresenceUpdate,
        Self::TypingStart,
        Self::UserUpdate,
        Self::StageInstanceCreate,
        Self::StageInstanceUpdate,
        Self::StageInstanceDelete,
        Self::SubscriptionCreate,
        Self::SubscriptionUpdate,
        Self::SubscriptionDelete,
        Self::VoiceChannelEffectSend,
        Self::VoiceStateUpdate,
        Self::VoiceServerUpdate,
        Self::WebhooksUpdate,
    ];

    /// Get the wire representation of the event name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "READY",
            Self::Resumed => "RESUMED",
            Self::ApplicationCommandPermissionsUpdate => "APPLICATION_COMMAND_PERMISSIONS_UPDATE",
            Self::AutoModerationRuleCreate => "AUTO_MODERATION_RULE_CREATE",
            Self::AutoModerationRuleUpdate => "AUTO_MODERATION_RULE_UPDATE",
            Self::AutoModerationRuleDelete => "AUTO_MODERATION_RULE_DELETE",
            Self::AutoModerationActionExecution => "AUTO_MODERATION_ACTION_EXECUTION",
            Self::ChannelCreate => "CHANNEL_CREATE",
            Self::ChannelUpdate => "CHANNEL_UPDATE",
            Self::ChannelDelete => "CHANNEL_DELETE",
            Self::ChannelPinsUpdate => "CHANNEL_PINS_UPDATE",
            Self::ThreadCreate => "THREAD_CREATE",
            Self::ThreadUpdate => "THREAD_UPDATE",
            Self::ThreadDelete => "THREAD_DELETE",
            Self::ThreadListSync => "THREAD_LIST_SYNC",
            Self::ThreadMemberUpdate => "THREAD_MEMBER_UPDATE",
            Self::ThreadMembersUpdate => "THREAD_MEMBERS_UPDATE",
            Self::EntitlementCreate => "ENTITLEMENT_CREATE",
            Self::EntitlementUpdate => "ENTITLEMENT_UPDATE",
            Self::EntitlementDelete => "ENTITLEMENT_DELETE",
            Self::GuildCreate => "GUILD_CREATE",
            Self::GuildUpdate => "GUILD_UPDATE",
            Self::GuildDelete => "GUILD_DELETE",
            Self::GuildAuditLogEntryCreate => "GUILD_AUDIT_LOG_ENTRY_CREATE",
            Self::GuildBanAdd => "GUILD_BAN_ADD",
            Self::GuildBanRemove => "GUILD_BAN_REMOVE",
            Self::GuildEmojisUpdate => "GUILD_EMOJIS_UPDATE",
            Self::GuildStickersUpdate => "GUILD_STICKERS_UPDATE",
            Self::GuildIntegrationsUpdate => "GUILD_INTEGRATIONS_UPDATE",
            Self::GuildMemberAdd => "GUILD_MEMBER_ADD",
            Self::GuildMemberRemove => "GUILD_MEMBER_REMOVE",
            Self::GuildMemberUpdate => "GUILD_MEMBER_UPDATE",
            Self::GuildMembersChunk => "GUILD_MEMBERS_CHUNK",
            Self::GuildRoleCreate => "GUILD_ROLE_CREATE",
            Self::GuildRoleUpdate => "GUILD_ROLE_UPDATE",
            Self::GuildRoleDelete => "GUILD_ROLE_DELETE",
            Self::GuildScheduledEventCreate => "GUILD_SCHEDULED_EVENT_CREATE",
            Self::GuildScheduledEventUpdate => "GUILD_SCHEDULED_EVENT_UPDATE",
            Self::GuildScheduledEventDelete => "GUILD_SCHEDULED_EVENT_DELETE",
            Self::GuildScheduledEventUserAdd => "GUILD_SCHEDULED_EVENT_USER_ADD",
            Self::GuildScheduledEventUserRemove => "GUILD_SCHEDULED_EVENT_USER_REMOVE",
            Self::GuildSoundboardSoundCreate => "GUILD_SOUNDBOARD_SOUND_CREATE",
            Self::GuildSoundboardSoundUpdate => "GUILD_SOUNDBOARD_SOUND_UPDATE",
            Self::GuildSoundboardSoundDelete => "GUILD_SOUNDBOARD_SOUND_DELETE",
            Self::GuildSoundboardSoundsUpdate => "GUILD_SOUNDBOARD_SOUNDS_UPDATE",
            Self::SoundboardSounds => "SOUNDBOARD_SOUNDS",
            Self::IntegrationCreate => "INTEGRATION_CREATE",
            Self::IntegrationUpdate => "INTEGRATION_UPDATE",
            Self::IntegrationDelete => "INTEGRATION_DELETE",
            Self::InteractionCreate => "INTERACTION_CREATE",
            Self::InviteCreate => "INVITE_CREATE",
            Self::InviteDelete => "INVITE_DELETE",
            Self::MessageCreate => "MESSAGE_CREATE",
            Self::MessageUpdate => "MESSAGE_UPDATE",
            Self::MessageDelete => "MESSAGE_DELETE",
            Self::MessageDeleteBulk => "MESSAGE_DELETE_BULK",
            Self::MessageReactionAdd => "MESSAGE_REACTION_ADD",
            Self::MessageReactionRemove => "MESSAGE_REACTION_REMOVE",
            Self::MessageReactionRemoveAll => "MESSAGE_REACTION_REMOVE_ALL",
            Self::MessageReactionRemoveEmoji => "MESSAGE_REACTION_REMOVE_EMOJI",
            Self::MessagePollVoteAdd => "MESSAGE_POLL_VOTE_ADD",
            Self::MessagePollVoteRemove => "MESSAGE_POLL_VOTE_REMOVE",
            Self::PresenceUpdate => "PRESENCE_UPDATE",
            Self::TypingStart => "TYPING_START",
            Self::UserUpdate => "USER_UPDATE",
            Self::StageInstanceCreate => "STAGE_INSTANCE_CREATE",
            Self::StageInstanceUpdate => "STAGE_INSTANCE_UPDATE",
            Self::StageInstanceDelete => "STAGE_INSTANCE_DELETE",
            Self::SubscriptionCreate => "SUBSCRIPTION_CREATE",
            Self::SubscriptionUpdate => "SUBSCRIPTION_UPDATE",
            Self::SubscriptionDelete => "SUBSCRIPTION_DELETE",
            Self::VoiceChannelEffectSend => "VOICE_CHANNEL_EFFECT_SEND",
            Self::VoiceStateUpdate => "VOICE_STATE_UPDATE",
            Self::VoiceServerUpdate => "VOICE_SERVER_UPDATE",
            Self::WebhooksUpdate => "WEBHOOKS_UPDATE",
        }
    }

    /// Parse an event name from its wire representation
    ///
    /// Returns `None` for names this catalog does not know yet.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "READY" => Some(Self::Ready),
            "RESUMED" => Some(Self::Resumed),
            "APPLICATION_COMMAND_PERMISSIONS_UPDATE" => Some(Self::ApplicationCommandPermissionsUpdate),
            "AUTO_MODERATION_RULE_CREATE" => Some(Self::AutoModerationRuleCreate),
            "AUTO_MODERATION_RULE_UPDATE" => Some(Self::AutoModerationRuleUpdate),
            "AUTO_MODERATION_RULE_DELETE" => Some(Self::AutoModerationRuleDelete),
            "AUTO_MODERATION_ACTION_EXECUTION" => Some(Self::AutoModerationActionExecution),
            "CHANNEL_CREATE" => Some(Self::ChannelCreate),
            "CHANNEL_UPDATE" => Some(Self::ChannelUpdate),
            "CHANNEL_DELETE" => Some(Self::ChannelDelete),
            "CHANNEL_PINS_UPDATE" => Some(Self::ChannelPinsUpdate),
            "THREAD_CREATE" => Some(Self::ThreadCreate),
            "THREAD_UPDATE" => Some(Self::ThreadUpdate),
            "THREAD_DELETE" => Some(Self::ThreadDelete),
            "THREAD_LIST_SYNC" => Some(Self::ThreadListSync),
            "THREAD_MEMBER_UPDATE" => Some(Self::ThreadMemberUpdate),
            "THREAD_MEMBERS_UPDATE" => Some(Self::ThreadMembersUpdate),
            "ENTITLEMENT_CREATE" => Some(Self::EntitlementCreate),
            "ENTITLEMENT_UPDATE" => Some(Self::EntitlementUpdate),
            "ENTITLEMENT_DELETE" => Some(Self::EntitlementDelete),
            "GUILD_CREATE" => Some(Self::GuildCreate),
            "GUILD_UPDATE" => Some(Self::GuildUpdate),
            "GUILD_DELETE" => Some(Self::GuildDelete),
            "GUILD_AUDIT_LOG_ENTRY_CREATE" => Some(Self::GuildAuditLogEntryCreate),
            "GUILD_BAN_ADD" => Some(Self::GuildBanAdd),
            "GUILD_BAN_REMOVE" => Some(Self::GuildBanRemove),
            "GUILD_EMOJIS_UPDATE" => Some(Self::GuildEmojisUpdate),
            "GUILD_STICKERS_UPDATE" => Some(Self::GuildStickersUpdate),
            "GUILD_INTEGRATIONS_UPDATE" => Some(Self::GuildIntegrationsUpdate),
            "GUILD_MEMBER_ADD" => Some(Self::GuildMemberAdd),
            "GUILD_MEMBER_REMOVE" => Some(Self::GuildMemberRemove),
            "GUILD_MEMBER_UPDATE" => Some(Self::GuildMemberUpdate),
            "GUILD_MEMBERS_CHUNK" => Some(Self::GuildMembersChunk),
            "GUILD_ROLE_CREATE" => Some(Self::GuildRoleCreate),
            "GUILD_ROLE_UPDATE" => Some(Self::GuildRoleUpdate),
            "GUILD_ROLE_DELETE" => Some(Self::GuildRoleDelete),
            "GUILD_SCHEDULED_EVENT_CREATE" => Some(Self::GuildScheduledEventCreate),
            "GUILD_SCHEDULED_EVENT_UPDATE" => Some(Self::GuildScheduledEventUpdate),
            "GUILD_SCHEDULED_EVENT_DELETE" => Some(Self::GuildScheduledEventDelete),
            "GUILD_SCHEDULED_EVENT_USER_ADD" => Some(Self::GuildScheduledEventUserAdd),
            "GUILD_SCHEDULED_EVENT_USER_REMOVE" => Some(Self::GuildScheduledEventUserRemove),
            "GUILD_SOUNDBOARD_SOUND_CREATE" => Some(Self::GuildSoundboardSoundCreate),
            "GUILD_SOUNDBOARD_SOUND_UPDATE" => Some(Self::GuildSoundboardSoundUpdate),
            "GUILD_SOUNDBOARD_SOUND_DELETE" => Some(Self::GuildSoundboardSoundDelete),
            "GUILD_SOUNDBOARD_SOUNDS_UPDATE" => Some(Self::GuildSoundboardSoundsUpdate),
            "SOUNDBOARD_SOUNDS" => Some(Self::SoundboardSounds),
            "INTEGRATION_CREATE" => Some(Self::IntegrationCreate),
            "INTEGRATION_UPDATE" => Some(Self::IntegrationUpdate),
            "INTEGRATION_DELETE" => Some(Self::IntegrationDelete),
            "INTERACTION_CREATE" => Some(Self::InteractionCreate),
            "INVITE_CREATE" => Some(Self::InviteCreate),
            "INVITE_DELETE" => Some(Self::InviteDelete),
            "MESSAGE_CREATE" => Some(Self::MessageCreate),
            "MESSAGE_UPDATE" => Some(Self::MessageUpdate),
            "MESSAGE_DELETE" => Some(Self::MessageDelete),
            "MESSAGE_DELETE_BULK" => Some(Self::MessageDeleteBulk),
            "MESSAGE_REACTION_ADD" => Some(Self::MessageReactionAdd),
            "MESSAGE_REACTION_REMOVE" => Some(Self::MessageReactionRemove),
            "MESSAGE_REACTION_REMOVE_ALL" => Some(Self::MessageReactionRemoveAll),
            "MESSAGE_REACTION_REMOVE_EMOJI" => Some(Self::MessageReactionRemoveEmoji),
            "MESSAGE_POLL_VOTE_ADD" => Some(Self::MessagePollVoteAdd),
            "MESSAGE_POLL_VOTE_REMOVE" => Some(Self::MessagePollVoteRemove),
            "PRESENCE_UPDATE" => Some(Self::PresenceUpdate),
            "TYPING_START" => Some(Self::TypingStart),
            "USER_UPDATE" => Some(Self::UserUpdate),
            "STAGE_INSTANCE_CREATE" => Some(Self::StageInstanceCreate),
            "STAGE_INSTANCE_UPDATE" => Some(Self::StageInstanceUpdate),
            "STAGE_INSTANCE_DELETE" => Some(Self::StageInstanceDelete),
            "SUBSCRIPTION_CREATE" => Some(Self::SubscriptionCreate),
            "SUBSCRIPTION_UPDATE" => Some(Self::SubscriptionUpdate),
            "SUBSCRIPTION_DELETE" => Some(Self::SubscriptionDelete),
            "VOICE_CHANNEL_EFFECT_SEND" => Some(Self::VoiceChannelEffectSend),
            "VOICE_STATE_UPDATE" => Some(Self::VoiceStateUpdate),
            "VOICE_SERVER_UPDATE" => Some(Self::VoiceServerUpdate),
            "WEBHOOKS_UPDATE" => Some(Self::WebhooksUpdate),
            _ => None,
        }
    }
}

impl fmt::Display for DispatchEventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DispatchEventName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ModelError::UnknownEventName(s.to_string()))
    }
}

impl From<DispatchEventName> for String {
    fn from(event: DispatchEventName) -> Self {
        event.as_str().to_string()
    }
}

impl Serialize for DispatchEventName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DispatchEventName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Self::parse(&name).ok_or_else(|| serde::de::Error::custom(format!("unknown event name: {name}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_event_name_as_str() {
        assert_eq!(DispatchEventName::Ready.as_str(), "READY");
        assert_eq!(DispatchEventName::MessageCreate.as_str(), "MESSAGE_CREATE");
        assert_eq!(DispatchEventName::GuildCreate.as_str(), "GUILD_CREATE");
        assert_eq!(
            DispatchEventName::GuildScheduledEventUserRemove.as_str(),
            "GUILD_SCHEDULED_EVENT_USER_REMOVE"
        );
        assert_eq!(DispatchEventName::SoundboardSounds.as_str(), "SOUNDBOARD_SOUNDS");
    }

    #[test]
    fn test_parse_inverts_as_str() {
        for event in DispatchEventName::ALL {
            assert_eq!(DispatchEventName::parse(event.as_str()), Some(event));
        }
    }

    #[test]
    fn test_wire_names_are_unique_and_upper_snake_case() {
        let names: HashSet<_> = DispatchEventName::ALL.iter().map(|e| e.as_str()).collect();
        assert_eq!(names.len(), DispatchEventName::ALL.len());
        for name in names {
            assert!(name.chars().all(|c| c.is_ascii_uppercase() || c == '_'), "{name}");
        }
    }

    #[test]
    fn test_unknown_event_name() {
        assert_eq!(DispatchEventName::parse("message_create"), None);
        assert_eq!(DispatchEventName::parse("NOT_AN_EVENT"), None);

        let err = "NOT_AN_EVENT".parse::<DispatchEventName>().unwrap_err();
        assert!(matches!(err, ModelError::UnknownEventName(name) if name == "NOT_AN_EVENT"));
    }

    #[test]
    fn test_event_name_serialization() {
        let json = serde_json::to_string(&DispatchEventName::MessageCreate).unwrap();
        assert_eq!(json, "\"MESSAGE_CREATE\"");

        let parsed: DispatchEventName = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, DispatchEventName::MessageCreate);
    }

    #[test]
    fn test_event_name_display() {
        assert_eq!(format!("{}", DispatchEventName::Ready), "READY");
        assert_eq!(String::from(DispatchEventName::TypingStart), "TYPING_START");
    }
}
