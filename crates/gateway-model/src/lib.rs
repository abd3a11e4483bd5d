//! # gateway-model
//!
//! Schema catalog for the Discord Gateway: opcodes, close codes, intents,
//! dispatch event names and payload shapes. Nothing here opens a connection;
//! the types are meant to be imported by a client and its codec.

pub mod error;
pub mod events;
pub mod intents;
pub mod payloads;
pub mod presence;
pub mod protocol;
pub mod snowflake;

// Re-export commonly used types at crate root
pub use error::{Direction, Expected, ModelError, ModelResult};
pub use events::{DispatchEventName, ReadyData};
pub use intents::Intents;
pub use payloads::{
    Dispatch, GatewayCommand, GatewayData, GatewayEvent, Heartbeat, HeartbeatAck, Hello, Identify,
    IdentifyProperties, InvalidSession, RawPayload, Receivable, Reconnect, RequestGuildMembers,
    RequestSoundboardSounds, Resume, Sendable, VoiceStateUpdate,
};
pub use presence::{ActivityType, ActivityUpdateData, PresenceStatus, PresenceUpdateData};
pub use protocol::{CloseCode, OpCode, GATEWAY_VERSION};
pub use snowflake::{Snowflake, SnowflakeParseError};
