//! Gateway payloads
//!
//! The shared envelope, the per-opcode bodies and the direction-typed unions
//! built from them.

mod commands;
mod direction;
mod envelope;
mod events;
mod unions;

pub use commands::{
    Heartbeat, Identify, IdentifyProperties, RequestGuildMembers, RequestSoundboardSounds, Resume,
    VoiceStateUpdate,
};
pub use direction::{GatewayData, Receivable, Sendable};
pub use envelope::RawPayload;
pub use events::{Dispatch, HeartbeatAck, Hello, InvalidSession, Reconnect};
pub use unions::{GatewayCommand, GatewayEvent};
