//! Typed gateway payloads
//!
//! [`GatewayCommand`] holds every payload a client sends and [`GatewayEvent`]
//! every payload it receives. Both are keyed on the opcode and serialize to
//! the shared `{op, d, s, t}` envelope.

use serde::{Deserialize, Serialize, Serializer};

use super::commands::{
    Heartbeat, Identify, RequestGuildMembers, RequestSoundboardSounds, Resume, VoiceStateUpdate,
};
use super::envelope::{Envelope, RawPayload};
use super::events::{Dispatch, HeartbeatAck, Hello, InvalidSession, Reconnect};
use crate::error::{Direction, Expected, ModelError, ModelResult};
use crate::presence::PresenceUpdateData;
use crate::protocol::OpCode;

/// Payload sent from client to gateway
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawPayload")]
pub enum GatewayCommand {
    Heartbeat(Heartbeat),
    Identify(Identify),
    PresenceUpdate(PresenceUpdateData),
    VoiceStateUpdate(VoiceStateUpdate),
    Resume(Resume),
    RequestGuildMembers(RequestGuildMembers),
    RequestSoundboardSounds(RequestSoundboardSounds),
}

impl GatewayCommand {
    #[must_use]
    pub const fn opcode(&self) -> OpCode {
        match self {
            Self::Heartbeat(_) => OpCode::Heartbeat,
            Self::Identify(_) => OpCode::Identify,
            Self::PresenceUpdate(_) => OpCode::PresenceUpdate,
            Self::VoiceStateUpdate(_) => OpCode::VoiceStateUpdate,
            Self::Resume(_) => OpCode::Resume,
            Self::RequestGuildMembers(_) => OpCode::RequestGuildMembers,
            Self::RequestSoundboardSounds(_) => OpCode::RequestSoundboardSounds,
        }
    }

    /// Convert into the untyped envelope
    pub fn to_raw(&self) -> ModelResult<RawPayload> {
        match self {
            Self::Heartbeat(d) => RawPayload::command(d),
            Self::Identify(d) => RawPayload::command(d),
            Self::PresenceUpdate(d) => RawPayload::command(d),
            Self::VoiceStateUpdate(d) => RawPayload::command(d),
            Self::Resume(d) => RawPayload::command(d),
            Self::RequestGuildMembers(d) => RawPayload::command(d),
            Self::RequestSoundboardSounds(d) => RawPayload::command(d),
        }
    }
}

impl Serialize for GatewayCommand {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Heartbeat(d) => Envelope::new(d).serialize(serializer),
            Self::Identify(d) => Envelope::new(d).serialize(serializer),
            Self::PresenceUpdate(d) => Envelope::new(d).serialize(serializer),
            Self::VoiceStateUpdate(d) => Envelope::new(d).serialize(serializer),
            Self::Resume(d) => Envelope::new(d).serialize(serializer),
            Self::RequestGuildMembers(d) => Envelope::new(d).serialize(serializer),
            Self::RequestSoundboardSounds(d) => Envelope::new(d).serialize(serializer),
        }
    }
}

impl TryFrom<RawPayload> for GatewayCommand {
    type Error = ModelError;

    fn try_from(raw: RawPayload) -> Result<Self, Self::Error> {
        let op = raw.opcode()?;
        tracing::trace!(%op, "Classifying gateway command");

        match op {
            OpCode::Heartbeat => raw.decode().map(Self::Heartbeat),
            OpCode::Identify => raw.decode().map(Self::Identify),
            OpCode::PresenceUpdate => raw.decode().map(Self::PresenceUpdate),
            OpCode::VoiceStateUpdate => raw.decode().map(Self::VoiceStateUpdate),
            OpCode::Resume => raw.decode().map(Self::Resume),
            OpCode::RequestGuildMembers => raw.decode().map(Self::RequestGuildMembers),
            OpCode::RequestSoundboardSounds => raw.decode().map(Self::RequestSoundboardSounds),
            OpCode::Dispatch
            | OpCode::Reconnect
            | OpCode::InvalidSession
            | OpCode::Hello
            | OpCode::HeartbeatAck => Err(ModelError::UnexpectedOpcode {
                op,
                expected: Expected::Direction(Direction::Send),
            }),
        }
    }
}

macro_rules! impl_from_body {
    ($union:ident: $($variant:ident($body:ty)),+ $(,)?) => {
        $(impl From<$body> for $union {
            fn from(body: $body) -> Self {
                Self::$variant(body)
            }
        })+
    };
}

impl_from_body!(GatewayCommand:
    Heartbeat(Heartbeat),
    Identify(Identify),
    PresenceUpdate(PresenceUpdateData),
    VoiceStateUpdate(VoiceStateUpdate),
    Resume(Resume),
    RequestGuildMembers(RequestGuildMembers),
    RequestSoundboardSounds(RequestSoundboardSounds),
);

/// Payload sent from gateway to client
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawPayload")]
pub enum GatewayEvent {
    Dispatch(Dispatch),
    Heartbeat(Heartbeat),
    Reconnect(Reconnect),
    InvalidSession(InvalidSession),
    Hello(Hello),
    HeartbeatAck(HeartbeatAck),
}

impl GatewayEvent {
    #[must_use]
    pub const fn opcode(&self) -> OpCode {
        match self {
            Self::Dispatch(_) => OpCode::Dispatch,
            Self::Heartbeat(_) => OpCode::Heartbeat,
            Self::Reconnect(_) => OpCode::Reconnect,
            Self::InvalidSession(_) => OpCode::InvalidSession,
            Self::Hello(_) => OpCode::Hello,
            Self::HeartbeatAck(_) => OpCode::HeartbeatAck,
        }
    }

    /// Convert into the untyped envelope
    pub fn to_raw(&self) -> ModelResult<RawPayload> {
        match self {
            Self::Dispatch(dispatch) => Ok(dispatch.clone().into()),
            Self::Heartbeat(d) => RawPayload::encode(d),
            Self::Reconnect(d) => RawPayload::encode(d),
            Self::InvalidSession(d) => RawPayload::encode(d),
            Self::Hello(d) => RawPayload::encode(d),
            Self::HeartbeatAck(d) => RawPayload::encode(d),
        }
    }

    /// Sequence number, only present on dispatches
    #[must_use]
    pub fn sequence(&self) -> Option<u64> {
        match self {
            Self::Dispatch(dispatch) => Some(dispatch.sequence),
            _ => None,
        }
    }
}

impl Serialize for GatewayEvent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Dispatch(d) => {
                Envelope::dispatch(&d.event_name, d.sequence, &d.data).serialize(serializer)
            }
            Self::Heartbeat(d) => Envelope::new(d).serialize(serializer),
            Self::Reconnect(d) => Envelope::new(d).serialize(serializer),
            Self::InvalidSession(d) => Envelope::new(d).serialize(serializer),
            Self::Hello(d) => Envelope::new(d).serialize(serializer),
            Self::HeartbeatAck(d) => Envelope::new(d).serialize(serializer),
        }
    }
}

impl TryFrom<RawPayload> for GatewayEvent {
    type Error = ModelError;

    fn try_from(raw: RawPayload) -> Result<Self, Self::Error> {
        let op = match raw.opcode() {
            Ok(op) => op,
            Err(err) => {
                tracing::warn!(op = raw.op, "Received unknown gateway opcode");
                return Err(err);
            }
        };
        tracing::trace!(%op, "Classifying gateway event");

        match op {
            OpCode::Dispatch => Dispatch::try_from(raw).map(Self::Dispatch),
            OpCode::Heartbeat => raw.data().map(Self::Heartbeat),
            OpCode::Reconnect => raw.data().map(Self::Reconnect),
            OpCode::InvalidSession => raw.data().map(Self::InvalidSession),
            OpCode::Hello => raw.data().map(Self::Hello),
            OpCode::HeartbeatAck => raw.data().map(Self::HeartbeatAck),
            OpCode::Identify
            | OpCode::PresenceUpdate
            | OpCode::VoiceStateUpdate
            | OpCode::Resume
            | OpCode::RequestGuildMembers
            | OpCode::RequestSoundboardSounds => Err(ModelError::UnexpectedOpcode {
                op,
                expected: Expected::Direction(Direction::Receive),
            }),
        }
    }
}

impl_from_body!(GatewayEvent:
    Dispatch(Dispatch),
    Heartbeat(Heartbeat),
    Reconnect(Reconnect),
    InvalidSession(InvalidSession),
    Hello(Hello),
    HeartbeatAck(HeartbeatAck),
);
