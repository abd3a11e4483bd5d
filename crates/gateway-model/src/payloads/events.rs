//! Server payload definitions
//!
//! Bodies of the opcodes the gateway sends to a client.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use super::direction::gateway_data;
use super::envelope::RawPayload;
use crate::error::{Expected, ModelError, ModelResult};
use crate::events::DispatchEventName;
use crate::protocol::OpCode;

/// Payload for op 10 (Hello)
///
/// Sent by the server immediately after connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hello {
    /// Heartbeat interval in milliseconds
    pub heartbeat_interval: u64,
}

gateway_data!(Hello => Hello: Receivable);

impl Hello {
    #[must_use]
    pub fn new(heartbeat_interval: u64) -> Self {
        Self { heartbeat_interval }
    }

    /// Heartbeat interval as a `Duration`
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.heartbeat_interval)
    }
}

/// Payload for op 11 (Heartbeat ACK)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeartbeatAck(pub Option<u64>);

gateway_data!(HeartbeatAck => HeartbeatAck: Receivable);

/// Payload for op 9 (Invalid Session)
///
/// The body says whether the session may be resumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvalidSession(pub bool);

gateway_data!(InvalidSession => InvalidSession: Receivable);

impl InvalidSession {
    #[must_use]
    pub const fn resumable(self) -> bool {
        self.0
    }
}

/// Payload for op 7 (Reconnect); the body is always `null`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Reconnect;

gateway_data!(Reconnect => Reconnect: Receivable);

/// Op 0 (Dispatch) payload
///
/// Unlike other payloads the event name and sequence number are required.
/// The body stays untyped until the consumer picks a type for the event.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    /// Event name from the `t` field
    pub event_name: String,

    /// Sequence number from the `s` field
    pub sequence: u64,

    /// Event data from the `d` field
    pub data: Value,
}

impl Dispatch {
    #[must_use]
    pub fn new(event: DispatchEventName, sequence: u64, data: Value) -> Self {
        Self {
            event_name: event.as_str().to_string(),
            sequence,
            data,
        }
    }

    /// Classify the event name
    ///
    /// Returns `None` for events newer than this catalog.
    pub fn event(&self) -> Option<DispatchEventName> {
        let event = DispatchEventName::parse(&self.event_name);
        if event.is_none() {
            tracing::debug!(event = %self.event_name, sequence = self.sequence, "Unrecognized dispatch event");
        }
        event
    }

    /// Decode the event data into a concrete type
    pub fn data_as<T: DeserializeOwned>(&self) -> ModelResult<T> {
        T::deserialize(&self.data).map_err(|source| ModelError::Data {
            op: OpCode::Dispatch,
            source,
        })
    }
}

impl TryFrom<RawPayload> for Dispatch {
    type Error = ModelError;

    fn try_from(raw: RawPayload) -> Result<Self, Self::Error> {
        let op = raw.opcode()?;
        if op != OpCode::Dispatch {
            return Err(ModelError::UnexpectedOpcode {
                op,
                expected: Expected::OpCode(OpCode::Dispatch),
            });
        }

        Ok(Self {
            event_name: raw.t.ok_or(ModelError::MissingEventName)?,
            sequence: raw.s.ok_or(ModelError::MissingSequence)?,
            data: raw.d,
        })
    }
}

impl From<Dispatch> for RawPayload {
    fn from(dispatch: Dispatch) -> Self {
        Self {
            op: OpCode::Dispatch.as_u8(),
            d: dispatch.data,
            s: Some(dispatch.sequence),
            t: Some(dispatch.event_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ReadyData;
    use serde_json::json;

    #[test]
    fn test_hello_interval() {
        let hello: Hello = serde_json::from_value(json!({"heartbeat_interval": 45000})).unwrap();
        assert_eq!(hello, Hello::new(45_000));
        assert_eq!(hello.interval(), Duration::from_secs(45));
    }

    #[test]
    fn test_invalid_session_body() {
        let resumable: InvalidSession = serde_json::from_str("true").unwrap();
        assert!(resumable.resumable());
        assert_eq!(serde_json::to_string(&InvalidSession(false)).unwrap(), "false");
    }

    #[test]
    fn test_reconnect_body_is_null() {
        assert_eq!(serde_json::to_value(Reconnect).unwrap(), Value::Null);
        let parsed: Reconnect = serde_json::from_value(Value::Null).unwrap();
        assert_eq!(parsed, Reconnect);
    }

    #[test]
    fn test_heartbeat_ack_body() {
        let ack: HeartbeatAck = serde_json::from_value(Value::Null).unwrap();
        assert_eq!(ack, HeartbeatAck(None));
    }

    #[test]
    fn test_dispatch_requires_name_and_sequence() {
        let no_name = RawPayload {
            op: 0,
            d: json!({}),
            s: Some(1),
            t: None,
        };
        assert!(matches!(Dispatch::try_from(no_name), Err(ModelError::MissingEventName)));

        let no_seq = RawPayload {
            op: 0,
            d: json!({}),
            s: None,
            t: Some("READY".to_string()),
        };
        assert!(matches!(Dispatch::try_from(no_seq), Err(ModelError::MissingSequence)));
    }

    #[test]
    fn test_dispatch_from_other_opcode() {
        let raw = RawPayload {
            op: 11,
            d: Value::Null,
            s: None,
            t: None,
        };
        assert!(matches!(
            Dispatch::try_from(raw),
            Err(ModelError::UnexpectedOpcode { op: OpCode::HeartbeatAck, .. })
        ));
    }

    #[test]
    fn test_dispatch_event_classification() {
        let known = Dispatch::new(DispatchEventName::MessageCreate, 3, json!({}));
        assert_eq!(known.event_name, "MESSAGE_CREATE");
        assert_eq!(known.event(), Some(DispatchEventName::MessageCreate));

        let unknown = Dispatch {
            event_name: "SOME_FUTURE_EVENT".to_string(),
            sequence: 4,
            data: json!({}),
        };
        assert_eq!(unknown.event(), None);
    }

    #[test]
    fn test_dispatch_typed_data() {
        let dispatch = Dispatch::new(
            DispatchEventName::Ready,
            1,
            json!({
                "v": 10,
                "user": {"id": "1", "username": "bot", "discriminator": "0"},
                "guilds": [],
                "session_id": "abc",
                "resume_gateway_url": "wss://gateway.discord.gg",
                "application": {"id": "1", "flags": 0}
            }),
        );

        let ready: ReadyData = dispatch.data_as().unwrap();
        assert_eq!(ready.session_id, "abc");
        assert!(!ready.user.bot);

        assert!(matches!(
            dispatch.data_as::<Hello>(),
            Err(ModelError::Data { op: OpCode::Dispatch, .. })
        ));
    }

    #[test]
    fn test_dispatch_raw_round_trip() {
        let dispatch = Dispatch::new(DispatchEventName::TypingStart, 9, json!({"channel_id": "1"}));
        let raw = RawPayload::from(dispatch.clone());
        assert_eq!(raw.op, 0);
        assert_eq!(raw.s, Some(9));
        assert_eq!(raw.t.as_deref(), Some("TYPING_START"));

        assert_eq!(Dispatch::try_from(raw).unwrap(), dispatch);
    }
}
