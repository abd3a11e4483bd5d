//! Gateway envelope
//!
//! Every frame shares the `{op, d, s, t}` shape. [`RawPayload`] is that shape
//! with the opcode left as a plain integer, so frames carrying opcodes this
//! catalog does not know still decode.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::direction::{GatewayData, Receivable, Sendable};
use crate::error::{Expected, ModelError, ModelResult};
use crate::protocol::OpCode;

/// Gateway envelope with an untyped body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPayload {
    /// Operation code
    pub op: u8,

    /// Event data, `null` when the opcode carries none
    #[serde(default)]
    pub d: Value,

    /// Sequence number (only for op=0 Dispatch)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s: Option<u64>,

    /// Event name (only for op=0 Dispatch)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<String>,
}

impl RawPayload {
    /// Wrap a body the client is allowed to send
    pub fn command<D: Sendable>(data: &D) -> ModelResult<Self> {
        Self::encode(data)
    }

    /// Classify the opcode
    ///
    /// Unknown opcodes are reported rather than rejected at decode time, so
    /// callers can skip frames from a newer protocol revision.
    pub fn opcode(&self) -> ModelResult<OpCode> {
        OpCode::from_u8(self.op).ok_or(ModelError::UnknownOpcode(self.op))
    }

    /// Decode the body of a payload the client is allowed to receive
    pub fn data<D: Receivable>(&self) -> ModelResult<D> {
        self.decode()
    }

    pub(crate) fn encode<D: GatewayData>(data: &D) -> ModelResult<Self> {
        let d = serde_json::to_value(data).map_err(|source| ModelError::Data {
            op: D::OPCODE,
            source,
        })?;

        Ok(Self {
            op: D::OPCODE.as_u8(),
            d,
            s: None,
            t: None,
        })
    }

    pub(crate) fn decode<D: GatewayData>(&self) -> ModelResult<D> {
        let op = self.opcode()?;
        if op != D::OPCODE {
            return Err(ModelError::UnexpectedOpcode {
                op,
                expected: Expected::OpCode(D::OPCODE),
            });
        }

        D::deserialize(&self.d).map_err(|source| ModelError::Data { op, source })
    }
}

impl std::fmt::Display for RawPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match OpCode::from_u8(self.op) {
            Some(op) => write!(f, "RawPayload(op={op}")?,
            None => write!(f, "RawPayload(op={} unknown", self.op)?,
        }
        if let Some(t) = &self.t {
            write!(f, ", t={t}")?;
        }
        if let Some(s) = self.s {
            write!(f, ", s={s}")?;
        }
        write!(f, ")")
    }
}

/// Borrowed envelope used when serializing typed payloads
#[derive(Serialize)]
pub(crate) struct Envelope<'a, D: Serialize> {
    op: u8,
    d: &'a D,
    #[serde(skip_serializing_if = "Option::is_none")]
    s: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    t: Option<&'a str>,
}

impl<'a, D: GatewayData> Envelope<'a, D> {
    pub(crate) fn new(d: &'a D) -> Self {
        Self {
            op: D::OPCODE.as_u8(),
            d,
            s: None,
            t: None,
        }
    }
}

impl<'a> Envelope<'a, Value> {
    pub(crate) fn dispatch(t: &'a str, s: u64, d: &'a Value) -> Self {
        Self {
            op: OpCode::Dispatch.as_u8(),
            d,
            s: Some(s),
            t: Some(t),
        }
    }
}
