//! Model errors - raised when converting between the raw envelope and typed payloads

use thiserror::Error;

use crate::protocol::OpCode;

/// Which side of the connection a payload type belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Client to gateway
    Send,
    /// Gateway to client
    Receive,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Send => f.write_str("sendable"),
            Self::Receive => f.write_str("receivable"),
        }
    }
}

/// Model layer errors
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Unknown opcode: {0}")]
    UnknownOpcode(u8),

    #[error("Unknown close code: {0}")]
    UnknownCloseCode(u16),

    #[error("Unknown event name: {0}")]
    UnknownEventName(String),

    /// A known opcode arrived where a payload of another kind was expected
    #[error("Opcode {op} is not {expected}")]
    UnexpectedOpcode { op: OpCode, expected: Expected },

    #[error("Dispatch payload has no event name")]
    MissingEventName,

    #[error("Dispatch payload has no sequence number")]
    MissingSequence,

    #[error("Invalid data for {op}: {source}")]
    Data {
        op: OpCode,
        #[source]
        source: serde_json::Error,
    },
}

/// What a failed conversion was looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// Any opcode of the given direction
    Direction(Direction),
    /// One specific opcode
    OpCode(OpCode),
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direction(direction) => write!(f, "{direction}"),
            Self::OpCode(op) => write!(f, "{op}"),
        }
    }
}

/// Result type for model conversions
pub type ModelResult<T> = Result<T, ModelError>;
