//! Direction capability markers
//!
//! A payload body is tied to one opcode through [`GatewayData`]. Whether a
//! client may send or receive it is expressed by implementing [`Sendable`],
//! [`Receivable`], or both. The markers have no runtime effect; they only let
//! generic send/receive paths demand the right capability at compile time.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::protocol::OpCode;

/// Body of the `d` field for a single opcode
pub trait GatewayData: Serialize + DeserializeOwned {
    /// Opcode the body is sent under
    const OPCODE: OpCode;
}

/// Body a client may send to the gateway
pub trait Sendable: GatewayData {}

/// Body a client may receive from the gateway
pub trait Receivable: GatewayData {}

/// Implements [`GatewayData`] plus the listed direction markers
macro_rules! gateway_data {
    ($ty:ty => $op:ident: $($marker:ident),+) => {
        impl $crate::payloads::GatewayData for $ty {
            const OPCODE: $crate::protocol::OpCode = $crate::protocol::OpCode::$op;
        }
        $(impl $crate::payloads::$marker for $ty {})+
    };
}

pub(crate) use gateway_data;
