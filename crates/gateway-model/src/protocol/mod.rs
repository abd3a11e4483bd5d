//! Gateway protocol constants
//!
//! Op codes and close codes fixed by the Discord Gateway protocol.

mod close_codes;
mod opcodes;

pub use close_codes::CloseCode;
pub use opcodes::OpCode;

/// Gateway protocol version these definitions describe
pub const GATEWAY_VERSION: u8 = 10;
