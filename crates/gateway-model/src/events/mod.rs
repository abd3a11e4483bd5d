//! Gateway dispatch events
//!
//! Event names for op 0 payloads and the typed READY body.

mod event_names;
mod ready;

pub use event_names::DispatchEventName;
pub use ready::{PartialApplication, ReadyData, ReadyUser, UnavailableGuild};
