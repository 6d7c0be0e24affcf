//! Form Messaging - typed listeners for messages posted by the form iframe
//!
//! The iframe talks to the host page over `postMessage`. Every embed on the
//! page shares that one channel, so each listener filters on the event name
//! and the embed id before it calls user code.
//!
//! # Architecture
//!
//! 1. **Parse at the boundary**: raw `data` becomes an [`InboundMessage`] once,
//!    missing or malformed fields become `None`, never an error
//! 2. **Fail closed**: a message that doesn't match is dropped silently
//! 3. **Stateless handlers**: a handler is a closure, register it anywhere

pub mod dispatcher;
pub mod error;
pub mod events;
pub mod handler;
pub mod protocol;

pub use dispatcher::MessageDispatcher;
pub use error::{MessageError, Result};
pub use events::{FormEventKind, UnknownEventKind};
pub use handler::*;
pub use protocol::{InboundMessage, MessageEvent, Payload};
