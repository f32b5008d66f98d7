//! Batched wire protocol
//!
//! This module provides the message layer between the server-side
//! remote objects and the client. The remote object layer depends only
//! on the [`ProtocolWriter`] trait; one message is produced per
//! processing cycle, with append order preserved as message order.

pub mod error;
pub mod reader;
pub mod types;
pub mod writer;

// Re-export public API
pub use error::ProtocolError;
pub use reader::parse_message;
pub use types::{ClientMessage, ClientOperation, MessageHead, Operation, ServerMessage};
pub use writer::{MessageWriter, ProtocolResult, ProtocolWriter};

// vim: ts=4
