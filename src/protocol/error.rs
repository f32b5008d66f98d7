//! Protocol error types

use std::fmt;
use std::io;

/// Protocol error type
#[derive(Debug)]
pub enum ProtocolError {
	/// Incoming message violates the expected format
	Malformed { message: String },

	/// A create operation was appended twice for one target in one message
	DuplicateCreate { target: String },

	/// Incoming message exceeds the configured operation cap
	TooManyOperations { count: usize, max: usize },

	/// JSON encoding/decoding error
	Json(serde_json::Error),

	/// I/O error from the transport
	Io(io::Error),
}

impl fmt::Display for ProtocolError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ProtocolError::Malformed { message } => write!(f, "Malformed message: {}", message),
			ProtocolError::DuplicateCreate { target } => {
				write!(f, "Duplicate create operation for target {}", target)
			}
			ProtocolError::TooManyOperations { count, max } => {
				write!(f, "Message contains {} operations, limit is {}", count, max)
			}
			ProtocolError::Json(e) => write!(f, "JSON error: {}", e),
			ProtocolError::Io(e) => write!(f, "I/O error: {}", e),
		}
	}
}

impl std::error::Error for ProtocolError {}

impl From<serde_json::Error> for ProtocolError {
	fn from(e: serde_json::Error) -> Self {
		ProtocolError::Json(e)
	}
}

impl From<io::Error> for ProtocolError {
	fn from(e: io::Error) -> Self {
		ProtocolError::Io(e)
	}
}

// vim: ts=4
