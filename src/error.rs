//! Error types for RemotR operations

use std::error::Error;
use std::fmt;
use std::io;

use crate::protocol::ProtocolError;

/// Errors raised by the mutating entry points of a remote object.
///
/// All variants are fail-fast caller bugs. They are surfaced
/// synchronously and must not be caught and retried.
#[derive(Debug)]
pub enum RemoteError {
	/// A required identifier (property/event/method name) is absent,
	/// or a value cannot be represented on the wire
	InvalidArgument { message: String },

	/// Mutating call after destruction
	Destroyed,

	/// Mutating call from outside the owner context
	WrongContext,
}

impl fmt::Display for RemoteError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RemoteError::InvalidArgument { message } => write!(f, "{}", message),
			RemoteError::Destroyed => write!(f, "Remote object is destroyed"),
			RemoteError::WrongContext => write!(f, "Remote object called from wrong thread"),
		}
	}
}

impl Error for RemoteError {}

/// Session-level errors covering one request/response cycle
#[derive(Debug)]
pub enum SessionError {
	/// Remote object guard violation (nested)
	Remote(RemoteError),

	/// Protocol error (nested)
	Protocol(ProtocolError),

	/// I/O error from the transport
	Io(io::Error),
}

impl fmt::Display for SessionError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SessionError::Remote(e) => write!(f, "Remote object error: {}", e),
			SessionError::Protocol(e) => write!(f, "Protocol error: {}", e),
			SessionError::Io(e) => write!(f, "I/O error: {}", e),
		}
	}
}

impl Error for SessionError {}

impl From<RemoteError> for SessionError {
	fn from(e: RemoteError) -> Self {
		SessionError::Remote(e)
	}
}

impl From<ProtocolError> for SessionError {
	fn from(e: ProtocolError) -> Self {
		SessionError::Protocol(e)
	}
}

impl From<io::Error> for SessionError {
	fn from(e: io::Error) -> Self {
		SessionError::Io(e)
	}
}

/// Configuration loading errors
#[derive(Debug)]
pub enum ConfigError {
	/// Config file could not be read
	Read { path: String, source: io::Error },

	/// Config file could not be parsed
	Parse { path: String, message: String },

	/// A setting has an invalid value
	InvalidValue { key: String, message: String },
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ConfigError::Read { path, source } => {
				write!(f, "Cannot read config file {}: {}", path, source)
			}
			ConfigError::Parse { path, message } => {
				write!(f, "Cannot parse config file {}: {}", path, message)
			}
			ConfigError::InvalidValue { key, message } => {
				write!(f, "Invalid value for {}: {}", key, message)
			}
		}
	}
}

impl Error for ConfigError {}

// vim: ts=4
