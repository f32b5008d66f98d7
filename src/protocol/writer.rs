//! Outgoing message writer
//!
//! The remote object layer depends only on the [`ProtocolWriter`]
//! trait; [`MessageWriter`] is the production implementation, building
//! one positional-array JSON message per processing cycle. Append order
//! is message order. Consecutive property appends for the same target
//! coalesce into a single wire operation; an append for a different
//! target, or of a different kind, seals the pending operation first.

use serde_json::{Map, Value};
use std::collections::BTreeSet;

use super::error::ProtocolError;
use super::types::{MessageHead, ServerMessage};

/// Result type for protocol operations
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Sink for the ordered operations of one outgoing message.
///
/// Calls are made in the exact order operations were enqueued by the
/// remote objects; the implementation is responsible for serializing
/// them into one message per cycle.
pub trait ProtocolWriter {
	/// Instantiate an object on the client
	fn append_create(&mut self, target: &str, object_type: &str) -> ProtocolResult<()>;

	/// Set one property on an object
	fn append_set(&mut self, target: &str, property: &str, value: Value) -> ProtocolResult<()>;

	/// Enable or disable event notification for an object
	fn append_listen(&mut self, target: &str, event: &str, enabled: bool) -> ProtocolResult<()>;

	/// Invoke a method on an object
	fn append_call(&mut self, target: &str, method: &str, parameters: Value) -> ProtocolResult<()>;

	/// Dispose an object on the client
	fn append_destroy(&mut self, target: &str) -> ProtocolResult<()>;
}

// An operation still accepting merges. Create and Set absorb further
// set appends for the same target; Listen absorbs listen appends.
#[derive(Debug)]
enum PendingOperation {
	Create { target: String, object_type: String, properties: Map<String, Value> },
	Set { target: String, properties: Map<String, Value> },
	Listen { target: String, events: Map<String, Value> },
}

impl PendingOperation {
	fn seal(self) -> Value {
		match self {
			PendingOperation::Create { target, object_type, properties } => {
				serde_json::json!(["create", target, object_type, properties])
			}
			PendingOperation::Set { target, properties } => {
				serde_json::json!(["set", target, properties])
			}
			PendingOperation::Listen { target, events } => {
				serde_json::json!(["listen", target, events])
			}
		}
	}
}

/// Accumulates appended operations into one outgoing message
pub struct MessageWriter {
	head: MessageHead,
	operations: Vec<Value>,
	pending: Option<PendingOperation>,
	created: BTreeSet<String>,
}

impl MessageWriter {
	pub fn new(request_counter: u64) -> Self {
		MessageWriter {
			head: MessageHead { request_counter },
			operations: Vec::new(),
			pending: None,
			created: BTreeSet::new(),
		}
	}

	/// Seal the pending operation and return the finished message.
	///
	/// Consumes the writer; a new cycle needs a new writer.
	pub fn finish(mut self) -> ServerMessage {
		self.seal_pending();
		ServerMessage { head: self.head, operations: self.operations }
	}

	fn seal_pending(&mut self) {
		if let Some(pending) = self.pending.take() {
			self.operations.push(pending.seal());
		}
	}
}

impl ProtocolWriter for MessageWriter {
	fn append_create(&mut self, target: &str, object_type: &str) -> ProtocolResult<()> {
		if !self.created.insert(target.to_string()) {
			return Err(ProtocolError::DuplicateCreate { target: target.to_string() });
		}
		self.seal_pending();
		self.pending = Some(PendingOperation::Create {
			target: target.to_string(),
			object_type: object_type.to_string(),
			properties: Map::new(),
		});
		Ok(())
	}

	fn append_set(&mut self, target: &str, property: &str, value: Value) -> ProtocolResult<()> {
		match &mut self.pending {
			Some(PendingOperation::Create { target: t, properties, .. }) if t == target => {
				properties.insert(property.to_string(), value);
			}
			Some(PendingOperation::Set { target: t, properties }) if t == target => {
				properties.insert(property.to_string(), value);
			}
			_ => {
				self.seal_pending();
				let mut properties = Map::new();
				properties.insert(property.to_string(), value);
				self.pending =
					Some(PendingOperation::Set { target: target.to_string(), properties });
			}
		}
		Ok(())
	}

	fn append_listen(&mut self, target: &str, event: &str, enabled: bool) -> ProtocolResult<()> {
		match &mut self.pending {
			Some(PendingOperation::Listen { target: t, events }) if t == target => {
				events.insert(event.to_string(), Value::from(enabled));
			}
			_ => {
				self.seal_pending();
				let mut events = Map::new();
				events.insert(event.to_string(), Value::from(enabled));
				self.pending =
					Some(PendingOperation::Listen { target: target.to_string(), events });
			}
		}
		Ok(())
	}

	fn append_call(&mut self, target: &str, method: &str, parameters: Value) -> ProtocolResult<()> {
		self.seal_pending();
		self.operations.push(serde_json::json!(["call", target, method, parameters]));
		Ok(())
	}

	fn append_destroy(&mut self, target: &str) -> ProtocolResult<()> {
		self.seal_pending();
		self.operations.push(serde_json::json!(["destroy", target]));
		Ok(())
	}
}


// vim: ts=4
