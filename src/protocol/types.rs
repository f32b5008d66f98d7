//! Protocol-agnostic types for UI synchronization messages
//!
//! One message travels in each direction per processing cycle. Server
//! operations are produced by remote objects; client operations carry
//! user-triggered events and property changes back to the server.

use serde::Serialize;
use serde_json::{Map, Value};

/// One pending protocol mutation, queued by a remote object between
/// render cycles. Insertion order is emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
	/// Instantiate the client-side counterpart
	Create { object_type: String },
	/// Set one property to a wire-safe value
	Set { property: String, value: Value },
	/// Subscribe or unsubscribe the server from a client-side event
	Listen { event: String, enabled: bool },
	/// Invoke a method on the client-side counterpart
	Call { method: String, parameters: Value },
	/// Dispose the client-side counterpart
	Destroy,
}

/// Head of an outgoing message
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageHead {
	pub request_counter: u64,
}

/// One complete outgoing message: head plus ordered operations.
///
/// Operations are positional JSON arrays, e.g.
/// `["set", "r2", {"text": "foo"}]`.
#[derive(Debug, Clone, Serialize)]
pub struct ServerMessage {
	pub head: MessageHead,
	pub operations: Vec<Value>,
}

impl ServerMessage {
	/// Serialize to a single JSON line for the transport
	pub fn to_json(&self) -> Result<String, serde_json::Error> {
		serde_json::to_string(self)
	}

	pub fn operation_count(&self) -> usize {
		self.operations.len()
	}
}

/// One operation received from the client
#[derive(Debug, Clone, PartialEq)]
pub enum ClientOperation {
	/// Client-side property changes for one object
	Set { target: String, properties: Map<String, Value> },
	/// A client-side event the server listens to
	Notify { target: String, event: String, properties: Map<String, Value> },
	/// A method invocation addressed to the server-side object
	Call { target: String, method: String, parameters: Map<String, Value> },
}

impl ClientOperation {
	pub fn target(&self) -> &str {
		match self {
			ClientOperation::Set { target, .. } => target,
			ClientOperation::Notify { target, .. } => target,
			ClientOperation::Call { target, .. } => target,
		}
	}
}

/// One complete incoming message
#[derive(Debug, Clone)]
pub struct ClientMessage {
	pub head: Map<String, Value>,
	pub operations: Vec<ClientOperation>,
}


// vim: ts=4
