//! Operation handler capability
//!
//! A handler is associated with a remote object by the owning
//! application and receives the operations the client sends back for
//! that object. The remote object itself only stores the handler; the
//! session dispatch layer invokes it.

use serde_json::{Map, Value};

/// Receives client-originated operations for one remote object.
///
/// All methods have no-op defaults; implementors override what they
/// care about.
pub trait OperationHandler: Send + Sync {
	/// Property changes reported by the client
	fn handle_set(&self, _properties: &Map<String, Value>) {}

	/// An event the server subscribed to with a listen operation
	fn handle_notify(&self, _event: &str, _properties: &Map<String, Value>) {}

	/// A method invocation addressed to this object
	fn handle_call(&self, _method: &str, _parameters: &Map<String, Value>) {}
}

// vim: ts=4
