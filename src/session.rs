//! UI session: one connected client
//!
//! A session owns the remote object registry and the request counter,
//! and performs the two halves of each processing cycle: dispatching
//! the operations of one incoming client message to object handlers,
//! then rendering every live object into the one outgoing message.

use uuid::Uuid;

use crate::context::OwnerContext;
use crate::error::SessionError;
use crate::logging::*;
use crate::protocol::{ClientMessage, ClientOperation, MessageWriter, ProtocolError, ServerMessage};
use crate::remote::RemoteObjectRegistry;

pub struct UiSession {
	id: Uuid,
	context: OwnerContext,
	registry: RemoteObjectRegistry,
	request_counter: u64,
	max_incoming_ops: usize,
}

impl UiSession {
	pub fn new(max_incoming_ops: usize) -> Self {
		let context = OwnerContext::new();
		let registry = RemoteObjectRegistry::new(&context);
		UiSession { id: Uuid::new_v4(), context, registry, request_counter: 0, max_incoming_ops }
	}

	pub fn id(&self) -> Uuid {
		self.id
	}

	/// Token for the execution context that owns this session's objects
	pub fn context(&self) -> OwnerContext {
		self.context.clone()
	}

	pub fn registry(&mut self) -> &mut RemoteObjectRegistry {
		&mut self.registry
	}

	pub fn request_counter(&self) -> u64 {
		self.request_counter
	}

	/// Dispatch every operation of one incoming message to the handler
	/// of its target object.
	///
	/// Unknown targets and objects without a handler are skipped: the
	/// client may still be reporting events for an object the server
	/// destroyed in an earlier cycle.
	pub fn process_message(&mut self, message: &ClientMessage) -> Result<(), SessionError> {
		if message.operations.len() > self.max_incoming_ops {
			return Err(SessionError::Protocol(ProtocolError::TooManyOperations {
				count: message.operations.len(),
				max: self.max_incoming_ops,
			}));
		}
		for operation in &message.operations {
			let target = operation.target();
			let handler = match self.registry.get(target) {
				Some(object) => object.handler(),
				None => {
					debug!("Skipping operation for unknown target {}", target);
					continue;
				}
			};
			let handler = match handler {
				Some(handler) => handler,
				None => {
					debug!("No handler for target {}", target);
					continue;
				}
			};
			match operation {
				ClientOperation::Set { properties, .. } => handler.handle_set(properties),
				ClientOperation::Notify { event, properties, .. } => {
					handler.handle_notify(event, properties)
				}
				ClientOperation::Call { method, parameters, .. } => {
					handler.handle_call(method, parameters)
				}
			}
		}
		Ok(())
	}

	/// Render the cycle's outgoing message: every live object flushes
	/// its pending queue exactly once, in registration order.
	pub fn render_cycle(&mut self) -> Result<ServerMessage, SessionError> {
		let mut writer = MessageWriter::new(self.request_counter);
		self.registry.render_all(&mut writer)?;
		self.request_counter += 1;
		let message = writer.finish();
		debug!(
			"Session {} rendered cycle {} with {} operations",
			self.id,
			self.request_counter - 1,
			message.operation_count()
		);
		Ok(message)
	}
}

// vim: ts=4
