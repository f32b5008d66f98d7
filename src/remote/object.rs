//! Server-side proxy of a client-side object
//!
//! A [`RemoteObject`] never writes to the wire directly. Its mutating
//! operations only append to a pending queue; the processing-cycle
//! driver flushes the queue into the protocol writer exactly once per
//! cycle via [`RemoteObject::render`]. Objects destroyed before their
//! first render produce no wire output at all.

use std::collections::BTreeMap;
use std::mem;
use std::sync::Arc;

use crate::context::OwnerContext;
use crate::error::RemoteError;
use crate::json::{self, PropertyValue};
use crate::protocol::writer::{ProtocolResult, ProtocolWriter};
use crate::protocol::Operation;
use crate::remote::handler::OperationHandler;

/// One server-side entity with a client-side counterpart
pub struct RemoteObject {
	id: String,
	create_type: Option<String>,
	queue: Vec<Operation>,
	destroyed: bool,
	ever_rendered: bool,
	owner: OwnerContext,
	handler: Option<Arc<dyn OperationHandler>>,
}

impl RemoteObject {
	/// Construct a proxy. With a create type, a create operation is
	/// owed to the client before anything else becomes visible; without
	/// one, the object is assumed to already exist on the client.
	pub fn new(id: &str, create_type: Option<&str>, owner: &OwnerContext) -> Self {
		RemoteObject {
			id: id.to_string(),
			create_type: create_type.map(str::to_string),
			queue: Vec::new(),
			destroyed: false,
			ever_rendered: false,
			owner: owner.clone(),
			handler: None,
		}
	}

	/// The immutable identifier supplied at construction
	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn is_destroyed(&self) -> bool {
		self.destroyed
	}

	pub fn set_handler(&mut self, handler: Arc<dyn OperationHandler>) {
		self.handler = Some(handler);
	}

	pub fn handler(&self) -> Option<Arc<dyn OperationHandler>> {
		self.handler.clone()
	}

	/// Queue a property change. Repeated sets of the same property are
	/// all preserved and emitted in call order.
	pub fn set(
		&mut self,
		ctx: &OwnerContext,
		name: &str,
		value: impl Into<PropertyValue>,
	) -> Result<(), RemoteError> {
		check_name(name, "Property name")?;
		self.check_state(ctx)?;
		let value = json::to_wire(value.into())?;
		self.queue.push(Operation::Set { property: name.to_string(), value });
		Ok(())
	}

	/// Queue an event subscription change
	pub fn listen(
		&mut self,
		ctx: &OwnerContext,
		event: &str,
		enabled: bool,
	) -> Result<(), RemoteError> {
		check_name(event, "Event name")?;
		self.check_state(ctx)?;
		self.queue.push(Operation::Listen { event: event.to_string(), enabled });
		Ok(())
	}

	/// Queue a method invocation. Parameters may be empty and are
	/// converted to their wire form now, so later mutation of caller
	/// data cannot affect the queued operation.
	pub fn call(
		&mut self,
		ctx: &OwnerContext,
		method: &str,
		parameters: BTreeMap<String, PropertyValue>,
	) -> Result<(), RemoteError> {
		check_name(method, "Method name")?;
		self.check_state(ctx)?;
		let parameters = json::params_to_wire(parameters)?;
		self.queue.push(Operation::Call { method: method.to_string(), parameters });
		Ok(())
	}

	/// Retire the object. If the client has already seen it, a destroy
	/// operation is queued; otherwise there is nothing to reverse and
	/// the object will simply never reach the wire.
	pub fn destroy(&mut self, ctx: &OwnerContext) -> Result<(), RemoteError> {
		self.check_state(ctx)?;
		self.destroyed = true;
		if self.ever_rendered {
			self.queue.push(Operation::Destroy);
		}
		Ok(())
	}

	/// Flush the pending queue into the writer.
	///
	/// Called by the processing-cycle driver exactly once per cycle,
	/// with exclusive access; not subject to the owner-context guard.
	/// The queue is cleared unconditionally, even when the writer
	/// rejects an append, so no operation is ever emitted twice.
	pub fn render(&mut self, writer: &mut dyn ProtocolWriter) -> ProtocolResult<()> {
		let queue = mem::take(&mut self.queue);
		if !self.ever_rendered {
			if self.destroyed {
				// Never materialized on the client; erase without a trace.
				return Ok(());
			}
			self.ever_rendered = true;
			if let Some(object_type) = self.create_type.clone() {
				self.emit(writer, Operation::Create { object_type })?;
			}
		}
		for operation in queue {
			self.emit(writer, operation)?;
		}
		Ok(())
	}

	fn emit(&self, writer: &mut dyn ProtocolWriter, operation: Operation) -> ProtocolResult<()> {
		match operation {
			Operation::Create { object_type } => writer.append_create(&self.id, &object_type),
			Operation::Set { property, value } => writer.append_set(&self.id, &property, value),
			Operation::Listen { event, enabled } => {
				writer.append_listen(&self.id, &event, enabled)
			}
			Operation::Call { method, parameters } => {
				writer.append_call(&self.id, &method, parameters)
			}
			Operation::Destroy => writer.append_destroy(&self.id),
		}
	}

	// Shared precondition of every mutating entry point. Destroyed
	// first, then context identity.
	fn check_state(&self, ctx: &OwnerContext) -> Result<(), RemoteError> {
		if self.destroyed {
			return Err(RemoteError::Destroyed);
		}
		if *ctx != self.owner {
			return Err(RemoteError::WrongContext);
		}
		Ok(())
	}
}

fn check_name(name: &str, what: &str) -> Result<(), RemoteError> {
	if name.is_empty() {
		return Err(RemoteError::InvalidArgument {
			message: format!("{} must not be empty", what),
		});
	}
	Ok(())
}

impl std::fmt::Debug for RemoteObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RemoteObject")
			.field("id", &self.id)
			.field("create_type", &self.create_type)
			.field("destroyed", &self.destroyed)
			.field("ever_rendered", &self.ever_rendered)
			.field("pending", &self.queue.len())
			.finish()
	}
}


// vim: ts=4
