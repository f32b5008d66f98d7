//! Remote object registry
//!
//! Holds every live remote object of one session, generates object
//! identifiers, and drives the per-cycle render pass in registration
//! order. Objects that were destroyed are reaped after the pass that
//! emitted (or skipped) their final state.

use std::collections::BTreeMap;

use crate::context::OwnerContext;
use crate::error::RemoteError;
use crate::logging::*;
use crate::protocol::writer::{ProtocolResult, ProtocolWriter};
use crate::remote::object::RemoteObject;

pub struct RemoteObjectRegistry {
	owner: OwnerContext,
	objects: BTreeMap<String, RemoteObject>,
	/// Registration order; render order
	order: Vec<String>,
	next_id: u64,
}

impl RemoteObjectRegistry {
	pub fn new(owner: &OwnerContext) -> Self {
		RemoteObjectRegistry {
			owner: owner.clone(),
			objects: BTreeMap::new(),
			order: Vec::new(),
			next_id: 1,
		}
	}

	/// Create a proxy for a new client-side object. A create operation
	/// is owed to the client before any other operation is visible.
	pub fn create(&mut self, object_type: &str) -> &mut RemoteObject {
		let id = self.next_object_id();
		let object = RemoteObject::new(&id, Some(object_type), &self.owner);
		self.insert(object)
	}

	/// Register a proxy for an object that already exists on the
	/// client. No create operation is ever emitted for it.
	pub fn register_existing(&mut self, id: &str) -> Result<&mut RemoteObject, RemoteError> {
		if self.objects.contains_key(id) {
			return Err(RemoteError::InvalidArgument {
				message: format!("Object id already in use: {}", id),
			});
		}
		let object = RemoteObject::new(id, None, &self.owner);
		Ok(self.insert(object))
	}

	pub fn get(&self, id: &str) -> Option<&RemoteObject> {
		self.objects.get(id)
	}

	pub fn get_mut(&mut self, id: &str) -> Option<&mut RemoteObject> {
		self.objects.get_mut(id)
	}

	pub fn len(&self) -> usize {
		self.objects.len()
	}

	pub fn is_empty(&self) -> bool {
		self.objects.is_empty()
	}

	/// Render every live object exactly once, in registration order,
	/// then reap destroyed objects.
	///
	/// A failing object does not stop the pass; every object still gets
	/// its render and queue clear. The first error is reported after
	/// the pass completes.
	pub fn render_all(&mut self, writer: &mut dyn ProtocolWriter) -> ProtocolResult<()> {
		let mut first_error = None;
		for id in &self.order {
			let object = match self.objects.get_mut(id) {
				Some(object) => object,
				None => continue,
			};
			if let Err(e) = object.render(writer) {
				warn!("Render failed for object {}: {}", id, e);
				if first_error.is_none() {
					first_error = Some(e);
				}
			}
		}
		self.reap();
		match first_error {
			Some(e) => Err(e),
			None => Ok(()),
		}
	}

	fn reap(&mut self) {
		let objects = &mut self.objects;
		self.order.retain(|id| {
			let destroyed = objects.get(id).map(RemoteObject::is_destroyed).unwrap_or(true);
			if destroyed {
				debug!("Reaping destroyed object {}", id);
				objects.remove(id);
			}
			!destroyed
		});
	}

	fn insert(&mut self, object: RemoteObject) -> &mut RemoteObject {
		let id = object.id().to_string();
		self.order.push(id.clone());
		self.objects.entry(id).or_insert(object)
	}

	fn next_object_id(&mut self) -> String {
		// Generated ids never collide with client-known ids registered
		// through register_existing, which are checked on insert.
		loop {
			let id = format!("r{}", self.next_id);
			self.next_id += 1;
			if !self.objects.contains_key(&id) {
				return id;
			}
		}
	}
}


// vim: ts=4
