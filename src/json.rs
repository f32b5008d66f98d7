//! Wire-safe value conversion
//!
//! Remote object properties and call parameters accept several value
//! kinds through one tagged entry type. Conversion to the JSON wire
//! representation happens eagerly, at enqueue time, so a caller mutating
//! its own data after the call returns never affects what was queued.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::error::RemoteError;

/// A property or parameter value accepted by the remote object layer
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
	Int(i64),
	Float(f64),
	Bool(bool),
	Str(String),
	/// Arbitrary structured data, already in JSON form
	Structured(Value),
}

impl From<i32> for PropertyValue {
	fn from(v: i32) -> Self {
		PropertyValue::Int(v as i64)
	}
}

impl From<i64> for PropertyValue {
	fn from(v: i64) -> Self {
		PropertyValue::Int(v)
	}
}

impl From<f64> for PropertyValue {
	fn from(v: f64) -> Self {
		PropertyValue::Float(v)
	}
}

impl From<bool> for PropertyValue {
	fn from(v: bool) -> Self {
		PropertyValue::Bool(v)
	}
}

impl From<&str> for PropertyValue {
	fn from(v: &str) -> Self {
		PropertyValue::Str(v.to_string())
	}
}

impl From<String> for PropertyValue {
	fn from(v: String) -> Self {
		PropertyValue::Str(v)
	}
}

impl From<Value> for PropertyValue {
	fn from(v: Value) -> Self {
		PropertyValue::Structured(v)
	}
}

/// Convert a value to its wire representation.
///
/// Non-finite floats have no JSON representation and are rejected.
pub fn to_wire(value: PropertyValue) -> Result<Value, RemoteError> {
	match value {
		PropertyValue::Int(v) => Ok(Value::from(v)),
		PropertyValue::Float(v) => {
			if !v.is_finite() {
				return Err(RemoteError::InvalidArgument {
					message: format!("Value is not a valid JSON number: {}", v),
				});
			}
			Ok(Value::from(v))
		}
		PropertyValue::Bool(v) => Ok(Value::from(v)),
		PropertyValue::Str(v) => Ok(Value::from(v)),
		PropertyValue::Structured(v) => Ok(v),
	}
}

/// Convert a parameter mapping to a JSON object for a call operation.
///
/// An empty mapping converts to an empty object.
pub fn params_to_wire(params: BTreeMap<String, PropertyValue>) -> Result<Value, RemoteError> {
	let mut object = Map::new();
	for (name, value) in params {
		object.insert(name, to_wire(value)?);
	}
	Ok(Value::Object(object))
}


// vim: ts=4
