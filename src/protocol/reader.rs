//! Incoming message parsing
//!
//! Client messages use the same positional-array operation format as
//! outgoing messages. Parsing is strict: anything outside the expected
//! shape is a protocol violation, reported with enough context to
//! identify the offending operation.

use serde_json::{Map, Value};

use super::error::ProtocolError;
use super::types::{ClientMessage, ClientOperation};
use super::writer::ProtocolResult;

/// Parse one complete client message from its JSON text
pub fn parse_message(raw: &str) -> ProtocolResult<ClientMessage> {
	let value: Value = serde_json::from_str(raw)?;
	let object = value
		.as_object()
		.ok_or_else(|| malformed("message is not a JSON object"))?;

	let head = match object.get("head") {
		Some(Value::Object(head)) => head.clone(),
		Some(_) => return Err(malformed("head is not a JSON object")),
		None => Map::new(),
	};

	let raw_operations = match object.get("operations") {
		Some(Value::Array(operations)) => operations,
		Some(_) => return Err(malformed("operations is not a JSON array")),
		None => return Err(malformed("message has no operations")),
	};

	let mut operations = Vec::with_capacity(raw_operations.len());
	for (index, raw) in raw_operations.iter().enumerate() {
		let operation = parse_operation(raw)
			.map_err(|e| malformed(&format!("operation {}: {}", index, e)))?;
		operations.push(operation);
	}

	Ok(ClientMessage { head, operations })
}

fn parse_operation(raw: &Value) -> ProtocolResult<ClientOperation> {
	let parts = raw.as_array().ok_or_else(|| malformed("not a JSON array"))?;
	let name = parts
		.first()
		.and_then(Value::as_str)
		.ok_or_else(|| malformed("missing operation name"))?;

	match name {
		"set" => {
			check_arity(parts, 3)?;
			Ok(ClientOperation::Set {
				target: string_at(parts, 1, "target")?,
				properties: object_at(parts, 2, "properties")?,
			})
		}
		"notify" => {
			check_arity(parts, 4)?;
			Ok(ClientOperation::Notify {
				target: string_at(parts, 1, "target")?,
				event: string_at(parts, 2, "event")?,
				properties: object_at(parts, 3, "properties")?,
			})
		}
		"call" => {
			check_arity(parts, 4)?;
			Ok(ClientOperation::Call {
				target: string_at(parts, 1, "target")?,
				method: string_at(parts, 2, "method")?,
				parameters: object_at(parts, 3, "parameters")?,
			})
		}
		other => Err(malformed(&format!("unknown operation \"{}\"", other))),
	}
}

fn check_arity(parts: &[Value], expected: usize) -> ProtocolResult<()> {
	if parts.len() != expected {
		return Err(malformed(&format!(
			"expected {} elements, got {}",
			expected,
			parts.len()
		)));
	}
	Ok(())
}

fn string_at(parts: &[Value], index: usize, what: &str) -> ProtocolResult<String> {
	parts[index]
		.as_str()
		.map(str::to_string)
		.ok_or_else(|| malformed(&format!("{} is not a string", what)))
}

fn object_at(parts: &[Value], index: usize, what: &str) -> ProtocolResult<Map<String, Value>> {
	parts[index]
		.as_object()
		.cloned()
		.ok_or_else(|| malformed(&format!("{} is not a JSON object", what)))
}

fn malformed(message: &str) -> ProtocolError {
	ProtocolError::Malformed { message: message.to_string() }
}


// vim: ts=4
