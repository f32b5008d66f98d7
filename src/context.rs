//! Owner context tokens
//!
//! Every remote object is exclusively owned, for mutation purposes, by
//! the execution context that created it. The guard is an explicit
//! token compared by value at each mutating entry point. Tokens are
//! process-unique; cloning a token does not create a new context.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of the execution context permitted to mutate an object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerContext {
	id: u64,
}

impl OwnerContext {
	/// Allocate a fresh context identity
	pub fn new() -> Self {
		OwnerContext { id: NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed) }
	}
}

impl Default for OwnerContext {
	fn default() -> Self {
		OwnerContext::new()
	}
}


// vim: ts=4
