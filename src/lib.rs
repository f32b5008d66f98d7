//! # RemotR - Remote Object Synchronization for Server-Driven UIs
//!
//! RemotR mirrors server-side widget state to a browser client over a
//! batched wire protocol. Server-side proxies ([`RemoteObject`])
//! accumulate pending operations; once per processing cycle every live
//! proxy flushes its queue, exactly once, into one ordered outgoing
//! message.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use remotr::session::UiSession;
//!
//! let mut session = UiSession::new(1024);
//! let ctx = session.context();
//!
//! let button = session.registry().create("ui.Button");
//! button.set(&ctx, "text", "Ok")?;
//! button.listen(&ctx, "Selection", true)?;
//!
//! let message = session.render_cycle()?;
//! println!("{}", message.to_json()?);
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod json;
pub mod logging;
pub mod protocol;
pub mod remote;
pub mod serve;
pub mod session;

// Re-export commonly used types
pub use config::Config;
pub use context::OwnerContext;
pub use error::{ConfigError, RemoteError, SessionError};
pub use json::PropertyValue;
pub use protocol::{MessageWriter, Operation, ProtocolError, ProtocolWriter, ServerMessage};
pub use remote::{OperationHandler, RemoteObject, RemoteObjectRegistry};
pub use session::UiSession;

// vim: ts=4
