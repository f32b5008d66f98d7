//! Unified configuration system for RemotR
//!
//! The configuration follows a priority chain:
//! 1. Built-in defaults (Config::default())
//! 2. Config file (TOML, passed explicitly or per-profile)
//! 3. Environment variables (REMOTR_* prefix)
//! 4. CLI flags (highest priority, applied by the binary)

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::error::ConfigError;

/// Unified configuration for the UI synchronization server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
	/// TCP address to listen on
	pub listen: String,

	/// Serve a single session over stdio instead of TCP
	pub use_stdio: bool,

	/// Profile name for configuration isolation
	pub profile: String,

	/// Default tracing filter when RUST_LOG is unset
	pub log_filter: String,

	/// Safety cap on operations accepted per client message
	pub max_incoming_ops: usize,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			listen: "127.0.0.1:8743".to_string(),
			use_stdio: false,
			profile: "default".to_string(),
			log_filter: "info".to_string(),
			max_incoming_ops: 1024,
		}
	}
}

impl Config {
	/// Load configuration: defaults, then the optional config file,
	/// then environment overrides.
	pub fn load(file: Option<&Path>) -> Result<Config, ConfigError> {
		let mut config = match file {
			Some(path) => Config::from_file(path)?,
			None => Config::default(),
		};
		config.apply_env();
		config.validate()?;
		Ok(config)
	}

	fn from_file(path: &Path) -> Result<Config, ConfigError> {
		let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
			path: path.display().to_string(),
			source: e,
		})?;
		toml::from_str(&contents).map_err(|e| ConfigError::Parse {
			path: path.display().to_string(),
			message: e.to_string(),
		})
	}

	fn apply_env(&mut self) {
		if let Ok(listen) = env::var("REMOTR_LISTEN") {
			self.listen = listen;
		}
		if let Ok(stdio) = env::var("REMOTR_STDIO") {
			self.use_stdio = stdio == "1" || stdio.eq_ignore_ascii_case("true");
		}
		if let Ok(filter) = env::var("REMOTR_LOG_FILTER") {
			self.log_filter = filter;
		}
		if let Ok(max) = env::var("REMOTR_MAX_INCOMING_OPS") {
			if let Ok(max) = max.parse() {
				self.max_incoming_ops = max;
			}
		}
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.max_incoming_ops == 0 {
			return Err(ConfigError::InvalidValue {
				key: "maxIncomingOps".to_string(),
				message: "must be greater than zero".to_string(),
			});
		}
		if !self.use_stdio && self.listen.parse::<std::net::SocketAddr>().is_err() {
			return Err(ConfigError::InvalidValue {
				key: "listen".to_string(),
				message: format!("not a valid socket address: {}", self.listen),
			});
		}
		Ok(())
	}
}

// vim: ts=4
