//! Configuration loading tests
//!
//! Covers the priority chain: built-in defaults, TOML config file,
//! REMOTR_* environment variables. Tests that touch process-global
//! environment variables serialize on a shared lock.

use std::fs;
use std::sync::Mutex;

use tempfile::TempDir;

use remotr::config::Config;
use remotr::error::ConfigError;

// Config::load reads the process environment; keep loads serialized.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
	let path = dir.path().join("config.toml");
	fs::write(&path, contents).unwrap();
	path
}

#[test]
fn test_defaults() {
	let _guard = ENV_LOCK.lock().unwrap();

	let config = Config::load(None).unwrap();

	assert_eq!(config.listen, "127.0.0.1:8743");
	assert!(!config.use_stdio);
	assert_eq!(config.profile, "default");
	assert_eq!(config.max_incoming_ops, 1024);
}

#[test]
fn test_file_overrides_defaults() {
	let _guard = ENV_LOCK.lock().unwrap();
	let dir = TempDir::new().unwrap();
	let path = write_config(
		&dir,
		r#"
			listen = "0.0.0.0:9000"
			maxIncomingOps = 16
		"#,
	);

	let config = Config::load(Some(&path)).unwrap();

	assert_eq!(config.listen, "0.0.0.0:9000");
	assert_eq!(config.max_incoming_ops, 16);
	// Untouched settings keep their defaults.
	assert_eq!(config.log_filter, "info");
}

#[test]
fn test_env_overrides_file() {
	let _guard = ENV_LOCK.lock().unwrap();
	let dir = TempDir::new().unwrap();
	let path = write_config(&dir, r#"listen = "0.0.0.0:9000""#);

	std::env::set_var("REMOTR_LISTEN", "127.0.0.1:7000");
	std::env::set_var("REMOTR_STDIO", "true");
	let result = Config::load(Some(&path));
	std::env::remove_var("REMOTR_LISTEN");
	std::env::remove_var("REMOTR_STDIO");

	let config = result.unwrap();
	assert_eq!(config.listen, "127.0.0.1:7000");
	assert!(config.use_stdio);
}

#[test]
fn test_invalid_toml_is_a_parse_error() {
	let _guard = ENV_LOCK.lock().unwrap();
	let dir = TempDir::new().unwrap();
	let path = write_config(&dir, "{ not toml");

	let err = Config::load(Some(&path)).unwrap_err();

	assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_missing_file_is_a_read_error() {
	let _guard = ENV_LOCK.lock().unwrap();
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("absent.toml");

	let err = Config::load(Some(&path)).unwrap_err();

	assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_zero_operation_cap_is_rejected() {
	let _guard = ENV_LOCK.lock().unwrap();
	let dir = TempDir::new().unwrap();
	let path = write_config(&dir, "maxIncomingOps = 0");

	let err = Config::load(Some(&path)).unwrap_err();

	assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn test_unparsable_listen_address_is_rejected() {
	let _guard = ENV_LOCK.lock().unwrap();
	let dir = TempDir::new().unwrap();
	let path = write_config(&dir, r#"listen = "not-an-address""#);

	let err = Config::load(Some(&path)).unwrap_err();

	assert!(matches!(err, ConfigError::InvalidValue { key, .. } if key == "listen"));
}

#[test]
fn test_stdio_mode_skips_listen_validation() {
	let _guard = ENV_LOCK.lock().unwrap();
	let dir = TempDir::new().unwrap();
	let path = write_config(
		&dir,
		r#"
			listen = "irrelevant"
			useStdio = true
		"#,
	);

	assert!(Config::load(Some(&path)).is_ok());
}

// vim: ts=4
