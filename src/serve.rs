//! Serve loop
//!
//! Drives UI sessions over a line-delimited JSON transport. Each
//! connected client gets one session; each received message triggers
//! one processing cycle (dispatch, then render) and one response
//! message.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::SessionError;
use crate::logging::*;
use crate::protocol::parse_message;
use crate::session::UiSession;

/// One bidirectional, line-delimited message channel to a client
#[async_trait]
pub trait MessageTransport: Send {
	/// Receive the next message line; None on orderly end of stream
	async fn recv(&mut self) -> Result<Option<String>, SessionError>;

	/// Send one message line
	async fn send(&mut self, line: &str) -> Result<(), SessionError>;
}

/// Transport over the process stdio streams
pub struct StdioTransport {
	reader: BufReader<tokio::io::Stdin>,
	writer: tokio::io::Stdout,
}

impl StdioTransport {
	pub fn new() -> Self {
		StdioTransport { reader: BufReader::new(tokio::io::stdin()), writer: tokio::io::stdout() }
	}
}

#[async_trait]
impl MessageTransport for StdioTransport {
	async fn recv(&mut self) -> Result<Option<String>, SessionError> {
		let mut line = String::new();
		let n = self.reader.read_line(&mut line).await?;
		if n == 0 {
			return Ok(None);
		}
		Ok(Some(line))
	}

	async fn send(&mut self, line: &str) -> Result<(), SessionError> {
		self.writer.write_all(line.as_bytes()).await?;
		self.writer.write_all(b"\n").await?;
		self.writer.flush().await?;
		Ok(())
	}
}

/// Transport over one accepted TCP connection
pub struct TcpTransport {
	reader: BufReader<tokio::net::tcp::OwnedReadHalf>,
	writer: tokio::net::tcp::OwnedWriteHalf,
}

impl TcpTransport {
	pub fn new(stream: tokio::net::TcpStream) -> Self {
		let (read_half, write_half) = stream.into_split();
		TcpTransport { reader: BufReader::new(read_half), writer: write_half }
	}
}

#[async_trait]
impl MessageTransport for TcpTransport {
	async fn recv(&mut self) -> Result<Option<String>, SessionError> {
		let mut line = String::new();
		let n = self.reader.read_line(&mut line).await?;
		if n == 0 {
			return Ok(None);
		}
		Ok(Some(line))
	}

	async fn send(&mut self, line: &str) -> Result<(), SessionError> {
		self.writer.write_all(line.as_bytes()).await?;
		self.writer.write_all(b"\n").await?;
		self.writer.flush().await?;
		Ok(())
	}
}

/// Run one session over the given transport until the peer disconnects.
///
/// The session starts empty; the embedding application populates the
/// registry through [`UiSession::registry`]. A message that fails to
/// parse is logged and skipped; guard and protocol violations end the
/// session.
pub async fn drive_session<T: MessageTransport>(
	transport: &mut T,
	config: &Config,
) -> Result<(), SessionError> {
	let mut session = UiSession::new(config.max_incoming_ops);
	info!("Session {} started", session.id());

	while let Some(line) = transport.recv().await? {
		if line.trim().is_empty() {
			continue;
		}
		let message = match parse_message(&line) {
			Ok(message) => message,
			Err(e) => {
				warn!("Session {}: dropping malformed message: {}", session.id(), e);
				continue;
			}
		};
		session.process_message(&message)?;
		let reply = session.render_cycle()?;
		let json = reply.to_json().map_err(crate::protocol::ProtocolError::from)?;
		transport.send(&json).await?;
	}

	info!("Session {} ended", session.id());
	Ok(())
}

/// Serve according to the configuration: a single stdio session, or a
/// TCP listener with one session per connection.
pub async fn run(config: Config) -> Result<(), SessionError> {
	if config.use_stdio {
		let mut transport = StdioTransport::new();
		return drive_session(&mut transport, &config).await;
	}

	let listener = TcpListener::bind(&config.listen).await?;
	info!("Listening on {}", config.listen);

	loop {
		let (stream, peer) = listener.accept().await?;
		info!("Connection from {}", peer);
		let config = config.clone();
		tokio::spawn(async move {
			let mut transport = TcpTransport::new(stream);
			if let Err(e) = drive_session(&mut transport, &config).await {
				error!("Session for {} failed: {}", peer, e);
			}
		});
	}
}

// vim: ts=4
