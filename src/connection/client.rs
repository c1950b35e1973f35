//! Server Connection
//!
//! This module owns the socket to the server. Each request is written as one
//! encoded frame and answered by one reply buffer.
//!
//! ## Request Lifecycle
//!
//! ```text
//! 1. Tokens encoded into a request frame
//!        │
//!        ▼
//! 2. Frame written and flushed
//!        │
//!        ▼
//! 3. ┌──────────────────────────────────┐
//!    │  Read up to 1024 bytes           │
//!    │  Append to the reply buffer      │
//!    │  Full chunk? read again          │
//!    └──────────────────────────────────┘
//!        │
//!        ▼
//! 4. Short read: the reply buffer is handed to the decoder
//! ```
//!
//! ## Reply Boundaries
//!
//! The connection does not look inside the reply. It assumes the server has
//! answered once a read comes back shorter than the chunk size, so a reply
//! whose length is an exact multiple of the chunk size costs one extra read.

use crate::protocol::encode_command;
use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufWriter};
use tokio::net::TcpStream;
use tracing::{debug, info, trace};

/// Size of each socket read
pub const READ_CHUNK_SIZE: usize = 1024;

/// Largest reply the client will buffer (512 MB, the Redis bulk limit)
pub const MAX_REPLY_SIZE: usize = 512 * 1024 * 1024;

/// A connection to a Redis-compatible server.
///
/// Generic over the stream so it can run over anything that reads and
/// writes bytes; [`Connection::connect`] gives one backed by TCP.
pub struct Connection<S = TcpStream> {
    /// The stream to the server
    stream: BufWriter<S>,

    /// Server address (for logging)
    peer: String,

    /// Buffer for the reply being received
    buffer: BytesMut,
}

impl Connection<TcpStream> {
    /// Opens a TCP connection to `addr`.
    pub async fn connect(addr: &str) -> Result<Self, ConnectionError> {
        let stream = TcpStream::connect(addr).await?;
        stream.set_nodelay(true)?;
        info!(server = %addr, "Connected");
        Ok(Self::new(stream, addr))
    }
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Wraps an established stream.
    pub fn new(stream: S, peer: impl Into<String>) -> Self {
        Self {
            stream: BufWriter::new(stream),
            peer: peer.into(),
            buffer: BytesMut::with_capacity(READ_CHUNK_SIZE),
        }
    }

    /// Address of the server this connection talks to.
    pub fn peer(&self) -> &str {
        &self.peer
    }

    /// Sends a command and waits for its reply.
    pub async fn request<T: AsRef<[u8]>>(
        &mut self,
        tokens: &[T],
    ) -> Result<Bytes, ConnectionError> {
        self.send_command(tokens).await?;
        self.read_reply().await
    }

    /// Writes one command frame.
    pub async fn send_command<T: AsRef<[u8]>>(
        &mut self,
        tokens: &[T],
    ) -> Result<(), ConnectionError> {
        let frame = encode_command(tokens);
        self.stream.write_all(&frame).await?;
        self.stream.flush().await?;
        trace!(server = %self.peer, bytes = frame.len(), "Sent command");
        Ok(())
    }

    /// Collects one reply.
    ///
    /// Reads in [`READ_CHUNK_SIZE`] chunks until a short read. End of stream
    /// before any byte arrived means the server went away.
    pub async fn read_reply(&mut self) -> Result<Bytes, ConnectionError> {
        self.buffer.clear();
        let mut chunk = [0u8; READ_CHUNK_SIZE];

        loop {
            let n = self.stream.get_mut().read(&mut chunk).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    return Err(ConnectionError::ServerClosed);
                }
                break;
            }

            if self.buffer.len() + n > MAX_REPLY_SIZE {
                return Err(ConnectionError::ReplyTooLarge {
                    max: MAX_REPLY_SIZE,
                });
            }

            self.buffer.extend_from_slice(&chunk[..n]);
            trace!(server = %self.peer, bytes = n, "Read data");

            if n < READ_CHUNK_SIZE {
                break;
            }
        }

        debug!(server = %self.peer, bytes = self.buffer.len(), "Received reply");
        Ok(self.buffer.split().freeze())
    }
}

/// Errors that can occur while talking to the server.
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    /// I/O error (network issue)
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The server closed the connection
    #[error("server closed the connection")]
    ServerClosed,

    /// The reply is larger than the client will buffer
    #[error("reply exceeds {max} bytes")]
    ReplyTooLarge { max: usize },
}
