//! Connection Module
//!
//! This module manages the client's single connection to the server.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Session                              │
//! │                     (session module)                        │
//! └──────────────────────┬──────────────────────────────────────┘
//!                        │ tokens
//!                        ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Connection                             │
//! │                                                             │
//! │  ┌─────────────┐    ┌─────────────┐    ┌─────────────┐      │
//! │  │ Encode cmd  │───>│ Write frame │───>│ Read reply  │      │
//! │  └─────────────┘    └─────────────┘    └─────────────┘      │
//! └──────────────────────┬──────────────────────────────────────┘
//!                        │ raw reply bytes
//!                        ▼
//!                  decoder + renderer
//! ```
//!
//! ## Features
//!
//! - **Async I/O**: Uses Tokio for the socket
//! - **Buffer Management**: Reply bytes accumulate in a reused `BytesMut`
//! - **Testable**: Generic over the stream, so tests drive it with mocks
//!
//! ## Example
//!
//! ```ignore
//! use flashkv_cli::connection::Connection;
//!
//! let mut conn = Connection::connect("127.0.0.1:6379").await?;
//! let reply = conn.request(&["PING"]).await?;
//! assert_eq!(&reply[..], b"+PONG\r\n");
//! ```

pub mod client;

// Re-export commonly used types
pub use client::{Connection, ConnectionError, MAX_REPLY_SIZE, READ_CHUNK_SIZE};
