//! # FlashKV CLI - An Interactive Client for Redis-Compatible Servers
//!
//! FlashKV CLI reads commands at a prompt, sends them to a FlashKV (or any
//! Redis-compatible) server over RESP and prints each reply in a readable,
//! typed form.
//!
//! ## Features
//!
//! - **RESP2 and RESP3 nulls**: `$-1`, `*-1` and `_` are all understood
//! - **Binary-safe**: bulk strings may contain any byte, including CRLF
//! - **Nested arrays**: printed as numbered, aligned, indented listings
//! - **Robust**: malformed or truncated replies are reported, never fatal
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            FlashKV CLI                                  │
//! │                                                                         │
//! │  ┌─────────────┐    ┌─────────────┐    ┌─────────────┐                  │
//! │  │  Session    │───>│  Tokenizer  │───>│  Encoder    │                  │
//! │  │  (prompt)   │    │             │    │             │                  │
//! │  └─────────────┘    └─────────────┘    └──────┬──────┘                  │
//! │         ▲                                     │                         │
//! │         │                                     ▼                         │
//! │  ┌──────┴──────┐    ┌─────────────┐    ┌─────────────┐                  │
//! │  │  Renderer   │<───│  Decoder    │<───│ Connection  │<──> server       │
//! │  │             │    │             │    │   (TCP)     │                  │
//! │  └─────────────┘    └─────────────┘    └─────────────┘                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use flashkv_cli::connection::Connection;
//! use flashkv_cli::session::{spawn_line_reader, Session};
//! use std::io::BufReader;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let conn = Connection::connect("127.0.0.1:6379").await?;
//!     let lines = spawn_line_reader(BufReader::new(std::io::stdin()));
//!     Session::new(conn, std::io::stdout()).run(lines).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Reply Format
//!
//! ```text
//! >> SET name "Ariz"
//! (simple string)
//! OK
//! >> GET name
//! (bulk string)
//! "Ariz"
//! >> GET missing
//! (null)
//! ```
//!
//! ## Module Overview
//!
//! - [`protocol`]: RESP types, reply decoder, command encoder, tokenizer
//! - [`render`]: Human-readable rendering of decoded replies
//! - [`connection`]: The TCP connection to the server
//! - [`session`]: The interactive prompt
//! - [`config`]: Command-line configuration

pub mod config;
pub mod connection;
pub mod protocol;
pub mod render;
pub mod session;

// Re-export commonly used types for convenience
pub use config::Config;
pub use connection::{Connection, ConnectionError};
pub use protocol::{
    decode_reply, encode_command, tokenize, DecodeError, RespDecoder, RespValue, ValueKind,
};
pub use render::{render, render_reply};
pub use session::{Session, SessionError};

/// The default server port (same as Redis)
pub const DEFAULT_PORT: u16 = 6379;

/// The default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Version of FlashKV CLI
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
