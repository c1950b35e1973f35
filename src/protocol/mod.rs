//! RESP Protocol Implementation
//!
//! This module holds everything the client needs to talk RESP.
//!
//! ## Overview
//!
//! A request starts as a line of user input, is split into tokens and sent
//! as an array of bulk strings. The reply comes back as one buffer and is
//! decoded into a [`RespValue`] tree.
//!
//! ## Modules
//!
//! - `types`: Defines the `RespValue` enum, its kinds and serialization
//! - `parser`: Decoder for reply buffers
//! - `encoder`: Request frame encoder
//! - `tokenizer`: Splits user input into command tokens
//!
//! ## Example
//!
//! ```
//! use flashkv_cli::protocol::{decode_reply, encode_command, tokenize, RespValue};
//!
//! let tokens = tokenize("GET name");
//! assert_eq!(encode_command(&tokens), b"*2\r\n$3\r\nGET\r\n$4\r\nname\r\n");
//!
//! let (value, consumed) = decode_reply(b"$4\r\nAriz\r\n").unwrap();
//! assert_eq!(value, RespValue::bulk_string("Ariz"));
//! assert_eq!(consumed, 10);
//! ```

pub mod encoder;
pub mod parser;
pub mod tokenizer;
pub mod types;

// Re-export commonly used types for convenience
pub use encoder::{encode_command, encode_command_into};
pub use parser::{decode_reply, DecodeError, DecodeResult, RespDecoder};
pub use tokenizer::tokenize;
pub use types::{RespValue, ValueKind};
