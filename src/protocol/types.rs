//! RESP (Redis Serialization Protocol) Data Types
//!
//! This module defines the values a server can send back to the client.
//! Both RESP2 and the RESP3 null marker are understood.
//!
//! ## Protocol Format
//!
//! Each RESP type starts with a type prefix byte:
//! - `+` Simple String
//! - `-` Error
//! - `:` Integer
//! - `$` Bulk String
//! - `*` Array
//! - `_` Null (RESP3)
//!
//! All types are terminated with CRLF (`\r\n`).
//!
//! ## Examples
//!
//! Simple String: `+OK\r\n`
//! Error: `-ERR unknown command\r\n`
//! Integer: `:1000\r\n`
//! Bulk String: `$5\r\nhello\r\n`
//! Array: `*2\r\n$3\r\nGET\r\n$4\r\nname\r\n`
//! Null Bulk String: `$-1\r\n`
//! Null Array: `*-1\r\n`

use bytes::Bytes;
use std::fmt;

/// The CRLF terminator used in RESP protocol
pub const CRLF: &[u8] = b"\r\n";

/// RESP protocol type prefixes
pub mod prefix {
    pub const SIMPLE_STRING: u8 = b'+';
    pub const ERROR: u8 = b'-';
    pub const INTEGER: u8 = b':';
    pub const BULK_STRING: u8 = b'$';
    pub const ARRAY: u8 = b'*';
    pub const NULL: u8 = b'_';
}

/// The kind of a decoded value, as shown in the `(kind)` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Error,
    SimpleString,
    Integer,
    BulkString,
    Array,
    NullArray,
    Unknown,
}

impl ValueKind {
    /// Human-readable name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Error => "error",
            ValueKind::SimpleString => "simple string",
            ValueKind::Integer => "integer",
            ValueKind::BulkString => "bulk string",
            ValueKind::Array => "array",
            ValueKind::NullArray => "null array",
            ValueKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents a value in the RESP protocol.
///
/// Payloads are `Bytes` slices of the reply buffer they were decoded from,
/// so decoding does not copy. Single-line payloads keep the exact text the
/// server sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RespValue {
    /// Simple strings are used for non-binary safe strings.
    /// Format: `+<string>\r\n`
    SimpleString(Bytes),

    /// Errors are similar to simple strings but indicate an error condition.
    /// Format: `-<error message>\r\n`
    Error(Bytes),

    /// Signed integer, kept as its decimal text.
    /// Format: `:<integer>\r\n`
    Integer(Bytes),

    /// Bulk strings are binary-safe and may contain `\r` and `\n`.
    /// Format: `$<length>\r\n<data>\r\n`
    BulkString(Bytes),

    /// Null bulk string (`$-1\r\n`) or RESP3 null (`_\r\n`)
    Null,

    /// Arrays can contain any RESP type, including nested arrays.
    /// Format: `*<count>\r\n<element1><element2>...`
    Array(Vec<RespValue>),

    /// Null array: `*-1\r\n`. Never equal to an empty array.
    NullArray,

    /// A value whose prefix byte this client does not understand.
    Unknown(u8),
}

impl RespValue {
    /// Creates a new simple string value.
    ///
    /// # Example
    /// ```
    /// use flashkv_cli::protocol::types::RespValue;
    /// let ok = RespValue::simple_string("OK");
    /// ```
    pub fn simple_string(s: impl Into<Bytes>) -> Self {
        RespValue::SimpleString(s.into())
    }

    /// Creates a new error value.
    pub fn error(s: impl Into<Bytes>) -> Self {
        RespValue::Error(s.into())
    }

    /// Creates a new integer value.
    pub fn integer(n: i64) -> Self {
        RespValue::Integer(Bytes::from(n.to_string()))
    }

    /// Creates a new bulk string value.
    ///
    /// # Example
    /// ```
    /// use flashkv_cli::protocol::types::RespValue;
    /// use bytes::Bytes;
    /// let bulk = RespValue::bulk_string(Bytes::from("hello"));
    /// ```
    pub fn bulk_string(data: impl Into<Bytes>) -> Self {
        RespValue::BulkString(data.into())
    }

    /// Creates an array value.
    pub fn array(values: Vec<RespValue>) -> Self {
        RespValue::Array(values)
    }

    /// Builds the request form of a command: an array of bulk strings.
    pub fn command<T: AsRef<[u8]>>(tokens: &[T]) -> Self {
        RespValue::Array(
            tokens
                .iter()
                .map(|t| RespValue::BulkString(Bytes::copy_from_slice(t.as_ref())))
                .collect(),
        )
    }

    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            RespValue::SimpleString(_) => ValueKind::SimpleString,
            RespValue::Error(_) => ValueKind::Error,
            RespValue::Integer(_) => ValueKind::Integer,
            RespValue::BulkString(_) => ValueKind::BulkString,
            RespValue::Null => ValueKind::Null,
            RespValue::Array(_) => ValueKind::Array,
            RespValue::NullArray => ValueKind::NullArray,
            RespValue::Unknown(_) => ValueKind::Unknown,
        }
    }

    /// Serializes the RESP value to bytes for sending over the wire.
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.serialize_into(&mut buf);
        buf
    }

    /// Serializes the RESP value into an existing buffer.
    ///
    /// An `Unknown` value writes back only its tag byte.
    pub fn serialize_into(&self, buf: &mut Vec<u8>) {
        match self {
            RespValue::SimpleString(s) => {
                buf.push(prefix::SIMPLE_STRING);
                buf.extend_from_slice(s);
                buf.extend_from_slice(CRLF);
            }
            RespValue::Error(s) => {
                buf.push(prefix::ERROR);
                buf.extend_from_slice(s);
                buf.extend_from_slice(CRLF);
            }
            RespValue::Integer(n) => {
                buf.push(prefix::INTEGER);
                buf.extend_from_slice(n);
                buf.extend_from_slice(CRLF);
            }
            RespValue::BulkString(data) => {
                buf.push(prefix::BULK_STRING);
                buf.extend_from_slice(data.len().to_string().as_bytes());
                buf.extend_from_slice(CRLF);
                buf.extend_from_slice(data);
                buf.extend_from_slice(CRLF);
            }
            RespValue::Null => {
                buf.push(prefix::BULK_STRING);
                buf.extend_from_slice(b"-1");
                buf.extend_from_slice(CRLF);
            }
            RespValue::Array(values) => {
                buf.push(prefix::ARRAY);
                buf.extend_from_slice(values.len().to_string().as_bytes());
                buf.extend_from_slice(CRLF);
                for value in values {
                    value.serialize_into(buf);
                }
            }
            RespValue::NullArray => {
                buf.push(prefix::ARRAY);
                buf.extend_from_slice(b"-1");
                buf.extend_from_slice(CRLF);
            }
            RespValue::Unknown(tag) => buf.push(*tag),
        }
    }

    /// Returns true for both null bulk strings and null arrays.
    pub fn is_null(&self) -> bool {
        matches!(self, RespValue::Null | RespValue::NullArray)
    }

    /// Returns the raw payload of a scalar value.
    pub fn payload(&self) -> Option<&[u8]> {
        match self {
            RespValue::SimpleString(b)
            | RespValue::Error(b)
            | RespValue::Integer(b)
            | RespValue::BulkString(b) => Some(b),
            _ => None,
        }
    }

    /// Attempts to parse the integer text.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            RespValue::Integer(n) => std::str::from_utf8(n).ok()?.parse().ok(),
            _ => None,
        }
    }
}
