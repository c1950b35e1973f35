//! RESP Reply Decoder
//!
//! This module turns one complete reply buffer into a [`RespValue`] tree.
//!
//! ## Design
//!
//! 1. **Owned cursor**: [`RespDecoder`] owns the buffer and a single
//!    advancing position. Each decode step moves the position past exactly
//!    the bytes of the value it produced, so two replies appended back to
//!    back decode one after the other.
//! 2. **Zero-copy**: payloads are `Bytes` slices of the input buffer.
//! 3. **Total**: every finite input either decodes or yields a
//!    [`DecodeError`]. Truncated input is an error, never a panic and never
//!    a partial value.
//!
//! ## How the Decoder Works
//!
//! ```text
//!   *2\r\n$1\r\na\r\n*1\r\n:7\r\n
//!   ^ array, count 2
//!         ^ bulk string "a"
//!                   ^ array, count 1
//!                         ^ integer 7
//! ```
//!
//! Arrays recurse once per nesting level. A prefix byte the decoder does not
//! recognise becomes [`RespValue::Unknown`]; past that point the framing of
//! the buffer is lost, so an enclosing array stops decoding there.

use crate::protocol::types::{prefix, RespValue, CRLF};
use bytes::Bytes;
use thiserror::Error;

/// Errors that can occur while decoding a reply.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// There was nothing to decode
    #[error("empty reply")]
    EmptyInput,

    /// A length or count field holds something other than digits
    #[error("malformed length at byte {offset}: unexpected {byte:#04x}")]
    MalformedLength { offset: usize, byte: u8 },

    /// A scan or slice would run past the end of the buffer
    #[error("reply truncated: needed {needed} bytes, buffer holds {available}")]
    OutOfBounds { needed: usize, available: usize },

    /// The bytes where a CRLF must be are something else
    #[error("missing CRLF terminator at byte {offset}")]
    MissingTerminator { offset: usize },

    /// Arrays are nested deeper than the decoder will follow
    #[error("arrays nested deeper than {max} levels")]
    NestingTooDeep { max: usize },
}

/// Result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Maximum array nesting depth (prevent stack overflow)
pub const MAX_NESTING_DEPTH: usize = 512;

/// Most elements reserved up front for one array; larger arrays grow as
/// elements arrive
const MAX_PREALLOCATED_ELEMENTS: usize = 1024;

/// Smallest complete element (`_\r\n`, `+\r\n`)
const MIN_ELEMENT_LEN: usize = 3;

/// A RESP decoder over one reply buffer.
///
/// # Example
///
/// ```
/// use flashkv_cli::protocol::{RespDecoder, RespValue};
///
/// let mut decoder = RespDecoder::new(&b"+OK\r\n:1\r\n"[..]);
/// assert_eq!(decoder.decode_next().unwrap(), RespValue::simple_string("OK"));
/// assert_eq!(decoder.position(), 5);
/// assert_eq!(decoder.decode_next().unwrap(), RespValue::integer(1));
/// assert_eq!(decoder.remaining(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct RespDecoder {
    buf: Bytes,
    pos: usize,
}

impl RespDecoder {
    /// Creates a decoder positioned at the start of `buf`.
    pub fn new(buf: impl Into<Bytes>) -> Self {
        Self {
            buf: buf.into(),
            pos: 0,
        }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Decodes the next top-level value.
    ///
    /// On error the position is left where it was before the call.
    pub fn decode_next(&mut self) -> DecodeResult<RespValue> {
        if self.remaining() == 0 {
            return Err(DecodeError::EmptyInput);
        }

        let start = self.pos;
        let result = self.decode_value(0);
        if result.is_err() {
            self.pos = start;
        }
        result
    }

    fn decode_value(&mut self, depth: usize) -> DecodeResult<RespValue> {
        let tag = self.byte_at(self.pos)?;
        self.pos += 1;

        match tag {
            prefix::BULK_STRING => self.decode_bulk_string(),
            prefix::SIMPLE_STRING => Ok(RespValue::SimpleString(self.read_line()?)),
            prefix::ERROR => Ok(RespValue::Error(self.read_line()?)),
            prefix::INTEGER => Ok(RespValue::Integer(self.read_line()?)),
            prefix::NULL => {
                // `_` carries no length; consume its CRLF when present
                if self.buf[self.pos..].starts_with(CRLF) {
                    self.pos += 2;
                }
                Ok(RespValue::Null)
            }
            prefix::ARRAY => self.decode_array(depth),
            other => Ok(RespValue::Unknown(other)),
        }
    }

    /// `$<length>\r\n<data>\r\n` or `$-1\r\n`
    fn decode_bulk_string(&mut self) -> DecodeResult<RespValue> {
        let length = match self.read_length()? {
            Some(length) => length,
            None => return Ok(RespValue::Null),
        };

        let start = self.pos;
        let end = start
            .checked_add(length)
            .filter(|end| end.checked_add(2).is_some())
            .ok_or(DecodeError::OutOfBounds {
                needed: usize::MAX,
                available: self.buf.len(),
            })?;
        self.ensure(end + 2)?;

        let data = self.buf.slice(start..end);
        self.pos = end;
        self.expect_crlf()?;

        Ok(RespValue::BulkString(data))
    }

    /// `*<count>\r\n<elements...>` or `*-1\r\n`
    fn decode_array(&mut self, depth: usize) -> DecodeResult<RespValue> {
        let count = match self.read_length()? {
            Some(count) => count,
            None => return Ok(RespValue::NullArray),
        };

        if count == 0 {
            return Ok(RespValue::Array(Vec::new()));
        }

        if depth >= MAX_NESTING_DEPTH {
            return Err(DecodeError::NestingTooDeep {
                max: MAX_NESTING_DEPTH,
            });
        }

        // Declared counts are untrusted and every nesting level reserves
        let capacity = count
            .min(self.remaining() / MIN_ELEMENT_LEN)
            .min(MAX_PREALLOCATED_ELEMENTS);
        let mut elements = Vec::with_capacity(capacity);
        for _ in 0..count {
            let element = self.decode_value(depth + 1)?;
            let lost_framing = matches!(element, RespValue::Unknown(_));
            elements.push(element);
            if lost_framing {
                break;
            }
        }

        Ok(RespValue::Array(elements))
    }

    /// Reads a length or count field up to and including its CRLF.
    ///
    /// Returns `None` for the `-1` null sentinel.
    fn read_length(&mut self) -> DecodeResult<Option<usize>> {
        if self.byte_at(self.pos)? == b'-' {
            let offset = self.pos;
            if self.byte_at(offset + 1)? == b'1' && self.byte_at(offset + 2)? == b'\r' {
                self.pos = offset + 2;
                self.expect_crlf()?;
                return Ok(None);
            }
            return Err(DecodeError::MalformedLength { offset, byte: b'-' });
        }

        let mut value: usize = 0;
        let mut digits = 0;
        loop {
            let offset = self.pos;
            let byte = self.byte_at(offset)?;
            if byte == b'\r' {
                break;
            }
            if !byte.is_ascii_digit() {
                return Err(DecodeError::MalformedLength { offset, byte });
            }
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(usize::from(byte - b'0')))
                .ok_or(DecodeError::MalformedLength { offset, byte })?;
            digits += 1;
            self.pos += 1;
        }

        if digits == 0 {
            return Err(DecodeError::MalformedLength {
                offset: self.pos,
                byte: b'\r',
            });
        }

        self.expect_crlf()?;
        Ok(Some(value))
    }

    /// Reads a single-line payload up to `\r`, then skips the CRLF.
    fn read_line(&mut self) -> DecodeResult<Bytes> {
        let start = self.pos;
        let len = self.buf[start..]
            .iter()
            .position(|&b| b == b'\r')
            .ok_or(DecodeError::OutOfBounds {
                needed: self.buf.len() + 1,
                available: self.buf.len(),
            })?;

        let line = self.buf.slice(start..start + len);
        self.pos = start + len;
        self.expect_crlf()?;
        Ok(line)
    }

    fn expect_crlf(&mut self) -> DecodeResult<()> {
        self.ensure(self.pos + 2)?;
        if &self.buf[self.pos..self.pos + 2] != CRLF {
            return Err(DecodeError::MissingTerminator { offset: self.pos });
        }
        self.pos += 2;
        Ok(())
    }

    #[inline]
    fn byte_at(&self, offset: usize) -> DecodeResult<u8> {
        self.buf
            .get(offset)
            .copied()
            .ok_or(DecodeError::OutOfBounds {
                needed: offset + 1,
                available: self.buf.len(),
            })
    }

    #[inline]
    fn ensure(&self, needed: usize) -> DecodeResult<()> {
        if needed > self.buf.len() {
            return Err(DecodeError::OutOfBounds {
                needed,
                available: self.buf.len(),
            });
        }
        Ok(())
    }
}

/// Decodes the first value in `buf`.
///
/// Returns the value and the number of bytes it occupied.
pub fn decode_reply(buf: &[u8]) -> DecodeResult<(RespValue, usize)> {
    let mut decoder = RespDecoder::new(Bytes::copy_from_slice(buf));
    let value = decoder.decode_next()?;
    Ok((value, decoder.position()))
}
