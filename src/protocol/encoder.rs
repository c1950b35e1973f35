//! Command Encoder
//!
//! Requests always travel as an array of bulk strings, the form every
//! Redis-compatible server accepts:
//!
//! ```text
//! SET a 1  ->  *3\r\n$3\r\nSET\r\n$1\r\na\r\n$1\r\n1\r\n
//! ```
//!
//! Lengths are byte lengths, so multi-byte UTF-8 and binary arguments are
//! framed correctly.

use crate::protocol::types::RespValue;

/// Encodes `tokens` as a request frame.
///
/// The caller is expected to skip empty input; zero tokens encode as `*0\r\n`.
pub fn encode_command<T: AsRef<[u8]>>(tokens: &[T]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(encoded_len(tokens));
    encode_command_into(tokens, &mut buf);
    buf
}

/// Encodes `tokens` into an existing buffer.
pub fn encode_command_into<T: AsRef<[u8]>>(tokens: &[T], buf: &mut Vec<u8>) {
    RespValue::command(tokens).serialize_into(buf);
}

/// Exact size of the encoded frame.
fn encoded_len<T: AsRef<[u8]>>(tokens: &[T]) -> usize {
    let header = 1 + tokens.len().to_string().len() + 2;
    tokens.iter().fold(header, |acc, t| {
        let len = t.as_ref().len();
        acc + 1 + len.to_string().len() + 2 + len + 2
    })
}
