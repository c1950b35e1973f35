//! Reply Renderer
//!
//! Turns a decoded reply into the text printed under the prompt. Every
//! reply starts with a `(kind)` header line followed by its payload:
//!
//! ```text
//! >> GET name
//! (bulk string)
//! "Ariz"
//! >> LRANGE list 0 -1
//! (array)
//! 1) "a"
//! 2) 1) 7
//! ```
//!
//! Rendering never fails. A reply that cannot be decoded is shown with
//! [`render_decode_error`] instead.

pub mod layout;

use crate::protocol::{DecodeError, DecodeResult, RespDecoder, RespValue, ValueKind};
use bytes::Bytes;

/// Renders a value with its `(kind)` header.
///
/// Values without a payload (nulls, empty arrays, unknown values) render as
/// the header alone.
pub fn render(value: &RespValue) -> String {
    let mut out = format!("({})\n", value.kind());
    let body = render_payload(value, 0);
    if !body.is_empty() {
        out.push_str(&body);
        if !body.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

/// Renders the payload of a value, without header.
///
/// `indent` is the column the labels of a nested listing are anchored to;
/// top-level callers pass `0`.
pub fn render_payload(value: &RespValue, indent: usize) -> String {
    match value {
        RespValue::SimpleString(s) | RespValue::Error(s) | RespValue::Integer(s) => {
            String::from_utf8_lossy(s).into_owned()
        }
        RespValue::BulkString(data) => render_bulk_string(data),
        RespValue::Array(items) if !items.is_empty() => render_array(items, indent),
        RespValue::Array(_) | RespValue::Null | RespValue::NullArray | RespValue::Unknown(_) => {
            String::new()
        }
    }
}

/// Decodes one reply buffer and renders it.
pub fn render_reply(buf: &[u8]) -> DecodeResult<(ValueKind, String)> {
    let mut decoder = RespDecoder::new(Bytes::copy_from_slice(buf));
    let value = decoder.decode_next()?;
    Ok((value.kind(), render(&value)))
}

/// The text shown in place of a reply that failed to decode.
pub fn render_decode_error(err: &DecodeError) -> String {
    format!("(error) failed to decode reply: {}\n", err)
}

/// Multi-line blobs are shown as they are, anything else is quoted.
fn render_bulk_string(data: &[u8]) -> String {
    let text = String::from_utf8_lossy(data);
    if data.contains(&b'\n') {
        text.into_owned()
    } else {
        format!("\"{}\"", text)
    }
}

fn render_array(items: &[RespValue], depth: usize) -> String {
    let count = items.len();
    let child_depth = layout::child_depth(depth, count);

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let mut line = layout::label(depth, count, i + 1);
            line.push_str(&render_element(item, child_depth));
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// An element with no payload shows its kind so it is still visible.
fn render_element(item: &RespValue, depth: usize) -> String {
    match item {
        RespValue::BulkString(data) if data.contains(&b'\n') => indent_lines(data, depth),
        _ => {
            let payload = render_payload(item, depth);
            if payload.is_empty() {
                format!("({})", item.kind())
            } else {
                payload
            }
        }
    }
}

/// Continuation lines of a multi-line blob start under its first line.
/// Blank lines stay blank and the blob's trailing newline is dropped.
fn indent_lines(data: &[u8], depth: usize) -> String {
    let text = String::from_utf8_lossy(data);
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(&" ".repeat(depth));
            }
        }
        out.push_str(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_scalars() {
        assert_eq!(render(&RespValue::simple_string("OK")), "(simple string)\nOK\n");
        assert_eq!(
            render(&RespValue::error("ERR unknown command")),
            "(error)\nERR unknown command\n"
        );
        assert_eq!(render(&RespValue::integer(42)), "(integer)\n42\n");
    }

    #[test]
    fn test_render_bulk_string_quoted() {
        assert_eq!(render(&RespValue::bulk_string("Ariz")), "(bulk string)\n\"Ariz\"\n");
        assert_eq!(render(&RespValue::bulk_string("")), "(bulk string)\n\"\"\n");
    }

    #[test]
    fn test_render_multiline_bulk_string_verbatim() {
        assert_eq!(
            render(&RespValue::bulk_string("# Server\r\nversion:1\r\n")),
            "(bulk string)\n# Server\r\nversion:1\r\n"
        );
        assert_eq!(
            render(&RespValue::bulk_string("a\nb")),
            "(bulk string)\na\nb\n"
        );
    }

    #[test]
    fn test_render_empty_payloads() {
        assert_eq!(render(&RespValue::Null), "(null)\n");
        assert_eq!(render(&RespValue::NullArray), "(null array)\n");
        assert_eq!(render(&RespValue::array(vec![])), "(array)\n");
        assert_eq!(render(&RespValue::Unknown(b'%')), "(unknown)\n");
    }

    #[test]
    fn test_render_flat_array() {
        let value = RespValue::array(vec![
            RespValue::bulk_string("a"),
            RespValue::integer(2),
            RespValue::Null,
        ]);
        assert_eq!(render(&value), "(array)\n1) \"a\"\n2) 2\n3) (null)\n");
    }

    #[test]
    fn test_render_nested_array() {
        let value = RespValue::array(vec![
            RespValue::bulk_string("a"),
            RespValue::array(vec![RespValue::integer(7)]),
        ]);
        let text = render(&value);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["(array)", "1) \"a\"", "2) 1) 7"]);
    }

    #[test]
    fn test_render_staircase() {
        let value = RespValue::array(vec![
            RespValue::array(vec![
                RespValue::bulk_string("x"),
                RespValue::array(vec![RespValue::integer(1), RespValue::integer(2)]),
            ]),
            RespValue::simple_string("y"),
        ]);
        assert_eq!(
            render_payload(&value, 0),
            "1) 1) \"x\"\n   2) 1) 1\n      2) 2\n2) y"
        );
    }

    #[test]
    fn test_render_aligns_two_digit_indices() {
        let items: Vec<RespValue> = (1..=10).map(RespValue::integer).collect();
        let text = render_payload(&RespValue::array(items), 0);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], " 1) 1");
        assert_eq!(lines[8], " 9) 9");
        assert_eq!(lines[9], "10) 10");
    }

    #[test]
    fn test_render_nested_under_wide_labels() {
        let mut items: Vec<RespValue> = (1..=9).map(RespValue::integer).collect();
        items.push(RespValue::array(vec![
            RespValue::simple_string("a"),
            RespValue::simple_string("b"),
        ]));
        let text = render_payload(&RespValue::array(items), 0);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[9], "10) 1) a");
        assert_eq!(lines[10], "    2) b");
    }

    #[test]
    fn test_render_multiline_bulk_string_in_array() {
        let value = RespValue::array(vec![
            RespValue::bulk_string("a\nb\n"),
            RespValue::integer(1),
        ]);
        assert_eq!(render_payload(&value, 0), "1) a\n   b\n2) 1");
    }

    #[test]
    fn test_render_multiline_bulk_string_keeps_staircase() {
        let value = RespValue::array(vec![RespValue::array(vec![
            RespValue::bulk_string("x"),
            RespValue::bulk_string("l1\r\n\r\nl2\r\n"),
        ])]);
        assert_eq!(
            render_payload(&value, 0),
            "1) 1) \"x\"\n   2) l1\n\n      l2"
        );
    }

    #[test]
    fn test_render_nested_empty_and_null_arrays() {
        let value = RespValue::array(vec![RespValue::array(vec![]), RespValue::NullArray]);
        assert_eq!(render_payload(&value, 0), "1) (array)\n2) (null array)");
    }

    #[test]
    fn test_render_reply() {
        let (kind, text) = render_reply(b"*2\r\n$1\r\na\r\n*1\r\n:7\r\n").unwrap();
        assert_eq!(kind, ValueKind::Array);
        assert_eq!(text, "(array)\n1) \"a\"\n2) 1) 7\n");

        let (kind, text) = render_reply(b"%1\r\n").unwrap();
        assert_eq!(kind, ValueKind::Unknown);
        assert_eq!(text, "(unknown)\n");
    }

    #[test]
    fn test_render_reply_truncated() {
        let err = render_reply(b"$5\r\nab").unwrap_err();
        assert_eq!(
            render_decode_error(&err),
            "(error) failed to decode reply: reply truncated: needed 11 bytes, buffer holds 6\n"
        );
    }

    #[test]
    fn test_render_invalid_utf8_is_lossy() {
        let value = RespValue::bulk_string(&b"\xff\xfe"[..]);
        assert_eq!(render(&value), "(bulk string)\n\"\u{fffd}\u{fffd}\"\n");
    }
}
