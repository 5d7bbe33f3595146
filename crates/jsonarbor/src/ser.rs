//! Compact serialization of value trees.

use alloc::vec::Vec;

use crate::scratch::Scratch;
use crate::value::{Member, Value};

/// Serializes a value tree to compact JSON text.
///
/// The output carries no whitespace. Numbers print as the shortest decimal
/// form that parses back to the same `f64`. String bytes below 0x20 without
/// a short escape become lowercase `\u00XX`; all other bytes pass through
/// verbatim, so the output is valid UTF-8 exactly when every string in the
/// tree is.
///
/// # Examples
///
/// ```
/// use jsonarbor::{Member, Value, to_bytes};
///
/// let v = Value::Object(vec![Member::new("a", Value::Array(vec![]))]);
/// assert_eq!(to_bytes(&v), br#"{"a":[]}"#);
/// ```
#[must_use]
pub fn to_bytes(value: &Value) -> Vec<u8> {
    let mut out = Scratch::new();
    write_value(&mut out, value);
    out.into_bytes()
}

fn write_value(out: &mut Scratch, value: &Value) {
    match value {
        Value::Null => out.extend(b"null"),
        Value::Boolean(true) => out.extend(b"true"),
        Value::Boolean(false) => out.extend(b"false"),
        Value::Number(number) => write_number(out, *number),
        Value::String(bytes) => write_string(out, bytes),
        Value::Array(elements) => {
            out.push(b'[');
            for (index, element) in elements.iter().enumerate() {
                if index > 0 {
                    out.push(b',');
                }
                write_value(out, element);
            }
            out.push(b']');
        }
        Value::Object(members) => {
            out.push(b'{');
            for (index, Member { key, value }) in members.iter().enumerate() {
                if index > 0 {
                    out.push(b',');
                }
                write_string(out, key);
                out.push(b':');
                write_value(out, value);
            }
            out.push(b'}');
        }
    }
}

// Trees built by the parser only hold finite numbers; a non-finite one can
// only arrive through the setter API and aborts here.
fn write_number(out: &mut Scratch, number: f64) {
    let mut buffer = ryu::Buffer::new();
    out.extend(buffer.format_finite(number).as_bytes());
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

fn write_string(out: &mut Scratch, bytes: &[u8]) {
    out.push(b'"');
    for &byte in bytes {
        match byte {
            b'"' => out.extend(b"\\\""),
            b'\\' => out.extend(b"\\\\"),
            0x08 => out.extend(b"\\b"),
            0x0C => out.extend(b"\\f"),
            b'\n' => out.extend(b"\\n"),
            b'\r' => out.extend(b"\\r"),
            b'\t' => out.extend(b"\\t"),
            0x00..=0x1F => {
                out.extend(b"\\u00");
                out.push(HEX_DIGITS[usize::from(byte >> 4)]);
                out.push(HEX_DIGITS[usize::from(byte & 0x0F)]);
            }
            _ => out.push(byte),
        }
    }
    out.push(b'"');
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use bstr::BString;

    use super::to_bytes;
    use crate::value::{Member, Value};

    #[test]
    fn literals() {
        assert_eq!(to_bytes(&Value::Null), b"null");
        assert_eq!(to_bytes(&Value::Boolean(true)), b"true");
        assert_eq!(to_bytes(&Value::Boolean(false)), b"false");
    }

    #[test]
    fn numbers_shortest_roundtrip_form() {
        assert_eq!(to_bytes(&Value::Number(0.0)), b"0.0");
        assert_eq!(to_bytes(&Value::Number(-0.0)), b"-0.0");
        assert_eq!(to_bytes(&Value::Number(123.0)), b"123.0");
        assert_eq!(to_bytes(&Value::Number(55.123)), b"55.123");
        assert_eq!(to_bytes(&Value::Number(1e30)), b"1e30");
        assert_eq!(
            to_bytes(&Value::Number(1.0000000000000002)),
            b"1.0000000000000002"
        );
    }

    #[test]
    fn string_escapes() {
        let v = Value::from("\" \\ \u{8} \u{c} \n \r \t");
        assert_eq!(to_bytes(&v), br#""\" \\ \b \f \n \r \t""#);
    }

    #[test]
    fn control_bytes_as_lowercase_hex_escapes() {
        let v = Value::String(BString::from(vec![0x01u8, 0x1F, 0x1E]));
        assert_eq!(to_bytes(&v), br#""\u0001\u001f\u001e""#);
    }

    #[test]
    fn solidus_is_not_escaped() {
        assert_eq!(to_bytes(&Value::from("a/b")), br#""a/b""#);
    }

    #[test]
    fn non_utf8_bytes_pass_through() {
        let v = Value::String(BString::from(vec![0xFFu8, 0xFE]));
        assert_eq!(to_bytes(&v), [b'"', 0xFF, 0xFE, b'"']);
    }

    #[test]
    fn containers_compact() {
        let v = Value::Array(vec![
            Value::Number(1.0),
            Value::Array(vec![]),
            Value::Object(vec![
                Member::new("k", Value::Null),
                Member::new("k", Value::Boolean(true)),
            ]),
        ]);
        assert_eq!(to_bytes(&v), br#"[1.0,[],{"k":null,"k":true}]"#);
    }
}
