//! Number pre-validation, scanning, and binary64 conversion.

use super::{ParseError, Parser};
use crate::value::Value;

impl Parser<'_> {
    /// Parses a number token. The dispatcher guarantees the cursor sits on
    /// an ASCII digit or `-`.
    pub(super) fn parse_number(&mut self) -> Result<Value, ParseError> {
        let rest = &self.input[self.index..];
        prevalidate(rest)?;

        let len = scan(rest);
        if len == 0 {
            return Err(ParseError::InvalidValue);
        }
        // The scanned prefix is ASCII and inside the grammar `f64::from_str`
        // accepts, so neither conversion can fail.
        let lexeme =
            core::str::from_utf8(&rest[..len]).map_err(|_| ParseError::InvalidValue)?;
        let number: f64 = lexeme.parse().map_err(|_| ParseError::InvalidValue)?;
        if number.is_infinite() {
            return Err(ParseError::NumberTooBig);
        }

        self.index += len;
        Ok(Value::Number(number))
    }
}

/// Rejects shapes the converter would accept but JSON forbids: redundant
/// leading zeros (`00`), hex introducers (`0x1`), and a decimal point with
/// no digit behind it (`1.`, `2.x`). Applied uniformly after an optional
/// leading minus.
fn prevalidate(rest: &[u8]) -> Result<(), ParseError> {
    let digits = match rest {
        [b'-', tail @ ..] => tail,
        _ => rest,
    };
    if matches!(digits, [b'0', b'0' | b'x' | b'X', ..]) {
        return Err(ParseError::InvalidValue);
    }
    if let [first, b'.', tail @ ..] = digits {
        if first.is_ascii_digit() && !tail.first().is_some_and(u8::is_ascii_digit) {
            return Err(ParseError::InvalidValue);
        }
    }
    Ok(())
}

/// Length of the longest prefix a C `strtod` would consume, restricted to
/// decimal form. Zero when no digit is found.
fn scan(rest: &[u8]) -> usize {
    let mut index = usize::from(rest.first() == Some(&b'-'));

    let integer_digits = count_digits(&rest[index..]);
    index += integer_digits;

    let mut fraction_digits = 0;
    if rest.get(index) == Some(&b'.') {
        fraction_digits = count_digits(&rest[index + 1..]);
        index += 1 + fraction_digits;
    }
    if integer_digits + fraction_digits == 0 {
        return 0;
    }

    index + scan_exponent(&rest[index..])
}

/// `(e|E) sign? digit+`, or nothing. A dangling introducer is left
/// unconsumed, mirroring the converter's backtracking: `1e` scans as `1`.
fn scan_exponent(rest: &[u8]) -> usize {
    if !matches!(rest.first().copied(), Some(b'e' | b'E')) {
        return 0;
    }
    let mut index = 1;
    if matches!(rest.get(index).copied(), Some(b'+' | b'-')) {
        index += 1;
    }
    let digits = count_digits(&rest[index..]);
    if digits == 0 { 0 } else { index + digits }
}

fn count_digits(rest: &[u8]) -> usize {
    rest.iter().take_while(|byte| byte.is_ascii_digit()).count()
}
