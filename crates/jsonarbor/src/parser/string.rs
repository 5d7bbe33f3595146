//! String decoding: short escapes, `\uXXXX` sequences, and surrogate pairs.

use bstr::BString;

use super::{ParseError, Parser};
use crate::scratch::Scratch;

impl Parser<'_> {
    /// Parses a string token into its decoded bytes, shared by string values
    /// and object keys. The cursor sits on the opening quote.
    ///
    /// Decoded bytes are staged on the scratch stack and moved out when the
    /// closing quote arrives; every failure rewinds the staging to the entry
    /// mark.
    pub(super) fn parse_string(&mut self) -> Result<BString, ParseError> {
        let mark = self.scratch.mark();
        self.bump();
        loop {
            match self.next_byte() {
                Some(b'"') => return Ok(BString::from(self.scratch.take_from(mark))),
                Some(b'\\') => {
                    if let Err(err) = self.parse_escape() {
                        return Err(self.fail_string(mark, err));
                    }
                }
                // Everything except the quote, the backslash, and control
                // bytes passes through untouched, UTF-8 continuation bytes
                // included.
                Some(byte @ (0x20..=0x21 | 0x23..=0x5B | 0x5D..=0xFF)) => {
                    self.scratch.push(byte);
                }
                Some(_) => return Err(self.fail_string(mark, ParseError::InvalidStringChar)),
                None => return Err(self.fail_string(mark, ParseError::MissQuotationMark)),
            }
        }
    }

    fn fail_string(&mut self, mark: usize, err: ParseError) -> ParseError {
        self.scratch.rewind(mark);
        err
    }

    /// Decodes one escape sequence; the leading backslash is already
    /// consumed.
    fn parse_escape(&mut self) -> Result<(), ParseError> {
        match self.next_byte() {
            Some(b'"') => self.scratch.push(b'"'),
            Some(b'\\') => self.scratch.push(b'\\'),
            Some(b'/') => self.scratch.push(b'/'),
            Some(b'b') => self.scratch.push(0x08),
            Some(b'f') => self.scratch.push(0x0C),
            Some(b'n') => self.scratch.push(b'\n'),
            Some(b'r') => self.scratch.push(b'\r'),
            Some(b't') => self.scratch.push(b'\t'),
            Some(b'u') => {
                let codepoint = self.parse_unicode_escape()?;
                encode_utf8(&mut self.scratch, codepoint);
            }
            _ => return Err(ParseError::InvalidEscape),
        }
        Ok(())
    }

    /// Parses the four-hex-digit payload of a `\u` escape, joining a
    /// surrogate pair into its supplementary-plane codepoint.
    fn parse_unicode_escape(&mut self) -> Result<u32, ParseError> {
        let high = self.parse_hex4()?;
        if let 0xDC00..=0xDFFF = high {
            // A low surrogate with no high surrogate before it.
            return Err(ParseError::InvalidUnicodeSurrogate);
        }
        if let 0xD800..=0xDBFF = high {
            if self.next_byte() != Some(b'\\') || self.next_byte() != Some(b'u') {
                return Err(ParseError::InvalidUnicodeSurrogate);
            }
            let low = self.parse_hex4()?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(ParseError::InvalidUnicodeSurrogate);
            }
            return Ok(0x10000 + (high - 0xD800) * 0x400 + (low - 0xDC00));
        }
        Ok(high)
    }

    /// Exactly four case-insensitive hex digits.
    fn parse_hex4(&mut self) -> Result<u32, ParseError> {
        let mut acc = 0u32;
        for _ in 0..4 {
            let Some(digit) = self.next_byte().and_then(hex_val) else {
                return Err(ParseError::InvalidUnicodeHex);
            };
            acc = (acc << 4) | digit;
        }
        Ok(acc)
    }
}

fn hex_val(byte: u8) -> Option<u32> {
    match byte {
        b'0'..=b'9' => Some(u32::from(byte - b'0')),
        b'a'..=b'f' => Some(u32::from(byte - b'a') + 10),
        b'A'..=b'F' => Some(u32::from(byte - b'A') + 10),
        _ => None,
    }
}

/// Encodes a codepoint as UTF-8 onto the scratch stack.
fn encode_utf8(scratch: &mut Scratch, u: u32) {
    if u <= 0x7F {
        scratch.push(u as u8);
    } else if u <= 0x7FF {
        scratch.push(0xC0 | (u >> 6) as u8);
        scratch.push(0x80 | (u & 0x3F) as u8);
    } else if u <= 0xFFFF {
        scratch.push(0xE0 | (u >> 12) as u8);
        scratch.push(0x80 | ((u >> 6) & 0x3F) as u8);
        scratch.push(0x80 | (u & 0x3F) as u8);
    } else {
        scratch.push(0xF0 | ((u >> 18) & 0x07) as u8);
        scratch.push(0x80 | ((u >> 12) & 0x3F) as u8);
        scratch.push(0x80 | ((u >> 6) & 0x3F) as u8);
        scratch.push(0x80 | (u & 0x3F) as u8);
    }
}
