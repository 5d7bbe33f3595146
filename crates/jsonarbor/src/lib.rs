//! A compact JSON tree codec.
//!
//! [`from_slice`] and [`from_str`] parse a complete JSON text into an owned
//! [`Value`] tree in a single pass; [`to_bytes`] renders a tree back to
//! compact JSON text. Strings are byte sequences ([`bstr::BString`]): the
//! parser passes non-control bytes through untouched, so trees can carry
//! embedded NUL bytes and content that is not valid UTF-8.
//!
//! ```
//! use jsonarbor::{from_str, to_bytes};
//!
//! let value = from_str(r#"{ "id": 7, "tags": ["a", "b"] }"#)?;
//! assert_eq!(value.member(0).unwrap().key, "id");
//! assert_eq!(value.member(0).unwrap().value.as_number(), Some(7.0));
//! assert_eq!(to_bytes(&value), br#"{"id":7.0,"tags":["a","b"]}"#);
//! # Ok::<(), jsonarbor::ParseError>(())
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod scratch;
mod ser;
mod value;

mod parser;

pub use parser::{ParseError, from_slice, from_str};
pub use ser::to_bytes;
pub use value::{Kind, Member, Value};
