//! JSON value types and accessors.
//!
//! This module defines the [`Value`] enum, which represents any valid JSON
//! value, together with the [`Member`] entries of objects and the payload-free
//! [`Kind`] tag.

use alloc::vec::Vec;

use bstr::{BStr, BString};

/// A single key/value entry of a JSON object.
///
/// Objects are ordered sequences of members: iteration order is insertion
/// order, and duplicate keys are preserved. Callers that want dictionary
/// semantics build their own lookup on top.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    /// Key bytes with all JSON escapes already decoded.
    pub key: BString,
    /// The value the key maps to.
    pub value: Value,
}

impl Member {
    /// Creates a member from anything convertible to key bytes and a value.
    pub fn new(key: impl Into<BString>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// A JSON value as defined by [RFC 8259].
///
/// The `Value` enum can represent any JSON data type:
///
/// - Null
/// - Boolean
/// - Number (finite IEEE-754 binary64)
/// - String (owned bytes, not required to be UTF-8)
/// - Array
/// - Object (ordered members)
///
/// A parent owns its children; dropping a value releases the whole subtree.
///
/// # Examples
///
/// ```
/// use jsonarbor::{Member, Value};
///
/// let v = Value::Object(vec![Member::new("key", Value::from("value"))]);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The `null` literal.
    Null,
    /// A `true` or `false` literal.
    Boolean(bool),
    /// A finite IEEE-754 binary64 number.
    Number(f64),
    /// Owned string bytes; not required to be valid UTF-8.
    String(BString),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// An ordered sequence of key/value members.
    Object(Vec<Member>),
}

/// The tag of a [`Value`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// The `null` literal.
    Null,
    /// A boolean.
    Boolean,
    /// A number.
    Number,
    /// A string.
    String,
    /// An array.
    Array,
    /// An object.
    Object,
}

impl Kind {
    /// Stable human-readable name of the tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl core::fmt::Display for Kind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for Value {
    /// The zero state: a fresh value reads as `Null`.
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(BString::from(v))
    }
}

impl From<BString> for Value {
    fn from(v: BString) -> Self {
        Self::String(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::String(BString::from(v))
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Vec<Member>> for Value {
    fn from(v: Vec<Member>) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns the tag of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Boolean(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonarbor::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The boolean payload, if the tag matches.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        if let Value::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    /// The number payload, if the tag matches.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        if let Value::Number(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    /// The raw string bytes, if the tag matches. Explicit length via
    /// [`string_len`](Self::string_len); bytes may contain embedded NUL.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&BStr> {
        if let Value::String(s) = self {
            Some(s.as_ref())
        } else {
            None
        }
    }

    /// The string payload as `&str`, if the tag matches and the bytes are
    /// valid UTF-8.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self {
            core::str::from_utf8(s).ok()
        } else {
            None
        }
    }

    /// The string payload's length in bytes, if the tag matches.
    #[must_use]
    pub fn string_len(&self) -> Option<usize> {
        if let Value::String(s) = self {
            Some(s.len())
        } else {
            None
        }
    }

    /// The elements of an array value.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        if let Value::Array(elements) = self {
            Some(elements)
        } else {
            None
        }
    }

    /// Mutable access to the elements of an array value.
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        if let Value::Array(elements) = self {
            Some(elements)
        } else {
            None
        }
    }

    /// The members of an object value, in insertion order.
    #[must_use]
    pub fn as_object(&self) -> Option<&[Member]> {
        if let Value::Object(members) = self {
            Some(members)
        } else {
            None
        }
    }

    /// Mutable access to the members of an object value.
    pub fn as_object_mut(&mut self) -> Option<&mut Vec<Member>> {
        if let Value::Object(members) = self {
            Some(members)
        } else {
            None
        }
    }

    /// Indexed access into an array value.
    ///
    /// Returns `None` when the tag is not `Array` or the index is out of
    /// range.
    #[must_use]
    pub fn element(&self, index: usize) -> Option<&Value> {
        self.as_array()?.get(index)
    }

    /// Indexed access into an object value, in insertion order.
    #[must_use]
    pub fn member(&self, index: usize) -> Option<&Member> {
        self.as_object()?.get(index)
    }

    /// Releases the payload and restores the `Null` state. Idempotent.
    pub fn reset(&mut self) {
        *self = Value::Null;
    }

    /// Equivalent to [`reset`](Self::reset); kept for symmetry with the
    /// other setters.
    pub fn set_null(&mut self) {
        *self = Value::Null;
    }

    /// Replaces the payload with a boolean. The previous payload is released
    /// first.
    pub fn set_boolean(&mut self, b: bool) {
        *self = Value::Boolean(b);
    }

    /// Replaces the payload with a number.
    ///
    /// The parser only ever produces finite numbers; installing a non-finite
    /// number here is a precondition violation and aborts serialization.
    pub fn set_number(&mut self, n: f64) {
        *self = Value::Number(n);
    }

    /// Replaces the payload with an owned copy of the given string bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonarbor::Value;
    ///
    /// let mut v = Value::Null;
    /// v.set_string("Hello");
    /// assert_eq!(v.as_str(), Some("Hello"));
    /// assert_eq!(v.string_len(), Some(5));
    /// ```
    pub fn set_string(&mut self, bytes: impl Into<BString>) {
        *self = Value::String(bytes.into());
    }
}

impl core::fmt::Display for Value {
    /// Renders the compact serialized form. String bytes that are not valid
    /// UTF-8 are shown lossily; use [`to_bytes`](crate::to_bytes) for the
    /// exact output.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let bytes = crate::ser::to_bytes(self);
        core::fmt::Display::fmt(BStr::new(&bytes), f)
    }
}

impl core::str::FromStr for Value {
    type Err = crate::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::from_str(s)
    }
}
