use thiserror::Error;

/// Reasons a JSON text is rejected.
///
/// A parse reports exactly one of these; the first failure wins. The
/// declaration order is stable, and the `Display` messages form the
/// human-readable counterpart of the codes.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    #[error("expected a value")]
    ExpectValue,
    /// A value began with a byte no grammar rule accepts, or a literal or
    /// number token was malformed.
    #[error("invalid value")]
    InvalidValue,
    /// A value parsed, but bytes remained after the trailing whitespace.
    #[error("extra content after the root value")]
    RootNotSingular,
    /// A number converted to an infinite binary64.
    #[error("number out of double-precision range")]
    NumberTooBig,
    /// The input ended inside a string.
    #[error("missing closing quotation mark")]
    MissQuotationMark,
    /// A backslash was followed by a byte outside the escape set.
    #[error("invalid escape sequence")]
    InvalidEscape,
    /// An unescaped control byte appeared inside a string.
    #[error("invalid character in string")]
    InvalidStringChar,
    /// A `\u` escape was not followed by four hex digits.
    #[error("invalid unicode hex escape")]
    InvalidUnicodeHex,
    /// A surrogate escape was unpaired or paired out of range.
    #[error("invalid unicode surrogate")]
    InvalidUnicodeSurrogate,
    /// An object expected a key but found no string.
    #[error("missing object key")]
    MissKey,
    /// An object key was not followed by a colon.
    #[error("missing colon after object key")]
    MissColon,
    /// An object member was not followed by a comma or closing brace.
    #[error("missing comma or closing curly bracket")]
    MissCommaOrCurlyBracket,
}
