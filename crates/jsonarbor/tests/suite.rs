//! End-to-end scenarios exercised over the public API surface only.

use jsonarbor::{Kind, ParseError, from_slice, from_str, to_bytes};

#[test]
fn whitespace_wrapped_null() {
    let value = from_str("   null  ").unwrap();
    assert_eq!(value.kind(), Kind::Null);
}

#[test]
fn smallest_number_above_one_is_bit_exact() {
    let value = from_str("1.0000000000000002").unwrap();
    assert_eq!(
        value.as_number().map(f64::to_bits),
        Some(1.000_000_000_000_000_2_f64.to_bits())
    );
}

#[test]
fn surrogate_pair_decodes_to_four_utf8_bytes() {
    let value = from_str("\"\\uD834\\uDD1E\"").unwrap();
    assert_eq!(value.string_len(), Some(4));
    assert_eq!(value.as_bytes().unwrap(), &[0xF0, 0x9D, 0x84, 0x9E][..]);
}

#[test]
fn nested_array_shape() {
    let value = from_str(r#"["13fas", [1, 55.123], 3, 4]"#).unwrap();
    let elements = value.as_array().unwrap();
    assert_eq!(elements.len(), 4);
    let inner = elements[1].as_array().unwrap();
    assert_eq!(inner.len(), 2);
    assert_eq!(inner[0].as_number(), Some(1.0));
    assert_eq!(inner[1].as_number(), Some(55.123));
}

#[test]
fn mixed_object_keeps_key_order() {
    let value = from_str(
        r#"{"n":null,"f":false,"t":true,"i":123,"s":"abc","a":[1,2,3],"o":{"1":1,"2":2,"3":3}}"#,
    )
    .unwrap();
    let members = value.as_object().unwrap();
    assert_eq!(members.len(), 7);
    for (member, key) in members.iter().zip(["n", "f", "t", "i", "s", "a", "o"]) {
        assert_eq!(member.key, key);
    }
    assert_eq!(members[5].value.as_array().unwrap().len(), 3);
    let inner = members[6].value.as_object().unwrap();
    assert_eq!(inner.len(), 3);
    for (member, key) in inner.iter().zip(["1", "2", "3"]) {
        assert_eq!(member.key, key);
        assert!(member.value.is_number());
    }
}

#[test]
fn unterminated_array_is_invalid() {
    assert_eq!(from_str("[1"), Err(ParseError::InvalidValue));
}

#[test]
fn unterminated_object_misses_comma_or_bracket() {
    assert_eq!(
        from_str(r#"{"a":1"#),
        Err(ParseError::MissCommaOrCurlyBracket)
    );
}

#[test]
fn high_surrogate_without_low_is_rejected() {
    assert_eq!(
        from_str("\"\\uD800\\uE000\""),
        Err(ParseError::InvalidUnicodeSurrogate)
    );
}

#[test]
fn astronomical_exponent_is_too_big() {
    assert_eq!(from_str("123E123123122"), Err(ParseError::NumberTooBig));
}

#[test]
fn stringified_literal_round_trips_byte_for_byte() {
    let out = to_bytes(&from_str("true").unwrap());
    assert_eq!(out, b"true");
    assert_eq!(out.len(), 4);
}

#[test]
fn binary_input_is_accepted_without_utf8_validation() {
    let value = from_slice(b"[\"\xFF\xFE\", 1]").unwrap();
    assert_eq!(
        value.element(0).unwrap().as_bytes().unwrap(),
        &[0xFF, 0xFE][..]
    );
    // Lossless through the serializer as well.
    assert_eq!(to_bytes(&value), b"[\"\xFF\xFE\",1.0]");
}

#[test]
fn error_messages_are_stable() {
    assert_eq!(ParseError::ExpectValue.to_string(), "expected a value");
    assert_eq!(
        ParseError::RootNotSingular.to_string(),
        "extra content after the root value"
    );
    assert_eq!(
        ParseError::MissCommaOrCurlyBracket.to_string(),
        "missing comma or closing curly bracket"
    );
}
