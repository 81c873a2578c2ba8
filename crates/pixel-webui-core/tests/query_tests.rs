//! Integration tests for query-string handling.

use pixel_webui_core::{
    CommandRequest,
    query::{decode_component, find_arg, parse_permissive_int},
};

// -----------------------------------------------------------------------------
// Target splitting and lookup
// -----------------------------------------------------------------------------

#[test]
fn target_splits_at_first_question_mark() {
    let request = CommandRequest::from_target("/b?set=1?2");

    assert_eq!(request.path, "/b");
    assert_eq!(request.query, Some("set=1?2"));
    assert_eq!(CommandRequest::from_target("/status").query, None);
}

#[test]
fn first_matching_argument_wins() {
    assert_eq!(find_arg("a=1&set=10&set=20", "set"), Some("10"));
}

#[test]
fn argument_without_equals_is_present_and_empty() {
    assert_eq!(find_arg("set", "set"), Some(""));
}

#[test]
fn keys_are_compared_after_decoding() {
    assert_eq!(find_arg("s%65t=%342", "set"), Some("%342"));
    assert!(find_arg("settings=1&&x=2", "set").is_none());
}

// -----------------------------------------------------------------------------
// Percent decoding
// -----------------------------------------------------------------------------

fn decoded(raw: &str) -> Vec<u8> {
    decode_component(raw).collect()
}

#[test]
fn decodes_plus_and_hex_escapes() {
    assert_eq!(decoded("a+b%2Cc%2c"), b"a b,c,");
}

#[test]
fn keeps_malformed_escapes() {
    assert_eq!(decoded("100%"), b"100%");
    assert_eq!(decoded("%zz1"), b"%zz1");
    assert_eq!(decoded("%4"), b"%4");
}

#[test]
fn long_values_are_decoded_in_full() {
    let long = "9".repeat(100);

    assert_eq!(decoded(&long).len(), 100);
}

// -----------------------------------------------------------------------------
// Permissive integers
// -----------------------------------------------------------------------------

#[test]
fn reads_like_atol() {
    let cases: [(&[u8], i32); 11] = [
        (b"42", 42),
        (b"  42", 42),
        (b"\t-7", -7),
        (b"+8", 8),
        (b"12abc", 12),
        (b"abc", 0),
        (b"", 0),
        (b"-", 0),
        (b"- 5", 0),
        (b"3.9", 3),
        (b"0x10", 0),
    ];

    for (text, expected) in cases {
        assert_eq!(parse_permissive_int(text.iter().copied()), expected, "{:?}", text);
    }
}

#[test]
fn saturates_instead_of_wrapping() {
    assert_eq!(parse_permissive_int("123456789012345678901234567890".bytes()), i32::MAX);
    assert_eq!(parse_permissive_int("-123456789012345678901234567890".bytes()), i32::MIN);
}

#[test]
fn long_padding_does_not_hide_the_number() {
    let zeros = format!("{}200", "0".repeat(40));
    let spaces = format!("{}120", "+".repeat(35));

    assert_eq!(parse_permissive_int(decode_component(&zeros)), 200);
    assert_eq!(parse_permissive_int(decode_component(&spaces)), 120);
}
