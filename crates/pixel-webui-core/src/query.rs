//! Query-string handling for request targets such as `/b?set=120`.
//!
//! Values are decoded lazily, so arbitrarily long arguments are read in
//! full without a buffer.

/// Find the first argument named `name` and return its raw, still encoded
/// value.
///
/// Keys are compared after decoding. An argument without `=` is present
/// with an empty value.
pub fn find_arg<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            decode_component(key)
                .eq(name.bytes())
                .then_some(value)
        })
}

/// Decode `+` and `%XX` escapes. Malformed escapes are kept verbatim.
pub fn decode_component(raw: &str) -> Decode<'_> {
    Decode {
        bytes: raw.as_bytes(),
        at: 0,
    }
}

/// Byte iterator returned by [`decode_component`].
#[derive(Debug, Clone)]
pub struct Decode<'a> {
    bytes: &'a [u8],
    at: usize,
}

impl Iterator for Decode<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let byte = *self.bytes.get(self.at)?;
        self.at += 1;
        Some(match byte {
            b'+' => b' ',
            b'%' => {
                let hi = self.bytes.get(self.at).copied().and_then(hex_value);
                let lo = self.bytes.get(self.at + 1).copied().and_then(hex_value);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        self.at += 2;
                        (hi << 4) | lo
                    }
                    _ => b'%',
                }
            }
            other => other,
        })
    }
}

const fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Read an integer the way C `atol` does.
///
/// Leading whitespace and one sign are accepted, then the leading run of
/// decimal digits. No digits yields 0. Out-of-range values saturate.
#[allow(clippy::cast_possible_truncation)]
pub fn parse_permissive_int(text: impl IntoIterator<Item = u8>) -> i32 {
    let mut bytes = text
        .into_iter()
        .skip_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c))
        .peekable();

    let negative = match bytes.peek() {
        Some(b'-') => {
            bytes.next();
            true
        }
        Some(b'+') => {
            bytes.next();
            false
        }
        _ => false,
    };

    let mut magnitude: i64 = 0;
    for digit in bytes.take_while(u8::is_ascii_digit) {
        magnitude = magnitude
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
    }
    let value = if negative { -magnitude } else { magnitude };

    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
