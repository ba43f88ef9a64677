//! Helpers for characters.

/// Checks if the given ASCII byte may be written literally in a canonical URL.
///
/// Letters, digits, and `- _ . ~ ! * ' ( ) , : @ & = + $ / ?` are safe.
/// Everything else (space, `%`, `#`, `;`, control characters, ...) must be
/// percent-encoded.
#[inline]
#[must_use]
pub(crate) fn is_ascii_safe(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'-' | b'_'
                | b'.'
                | b'~'
                | b'!'
                | b'*'
                | b'\''
                | b'('
                | b')'
                | b','
                | b':'
                | b'@'
                | b'&'
                | b'='
                | b'+'
                | b'$'
                | b'/'
                | b'?'
        )
}

/// Checks if the given character may be written literally in a canonical URL.
///
/// Non-ASCII printable characters are safe; non-ASCII control characters
/// (C1 controls) are not.
#[inline]
#[must_use]
pub(crate) fn is_safe(c: char) -> bool {
    if c.is_ascii() {
        is_ascii_safe(c as u8)
    } else {
        !c.is_control()
    }
}

/// Decodes the given hexadecimal digit.
#[inline]
#[must_use]
fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Decodes two hexadecimal digits at the head of the given bytes.
///
/// Returns `None` if there are fewer than two bytes or either is not a hex
/// digit.
#[inline]
#[must_use]
pub(crate) fn decode_xdigits2(bytes: &[u8]) -> Option<u8> {
    match bytes {
        [upper, lower, ..] => Some((hex_value(*upper)? << 4) | hex_value(*lower)?),
        _ => None,
    }
}

/// Returns the length of the UTF-8 sequence started by the given lead byte.
///
/// Returns `None` if the byte cannot start a multi-byte sequence (ASCII
/// bytes, continuation bytes, and bytes never valid in UTF-8).
#[inline]
#[must_use]
pub(crate) fn utf8_multibyte_len(lead: u8) -> Option<usize> {
    match lead {
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Checks if the given byte is a UTF-8 continuation byte (`10xxxxxx`).
#[inline]
#[must_use]
pub(crate) fn is_utf8_byte_continue(byte: u8) -> bool {
    (byte & 0xC0) == 0x80
}

/// Checks if the given string can start a URL scheme followed by a colon.
///
/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
#[must_use]
pub(crate) fn is_scheme(s: &str) -> bool {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
}
