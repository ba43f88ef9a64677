//! Functions for common string operations.

/// Returns the position of the first occurrence of the given byte.
#[cfg(feature = "memchr")]
#[inline]
#[must_use]
fn find(haystack: &str, needle: u8) -> Option<usize> {
    memchr::memchr(needle, haystack.as_bytes())
}

/// Returns the position of the first occurrence of the given byte.
#[cfg(not(feature = "memchr"))]
#[inline]
#[must_use]
fn find(haystack: &str, needle: u8) -> Option<usize> {
    haystack.bytes().position(|b| b == needle)
}

/// Returns the position of the first occurrence of any of the given bytes.
#[cfg(feature = "memchr")]
#[inline]
#[must_use]
fn find2(haystack: &str, needle1: u8, needle2: u8) -> Option<usize> {
    memchr::memchr2(needle1, needle2, haystack.as_bytes())
}

/// Returns the position of the first occurrence of any of the given bytes.
#[cfg(not(feature = "memchr"))]
#[inline]
#[must_use]
fn find2(haystack: &str, needle1: u8, needle2: u8) -> Option<usize> {
    haystack
        .bytes()
        .position(|b| (b == needle1) || (b == needle2))
}

/// Returns the position of the first occurrence of any of the given bytes.
#[cfg(feature = "memchr")]
#[inline]
#[must_use]
fn find3(haystack: &str, needle1: u8, needle2: u8, needle3: u8) -> Option<usize> {
    memchr::memchr3(needle1, needle2, needle3, haystack.as_bytes())
}

/// Returns the position of the first occurrence of any of the given bytes.
#[cfg(not(feature = "memchr"))]
#[inline]
#[must_use]
fn find3(haystack: &str, needle1: u8, needle2: u8, needle3: u8) -> Option<usize> {
    haystack
        .bytes()
        .position(|b| (b == needle1) || (b == needle2) || (b == needle3))
}

/// Returns the position of the last occurrence of the given byte.
#[cfg(feature = "memchr")]
#[inline]
#[must_use]
fn rfind(haystack: &str, needle: u8) -> Option<usize> {
    memchr::memrchr(needle, haystack.as_bytes())
}

/// Returns the position of the last occurrence of the given byte.
#[cfg(not(feature = "memchr"))]
#[inline]
#[must_use]
fn rfind(haystack: &str, needle: u8) -> Option<usize> {
    haystack.bytes().rposition(|b| b == needle)
}

/// Splits the string at the first occurrence of the byte, removing the byte.
///
/// The byte must be ASCII.
#[must_use]
pub(crate) fn find_split_hole(s: &str, b: u8) -> Option<(&str, &str)> {
    debug_assert!(b.is_ascii());
    find(s, b).map(|pos| (&s[..pos], &s[(pos + 1)..]))
}

/// Splits the string at the last occurrence of the byte, removing the byte.
///
/// The byte must be ASCII.
#[must_use]
pub(crate) fn rfind_split_hole(s: &str, b: u8) -> Option<(&str, &str)> {
    debug_assert!(b.is_ascii());
    rfind(s, b).map(|pos| (&s[..pos], &s[(pos + 1)..]))
}

/// Splits the string at the first occurrence of any of the bytes.
///
/// The delimiter is kept at the head of the second string.
/// The bytes must be ASCII.
#[must_use]
pub(crate) fn find_split2(s: &str, b1: u8, b2: u8) -> Option<(&str, &str)> {
    debug_assert!(b1.is_ascii());
    debug_assert!(b2.is_ascii());
    find2(s, b1, b2).map(|pos| s.split_at(pos))
}

/// Splits the string at the first occurrence of any of the bytes.
///
/// The delimiter is kept at the head of the second string.
/// The bytes must be ASCII.
#[must_use]
pub(crate) fn find_split3(s: &str, b1: u8, b2: u8, b3: u8) -> Option<(&str, &str)> {
    debug_assert!(b1.is_ascii());
    debug_assert!(b2.is_ascii());
    debug_assert!(b3.is_ascii());
    find3(s, b1, b2, b3).map(|pos| s.split_at(pos))
}
