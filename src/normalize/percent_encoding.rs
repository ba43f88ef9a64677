//! Percent-escape scanner.
//!
//! The scanner never fails. A `%` that does not start a valid `%XX`
//! triplet becomes [`Token::MalformedPercent`], and the characters after it
//! are scanned again as ordinary input.

use crate::parser::char::decode_xdigits2;

/// A token of a URL component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    /// A character written literally in the input.
    Literal(char),
    /// An octet decoded from a valid percent-encoded triplet.
    Escaped(u8),
    /// A `%` character not followed by two hexadecimal digits.
    MalformedPercent,
    /// A multi-byte character recombined from percent-encoded octets.
    Recombined(char),
}

impl Token {
    /// Returns the escaped octet if the token is a non-ASCII escaped octet.
    #[inline]
    #[must_use]
    pub(crate) fn high_octet(self) -> Option<u8> {
        match self {
            Self::Escaped(b) if !b.is_ascii() => Some(b),
            _ => None,
        }
    }
}

/// Iterator of tokens in the given string.
#[derive(Debug, Clone)]
pub(crate) struct Tokens<'a> {
    /// The rest of the input.
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    /// Creates a new scanner.
    #[inline]
    #[must_use]
    pub(crate) fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let mut chars = self.rest.chars();
        let c = chars.next()?;
        if c != '%' {
            self.rest = chars.as_str();
            return Some(Token::Literal(c));
        }

        let after_percent = &self.rest[1..];
        match decode_xdigits2(after_percent.as_bytes()) {
            Some(byte) => {
                // Both digits are ASCII, so this is a char boundary.
                self.rest = &after_percent[2..];
                Some(Token::Escaped(byte))
            }
            None => {
                tracing::debug!(
                    following = %after_percent.chars().take(2).collect::<String>(),
                    "repairing malformed percent escape"
                );
                self.rest = after_percent;
                Some(Token::MalformedPercent)
            }
        }
    }
}

impl core::iter::FusedIterator for Tokens<'_> {}
