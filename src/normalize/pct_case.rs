//! Percent-encoding normalization and case normalization of a component.

use core::fmt::{self, Write as _};

use crate::options::{CanonicalizeOptions, CaseFold};
use crate::parser::char::{is_ascii_safe, is_safe};

use super::high_order::Recombine;
use super::percent_encoding::{Token, Tokens};

/// Component of a URL being written.
///
/// The context decides which percent-encoded characters must stay encoded
/// even though they are safe, because decoding them would change how the
/// output is decomposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Context {
    /// Authority (`userinfo@host:port`).
    Authority,
    /// Path following an authority.
    Path,
    /// Path of an absolute URL without authority, e.g. `mailto:`.
    ///
    /// An encoded `/` at the start, or right after the leading slash, stays
    /// encoded.
    OpaquePath,
    /// Path of a relative reference.
    ///
    /// An encoded `:` or `/` in the first segment stays encoded, and so does
    /// an encoded `/` right after the leading slash. If the first segment
    /// contains a literal `:`, every escape in that segment stays encoded.
    RelativePath,
    /// Query, without the leading `?`.
    Query,
    /// Fragment, without the leading `#`.
    Fragment,
}

/// Position inside a path without authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathPosition {
    /// Nothing has been written yet.
    Start,
    /// Only the leading slash has been written.
    AfterRootSlash,
    /// Inside the first segment of a rootless path.
    FirstSegment,
    /// Inside the first segment of a relative path that contains a literal
    /// `:`.
    ///
    /// Its canonical form must not spell out a scheme.
    Protected,
    /// Anywhere else.
    Rest,
}

impl PathPosition {
    /// Returns the position after the given token.
    #[must_use]
    fn advance(self, token: Token) -> Self {
        match (self, token) {
            (Self::Protected, Token::Literal('/')) => Self::Rest,
            (Self::Protected, _) => Self::Protected,
            // A decoded `?` ends the path when the output is parsed again.
            // Nothing else is decoded in ambiguous mode, so the position no
            // longer matters there.
            (_, Token::Escaped(b'?')) => Self::Rest,
            (Self::Start, Token::Literal('/')) => Self::AfterRootSlash,
            (Self::Start, _) => Self::FirstSegment,
            (Self::FirstSegment, Token::Literal('/')) => Self::Rest,
            (Self::FirstSegment, _) => Self::FirstSegment,
            (Self::AfterRootSlash, _) | (Self::Rest, _) => Self::Rest,
        }
    }
}

impl Context {
    /// Returns true if the unsafe ASCII byte is written literally anyway.
    ///
    /// Brackets delimit IP literals in the authority.
    #[inline]
    #[must_use]
    fn keeps_literal(self, b: u8) -> bool {
        self == Self::Authority && matches!(b, b'[' | b']')
    }

    /// Returns true if the encoded ASCII byte must stay encoded at the position.
    #[must_use]
    fn keeps_encoded(self, b: u8, pos: PathPosition) -> bool {
        match (self, pos) {
            (Self::Authority, _) => matches!(b, b'/' | b'?' | b'#' | b'@' | b':'),
            (_, PathPosition::Protected) => true,
            (Self::OpaquePath | Self::RelativePath, PathPosition::AfterRootSlash) => b == b'/',
            (Self::OpaquePath, PathPosition::Start) => b == b'/',
            (Self::RelativePath, PathPosition::Start | PathPosition::FirstSegment) => {
                matches!(b, b':' | b'/')
            }
            _ => false,
        }
    }

    /// Returns the position to start writing the given component at.
    #[must_use]
    fn start_position(self, source: &str) -> PathPosition {
        let colon_in_first_segment = source
            .split('/')
            .next()
            .map_or(false, |segment| segment.contains(':'));
        if self == Self::RelativePath && colon_in_first_segment {
            PathPosition::Protected
        } else {
            PathPosition::Start
        }
    }
}

/// Writable as a canonical URL component.
///
/// This wrapper does the things below when being formatted:
///
/// * Repair malformed percent escapes (`%` is written as `%25`).
/// * Recombine percent-encoded UTF-8 sequences (if enabled).
/// * Decode percent-encoded safe characters (in unambiguous mode).
/// * Encode unsafe characters, with lowercase hexadecimal digits.
/// * Lowercase letters.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PctCaseNormalized<'a> {
    /// Raw component.
    source: &'a str,
    /// Component context.
    context: Context,
    /// Options.
    options: CanonicalizeOptions,
}

impl<'a> PctCaseNormalized<'a> {
    /// Creates a new `PctCaseNormalized` value.
    #[inline]
    #[must_use]
    pub(crate) fn new(source: &'a str, context: Context, options: CanonicalizeOptions) -> Self {
        Self {
            source,
            context,
            options,
        }
    }

    /// Writes a single token.
    fn write_token(
        &self,
        f: &mut fmt::Formatter<'_>,
        token: Token,
        pos: PathPosition,
    ) -> fmt::Result {
        match token {
            Token::Literal(c) if c.is_ascii() => {
                if is_ascii_safe(c as u8) || self.context.keeps_literal(c as u8) {
                    f.write_char(c.to_ascii_lowercase())
                } else {
                    write_pct_encoded(f, c as u8)
                }
            }
            Token::Literal(c) => {
                if self.options.correct_high_order && is_safe(c) {
                    self.write_folded(f, c, pos)
                } else {
                    write_pct_encoded_char(f, c)
                }
            }
            Token::Escaped(b) => {
                let decode = self.options.unambiguous
                    && is_ascii_safe(b)
                    && !self.context.keeps_encoded(b, pos);
                if decode {
                    f.write_char(char::from(b.to_ascii_lowercase()))
                } else {
                    write_pct_encoded(f, b)
                }
            }
            Token::MalformedPercent => write_pct_encoded(f, b'%'),
            Token::Recombined(c) => {
                if is_safe(c) {
                    self.write_folded(f, c, pos)
                } else {
                    write_pct_encoded_char(f, c)
                }
            }
        }
    }

    /// Writes a non-ASCII character with the configured case folding.
    ///
    /// Characters in a protected segment are not folded, since some fold
    /// into ASCII letters (e.g. U+212A KELVIN SIGN).
    fn write_folded(&self, f: &mut fmt::Formatter<'_>, c: char, pos: PathPosition) -> fmt::Result {
        match self.options.case_fold {
            CaseFold::Unicode if pos != PathPosition::Protected => {
                c.to_lowercase().try_for_each(|c| f.write_char(c))
            }
            _ => f.write_char(c),
        }
    }

    /// Writes the given tokens.
    fn write_tokens<I>(&self, f: &mut fmt::Formatter<'_>, tokens: I) -> fmt::Result
    where
        I: Iterator<Item = Token>,
    {
        let mut pos = self.context.start_position(self.source);
        for token in tokens {
            self.write_token(f, token, pos)?;
            pos = pos.advance(token);
        }
        Ok(())
    }
}

impl fmt::Display for PctCaseNormalized<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens = Tokens::new(self.source);
        if self.options.correct_high_order {
            self.write_tokens(f, Recombine::new(tokens))
        } else {
            self.write_tokens(f, tokens)
        }
    }
}

/// Writes the percent-encoded triplet of the byte, with lowercase hex digits.
#[inline]
fn write_pct_encoded(f: &mut fmt::Formatter<'_>, b: u8) -> fmt::Result {
    write!(f, "%{:02x}", b)
}

/// Writes the UTF-8 octets of the character as percent-encoded triplets.
fn write_pct_encoded_char(f: &mut fmt::Formatter<'_>, c: char) -> fmt::Result {
    let mut buf = [0_u8; 4];
    c.encode_utf8(&mut buf)
        .bytes()
        .try_for_each(|b| write_pct_encoded(f, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(s: &str, context: Context, options: CanonicalizeOptions) -> String {
        PctCaseNormalized::new(s, context, options).to_string()
    }

    fn unambiguous(s: &str) -> String {
        normalize(s, Context::Path, CanonicalizeOptions::new())
    }

    fn ambiguous(s: &str) -> String {
        normalize(s, Context::Path, CanonicalizeOptions::ambiguous())
    }

    #[test]
    fn safe_escapes_decoded_when_unambiguous() {
        assert_eq!(unambiguous("/%2A"), "/*");
        assert_eq!(unambiguous("/%2a*"), "/**");
        assert_eq!(unambiguous("%7E%41"), "~a");
    }

    #[test]
    fn safe_escapes_kept_when_ambiguous() {
        assert_eq!(ambiguous("/%2A"), "/%2a");
        assert_eq!(ambiguous("/%2a*"), "/%2a*");
        assert_eq!(ambiguous("a,b%2Cc"), "a,b%2cc");
    }

    #[test]
    fn unsafe_characters_encoded() {
        assert_eq!(unambiguous("a b"), "a%20b");
        assert_eq!(unambiguous("a%20b"), "a%20b");
        assert_eq!(unambiguous("a;b<c>"), "a%3bb%3cc%3e");
        assert_eq!(unambiguous("tab\there"), "tab%09here");
        assert_eq!(unambiguous("%25"), "%25");
    }

    #[test]
    fn malformed_percent_repaired() {
        assert_eq!(unambiguous("/%"), "/%25");
        assert_eq!(unambiguous("/%%25"), "/%25%25");
        assert_eq!(unambiguous("/%a%2A"), "/%25a*");
        assert_eq!(ambiguous("/%a%2A"), "/%25a%2a");
    }

    #[test]
    fn letters_lowercased() {
        assert_eq!(unambiguous("/Foo/BAR"), "/foo/bar");
        assert_eq!(ambiguous("/%C3"), "/%c3");
    }

    #[test]
    fn high_order_correction() {
        assert_eq!(unambiguous("Ros%C3%A9"), "ros\u{E9}");
        assert_eq!(ambiguous("Ros%C3%A9"), "ros\u{E9}");
        assert_eq!(
            normalize("Ros\u{E9}", Context::Path, CanonicalizeOptions::split_high_order()),
            "ros%c3%a9"
        );
        assert_eq!(
            normalize("Ros%C3%A9", Context::Path, CanonicalizeOptions::split_high_order()),
            "ros%c3%a9"
        );
    }

    #[test]
    fn non_ascii_controls_encoded() {
        assert_eq!(unambiguous("a\u{85}b"), "a%c2%85b");
        assert_eq!(unambiguous("a%C2%85b"), "a%c2%85b");
    }

    #[test]
    fn unicode_case_fold() {
        let opts = CanonicalizeOptions::new().with_case_fold(CaseFold::Unicode);
        assert_eq!(normalize("\u{C6}BLE", Context::Path, opts), "\u{E6}ble");
        assert_eq!(unambiguous("\u{C6}BLE"), "\u{C6}ble");
    }

    #[test]
    fn delimiters_stay_encoded() {
        let opts = CanonicalizeOptions::new();
        assert_eq!(normalize("h%2Fx%3A1", Context::Authority, opts), "h%2fx%3a1");
        assert_eq!(normalize("u%40h%3F", Context::Authority, opts), "u%40h%3f");
        assert_eq!(normalize("[::1]:80", Context::Authority, opts), "[::1]:80");
        assert_eq!(normalize("%5B::1%5D", Context::Authority, opts), "%5b::1%5d");
        assert_eq!(normalize("/[a]", Context::Path, opts), "/%5ba%5d");
        assert_eq!(normalize("a%23b", Context::Fragment, opts), "a%23b");
    }

    #[test]
    fn question_mark_decoded() {
        let opts = CanonicalizeOptions::new();
        assert_eq!(normalize("/a%3Fb", Context::Path, opts), "/a?b");
        assert_eq!(normalize("/a%3Ab", Context::Path, opts), "/a:b");
        assert_eq!(normalize("a%3Fb", Context::Query, opts), "a?b");
        assert_eq!(normalize("a%3Fb", Context::OpaquePath, opts), "a?b");
        assert_eq!(
            normalize("/a%3Fb", Context::Path, CanonicalizeOptions::ambiguous()),
            "/a%3fb"
        );
    }

    #[test]
    fn relative_path() {
        let opts = CanonicalizeOptions::new();
        let relative = |s| normalize(s, Context::RelativePath, opts);
        assert_eq!(relative("a%3Ab/c%3Ad"), "a%3ab/c:d");
        assert_eq!(relative("a%2Fb/c%2Fd"), "a%2fb/c/d");
        assert_eq!(relative("/%2Fa"), "/%2fa");
        assert_eq!(relative("/a%2Fb"), "/a/b");
        // The first segment ends at a decoded `?`.
        assert_eq!(relative("a%3F%3Ab"), "a?:b");
    }

    #[test]
    fn relative_path_never_spells_scheme() {
        let opts = CanonicalizeOptions::new();
        let relative = |s| normalize(s, Context::RelativePath, opts);
        assert_eq!(relative("h%74tp:foo"), "h%74tp:foo");
        assert_eq!(relative("h%74tp://example.com/"), "h%74tp://example.com/");
        assert_eq!(relative("%41:/%2Fx"), "%41://x");
        assert_eq!(relative("a%2Bb:%2F%3Fc/%41"), "a%2bb:%2f%3fc/a");
        // Without a literal colon, escaped letters are decoded.
        assert_eq!(relative("h%74tp/x:y"), "http/x:y");
    }

    #[test]
    fn relative_path_fold_keeps_non_scheme() {
        let opts = CanonicalizeOptions::new().with_case_fold(CaseFold::Unicode);
        let relative = |s| normalize(s, Context::RelativePath, opts);
        assert_eq!(relative("\u{212A}:x"), "\u{212A}:x");
        assert_eq!(relative("\u{212A}/x:y"), "k/x:y");
    }

    #[test]
    fn opaque_path() {
        let opts = CanonicalizeOptions::new();
        let opaque = |s| normalize(s, Context::OpaquePath, opts);
        assert_eq!(opaque("isbn%3A0451450523"), "isbn:0451450523");
        assert_eq!(opaque("%2F%2Fx"), "%2f/x");
        assert_eq!(opaque("/%2Fx"), "/%2fx");
    }
}
