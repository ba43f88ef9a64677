//! Canonicalization options.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Case folding applied to literal characters.
///
/// Percent-encoded triplets always use lowercase hexadecimal digits,
/// regardless of this setting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CaseFold {
    /// Lowercase ASCII letters only.
    ///
    /// Non-ASCII characters are written as they are.
    #[default]
    Ascii,
    /// Lowercase ASCII letters, and apply Unicode lowercasing to non-ASCII
    /// characters.
    Unicode,
}

/// Options for a canonicalization call.
///
/// # Examples
///
/// ```
/// use url_canon::{canonicalize_with, CanonicalizeOptions};
///
/// let opts = CanonicalizeOptions::ambiguous();
/// assert_eq!(canonicalize_with("/%2A", &opts)?, "/%2a");
///
/// let opts = CanonicalizeOptions::new();
/// assert_eq!(canonicalize_with("/%2A", &opts)?, "/*");
/// # Ok::<_, url_canon::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CanonicalizeOptions {
    /// Recombine percent-encoded UTF-8 sequences into characters.
    ///
    /// When disabled, every non-ASCII character is written as
    /// percent-encoded UTF-8 octets.
    pub correct_high_order: bool,
    /// Decode every safe character, even if the input percent-encoded it.
    ///
    /// When disabled (ambiguous mode), percent-encoded safe ASCII characters
    /// stay encoded and only the case of their hex digits is normalized.
    pub unambiguous: bool,
    /// Case folding of literal characters.
    pub case_fold: CaseFold,
}

impl Default for CanonicalizeOptions {
    #[inline]
    fn default() -> Self {
        Self {
            correct_high_order: true,
            unambiguous: true,
            case_fold: CaseFold::Ascii,
        }
    }
}

impl CanonicalizeOptions {
    /// Creates the default options: high-order correction on, unambiguous.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for the ambiguous (display) form.
    #[inline]
    #[must_use]
    pub fn ambiguous() -> Self {
        Self::default().with_unambiguous(false)
    }

    /// Options for the unambiguous form with multi-byte characters kept as
    /// individually encoded octets.
    #[inline]
    #[must_use]
    pub fn split_high_order() -> Self {
        Self::default().with_correct_high_order(false)
    }

    /// Sets whether to recombine percent-encoded UTF-8 sequences.
    #[inline]
    #[must_use]
    pub fn with_correct_high_order(mut self, v: bool) -> Self {
        self.correct_high_order = v;
        self
    }

    /// Sets whether to decode every safe character.
    #[inline]
    #[must_use]
    pub fn with_unambiguous(mut self, v: bool) -> Self {
        self.unambiguous = v;
        self
    }

    /// Sets the case folding of literal characters.
    #[inline]
    #[must_use]
    pub fn with_case_fold(mut self, v: CaseFold) -> Self {
        self.case_fold = v;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        let default = CanonicalizeOptions::new();
        assert!(default.correct_high_order);
        assert!(default.unambiguous);
        assert_eq!(default.case_fold, CaseFold::Ascii);

        let ambiguous = CanonicalizeOptions::ambiguous();
        assert!(ambiguous.correct_high_order);
        assert!(!ambiguous.unambiguous);

        let split = CanonicalizeOptions::split_high_order();
        assert!(!split.correct_high_order);
        assert!(split.unambiguous);
    }

    #[cfg(feature = "serde")]
    mod serde_support {
        use super::*;

        use serde_test::{assert_de_tokens, assert_tokens, Token};

        #[test]
        fn round_trip() {
            assert_tokens(
                &CanonicalizeOptions::ambiguous(),
                &[
                    Token::Struct {
                        name: "CanonicalizeOptions",
                        len: 3,
                    },
                    Token::Str("correct_high_order"),
                    Token::Bool(true),
                    Token::Str("unambiguous"),
                    Token::Bool(false),
                    Token::Str("case_fold"),
                    Token::UnitVariant {
                        name: "CaseFold",
                        variant: "ascii",
                    },
                    Token::StructEnd,
                ],
            );
        }

        #[test]
        fn missing_fields_take_defaults() {
            assert_de_tokens(
                &CanonicalizeOptions::split_high_order(),
                &[
                    Token::Struct {
                        name: "CanonicalizeOptions",
                        len: 1,
                    },
                    Token::Str("correct_high_order"),
                    Token::Bool(false),
                    Token::StructEnd,
                ],
            );
            assert_de_tokens(
                &CanonicalizeOptions::new().with_case_fold(CaseFold::Unicode),
                &[
                    Token::Struct {
                        name: "CanonicalizeOptions",
                        len: 1,
                    },
                    Token::Str("case_fold"),
                    Token::UnitVariant {
                        name: "CaseFold",
                        variant: "unicode",
                    },
                    Token::StructEnd,
                ],
            );
        }
    }
}
