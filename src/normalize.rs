//! Canonicalization.
//!
//! # Pipeline
//!
//! Each component of the input is processed independently, left to right:
//!
//! 1. Percent escapes are scanned. A `%` not followed by two hexadecimal
//!    digits is treated as a literal `%`, and the following characters are
//!    scanned again as ordinary input.
//! 2. If high-order correction is enabled, runs of percent-encoded octets
//!    forming valid UTF-8 sequences are recombined into characters.
//! 3. Every character is classified as safe or unsafe, and written literally
//!    or percent-encoded with lowercase hexadecimal digits, depending on the
//!    mode. ASCII letters are lowercased.
//! 4. The structure is normalized: the scheme is lowercased and `https` is
//!    folded into `http`, an empty path becomes `/`, and trailing slashes are
//!    removed from non-root paths.
//!
//! # Modes
//!
//! In unambiguous mode (the default), every safe character is written
//! literally even if the input percent-encoded it. In ambiguous mode, a safe
//! character percent-encoded in the input stays encoded:
//!
//! ```
//! use url_canon::{canonicalize_with, CanonicalizeOptions};
//!
//! let input = "Red%2C%20Ros%C3%A9 14%25";
//! assert_eq!(
//!     canonicalize_with(input, &CanonicalizeOptions::new())?,
//!     "red,%20ros\u{E9}%2014%25"
//! );
//! assert_eq!(
//!     canonicalize_with(input, &CanonicalizeOptions::ambiguous())?,
//!     "red%2c%20ros\u{E9}%2014%25"
//! );
//! # Ok::<_, url_canon::Error>(())
//! ```
//!
//! Canonicalization is idempotent for a fixed set of options.
//!
//! # Failures
//!
//! Content never causes a failure. Only an absolute URL which lacks a
//! required host fails, e.g. `http:///path` or `http:foo`.

mod error;
mod high_order;
mod path;
mod pct_case;
mod percent_encoding;

use core::fmt::{self, Write as _};

use crate::components::{AuthorityComponents, UrlComponents};
use crate::format::eq_str_display;
use crate::options::CanonicalizeOptions;

pub use self::error::{Error, ErrorKind};
use self::path::NormalizedPath;
use self::pct_case::{Context, PctCaseNormalized};

/// Schemes which must have an authority.
const HIERARCHICAL_SCHEMES: &[&str] = &["http", "https"];

/// Canonical form of a URL or a relative reference.
///
/// This type is a lazily formatted view of the input: nothing is allocated
/// until it is written. Use [`ToString::to_string`] to get an owned string.
///
/// # Examples
///
/// ```
/// use url_canon::{Canonicalized, CanonicalizeOptions};
///
/// let canon = Canonicalized::new("HTTPS://Example.COM", CanonicalizeOptions::new())?;
/// assert_eq!(canon.to_string(), "http://example.com/");
/// # Ok::<_, url_canon::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Canonicalized<'a> {
    /// Decomposed input.
    components: UrlComponents<'a>,
    /// Options.
    options: CanonicalizeOptions,
}

impl<'a> Canonicalized<'a> {
    /// Decomposes and checks the input.
    ///
    /// # Failures
    ///
    /// Fails if the input is an absolute URL without a required host.
    pub fn new(input: &'a str, options: CanonicalizeOptions) -> Result<Self, Error> {
        let components = UrlComponents::decompose(input);

        if let Some(authority) = components.authority_components() {
            if authority.host.is_empty() {
                return Err(Error::MissingHost);
            }
        } else if let Some(scheme) = components.scheme {
            if HIERARCHICAL_SCHEMES
                .iter()
                .any(|s| s.eq_ignore_ascii_case(scheme))
            {
                return Err(Error::MissingAuthority {
                    scheme: scheme.to_ascii_lowercase(),
                });
            }
        }

        Ok(Self {
            components,
            options,
        })
    }

    /// Returns true if the canonical form has a scheme.
    #[inline]
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.components.scheme.is_some()
    }

    /// Returns the canonical scheme, if available.
    #[inline]
    #[must_use]
    pub(crate) fn scheme(&self) -> Option<CanonicalScheme<'a>> {
        self.components.scheme.map(CanonicalScheme)
    }

    /// Returns the canonical host, if available.
    #[must_use]
    pub(crate) fn host(&self) -> Option<PctCaseNormalized<'a>> {
        self.components
            .authority_components()
            .map(|authority| PctCaseNormalized::new(authority.host, Context::Authority, self.options))
    }
}

/// Writable as a canonical scheme.
///
/// The scheme is lowercased, and `https` is folded into `http`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CanonicalScheme<'a>(&'a str);

impl fmt::Display for CanonicalScheme<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scheme = self.0;
        if scheme.eq_ignore_ascii_case("https") {
            tracing::debug!(scheme, "folding scheme into `http`");
            return f.write_str("http");
        }
        scheme
            .chars()
            .try_for_each(|c| f.write_char(c.to_ascii_lowercase()))
    }
}

impl fmt::Display for Canonicalized<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.components;
        let opts = self.options;

        if let Some(scheme) = self.scheme() {
            write!(f, "{}:", scheme)?;
        }
        match c.authority {
            Some(authority) => {
                let authority = AuthorityComponents::decompose(authority);
                let part = |s| PctCaseNormalized::new(s, Context::Authority, opts);
                f.write_str("//")?;
                if let Some(userinfo) = authority.userinfo {
                    write!(f, "{}@", part(userinfo))?;
                }
                write!(f, "{}", part(authority.host))?;
                if let Some(port) = authority.port {
                    write!(f, ":{}", part(port))?;
                }
                write!(f, "{}", NormalizedPath::after_authority(c.path, opts))?;
            }
            // Opaque paths, e.g. `mailto:`, are not structurally normalized.
            None if c.scheme.is_some() => {
                write!(f, "{}", PctCaseNormalized::new(c.path, Context::OpaquePath, opts))?;
            }
            None => write!(f, "{}", NormalizedPath::relative(c.path, opts))?,
        }
        if let Some(query) = c.query {
            f.write_str("?")?;
            write!(f, "{}", PctCaseNormalized::new(query, Context::Query, opts))?;
        }
        if let Some(fragment) = c.fragment {
            f.write_str("#")?;
            write!(f, "{}", PctCaseNormalized::new(fragment, Context::Fragment, opts))?;
        }
        Ok(())
    }
}

/// Canonicalizes the input with the default options.
///
/// The defaults enable high-order correction and the unambiguous mode.
///
/// # Examples
///
/// ```
/// use url_canon::canonicalize;
///
/// assert_eq!(canonicalize("https://EXAMPLE.com")?, "http://example.com/");
/// assert_eq!(canonicalize("/foo/")?, "/foo");
/// assert_eq!(canonicalize("http://example.com/%a%2A")?, "http://example.com/%25a*");
/// # Ok::<_, url_canon::Error>(())
/// ```
///
/// # Failures
///
/// Fails if the input is an absolute URL without a required host.
#[inline]
pub fn canonicalize(input: &str) -> Result<String, Error> {
    canonicalize_with(input, &CanonicalizeOptions::default())
}

/// Canonicalizes the input with the given options.
///
/// # Failures
///
/// Fails if the input is an absolute URL without a required host.
pub fn canonicalize_with(input: &str, options: &CanonicalizeOptions) -> Result<String, Error> {
    Canonicalized::new(input, *options).map(|canon| canon.to_string())
}

/// Returns true if the input is already in the canonical form.
///
/// The canonical form is compared as it is written, without being collected
/// into a string. Inputs which cannot be canonicalized are not canonical.
///
/// # Examples
///
/// ```
/// use url_canon::{is_canonical, CanonicalizeOptions};
///
/// let opts = CanonicalizeOptions::new();
/// assert!(is_canonical("http://example.com/", &opts));
/// assert!(!is_canonical("http://example.com", &opts));
/// assert!(!is_canonical("/%2A", &opts));
/// assert!(is_canonical("/%2a", &CanonicalizeOptions::ambiguous()));
/// ```
#[must_use]
pub fn is_canonical(input: &str, options: &CanonicalizeOptions) -> bool {
    match Canonicalized::new(input, *options) {
        Ok(canon) => eq_str_display(input, &canon),
        Err(_) => false,
    }
}

/// URL canonicalizer.
///
/// This is a stateless service value holding the options to use; copies can
/// be shared between threads freely.
///
/// # Examples
///
/// ```
/// use url_canon::{Canonicalizer, CanonicalizeOptions};
///
/// let canonicalizer = Canonicalizer::new(CanonicalizeOptions::split_high_order());
/// assert_eq!(canonicalizer.canonicalize("Red, Ros\u{E9} 14%")?, "red,%20ros%c3%a9%2014%25");
/// # Ok::<_, url_canon::Error>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Canonicalizer {
    /// Options.
    options: CanonicalizeOptions,
}

impl Canonicalizer {
    /// Creates a new canonicalizer.
    #[inline]
    #[must_use]
    pub fn new(options: CanonicalizeOptions) -> Self {
        Self { options }
    }

    /// Returns the options.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &CanonicalizeOptions {
        &self.options
    }

    /// Canonicalizes the input.
    ///
    /// # Failures
    ///
    /// Fails if the input is an absolute URL without a required host.
    #[inline]
    pub fn canonicalize(&self, input: &str) -> Result<String, Error> {
        canonicalize_with(input, &self.options)
    }

    /// Returns a lazily formatted canonical form of the input.
    ///
    /// # Failures
    ///
    /// Fails if the input is an absolute URL without a required host.
    #[inline]
    pub fn canonicalized<'a>(&self, input: &'a str) -> Result<Canonicalized<'a>, Error> {
        Canonicalized::new(input, self.options)
    }

    /// Returns true if the input is already in the canonical form.
    #[inline]
    #[must_use]
    pub fn is_canonical(&self, input: &str) -> bool {
        is_canonical(input, &self.options)
    }
}
